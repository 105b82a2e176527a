use crate::error::EngineError;
use crate::input::InputSource;
use ccdict_count_core::{EntryTally, FormatTag};
use serde::Serialize;

/// Number of lines classified under each format.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct FormatCounts {
    pub canto_hybrid: usize,
    pub romanized_gloss: usize,
    pub hybrid_bracketed: usize,
    pub unrecognized: usize,
}

impl FormatCounts {
    pub fn bump(&mut self, tag: FormatTag) {
        match tag {
            FormatTag::CantoHybrid => self.canto_hybrid += 1,
            FormatTag::RomanizedGloss => self.romanized_gloss += 1,
            FormatTag::HybridBracketed => self.hybrid_bracketed += 1,
            FormatTag::Unrecognized => self.unrecognized += 1,
        }
    }

    #[must_use]
    pub const fn merge(self, other: Self) -> Self {
        Self {
            canto_hybrid: self.canto_hybrid + other.canto_hybrid,
            romanized_gloss: self.romanized_gloss + other.romanized_gloss,
            hybrid_bracketed: self.hybrid_bracketed + other.hybrid_bracketed,
            unrecognized: self.unrecognized + other.unrecognized,
        }
    }
}

/// A line whose counted entries disagree with the entry parser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Mismatch {
    pub line_no: usize,
    pub line: String,
    pub tag: FormatTag,
    pub counted: usize,
    pub parsed: usize,
}

/// Per-source summary.
#[derive(Debug, Clone, Serialize)]
pub struct SourceStats {
    pub source: InputSource,
    /// All lines read, including comments and blanks.
    pub lines: usize,
    /// Blank and comment lines.
    pub skipped: usize,
    pub formats: FormatCounts,
    /// Entries counted in this source.
    pub entries: usize,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub mismatches: Vec<Mismatch>,
}

/// Result of a counting run.
#[derive(Debug, Default)]
pub struct RunResult {
    /// Merged tally over all readable sources.
    pub tally: EntryTally,
    /// Per-source summaries, in input order.
    pub sources: Vec<SourceStats>,
    /// Unreadable sources (non-strict mode only).
    pub errors: Vec<(InputSource, EngineError)>,
}

impl RunResult {
    pub fn mismatches(&self) -> impl Iterator<Item = (&InputSource, &Mismatch)> {
        self.sources
            .iter()
            .flat_map(|s| s.mismatches.iter().map(move |m| (&s.source, m)))
    }

    #[must_use]
    pub fn lines_by_format(&self) -> FormatCounts {
        self.sources
            .iter()
            .fold(FormatCounts::default(), |acc, s| acc.merge(s.formats))
    }
}
