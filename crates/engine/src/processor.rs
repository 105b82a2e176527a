use crate::config::Config;
use crate::error::Result;
use crate::input::{InputSource, for_each_line, read_lines};
use crate::options::RunMode;
use crate::stats::{FormatCounts, Mismatch, SourceStats};
use ccdict_count_core::fields::is_comment_line;
use ccdict_count_core::{DictEntry, EntryTally, FormatTag, parse_dict_line};
use rayon::prelude::*;

/// Counters for one partition of a source's lines.
#[derive(Default)]
struct Partial {
    tally: EntryTally,
    lines: usize,
    skipped: usize,
    formats: FormatCounts,
    mismatches: Vec<Mismatch>,
}

impl Partial {
    fn record(&mut self, source: &InputSource, line_no: usize, line: &str, check: bool) {
        self.lines += 1;

        let Some(outcome) = self.tally.process_line(line) else {
            self.skipped += 1;
            return;
        };
        self.formats.bump(outcome.tag);

        if outcome.tag == FormatTag::Unrecognized {
            log::trace!("{source}:{line_no}: unrecognized line");
        }

        if check {
            let parsed = parse_dict_line(line).map_or(0, |entries| entries.len());
            if parsed != outcome.count {
                log::warn!(
                    "{source}:{line_no}: counted {} entries, parsed {parsed}",
                    outcome.count
                );
                self.mismatches.push(Mismatch {
                    line_no,
                    line: line.to_owned(),
                    tag: outcome.tag,
                    counted: outcome.count,
                    parsed,
                });
            }
        }
    }

    fn merge(mut self, other: Self) -> Self {
        self.tally = self.tally.merge(other.tally);
        self.lines += other.lines;
        self.skipped += other.skipped;
        self.formats = self.formats.merge(other.formats);
        self.mismatches.extend(other.mismatches);
        self
    }

    fn finish(mut self, source: &InputSource) -> (SourceStats, EntryTally) {
        self.mismatches.sort_by_key(|m| m.line_no);
        let stats = SourceStats {
            source: source.clone(),
            lines: self.lines,
            skipped: self.skipped,
            formats: self.formats,
            entries: self.tally.total(),
            mismatches: self.mismatches,
        };
        (stats, self.tally)
    }
}

/// Classify and count every line of one source.
///
/// With `jobs > 1` the source is read fully, folded per partition on the
/// current rayon pool and the partitions merged by addition; otherwise lines
/// are streamed.
///
/// # Errors
/// Returns `EngineError::FileRead` if the source cannot be opened or read.
pub fn process_source(source: &InputSource, config: &Config) -> Result<(SourceStats, EntryTally)> {
    log::debug!("processing {source}");
    let check = config.mode == RunMode::Check;

    let mut reader = source.open()?;
    let partial = if config.jobs > 1 {
        let lines = read_lines(&mut reader, source)?;
        lines
            .par_iter()
            .enumerate()
            .fold(Partial::default, |mut acc, (i, line)| {
                acc.record(source, i + 1, line, check);
                acc
            })
            .reduce(Partial::default, Partial::merge)
    } else {
        let mut partial = Partial::default();
        for_each_line(&mut reader, source, |line_no, line| {
            partial.record(source, line_no, line, check);
            true
        })?;
        partial
    };

    let (stats, tally) = partial.finish(source);
    log::debug!(
        "{source}: {} lines, {} skipped, {} entries",
        stats.lines,
        stats.skipped,
        stats.entries
    );
    Ok((stats, tally))
}

/// Expand each dictionary line of one source into entries and pass them to `sink`.
///
/// Blank and comment lines are skipped. At most `max_entries` non-comment lines
/// are processed when a limit is given. Returns the number of entries emitted.
///
/// # Errors
/// Returns `EngineError::FileRead` on read failure, or the first error from `sink`.
pub fn expand_source<F>(source: &InputSource, max_entries: Option<usize>, mut sink: F) -> Result<usize>
where
    F: FnMut(DictEntry) -> Result<()>,
{
    log::debug!("expanding {source}");
    let mut reader = source.open()?;
    let mut processed = 0;
    let mut emitted = 0;
    let mut sink_error = None;

    for_each_line(&mut reader, source, |line_no, line| {
        if max_entries.is_some_and(|max| processed >= max) {
            return false;
        }
        if line.trim().is_empty() || is_comment_line(line) {
            return true;
        }
        processed += 1;

        let Some(entries) = parse_dict_line(line) else {
            log::trace!("{source}:{line_no}: no entries");
            return true;
        };
        for entry in entries {
            if let Err(e) = sink(entry) {
                sink_error = Some(e);
                return false;
            }
            emitted += 1;
        }
        true
    })?;

    match sink_error {
        Some(e) => Err(e),
        None => Ok(emitted),
    }
}
