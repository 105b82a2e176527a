// crates/cli/src/presentation.rs
use crate::config::Config;
use crate::error::Result;
use ccdict_count_core::{DictEntry, write_report};
use ccdict_count_engine::options::OutputFormat;
use ccdict_count_engine::stats::{FormatCounts, RunResult, SourceStats};
use serde::Serialize;
use std::collections::BTreeMap;
use std::io::{self, Write};

/// Structured report for JSON/YAML output. Keys are always sorted here.
#[derive(Serialize)]
struct ReportView<'a> {
    total: usize,
    headwords: usize,
    formats: FormatCounts,
    #[serde(skip_serializing_if = "Option::is_none")]
    per_key: Option<BTreeMap<&'a str, usize>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    sources: Option<&'a [SourceStats]>,
}

impl<'a> ReportView<'a> {
    fn new(result: &'a RunResult, verbose: bool) -> Self {
        Self {
            total: result.tally.total(),
            headwords: result.tally.len(),
            formats: result.lines_by_format(),
            per_key: verbose.then(|| result.tally.iter().collect()),
            sources: verbose.then_some(result.sources.as_slice()),
        }
    }
}

/// Write the count report in the configured format.
///
/// # Errors
/// Returns an error if serialization or writing fails.
pub fn print_results<W: Write>(out: &mut W, result: &RunResult, config: &Config) -> Result<()> {
    match config.format {
        OutputFormat::Text => write_report(out, &result.tally, config.verbose, config.key_order)?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &ReportView::new(result, config.verbose))?;
            writeln!(out)?;
        }
        OutputFormat::Yaml => {
            serde_yaml::to_writer(&mut *out, &ReportView::new(result, config.verbose))?;
        }
    }
    Ok(())
}

/// Write one expanded entry as a JSON line.
///
/// # Errors
/// Returns an error if serialization or writing fails.
pub fn write_entry<W: Write>(out: &mut W, entry: &DictEntry) -> io::Result<()> {
    serde_json::to_writer(&mut *out, entry)?;
    writeln!(out)
}

/// Write check-mode disagreements, one per line.
///
/// Returns the number written.
///
/// # Errors
/// Returns an error if writing fails.
pub fn print_mismatches<W: Write>(err: &mut W, result: &RunResult) -> io::Result<usize> {
    let mut n = 0;
    for (source, m) in result.mismatches() {
        writeln!(
            err,
            "{source}:{}: {} counted={} parsed={}: {}",
            m.line_no, m.tag, m.counted, m.parsed, m.line
        )?;
        n += 1;
    }
    Ok(n)
}
