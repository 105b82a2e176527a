use rayon::prelude::*;

pub mod config;
pub mod error;
pub mod input;
pub mod options;
pub mod processor;
pub mod stats;

use crate::config::Config;
use crate::error::{EngineError, Result};
use crate::input::InputSource;
use crate::stats::{RunResult, SourceStats};
use ccdict_count_core::{DictEntry, EntryTally};

type SourceOutcome = std::result::Result<(SourceStats, EntryTally), (InputSource, EngineError)>;

/// Run the counting engine over every configured source.
///
/// Sources are processed on a rayon pool of `config.jobs` threads when
/// `jobs > 1`, sequentially otherwise. Per-source tallies are merged in input
/// order.
///
/// # Errors
///
/// In strict mode, returns the first source error. Otherwise unreadable
/// sources are collected in `RunResult::errors` and the run continues.
pub fn run(config: &Config) -> Result<RunResult> {
    let sources = config.sources();
    let process = |source: &InputSource| -> SourceOutcome {
        processor::process_source(source, config).map_err(|e| (source.clone(), e))
    };

    let outcomes: Vec<SourceOutcome> = if config.jobs > 1 {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(config.jobs)
            .build()?;
        pool.install(|| sources.par_iter().map(process).collect())
    } else {
        sources.iter().map(process).collect()
    };

    let mut result = RunResult::default();
    for outcome in outcomes {
        match outcome {
            Ok((stats, tally)) => {
                result.tally = std::mem::take(&mut result.tally).merge(tally);
                result.sources.push(stats);
            }
            Err((_, e)) if config.strict => return Err(e),
            Err((source, e)) => {
                log::warn!("skipping {source}: {e}");
                result.errors.push((source, e));
            }
        }
    }

    log::debug!(
        "run finished: {} sources, {} headwords, {} entries",
        result.sources.len(),
        result.tally.len(),
        result.tally.total()
    );
    Ok(result)
}

/// Result of an entries run.
#[derive(Debug, Default)]
pub struct EntriesResult {
    pub entries: usize,
    pub errors: Vec<(InputSource, EngineError)>,
}

/// Expand every configured source into dictionary entries, in input order.
///
/// # Errors
///
/// Errors from `sink` are always returned. Source read errors are returned in
/// strict mode and collected in `EntriesResult::errors` otherwise.
pub fn run_entries<F>(config: &Config, mut sink: F) -> Result<EntriesResult>
where
    F: FnMut(&InputSource, DictEntry) -> Result<()>,
{
    let mut result = EntriesResult::default();

    for source in config.sources() {
        match processor::expand_source(&source, config.max_entries, |entry| sink(&source, entry)) {
            Ok(n) => result.entries += n,
            Err(e @ EngineError::FileRead { .. }) if !config.strict => {
                log::warn!("skipping {source}: {e}");
                result.errors.push((source, e));
            }
            Err(e) => return Err(e),
        }
    }

    Ok(result)
}
