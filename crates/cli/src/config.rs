// crates/cli/src/config.rs
use crate::args::Args;
use crate::error::AppError;
use crate::options;
use ccdict_count_engine::input::InputSource;
use ccdict_count_engine::options::{self as engine_options, KeyOrder, RunMode};

pub use ccdict_count_engine::config::{Config, ConfigBuilder};

impl TryFrom<Args> for Config {
    type Error = AppError;

    fn try_from(args: Args) -> Result<Self, Self::Error> {
        let inputs: Vec<InputSource> = args
            .paths
            .iter()
            .map(|p| InputSource::from_arg(p))
            .collect();

        let mode = if args.output.entries {
            RunMode::Entries
        } else if args.output.check {
            RunMode::Check
        } else {
            RunMode::Count
        };

        let key_order = if args.output.sort_keys {
            KeyOrder::Sorted
        } else {
            KeyOrder::Unordered
        };

        let format: engine_options::OutputFormat = args.output.format.into();
        let jobs = args.behavior.jobs.unwrap_or_else(num_cpus::get);

        ConfigBuilder::default()
            .inputs(inputs)
            .jobs(jobs)
            .strict(args.behavior.strict)
            .mode(mode)
            .verbose(args.output.verbose)
            .key_order(key_order)
            .format(format)
            .max_entries(args.behavior.max_entries)
            .build()
            .map_err(|e| AppError::Config(e.to_string()))
    }
}

// From trait implementations for CLI -> Engine enum conversion

macro_rules! map_enum {
    ($from:ty, $to:ty, $($variant:ident),+ $(,)?) => {
        impl From<$from> for $to {
            fn from(f: $from) -> Self {
                match f {
                    $( <$from>::$variant => <$to>::$variant, )+
                }
            }
        }
    };
}

map_enum!(options::OutputFormat, engine_options::OutputFormat, Text, Json, Yaml);

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::path::PathBuf;

    fn config_from(argv: &[&str]) -> Config {
        Config::try_from(Args::try_parse_from(argv).unwrap()).unwrap()
    }

    #[test]
    fn test_paths_and_stdin() {
        let config = config_from(&["ccdict_count", "-j", "1", "a.txt", "-"]);
        assert_eq!(
            config.inputs,
            vec![InputSource::File(PathBuf::from("a.txt")), InputSource::Stdin]
        );
        assert_eq!(config.jobs, 1);
        assert_eq!(config.mode, RunMode::Count);
    }

    #[test]
    fn test_mode_and_output_flags() {
        let config = config_from(&["ccdict_count", "-v", "--sort-keys", "--format", "json", "--check"]);
        assert!(config.verbose);
        assert_eq!(config.key_order, KeyOrder::Sorted);
        assert_eq!(config.format, engine_options::OutputFormat::Json);
        assert_eq!(config.mode, RunMode::Check);

        let config = config_from(&["ccdict_count", "--entries", "--max-entries", "10"]);
        assert_eq!(config.mode, RunMode::Entries);
        assert_eq!(config.max_entries, Some(10));
    }

    #[test]
    fn test_jobs_default_to_cpu_count() {
        let config = config_from(&["ccdict_count"]);
        assert_eq!(config.jobs, num_cpus::get());
    }
}
