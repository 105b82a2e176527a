use ccdict_count_cli::args::Args;
use ccdict_count_cli::config::Config;
use ccdict_count_cli::error::Result;
use ccdict_count_cli::presentation;
use ccdict_count_engine::error::EngineError;
use ccdict_count_engine::options::RunMode;
use clap::Parser;
use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    match run(args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Application Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<ExitCode> {
    let config = Config::try_from(args)?;
    log::debug!("config: {config:?}");

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    let code = match config.mode {
        RunMode::Entries => {
            let result = ccdict_count_engine::run_entries(&config, |_, entry| {
                presentation::write_entry(&mut out, &entry).map_err(EngineError::from)
            })?;
            for (source, err) in &result.errors {
                eprintln!("Error processing {source}: {err}");
            }
            log::info!("{} entries written", result.entries);
            ExitCode::SUCCESS
        }
        RunMode::Count | RunMode::Check => {
            let result = ccdict_count_engine::run(&config)?;
            for (source, err) in &result.errors {
                eprintln!("Error processing {source}: {err}");
            }

            presentation::print_results(&mut out, &result, &config)?;

            let mismatches = presentation::print_mismatches(&mut io::stderr().lock(), &result)?;
            if mismatches > 0 {
                eprintln!("[ccdict_count] {mismatches} line(s) disagree with the entry parser");
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            }
        }
    };

    out.flush()?;
    Ok(code)
}
