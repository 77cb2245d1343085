use std::process;

use clap::Parser;
use rayon::prelude::*;

use ferris_size::{Binary, Decimal, Scale, Size};

mod args;
mod config;

use args::Args;
use config::{CliError, Config, Family};

fn main() {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    // bind arguments to a Config struct
    let config = Config::build(&args).unwrap_or_else(|err| {
        eprintln!("Could not parse arguments: {err}");
        process::exit(1);
    });

    if let Err(e) = rayon::ThreadPoolBuilder::new()
        .num_threads(config.num_threads)
        .build_global()
    {
        log::error!("Failed to configure thread pool: {}", e);
    }

    let result = match config.family {
        Family::Decimal => run::<Decimal>(&config),
        Family::Binary => run::<Binary>(&config),
    };

    if let Err(e) = result {
        eprintln!("Fatal Error: {e}");
        process::exit(1);
    }
}

/// Lines produced for one invocation, in the order the sizes were given.
#[derive(Debug, Default)]
struct Report {
    /// `input\tsize` lines, then the `total` line when requested
    lines: Vec<String>,
    /// `input: reason` lines for the sizes that could not be parsed
    errors: Vec<String>,
    failed: usize,
}

/// Parses every size in parallel, prints them in the order they were given and fails
/// when any of them was rejected.
fn run<S: Scale>(config: &Config) -> Result<(), CliError> {
    let report = report::<S>(config);

    for line in &report.lines {
        println!("{}", line);
    }
    for error in &report.errors {
        eprintln!("{}", error);
    }

    if report.failed > 0 {
        return Err(CliError::Rejected {
            failed: report.failed,
            total: config.sizes.len(),
        });
    }

    Ok(())
}

fn report<S: Scale>(config: &Config) -> Report {
    let parsed: Vec<_> = config
        .sizes
        .par_iter()
        .map(|input| Size::<S>::parse(input))
        .collect();

    let mut report = Report::default();
    let mut sizes = Vec::with_capacity(parsed.len());
    for (input, result) in config.sizes.iter().zip(parsed) {
        match result {
            Ok(size) => {
                report.lines.push(format!("{}\t{}", input, render(&size, config)));
                sizes.push(size);
            }
            Err(err) => {
                report.errors.push(format!("{}: {}", input, err));
                report.failed += 1;
            }
        }
    }

    if config.total {
        let total: Size<S> = sizes.iter().copied().sum();
        report.lines.push(format!("total\t{}", render(&total, config)));
    }

    report
}

fn render<S: Scale>(size: &Size<S>, config: &Config) -> String {
    let text = match &config.pattern {
        Some(pattern) => size.format_with(pattern),
        None => size.to_string(),
    };

    if config.verbose {
        format!("{} ({} bits)", text, size.bits())
    } else {
        text
    }
}
