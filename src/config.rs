use crate::args::Args;

/// Scale family used to read and print sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Family {
    Decimal,
    Binary,
}

/// Error type representing invalid command line input.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// `--format` was given an empty pattern.
    #[error("the format pattern must not be empty")]
    EmptyPattern,

    /// `--threads` was given zero.
    #[error("the number of threads must be at least 1")]
    NoThreads,

    /// Some of the sizes could not be parsed. Each one has already been reported.
    #[error("{failed} of {total} sizes could not be parsed")]
    Rejected { failed: usize, total: usize },
}

/// Configuration structure containing runtime settings.
///
/// # Fields
///
/// * `family` - Scale family used to read and print every size
/// * `sizes` - Size strings in the order they were given
/// * `pattern` - Number pattern used to print sizes, largest whole unit when absent
/// * `total` - Bool to determine if the sum of all sizes is printed
/// * `num_threads` - Number of threads to use when parsing
/// * `verbose` - Bool to determine if debug logging is enabled
///
#[derive(Debug, Clone)]
pub struct Config {
    pub family: Family,
    pub sizes: Vec<String>,
    pub pattern: Option<String>,
    pub total: bool,
    pub num_threads: usize,
    pub verbose: bool,
}

impl Config {
    /// Builds a new Config instance from provided command line arguments.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// * An empty format pattern was supplied
    /// * Zero threads were requested
    ///
    pub fn build(args: &Args) -> Result<Config, CliError> {
        if args.format.as_deref().is_some_and(|pattern| pattern.trim().is_empty()) {
            return Err(CliError::EmptyPattern);
        }

        let num_threads = match args.threads {
            Some(0) => return Err(CliError::NoThreads),
            Some(n) => n,
            None => std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(1),
        };
        log::debug!("Parsing {} sizes using {} threads", args.sizes.len(), num_threads);

        let family = if args.decimal {
            Family::Decimal
        } else {
            Family::Binary
        };

        Ok(Config {
            family,
            sizes: args.sizes.clone(),
            pattern: args.format.clone(),
            total: args.total,
            num_threads,
            verbose: args.verbose,
        })
    }
}
