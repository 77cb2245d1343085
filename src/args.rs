use clap::Parser;
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// One or more sizes to convert, e.g. "100 KB" 1.5GB 4096b
    #[arg(required = true)]
    pub sizes: Vec<String>,

    /// (optional) Read and print sizes in powers of 1000 (KB) instead of 1024 (KiB)
    #[arg(short = 'd', long = "decimal")]
    pub decimal: bool,

    /// (optional) Number pattern or unit used to print each size, e.g. "#.## MiB"
    #[arg(short = 'f', long = "format")]
    pub format: Option<String>,

    /// (optional) Also print the sum of all sizes
    #[arg(short = 't', long = "total")]
    pub total: bool,

    /// (optional) Number of threads used to parse the sizes, defaults to available cores
    #[arg(short = 'j', long = "threads")]
    pub threads: Option<usize>,

    #[arg(short, long)]
    pub verbose: bool,
}
