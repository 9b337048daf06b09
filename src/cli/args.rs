use clap::Args;
use std::path::PathBuf;

/// Input and output locations shared by encode and decode
#[derive(Args, Debug)]
pub struct IoArgs {
    /// File to encode/decode (if not provided, reads from stdin)
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Output file (writes to stdout if not provided)
    #[arg(short = 'o', long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}
