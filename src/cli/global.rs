use clap::Args;

/// Arguments that apply to every mode
#[derive(Args, Debug)]
pub struct GlobalArgs {
    /// Suppress warnings
    #[arg(short = 'q', long)]
    pub quiet: bool,

    /// Disable colored error output
    #[arg(long)]
    pub no_color: bool,

    /// Maximum input size in bytes, 0 = unlimited (overrides config)
    #[arg(long, value_name = "BYTES")]
    pub max_size: Option<usize>,

    /// Process inputs exceeding the size limit
    #[arg(long)]
    pub force: bool,
}
