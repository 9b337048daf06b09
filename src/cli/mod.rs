mod args;
mod config;
mod global;
mod handlers;
mod input;

use clap::Parser;

use args::IoArgs;
use config::load_config;
use global::GlobalArgs;
use input::InputLimits;

#[derive(Parser)]
#[command(name = "runic32")]
#[command(version)]
#[command(
    about = "Encode and decode binary data as Anglo-Saxon runes (base32)",
    long_about = None,
    after_help = "Line feeds and carriage returns in encoded input are ignored."
)]
struct Cli {
    /// Decode runes back to bytes instead of encoding
    #[arg(short = 'd', long)]
    decode: bool,

    /// Print the rune alphabet and exit
    #[arg(long, conflicts_with_all = ["decode", "file", "output"])]
    alphabet: bool,

    /// Extra configuration file, applied after the standard locations
    #[arg(short = 'c', long, value_name = "PATH")]
    config: Option<String>,

    #[command(flatten)]
    io: IoArgs,

    #[command(flatten)]
    global: GlobalArgs,
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if cli.global.no_color {
        // SAFETY: still single-threaded; nothing else reads the environment yet.
        unsafe {
            std::env::set_var("NO_COLOR", "1");
        }
    }

    if cli.alphabet {
        return handlers::alphabet::handle();
    }

    let config = load_config(cli.config.as_deref(), cli.global.quiet)?;
    let limits = InputLimits {
        max_size: cli.global.max_size.unwrap_or(config.settings.max_size),
        force: cli.global.force,
        quiet: cli.global.quiet,
    };

    if cli.decode {
        handlers::decode::handle(&cli.io, &limits, &config.settings)
    } else {
        handlers::encode::handle(&cli.io, &limits, &config.settings)
    }
}
