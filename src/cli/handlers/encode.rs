use crate::cli::{
    args::IoArgs,
    input::{InputLimits, read_input, write_output},
};
use runic32::Settings;

pub fn handle(
    args: &IoArgs,
    limits: &InputLimits,
    settings: &Settings,
) -> Result<(), Box<dyn std::error::Error>> {
    let data = read_input(args.file.as_deref(), limits)?;

    let mut encoded = runic32::encode(&data);
    if settings.trailing_newline {
        encoded.push('\n');
    }

    write_output(args.output.as_deref(), encoded.as_bytes())
}
