use crate::cli::{
    args::IoArgs,
    input::{InputLimits, read_input, strip_line_endings, write_output},
};
use runic32::Settings;

pub fn handle(
    args: &IoArgs,
    limits: &InputLimits,
    settings: &Settings,
) -> Result<(), Box<dyn std::error::Error>> {
    let input = read_input(args.file.as_deref(), limits)?;
    let text =
        String::from_utf8(input).map_err(|_| "Input data is not valid UTF-8 text for decoding")?;

    let text = if settings.strip_line_endings {
        strip_line_endings(&text)
    } else {
        text
    };

    // Nothing is written unless the whole input decodes
    let data = runic32::decode(&text)?;

    write_output(args.output.as_deref(), &data)
}
