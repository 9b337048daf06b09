use runic32::Config;
use std::path::Path;

/// Loads configuration from the standard locations, then from `extra` if given.
///
/// `extra` may start with `~`, which is expanded even when the shell did not.
pub fn load_config(
    extra: Option<&str>,
    quiet: bool,
) -> Result<Config, Box<dyn std::error::Error>> {
    let mut config = Config::load_with_overrides(quiet)?;

    if let Some(path) = extra {
        let expanded = shellexpand::tilde(path);
        let file = Config::read_file(Path::new(expanded.as_ref()))
            .map_err(|e| format!("Cannot load config '{}': {}", path, e))?;
        config.merge(file);
    }

    Ok(config)
}
