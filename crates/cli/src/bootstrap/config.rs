use rootwalk_domain::{CliOverrides, Config};

/// Loads and validates the configuration.
///
/// Also returns the file it came from, if any. Nothing is logged here: this
/// runs before the subscriber exists.
pub fn load_config(
    path: Option<&str>,
    overrides: CliOverrides,
) -> anyhow::Result<(Config, Option<String>)> {
    let config = Config::load(path, overrides)?;
    config.validate()?;

    let source = path.map(str::to_string).or_else(Config::get_config_path);
    Ok((config, source))
}
