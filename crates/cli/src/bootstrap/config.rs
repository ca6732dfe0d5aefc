use ferrous_relay_domain::{CliOverrides, Config};

/// Loads the configuration file (if any), applies command-line overrides
/// and validates the result before anything is started.
pub fn load_config(path: Option<&str>, overrides: CliOverrides) -> anyhow::Result<Config> {
    let config = Config::load(path, overrides)?;
    config.validate()?;
    Ok(config)
}
