mod logging;

pub use logging::init_logging;

use split_horizon_domain::{CliOverrides, Config};

pub fn load_config(path: Option<&str>, overrides: CliOverrides) -> anyhow::Result<Config> {
    let config = Config::load(path, overrides)?;
    config.validate()?;
    Ok(config)
}

/// File the configuration came from, `None` when defaults were used.
pub fn config_source(explicit: Option<&str>) -> Option<String> {
    explicit.map(str::to_string).or_else(Config::get_config_path)
}
