use std::str::FromStr;

use config::ConfigError;
use log::LevelFilter;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Conf {
    pub log_level: String,
    pub force: bool,
    pub preserve_crc: bool,
}

impl Conf {
    /// `./thaiqr.toml` if present, overridden by `THAIQR_*` environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        let conf: Conf = config::Config::builder()
            .set_default("log_level", "warn")?
            .set_default("force", false)?
            .set_default("preserve_crc", false)?
            .add_source(config::File::with_name("./thaiqr").required(false))
            .add_source(config::Environment::with_prefix("THAIQR"))
            .build()?
            .try_deserialize()?;

        conf.level()?;
        Ok(conf)
    }

    pub fn level(&self) -> Result<LevelFilter, ConfigError> {
        LevelFilter::from_str(&self.log_level)
            .map_err(|_| ConfigError::Message(format!("unknown log_level {:?}", self.log_level)))
    }
}
