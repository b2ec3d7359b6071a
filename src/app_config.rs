use crate::epqs::DEFAULT_EPQS_URL;
use crate::host::MapCrs;
use config::{Config, ConfigError};
use serde::Deserialize;
use std::num::NonZeroUsize;

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    core: Core,
    epqs: Epqs,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("epqs.url", DEFAULT_EPQS_URL)?
            .add_source(config::File::with_name("config").required(true))
            .add_source(config::File::with_name("config_local").required(false))
            .add_source(config::Environment::with_prefix("ELEVATION").separator("__"))
            .build()?
            .try_deserialize()
    }

    pub fn core(&self) -> &Core {
        &self.core
    }

    pub fn epqs(&self) -> &Epqs {
        &self.epqs
    }
}

#[derive(Debug, Deserialize)]
pub struct Core {
    action_buffer_size: NonZeroUsize,
    #[serde(default)]
    map_crs: MapCrs,
}

impl Core {
    pub fn action_buffer_size(&self) -> usize {
        self.action_buffer_size.get()
    }

    pub fn map_crs(&self) -> MapCrs {
        self.map_crs
    }
}

#[derive(Debug, Deserialize)]
pub struct Epqs {
    url: String,
}

impl Epqs {
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;
    use pretty_assertions::assert_eq;

    fn from_toml(toml: &str) -> Result<AppConfig, ConfigError> {
        Config::builder()
            .set_default("epqs.url", DEFAULT_EPQS_URL)?
            .add_source(config::File::from_str(toml, FileFormat::Toml))
            .build()?
            .try_deserialize()
    }

    #[test]
    fn reads_the_shipped_config() -> Result<(), ConfigError> {
        let config = from_toml(include_str!("../config.toml"))?;

        assert_eq!(config.core().action_buffer_size(), 16);
        assert_eq!(config.core().map_crs(), MapCrs::Wgs84);
        assert_eq!(config.epqs().url(), "https://nationalmap.gov/epqs/pqs.php");
        Ok(())
    }

    #[test]
    fn falls_back_to_defaults() -> Result<(), ConfigError> {
        let config = from_toml("[core]\naction_buffer_size = 4")?;

        assert_eq!(config.core().map_crs(), MapCrs::Wgs84);
        assert_eq!(config.epqs().url(), DEFAULT_EPQS_URL);
        Ok(())
    }

    #[test]
    fn reads_a_web_mercator_map() -> Result<(), ConfigError> {
        let config = from_toml("[core]\naction_buffer_size = 4\nmap_crs = \"EPSG:3857\"\n[epqs]\nurl = \"http://localhost:8080/pqs.php\"")?;

        assert_eq!(config.core().map_crs(), MapCrs::WebMercator);
        assert_eq!(config.epqs().url(), "http://localhost:8080/pqs.php");
        Ok(())
    }

    #[test]
    fn rejects_a_zero_action_buffer_size() {
        let result = from_toml("[core]\naction_buffer_size = 0");

        assert!(result.is_err());
    }

    #[test]
    fn rejects_an_unknown_crs() {
        let result = from_toml("[core]\naction_buffer_size = 4\nmap_crs = \"EPSG:27700\"");

        assert!(result.is_err());
    }
}
