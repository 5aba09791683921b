use crate::config::EngineConfig;
use anyhow::Result;
use figment::{
    providers::{Env, Format, Toml},
    Figment,
};

pub struct ConfigLoader;

impl ConfigLoader {
    /// Loads engine configuration by merging TOML and environment variables,
    /// then validates it. A validation failure here is fatal: configuration
    /// errors must surface before any record is processed.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration files cannot be read or parsed, or
    /// if the merged configuration fails validation.
    pub fn load() -> Result<EngineConfig> {
        let config: EngineConfig = Figment::new()
            .merge(Toml::file("config/Config.toml"))
            .merge(Env::prefixed("INSIDER_ALPHA_").split("__"))
            .extract()?;

        config.validate()?;
        Ok(config)
    }

    /// Loads engine configuration with a specific profile overlay.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration files cannot be read or parsed, or
    /// if the merged configuration fails validation.
    pub fn load_with_profile(profile: &str) -> Result<EngineConfig> {
        let config: EngineConfig = Figment::new()
            .merge(Toml::file("config/Config.toml"))
            .merge(Toml::file(format!("config/Config.{profile}.toml")))
            .merge(Env::prefixed("INSIDER_ALPHA_").split("__"))
            .extract()?;

        config.validate()?;
        Ok(config)
    }
}
