//! Environment-based configuration.
//!
//! Every variable has a local-development default:
//!
//! | Variable             | Default                      |
//! |----------------------|------------------------------|
//! | `PORT`               | `3001`                       |
//! | `MONGODB_URI`        | `mongodb://localhost:27017`  |
//! | `MONGODB_DATABASE`   | `community_data`             |
//! | `MONGODB_COLLECTION` | `communityvacancies`         |

use crate::error::{Error, Result};
use dotenvy::dotenv;
use std::env;
use std::sync::OnceLock;

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub mongodb_uri: String,
    pub mongodb_database: String,
    pub mongodb_collection: String,
}

pub static CONFIG: OnceLock<Config> = OnceLock::new();

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();

        Ok(Self {
            port: get_env_parse("PORT", 3001)?,
            mongodb_uri: get_env_or("MONGODB_URI", "mongodb://localhost:27017"),
            mongodb_database: get_env_or("MONGODB_DATABASE", "community_data"),
            mongodb_collection: get_env_or("MONGODB_COLLECTION", "communityvacancies"),
        })
    }
}

fn get_env_or(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_string())
}

fn get_env_parse<T>(name: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Err(_) => Ok(default),
        Ok(raw) => raw
            .parse()
            .map_err(|e| Error::Config(format!("Invalid value for {}: {}", name, e))),
    }
}

pub fn init_config() -> Result<()> {
    let config = Config::from_env()?;
    CONFIG
        .set(config)
        .map_err(|_| Error::Config("Configuration has already been initialized".to_string()))?;
    Ok(())
}

pub fn get_config() -> &'static Config {
    CONFIG
        .get()
        .expect("Configuration has not been initialized")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_applies_when_unset() {
        env::remove_var("CVB_TEST_UNSET");
        assert_eq!(get_env_or("CVB_TEST_UNSET", "fallback"), "fallback");
        assert_eq!(
            get_env_parse::<u16>("CVB_TEST_UNSET", 3001).expect("default"),
            3001
        );
    }

    #[test]
    fn invalid_port_is_a_config_error() {
        env::set_var("CVB_TEST_BAD_PORT", "not-a-port");
        let result = get_env_parse::<u16>("CVB_TEST_BAD_PORT", 3001);
        env::remove_var("CVB_TEST_BAD_PORT");
        assert!(matches!(result, Err(Error::Config(_))));
    }
}
