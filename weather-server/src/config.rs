use anyhow::Context;
use weather_core::constants::{DEFAULT_CEP_API_URL, DEFAULT_WEATHER_API_URL};

const HOST: &str = "HOST";
const PORT: &str = "PORT";
const WEATHER_APIKEY: &str = "WEATHER_APIKEY";
const CEP_API_URL: &str = "CEP_API_URL";
const WEATHER_API_URL: &str = "WEATHER_API_URL";

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: &str = "8080";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    pub weather_api_key: String,
    pub cep_api_url: String,
    pub weather_api_url: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a [Config] from an arbitrary variable lookup. Unset or empty variables fall back to
    /// their defaults.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str, default: &str| {
            lookup(key)
                .filter(|value| !value.is_empty())
                .unwrap_or_else(|| default.to_owned())
        };

        let raw_port = var(PORT, DEFAULT_PORT);
        let server_port = raw_port
            .parse::<u16>()
            .with_context(|| format!(r#"Invalid {} "{}""#, PORT, raw_port))?;

        Ok(Self {
            server_host: var(HOST, DEFAULT_HOST),
            server_port,
            weather_api_key: var(WEATHER_APIKEY, ""),
            cep_api_url: var(CEP_API_URL, DEFAULT_CEP_API_URL),
            weather_api_url: var(WEATHER_API_URL, DEFAULT_WEATHER_API_URL),
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup(&[])).unwrap();

        assert_eq!(config.server_host, "0.0.0.0");
        assert_eq!(config.server_port, 8080);
        assert_eq!(config.weather_api_key, "");
        assert_eq!(config.cep_api_url, DEFAULT_CEP_API_URL);
        assert_eq!(config.weather_api_url, DEFAULT_WEATHER_API_URL);
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup(&[
            ("HOST", "localhost"),
            ("PORT", "3000"),
            ("WEATHER_APIKEY", "secret"),
            ("CEP_API_URL", "http://cep.test"),
            ("WEATHER_API_URL", "http://weather.test"),
        ]))
        .unwrap();

        assert_eq!(config.server_host, "localhost");
        assert_eq!(config.server_port, 3000);
        assert_eq!(config.weather_api_key, "secret");
        assert_eq!(config.cep_api_url, "http://cep.test");
        assert_eq!(config.weather_api_url, "http://weather.test");
    }

    #[test]
    fn test_empty_values_use_defaults() {
        let config = Config::from_lookup(lookup(&[("HOST", ""), ("PORT", "")])).unwrap();

        assert_eq!(config.server_host, "0.0.0.0");
        assert_eq!(config.server_port, 8080);
    }

    #[test]
    fn test_invalid_port() {
        assert!(Config::from_lookup(lookup(&[("PORT", "http")])).is_err());
        assert!(Config::from_lookup(lookup(&[("PORT", "70000")])).is_err());
    }
}
