use derive_more::From;
use thiserror::Error;

pub use weather_core::{Coordinates, Temperature};

/// A postal code as received from the client.
///
/// Not validated here: only the location lookup decides whether a code is well formed.
#[derive(Clone, Debug, PartialEq, Eq, Hash, From)]
pub struct PostalCode(String);

impl From<&str> for PostalCode {
    fn from(raw: &str) -> Self {
        Self(raw.to_owned())
    }
}

impl PostalCode {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Error)]
pub enum LoadLocationError {
    #[error("invalid zipcode")]
    InvalidCep,
    #[error("zipcode not found")]
    NotFound,
    #[error("cep service is unavailable: {0}")]
    Unavailable(anyhow::Error),
    #[error(transparent)]
    Unknown(#[from] anyhow::Error),
}

#[derive(Debug, Error)]
pub enum LoadWeatherError {
    #[error("unauthorized")]
    Unauthorized,
    #[error("invalid location")]
    InvalidLocation,
    #[error("weather service is unavailable: {0}")]
    Unavailable(anyhow::Error),
    #[error(transparent)]
    Unknown(#[from] anyhow::Error),
}

#[derive(Debug, Error)]
pub enum GetTemperatureError {
    #[error(transparent)]
    Location(#[from] LoadLocationError),
    #[error(transparent)]
    Weather(#[from] LoadWeatherError),
}

/// Outcome of a single dependency probe.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProbeResult {
    Working,
    Failed(String),
}

impl ProbeResult {
    pub fn from_result<T, E: std::fmt::Display>(result: &Result<T, E>) -> Self {
        match result {
            Ok(_) => Self::Working,
            Err(e) => Self::Failed(e.to_string()),
        }
    }

    pub fn is_working(&self) -> bool {
        matches!(self, Self::Working)
    }
}

/// Result of probing both upstream services with known-good inputs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HealthReport {
    cep: ProbeResult,
    weather: ProbeResult,
}

impl HealthReport {
    pub fn new(cep: ProbeResult, weather: ProbeResult) -> Self {
        Self { cep, weather }
    }

    pub fn cep(&self) -> &ProbeResult {
        &self.cep
    }

    pub fn weather(&self) -> &ProbeResult {
        &self.weather
    }

    pub fn ok(&self) -> bool {
        self.cep.is_working() && self.weather.is_working()
    }
}
