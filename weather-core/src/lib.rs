pub mod cep;
pub mod constants;
mod types;
pub mod weather;

pub use types::{
    Coordinates, Temperature, TemperatureUnit, celsius_to_fahrenheit, celsius_to_kelvin,
};

/// Build the HTTP client shared by the upstream clients.
pub fn http_client() -> reqwest::Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(constants::REQUEST_TIMEOUT)
        .build()
}
