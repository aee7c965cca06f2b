/*!
   Module `weather` fetches the current temperature at a pair of coordinates from WeatherAPI.
*/

use crate::{constants::WEATHER_API_NO_LOCATION_CODE, types::Temperature};

use anyhow::anyhow;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("unauthorized")]
    Unauthorized,
    #[error("invalid location")]
    InvalidLocation,
    #[error("weather service unavailable: {0}")]
    ServiceUnavailable(anyhow::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[derive(Debug, Deserialize)]
struct CurrentResponse {
    current: Current,
}

#[derive(Debug, Deserialize)]
struct Current {
    temp_c: f64,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    code: u32,
    #[serde(default)]
    message: String,
}

#[derive(Clone)]
pub struct WeatherApiClient {
    http: Client,
    base_url: String,
    api_key: String,
}

// The API key stays out of debug output.
impl std::fmt::Debug for WeatherApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherApiClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl WeatherApiClient {
    pub fn new(http: Client, base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_owned();
        Self {
            http,
            base_url,
            api_key: api_key.into(),
        }
    }

    /// Fetch the current temperature at the given coordinates.
    ///
    /// # Errors
    ///
    /// - [Error::Unauthorized] if the API key is missing, invalid or disabled.
    /// - [Error::InvalidLocation] if WeatherAPI cannot match the coordinates to a location.
    /// - [Error::ServiceUnavailable] if the service cannot be reached or fails on its side.
    pub async fn load(&self, latitude: &str, longitude: &str) -> Result<Temperature, Error> {
        let url = format!("{}/v1/current.json", self.base_url);
        let location = format!("{},{}", latitude, longitude);

        tracing::debug!("Requesting current weather for {} from {}", location, url);

        let response = self
            .http
            .get(&url)
            .query(&[
                ("key", self.api_key.as_str()),
                ("q", location.as_str()),
                ("aqi", "no"),
            ])
            .send()
            .await
            .map_err(|e| Error::ServiceUnavailable(e.into()))?;

        match response.status() {
            StatusCode::OK => {
                let body: CurrentResponse = response
                    .json()
                    .await
                    .map_err(|e| anyhow!("failed to decode weather response: {}", e))?;

                Ok(Temperature::from_celsius(body.current.temp_c))
            }
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(Error::Unauthorized),
            StatusCode::BAD_REQUEST => {
                let body: ErrorResponse = response
                    .json()
                    .await
                    .map_err(|e| anyhow!("failed to decode weather error response: {}", e))?;

                if body.error.code == WEATHER_API_NO_LOCATION_CODE {
                    Err(Error::InvalidLocation)
                } else {
                    Err(Error::Other(anyhow!(
                        "weather service rejected the request ({}): {}",
                        body.error.code,
                        body.error.message
                    )))
                }
            }
            status if status.is_server_error() || status == StatusCode::TOO_MANY_REQUESTS => Err(
                Error::ServiceUnavailable(anyhow!("weather service responded with {}", status)),
            ),
            status => Err(Error::Other(anyhow!(
                "unexpected weather service response: {}",
                status
            ))),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    use httpmock::prelude::*;
    use serde_json::json;

    fn client_for(server: &MockServer, api_key: &str) -> WeatherApiClient {
        WeatherApiClient::new(Client::new(), server.base_url(), api_key)
    }

    #[tokio::test]
    async fn test_load_returns_temperature() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/v1/current.json")
                    .query_param("key", "secret")
                    .query_param("q", "-15.80097,-47.86072")
                    .query_param("aqi", "no");
                then.status(200).json_body(json!({
                    "location": {"name": "Brasilia"},
                    "current": {"temp_c": 24.5, "temp_f": 76.1}
                }));
            })
            .await;

        let temp = client_for(&server, "secret")
            .load("-15.80097", "-47.86072")
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(temp.celsius(), 24.5);
        assert_eq!(temp.fahrenheit(), 24.5 * 1.8 + 32.0);
        assert_eq!(temp.kelvin(), 297.5);
    }

    #[tokio::test]
    async fn test_load_maps_rejected_key_to_unauthorized() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).query_param("key", "invalid-key");
                then.status(401).json_body(json!({
                    "error": {"code": 2006, "message": "API key is invalid."}
                }));
            })
            .await;
        server
            .mock_async(|when, then| {
                when.method(GET).query_param("key", "disabled-key");
                then.status(403).json_body(json!({
                    "error": {"code": 2008, "message": "API key has been disabled."}
                }));
            })
            .await;

        let invalid = client_for(&server, "invalid-key").load("0", "0").await;
        let disabled = client_for(&server, "disabled-key").load("0", "0").await;

        assert!(matches!(invalid, Err(Error::Unauthorized)));
        assert!(matches!(disabled, Err(Error::Unauthorized)));
    }

    #[tokio::test]
    async fn test_load_distinguishes_bad_requests() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).query_param("q", "999,999");
                then.status(400).json_body(json!({
                    "error": {"code": 1006, "message": "No matching location found."}
                }));
            })
            .await;
        server
            .mock_async(|when, then| {
                when.method(GET).query_param("q", ",");
                then.status(400).json_body(json!({
                    "error": {"code": 1003, "message": "Parameter q is missing."}
                }));
            })
            .await;

        let client = client_for(&server, "secret");

        assert!(matches!(
            client.load("999", "999").await,
            Err(Error::InvalidLocation)
        ));
        assert!(matches!(client.load("", "").await, Err(Error::Other(_))));
    }

    #[tokio::test]
    async fn test_load_maps_server_errors_to_unavailable() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/v1/current.json");
                then.status(502);
            })
            .await;

        let result = client_for(&server, "secret").load("1", "2").await;

        assert!(matches!(result, Err(Error::ServiceUnavailable(_))));
    }

    #[test]
    fn test_debug_hides_api_key() {
        let client = WeatherApiClient::new(Client::new(), "http://localhost", "secret");

        assert!(!format!("{:?}", client).contains("secret"));
    }
}
