use super::api::{ApiError, ApiSuccess, INVALID_ZIPCODE};
use crate::domain::models::{HealthReport, PostalCode, ProbeResult, Temperature};
use crate::domain::ports::WeatherService;
use crate::inbound::AppState;

use axum::Json;
use axum::extract::{Path, State, rejection::PathRejection};
use axum::http::StatusCode;
use serde::Serialize;

const PROBE_WORKING: &str = "Working!";

/// The response body for a successful temperature lookup.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TemperatureResponseData {
    #[serde(rename = "temp_C")]
    celsius: f64,
    #[serde(rename = "temp_F")]
    fahrenheit: f64,
    #[serde(rename = "temp_K")]
    kelvin: f64,
}

impl From<&Temperature> for TemperatureResponseData {
    fn from(temp: &Temperature) -> Self {
        Self {
            celsius: temp.celsius(),
            fahrenheit: temp.fahrenheit(),
            kelvin: temp.kelvin(),
        }
    }
}

/// Get the current temperature at the location of a postal code.
///
/// # Responses
///
/// - 200 OK: the temperature in Celsius, Fahrenheit and Kelvin.
/// - 422 Unprocessable entity: the postal code is malformed, including path segments that do
///   not decode to UTF-8.
/// - 404 Not found: the postal code does not exist.
/// - 502 Bad gateway: one of the upstream services is unavailable.
/// - 500 Internal server error: anything else.
pub(super) async fn get_temperature_handler<WS: WeatherService>(
    State(state): State<AppState<WS>>,
    cep: Result<Path<String>, PathRejection>,
) -> Result<ApiSuccess<TemperatureResponseData>, ApiError> {
    let Path(cep) = cep.map_err(|rejection| {
        tracing::debug!("rejected postal code path: {}", rejection);
        ApiError::UnprocessableEntity(INVALID_ZIPCODE.to_string())
    })?;
    let code = PostalCode::from(cep);
    state
        .weather_service
        .temperature_for(&code)
        .await
        .map_err(ApiError::from)
        .map(|ref temp| ApiSuccess::new(StatusCode::OK, temp.into()))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthResponseData {
    ok: bool,
    weather: String,
    cep: String,
}

impl From<&HealthReport> for HealthResponseData {
    fn from(report: &HealthReport) -> Self {
        let describe = |probe: &ProbeResult| match probe {
            ProbeResult::Working => PROBE_WORKING.to_string(),
            ProbeResult::Failed(reason) => format!("Error: {}", reason),
        };

        Self {
            ok: report.ok(),
            weather: describe(report.weather()),
            cep: describe(report.cep()),
        }
    }
}

/// Probe both upstream services.
///
/// # Responses
///
/// - 200 OK: both probes succeeded.
/// - 500 Internal server error: at least one probe failed; the failing field carries the error.
pub(super) async fn health_handler<WS: WeatherService>(
    State(state): State<AppState<WS>>,
) -> (StatusCode, Json<HealthResponseData>) {
    let report = state.weather_service.health().await;

    let status = if report.ok() {
        StatusCode::OK
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    };

    (status, Json(HealthResponseData::from(&report)))
}

pub(super) async fn ready_handler() -> StatusCode {
    StatusCode::OK
}
