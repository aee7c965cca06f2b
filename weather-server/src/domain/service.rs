/*!
   Module `service` provides the canonical implementation of the [WeatherService] port.
*/

use super::{
    models::{Coordinates, GetTemperatureError, HealthReport, PostalCode, ProbeResult, Temperature},
    ports::{CepLoader, WeatherLoader, WeatherService},
};

/// Postal code used to probe the CEP service.
pub const PROBE_CEP: &str = "70150900";
/// Coordinates used to probe the weather service.
pub const PROBE_LATITUDE: &str = "-15.80097";
pub const PROBE_LONGITUDE: &str = "-47.86072";

/// Canonical implementation of the [WeatherService] port, through which the weather domain API
/// is consumed.
#[derive(Debug, Clone)]
pub struct Service<C, W>
where
    C: CepLoader,
    W: WeatherLoader,
{
    cep_loader: C,
    weather_loader: W,
}

impl<C, W> Service<C, W>
where
    C: CepLoader,
    W: WeatherLoader,
{
    pub fn new(cep_loader: C, weather_loader: W) -> Self {
        Self {
            cep_loader,
            weather_loader,
        }
    }
}

impl<C, W> WeatherService for Service<C, W>
where
    C: CepLoader,
    W: WeatherLoader,
{
    /// Look up the coordinates for `code`, then the temperature at them. The weather lookup only
    /// runs once the location lookup succeeded; neither is retried.
    ///
    /// # Errors
    ///
    /// - Propagates any [LoadLocationError](super::models::LoadLocationError) from the
    ///   [CepLoader], or [LoadWeatherError](super::models::LoadWeatherError) from the
    ///   [WeatherLoader].
    async fn temperature_for(&self, code: &PostalCode) -> Result<Temperature, GetTemperatureError> {
        let coordinates: Coordinates = self.cep_loader.load(code).await?;

        let temperature = self
            .weather_loader
            .load(coordinates.latitude(), coordinates.longitude())
            .await?;

        Ok(temperature)
    }

    async fn health(&self) -> HealthReport {
        let cep = self.cep_loader.load(&PostalCode::from(PROBE_CEP)).await;
        let weather = self
            .weather_loader
            .load(PROBE_LATITUDE, PROBE_LONGITUDE)
            .await;

        HealthReport::new(
            ProbeResult::from_result(&cep),
            ProbeResult::from_result(&weather),
        )
    }
}
