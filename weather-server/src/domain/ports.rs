/*
   Module `ports` specifies the API by which external modules interact with the weather domain.

   All traits are bounded by `Send + Sync + 'static`, since their implementations must be shareable
   between request-handling tasks.

   Trait methods are explicitly asynchronous, including `Send` bounds on response types,
   since the application is expected to always run in a multithreaded environment.
*/

use std::future::Future;

use crate::domain::models::*;

/// `WeatherService` is the public API for the weather domain.
pub trait WeatherService: Send + Sync + 'static {
    /// Resolve `code` to coordinates, then fetch the current temperature there.
    ///
    /// # Errors
    ///
    /// - [GetTemperatureError::Location] if the postal code lookup fails.
    /// - [GetTemperatureError::Weather] if the weather lookup fails.
    fn temperature_for(
        &self,
        code: &PostalCode,
    ) -> impl Future<Output = Result<Temperature, GetTemperatureError>> + Send;

    /// Probe both upstream services with known-good inputs.
    fn health(&self) -> impl Future<Output = HealthReport> + Send;
}

/// `CepLoader` resolves postal codes to coordinates.
///
/// External modules must conform to this contract – the domain is not concerned with the
/// implementation details or underlying technology of any external code.
pub trait CepLoader: Send + Sync + Clone + 'static {
    fn load(
        &self,
        code: &PostalCode,
    ) -> impl Future<Output = Result<Coordinates, LoadLocationError>> + Send;
}

/// `WeatherLoader` fetches the current temperature at a pair of coordinates.
pub trait WeatherLoader: Send + Sync + Clone + 'static {
    fn load(
        &self,
        latitude: &str,
        longitude: &str,
    ) -> impl Future<Output = Result<Temperature, LoadWeatherError>> + Send;
}
