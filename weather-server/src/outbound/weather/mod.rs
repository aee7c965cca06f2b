use crate::domain::{
    models::{LoadWeatherError, Temperature},
    ports::WeatherLoader,
};

use weather_core::weather::{Error, WeatherApiClient};

impl WeatherLoader for WeatherApiClient {
    async fn load(&self, latitude: &str, longitude: &str) -> Result<Temperature, LoadWeatherError> {
        WeatherApiClient::load(self, latitude, longitude)
            .await
            .map_err(LoadWeatherError::from)
    }
}

impl From<Error> for LoadWeatherError {
    fn from(err: Error) -> Self {
        match err {
            Error::Unauthorized => LoadWeatherError::Unauthorized,
            Error::InvalidLocation => LoadWeatherError::InvalidLocation,
            Error::ServiceUnavailable(cause) => LoadWeatherError::Unavailable(cause),
            Error::Other(cause) => LoadWeatherError::Unknown(cause),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_error_mapping() {
        assert!(matches!(
            LoadWeatherError::from(Error::Unauthorized),
            LoadWeatherError::Unauthorized
        ));
        assert!(matches!(
            LoadWeatherError::from(Error::InvalidLocation),
            LoadWeatherError::InvalidLocation
        ));
        assert!(matches!(
            LoadWeatherError::from(Error::ServiceUnavailable(anyhow::anyhow!("503"))),
            LoadWeatherError::Unavailable(_)
        ));
        assert!(matches!(
            LoadWeatherError::from(Error::Other(anyhow::anyhow!("418"))),
            LoadWeatherError::Unknown(_)
        ));
    }
}
