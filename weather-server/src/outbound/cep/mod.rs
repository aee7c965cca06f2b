use crate::domain::{
    models::{Coordinates, LoadLocationError, PostalCode},
    ports::CepLoader,
};

use weather_core::cep::{AwesomeApiClient, Error};

impl CepLoader for AwesomeApiClient {
    async fn load(&self, code: &PostalCode) -> Result<Coordinates, LoadLocationError> {
        AwesomeApiClient::load(self, code.as_str())
            .await
            .map_err(LoadLocationError::from)
    }
}

impl From<Error> for LoadLocationError {
    fn from(err: Error) -> Self {
        match err {
            Error::InvalidCep => LoadLocationError::InvalidCep,
            Error::NotFound => LoadLocationError::NotFound,
            Error::ServiceUnavailable(cause) => LoadLocationError::Unavailable(cause),
            Error::Other(cause) => LoadLocationError::Unknown(cause),
        }
    }
}
