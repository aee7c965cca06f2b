use crate::domain::models::{GetTemperatureError, LoadLocationError, LoadWeatherError};

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// A successful response: a status code and a JSON body.
#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize + PartialEq>(StatusCode, Json<T>);

impl<T: Serialize + PartialEq> ApiSuccess<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        ApiSuccess(status, Json(data))
    }
}

impl<T: Serialize + PartialEq> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

/// A failed response. Only the message reaches the client; causes are logged when the error is
/// built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    InternalServerError(String),
    UnprocessableEntity(String),
    NotFound(String),
    BadGateway(String),
}

pub(super) const INTERNAL_SERVER_ERROR: &str = "internal server error";
pub(super) const INVALID_ZIPCODE: &str = "invalid zipcode";
pub(super) const ZIPCODE_NOT_FOUND: &str = "can not find zipcode";
pub(super) const CEP_UNAVAILABLE: &str = "cep service is unavailable, try again later";
pub(super) const WEATHER_UNAVAILABLE: &str = "weather service is unavailable, try again later";

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::UnprocessableEntity(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::BadGateway(_) => StatusCode::BAD_GATEWAY,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            ApiError::InternalServerError(message)
            | ApiError::UnprocessableEntity(message)
            | ApiError::NotFound(message)
            | ApiError::BadGateway(message) => message,
        }
    }
}

impl From<LoadLocationError> for ApiError {
    fn from(err: LoadLocationError) -> Self {
        match err {
            LoadLocationError::InvalidCep => Self::UnprocessableEntity(INVALID_ZIPCODE.to_string()),
            LoadLocationError::NotFound => Self::NotFound(ZIPCODE_NOT_FOUND.to_string()),
            LoadLocationError::Unavailable(cause) => {
                tracing::warn!("cep service is unavailable: {:?}", cause);
                Self::BadGateway(CEP_UNAVAILABLE.to_string())
            }
            LoadLocationError::Unknown(cause) => {
                tracing::error!("unhandled error while loading cep: {:?}", cause);
                Self::InternalServerError(INTERNAL_SERVER_ERROR.to_string())
            }
        }
    }
}

impl From<LoadWeatherError> for ApiError {
    fn from(err: LoadWeatherError) -> Self {
        match err {
            LoadWeatherError::Unavailable(cause) => {
                tracing::warn!("weather service is unavailable: {:?}", cause);
                Self::BadGateway(WEATHER_UNAVAILABLE.to_string())
            }
            err => {
                tracing::error!("unhandled error while loading weather: {:?}", err);
                Self::InternalServerError(INTERNAL_SERVER_ERROR.to_string())
            }
        }
    }
}

impl From<GetTemperatureError> for ApiError {
    fn from(err: GetTemperatureError) -> Self {
        match err {
            GetTemperatureError::Location(err) => err.into(),
            GetTemperatureError::Weather(err) => err.into(),
        }
    }
}

/// The body of every non-2xx response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorResponseBody {
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorResponseBody {
            message: self.message().to_string(),
        };

        (status, Json(body)).into_response()
    }
}
