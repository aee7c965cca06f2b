/*!
   Module `cep` resolves Brazilian postal codes to coordinates through the AwesomeAPI CEP service.
*/

use crate::{
    constants::{CEP_DIGITS, CEP_PREFIX_DIGITS},
    types::Coordinates,
};

use anyhow::anyhow;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid cep")]
    InvalidCep,
    #[error("cep not found")]
    NotFound,
    #[error("cep service unavailable: {0}")]
    ServiceUnavailable(anyhow::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[derive(Debug, Deserialize)]
struct CepResponse {
    lat: String,
    lng: String,
}

#[derive(Debug, Clone)]
pub struct AwesomeApiClient {
    http: Client,
    base_url: String,
}

impl AwesomeApiClient {
    pub fn new(http: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_owned();
        Self { http, base_url }
    }

    /// Look up the coordinates of `cep`.
    ///
    /// Codes that are not 8 digits (optionally written as `NNNNN-NNN`) are rejected locally with
    /// [Error::InvalidCep], without reaching the upstream service.
    pub async fn load(&self, cep: &str) -> Result<Coordinates, Error> {
        let cep = normalize(cep).ok_or(Error::InvalidCep)?;
        let url = format!("{}/json/{}", self.base_url, cep);

        tracing::debug!("Requesting coordinates from {}", url);

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| Error::ServiceUnavailable(e.into()))?;

        match response.status() {
            StatusCode::OK => {
                let body: CepResponse = response
                    .json()
                    .await
                    .map_err(|e| anyhow!("failed to decode cep response: {}", e))?;

                Ok(Coordinates::new(body.lat, body.lng))
            }
            StatusCode::BAD_REQUEST => Err(Error::InvalidCep),
            StatusCode::NOT_FOUND => Err(Error::NotFound),
            status if status.is_server_error() || status == StatusCode::TOO_MANY_REQUESTS => Err(
                Error::ServiceUnavailable(anyhow!("cep service responded with {}", status)),
            ),
            status => Err(Error::Other(anyhow!(
                "unexpected cep service response: {}",
                status
            ))),
        }
    }
}

/// Accepts `NNNNNNNN` or `NNNNN-NNN` and returns the bare digits.
fn normalize(cep: &str) -> Option<String> {
    let digits = match cep.split_once('-') {
        Some((head, tail)) if head.len() == CEP_PREFIX_DIGITS => format!("{}{}", head, tail),
        Some(_) => return None,
        None => cep.to_owned(),
    };

    let valid = digits.len() == CEP_DIGITS && digits.bytes().all(|b| b.is_ascii_digit());
    valid.then_some(digits)
}
