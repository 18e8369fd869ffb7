//! Blocking OMDb API client.

use crate::{OmdbLookup, OmdbSearch};
use cineshelf_error::{CineshelfResult, OmdbError, OmdbErrorKind};
use reqwest::blocking::Client;
use tracing::{debug, error, instrument};

const OMDB_API_URL: &str = "http://www.omdbapi.com/";

/// OMDb API client.
///
/// Calls block the current thread; the catalog app makes one lookup at a
/// time and has no runtime to hand the request to.
#[derive(Debug, Clone)]
pub struct OmdbClient {
    client: Client,
    api_key: String,
}

impl OmdbClient {
    /// Creates a new OMDb client.
    ///
    /// # Arguments
    ///
    /// * `api_key` - OMDb API key
    pub fn new(api_key: impl Into<String>) -> Self {
        let api_key = api_key.into();
        debug!("Creating new OMDb client");
        Self {
            client: Client::new(),
            api_key,
        }
    }

    /// Creates a client from the `OMDB_API_KEY` environment variable.
    ///
    /// # Errors
    ///
    /// Returns `OmdbErrorKind::MissingApiKey` when the variable is unset or
    /// blank.
    pub fn from_env() -> CineshelfResult<Self> {
        let api_key = std::env::var("OMDB_API_KEY").unwrap_or_default();
        if api_key.trim().is_empty() {
            return Err(OmdbError::new(OmdbErrorKind::MissingApiKey).into());
        }
        Ok(Self::new(api_key))
    }

    /// Looks up a single movie by title (`t=` query).
    #[instrument(skip(self))]
    pub fn movie_by_title(&self, title: &str) -> CineshelfResult<OmdbLookup> {
        debug!("Sending title lookup to OMDb");
        self.get(&[("t", title)])
    }

    /// Searches titles matching a query (`s=` query).
    #[instrument(skip(self))]
    pub fn search(&self, query: &str) -> CineshelfResult<OmdbSearch> {
        debug!("Sending title search to OMDb");
        self.get(&[("s", query)])
    }

    /// Sends one blocking GET with the API key plus the given parameters.
    fn get<T>(&self, params: &[(&str, &str)]) -> CineshelfResult<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let response = self
            .client
            .get(OMDB_API_URL)
            .query(&[("apikey", self.api_key.as_str())])
            .query(params)
            .send()
            .map_err(|e| {
                error!(error = ?e, "Failed to send request to OMDb");
                OmdbError::new(OmdbErrorKind::Request(format!("Request failed: {}", e)))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().unwrap_or_default();
            error!(status = %status, body = %body, "OMDb returned an error status");
            return Err(OmdbError::new(OmdbErrorKind::Status {
                status_code: status.as_u16(),
                message: body,
            })
            .into());
        }

        let payload = response.json().map_err(|e| {
            error!(error = ?e, "Failed to parse OMDb response");
            OmdbError::new(OmdbErrorKind::Parse(format!(
                "Failed to parse response: {}",
                e
            )))
        })?;

        debug!("Received response from OMDb");
        Ok(payload)
    }
}
