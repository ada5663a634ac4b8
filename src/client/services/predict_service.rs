use log::debug;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use thiserror::Error;

use crate::common::models::PredictionResult;

/// Shown when the server rejects the request without a usable error body.
pub const UNKNOWN_CLASSIFICATION_ERROR: &str = "Unknown error while classifying the image.";

#[derive(Debug, Clone, Error)]
pub enum PredictError {
    /// Message reported by the classification server, or the generic
    /// fallback when its error body was absent or unreadable.
    #[error("{0}")]
    Server(String),
    /// Transport failure or an unreadable response body.
    #[error("Failed to connect to the classification server: {0}")]
    Connection(String),
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

/// Thin client around the `POST /predict` endpoint.
#[derive(Debug, Clone, Default)]
pub struct PredictService {
    client: reqwest::Client,
}

impl PredictService {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    /// Upload the image bytes as multipart form data (field name `file`) and
    /// parse the prediction out of the response.
    ///
    /// No retries and no timeout: one request, one outcome.
    pub async fn classify(
        &self,
        url: &str,
        file_name: String,
        bytes: Vec<u8>,
    ) -> Result<PredictionResult, PredictError> {
        debug!("POST {} ({} bytes, file '{}')", url, bytes.len(), file_name);

        let form = Form::new().part("file", Part::bytes(bytes).file_name(file_name));
        let response = self
            .client
            .post(url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| PredictError::Connection(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = match response.json::<ErrorBody>().await {
                Ok(ErrorBody { error: Some(message) }) => message,
                _ => UNKNOWN_CLASSIFICATION_ERROR.to_string(),
            };
            debug!("classification rejected ({}): {}", status, message);
            return Err(PredictError::Server(message));
        }

        response
            .json::<PredictionResult>()
            .await
            .map_err(|e| PredictError::Connection(e.to_string()))
    }
}
