//! HTTP client for the portfolio backend's form endpoints

use async_trait::async_trait;
use reqwest::{
    multipart::{Form, Part},
    Url,
};
use serde_json::Value;
use tracing::{error, info, instrument};

use crate::{
    config::ApiConfig,
    error::{ClientError, Result},
    models::{pitch::PROPOSAL_FILE_PART, ConnectFormData, PitchFormData, SubmissionResult},
};

/// Form submission surface. Implementations never fail: every fault is
/// reported as [`SubmissionResult::Failure`].
#[async_trait]
pub trait PortfolioApi: Send + Sync {
    async fn submit_pitch(&self, form: PitchFormData) -> SubmissionResult;

    async fn submit_connect(&self, form: &ConnectFormData) -> SubmissionResult;
}

#[derive(Clone, Debug)]
pub struct PortfolioClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl PortfolioClient {
    pub fn new(config: ApiConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }

        Self::with_client(builder.build()?, config)
    }

    /// Reuses an existing connection pool.
    pub fn with_client(http: reqwest::Client, config: ApiConfig) -> Result<Self> {
        Url::parse(&config.base_url)
            .map_err(|e| ClientError::InvalidUrl(format!("{}: {}", config.base_url, e)))?;

        Ok(Self { http, config })
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    #[instrument(skip_all, fields(endpoint = %self.config.pitch_url()))]
    pub async fn try_submit_pitch(&self, form: PitchFormData) -> Result<Value> {
        info!(
            file_name = form.file_name().unwrap_or("No file"),
            "Submitting pitch"
        );

        let payload = pitch_payload(form)?;

        // reqwest sets multipart/form-data with the boundary itself.
        let response = self
            .http
            .post(self.config.pitch_url())
            .multipart(payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await?;
            error!(status = status.as_u16(), body = %body, "Server error response");
            return Err(ClientError::http(status, body));
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }

    #[instrument(skip_all, fields(endpoint = %self.config.connect_url()))]
    pub async fn try_submit_connect(&self, form: &ConnectFormData) -> Result<Value> {
        // `json` also sets `Content-Type: application/json`.
        let response = self
            .http
            .post(self.config.connect_url())
            .json(form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::http_status(status));
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

#[async_trait]
impl PortfolioApi for PortfolioClient {
    async fn submit_pitch(&self, form: PitchFormData) -> SubmissionResult {
        let result = self.try_submit_pitch(form).await;
        if let Err(err) = &result {
            error!(error = %err, "Pitch submit error");
        }
        result.into()
    }

    async fn submit_connect(&self, form: &ConnectFormData) -> SubmissionResult {
        let result = self.try_submit_connect(form).await;
        if let Err(err) = &result {
            error!(error = %err, "Error submitting contact form");
        }
        result.into()
    }
}

fn pitch_payload(form: PitchFormData) -> Result<Form> {
    let mut payload = Form::new();
    for (name, value) in form.text_parts() {
        payload = payload.text(name, value.to_string());
    }

    if let Some(file) = form.file {
        let part = Part::bytes(file.data)
            .file_name(file.file_name)
            .mime_str(&file.content_type)?;
        payload = payload.part(PROPOSAL_FILE_PART, part);
    }

    Ok(payload)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Attachment;

    #[test]
    fn test_rejects_unparseable_base_url() {
        let err = PortfolioClient::new(ApiConfig::with_base_url("not a url")).unwrap_err();
        assert!(matches!(err, ClientError::InvalidUrl(_)));
        assert!(err.to_string().contains("not a url"));
    }

    #[test]
    fn test_builds_with_timeout() {
        let mut config = ApiConfig::with_base_url("http://127.0.0.1:9/api/v1");
        config.request_timeout_seconds = Some(5);

        let client = PortfolioClient::new(config).unwrap();
        assert_eq!(client.config().pitch_url(), "http://127.0.0.1:9/api/v1/pitch");
    }

    #[test]
    fn test_payload_with_attachment() {
        let form = PitchFormData {
            name: "Ada".to_string(),
            file: Some(Attachment::new("deck.pdf", b"%PDF".to_vec())),
            ..PitchFormData::default()
        };

        let payload = pitch_payload(form).unwrap();
        assert!(!payload.boundary().is_empty());
    }

    #[test]
    fn test_payload_rejects_malformed_content_type() {
        let mut file = Attachment::new("deck.pdf", b"%PDF".to_vec());
        file.content_type = "not a mime".to_string();
        let form = PitchFormData {
            file: Some(file),
            ..PitchFormData::default()
        };

        assert!(matches!(pitch_payload(form), Err(ClientError::Network(_))));
    }
}
