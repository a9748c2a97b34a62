use std::time::Duration;

use client_logging::{client_debug, client_info};
use serde::de::DeserializeOwned;

use crate::endpoints::{ApiUrls, DEFAULT_BASE_URL};
use crate::types::{map_reqwest_error, ApiError, ApiErrorKind};
use scribe_core::{FileSnapshot, StageEndpoint, TranscriptionResult};

#[derive(Debug, Clone)]
pub struct ApiSettings {
    pub base_url: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        }
    }
}

/// The four REST operations the progress client needs. Behind a trait so
/// tests and the driver can swap in doubles.
#[async_trait::async_trait]
pub trait PipelineApi: Send + Sync {
    /// `GET /files/{id}`.
    async fn fetch_snapshot(&self, id: &str) -> Result<FileSnapshot, ApiError>;

    /// `POST /files` with a multipart form (`file` part plus `name` text).
    async fn upload(
        &self,
        name: &str,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<FileSnapshot, ApiError>;

    /// `PUT /files/{endpoint}/{id}`. The server advances the status; the
    /// client refetches to observe the new value.
    async fn advance(&self, endpoint: StageEndpoint, id: &str) -> Result<(), ApiError>;

    /// `GET /files/results/{id}`.
    async fn fetch_result(&self, id: &str) -> Result<TranscriptionResult, ApiError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestPipelineApi {
    urls: ApiUrls,
    client: reqwest::Client,
}

impl ReqwestPipelineApi {
    pub fn new(settings: &ApiSettings) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| ApiError::new(ApiErrorKind::Network, err.to_string()))?;

        Ok(Self {
            urls: ApiUrls::new(&settings.base_url),
            client,
        })
    }
}

#[async_trait::async_trait]
impl PipelineApi for ReqwestPipelineApi {
    async fn fetch_snapshot(&self, id: &str) -> Result<FileSnapshot, ApiError> {
        let url = self.urls.file_by_id(id);
        client_debug!("GET {}", url);
        let response = self.client.get(url).send().await.map_err(map_reqwest_error)?;
        decode_body(response).await
    }

    async fn upload(
        &self,
        name: &str,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<FileSnapshot, ApiError> {
        let url = self.urls.upload_file();
        client_info!("POST {} name={} bytes={}", url, name, bytes.len());

        let part = reqwest::multipart::Part::bytes(bytes).file_name(file_name.to_string());
        let form = reqwest::multipart::Form::new()
            .part("file", part)
            .text("name", name.to_string());

        let response = self
            .client
            .post(url)
            .multipart(form)
            .send()
            .await
            .map_err(map_reqwest_error)?;
        decode_body(response).await
    }

    async fn advance(&self, endpoint: StageEndpoint, id: &str) -> Result<(), ApiError> {
        let url = self.urls.advance(endpoint, id);
        client_info!("PUT {}", url);
        let response = self.client.put(url).send().await.map_err(map_reqwest_error)?;
        check_advance(response).await
    }

    async fn fetch_result(&self, id: &str) -> Result<TranscriptionResult, ApiError> {
        let url = self.urls.result_by_id(id);
        client_debug!("GET {}", url);
        let response = self.client.get(url).send().await.map_err(map_reqwest_error)?;
        decode_body(response).await
    }
}

async fn decode_body<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
    let value = reject_errors(response).await?;
    serde_json::from_value(value).map_err(|err| ApiError::new(ApiErrorKind::Decode, err.to_string()))
}

/// Turn non-2xx statuses and 2xx bodies carrying an `error` field into
/// rejections, and hand back the JSON body otherwise.
async fn reject_errors(response: reqwest::Response) -> Result<serde_json::Value, ApiError> {
    let status = response.status();
    if !status.is_success() {
        return Err(ApiError::new(
            ApiErrorKind::HttpStatus(status.as_u16()),
            status.to_string(),
        ));
    }
    let value: serde_json::Value = response.json().await.map_err(map_reqwest_error)?;
    if let Some(error) = value.get("error") {
        let message = error
            .as_str()
            .map(ToOwned::to_owned)
            .unwrap_or_else(|| error.to_string());
        return Err(ApiError::new(ApiErrorKind::Application, message));
    }
    Ok(value)
}

/// Like [`reject_errors`] but tolerant of empty or non-JSON advance bodies;
/// only the status and an explicit `error` field matter here.
async fn check_advance(response: reqwest::Response) -> Result<(), ApiError> {
    let status = response.status();
    if !status.is_success() {
        return Err(ApiError::new(
            ApiErrorKind::HttpStatus(status.as_u16()),
            status.to_string(),
        ));
    }
    let text = response.text().await.map_err(map_reqwest_error)?;
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(&text) {
        if let Some(error) = value.get("error") {
            let message = error
                .as_str()
                .map(ToOwned::to_owned)
                .unwrap_or_else(|| error.to_string());
            return Err(ApiError::new(ApiErrorKind::Application, message));
        }
    }
    Ok(())
}
