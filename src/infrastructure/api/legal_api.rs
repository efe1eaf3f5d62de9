#[cfg(test)]
#[path = "legal_api_test.rs"]
mod tests;

use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use reqwest::multipart::Form;
use reqwest::multipart::Part;
use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;
use serde_derive::Deserialize;
use tokio::fs::File;
use tokio_util::io::ReaderStream;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::ApiError;
use crate::domain::models::ChatAnswer;
use crate::domain::models::ChatRequest;
use crate::domain::models::HealthReport;
use crate::domain::models::HealthStatus;
use crate::domain::models::LegalApi;
use crate::domain::models::UploadRequest;
use crate::domain::models::UploadedDocument;

fn convert_err(err: reqwest::Error) -> ApiError {
    if err.is_timeout() {
        return ApiError::Timeout;
    }
    if err.is_decode() {
        return ApiError::Decode(err.to_string());
    }

    return ApiError::Transport(err.to_string());
}

#[derive(Default, Debug, Deserialize)]
struct ErrorResponse {
    error: Option<String>,
}

#[derive(Default, Debug, Deserialize)]
struct HealthResponse {
    status: String,
    indexed_documents: Option<u64>,
    model_info: Option<serde_json::Value>,
}

#[derive(Default, Debug, Deserialize)]
struct UploadResponse {
    #[serde(default)]
    success: bool,
    error: Option<String>,
    #[serde(default)]
    document_id: String,
    #[serde(default)]
    filename: String,
    #[serde(default)]
    text_length: u64,
}

#[derive(Default, Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    success: bool,
    error: Option<String>,
    #[serde(default)]
    response: String,
    #[serde(default)]
    sources: Vec<String>,
    confidence: Option<f64>,
    processing_time: Option<f64>,
}

#[derive(Default, Debug, Deserialize)]
struct ClearResponse {
    #[serde(default)]
    success: bool,
    error: Option<String>,
}

/// HTTP client for the legal assistant backend.
pub struct LegalApiClient {
    url: String,
    health_timeout: Duration,
    request_timeout: Duration,
    client: reqwest::Client,
}

impl LegalApiClient {
    pub fn new(url: &str, health_timeout: Duration, request_timeout: Duration) -> LegalApiClient {
        return LegalApiClient {
            url: url.trim_end_matches('/').to_string(),
            health_timeout,
            request_timeout,
            client: reqwest::Client::new(),
        };
    }

    pub fn from_config() -> Result<LegalApiClient> {
        return Ok(LegalApiClient::new(
            &Config::get(ConfigKey::ApiURL),
            Config::get_duration(ConfigKey::HealthCheckTimeout)?,
            Config::get_duration(ConfigKey::RequestTimeout)?,
        ));
    }

    fn endpoint(&self, path: &str) -> String {
        return format!("{url}{path}", url = self.url);
    }

    /// Zero disables the timeout.
    fn with_timeout(&self, builder: RequestBuilder, timeout: Duration) -> RequestBuilder {
        if timeout.is_zero() {
            return builder;
        }

        return builder.timeout(timeout);
    }

    /// Sends the request and decodes the body. Non-2xx responses become
    /// `ApiError::Rejected`, carrying the backend's `error` field when the
    /// body has one.
    async fn send<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T, ApiError> {
        let res = builder.send().await.map_err(convert_err)?;
        let status = res.status();
        let body = res.text().await.map_err(convert_err)?;

        if !status.is_success() {
            let message = serde_json::from_str::<ErrorResponse>(&body)
                .ok()
                .and_then(|err| return err.error);
            tracing::error!(status = status.as_u16(), error = ?message, "Backend request failed");

            return Err(ApiError::Rejected {
                status: status.as_u16(),
                message,
            });
        }

        return serde_json::from_str::<T>(&body).map_err(|err| {
            tracing::error!(error = ?err, body = %body, "Unable to decode backend response");
            return ApiError::Decode(err.to_string());
        });
    }
}

fn rejected(error: Option<String>) -> ApiError {
    return ApiError::Rejected {
        status: 200,
        message: error,
    };
}

#[async_trait]
impl LegalApi for LegalApiClient {
    #[allow(clippy::implicit_return)]
    async fn health_check(&self) -> Result<HealthReport, ApiError> {
        let builder = self.with_timeout(
            self.client.get(self.endpoint("/api/health")),
            self.health_timeout,
        );
        let res = self.send::<HealthResponse>(builder).await?;

        if let Some(model_info) = &res.model_info {
            tracing::debug!(model_info = %model_info, "Backend model info");
        }

        return Ok(HealthReport {
            status: HealthStatus::parse(&res.status),
            indexed_documents: res.indexed_documents,
        });
    }

    #[allow(clippy::implicit_return)]
    async fn upload(&self, request: &UploadRequest) -> Result<UploadedDocument, ApiError> {
        let file = File::open(&request.path).await.map_err(|err| {
            return ApiError::Transport(format!(
                "Unable to read {}: {err}",
                request.path.to_string_lossy()
            ));
        })?;

        let body = reqwest::Body::wrap_stream(ReaderStream::new(file));
        let part = Part::stream_with_length(body, request.size)
            .file_name(request.file_name.to_string())
            .mime_str(&request.mime)
            .map_err(convert_err)?;
        let form = Form::new().part("file", part);

        let builder = self.with_timeout(
            self.client
                .post(self.endpoint("/api/upload"))
                .multipart(form),
            self.request_timeout,
        );
        let res = self.send::<UploadResponse>(builder).await?;
        if !res.success {
            return Err(rejected(res.error));
        }

        return Ok(UploadedDocument {
            document_id: res.document_id,
            filename: res.filename,
            text_length: res.text_length,
        });
    }

    #[allow(clippy::implicit_return)]
    async fn chat(&self, request: &ChatRequest) -> Result<ChatAnswer, ApiError> {
        let builder = self.with_timeout(
            self.client.post(self.endpoint("/api/chat")).json(request),
            self.request_timeout,
        );
        let res = self.send::<ChatResponse>(builder).await?;
        tracing::debug!(
            success = res.success,
            confidence = ?res.confidence,
            processing_time = ?res.processing_time,
            "Chat response"
        );
        if !res.success {
            return Err(rejected(res.error));
        }

        return Ok(ChatAnswer {
            response: res.response,
            sources: res.sources,
            confidence: res.confidence,
            processing_time: res.processing_time,
        });
    }

    #[allow(clippy::implicit_return)]
    async fn clear(&self) -> Result<(), ApiError> {
        let builder = self.with_timeout(
            self.client.post(self.endpoint("/api/clear")),
            self.request_timeout,
        );
        let res = self.send::<ClearResponse>(builder).await?;
        if !res.success {
            return Err(rejected(res.error));
        }

        return Ok(());
    }
}
