use std::path::Path;
use std::time::Duration;
use async_trait::async_trait;
use bytes::Bytes;
use reqwest::Client;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use log::error;

use crate::document::{StatusSnapshot, TranslationJob};
use crate::errors::ProviderError;
use crate::providers::DocumentProvider;

/// Client for the DeepL document translation API
///
/// The document API is asynchronous on the service side: a document is
/// uploaded once, then polled at `<endpoint>/<document_id>` until the service
/// reports it done, and finally fetched from `<endpoint>/<document_id>/result`.
/// Every call after submission must carry the per-job `document_key`.
#[derive(Debug)]
pub struct DeepLDocument {
    /// HTTP client for API requests
    client: Client,
    /// API key for authentication
    api_key: String,
    /// Document API endpoint URL
    endpoint: String,
}

/// Service response to a document submission
#[derive(Debug, Deserialize)]
struct SubmitResponse {
    /// Identifier assigned to the uploaded document
    document_id: String,
    /// Per-job secret required for all subsequent calls
    document_key: String,
}

impl DeepLDocument {
    /// Create a new DeepL document client
    pub fn new(api_key: impl Into<String>, endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(120))
                .build()
                .unwrap_or_default(),
            api_key: api_key.into(),
            endpoint: endpoint.into(),
        }
    }

    fn status_url(&self, job: &TranslationJob) -> String {
        format!("{}/{}", self.endpoint.trim_end_matches('/'), job.document_id)
    }

    fn result_url(&self, job: &TranslationJob) -> String {
        format!("{}/{}/result", self.endpoint.trim_end_matches('/'), job.document_id)
    }

    /// Turn a non-success response into a `ProviderError`, surfacing the body
    async fn api_error(response: reqwest::Response) -> ProviderError {
        let status = response.status();
        let error_text = response.text().await
            .unwrap_or_else(|_| "Failed to get error response text".to_string());
        error!("Document API error ({}): {}", status, error_text);
        ProviderError::ApiError {
            status_code: status.as_u16(),
            message: error_text,
        }
    }
}

#[async_trait]
impl DocumentProvider for DeepLDocument {
    async fn submit_document(
        &self,
        file_path: &Path,
        target_language: &str,
    ) -> Result<TranslationJob, ProviderError> {
        let content = tokio::fs::read(file_path).await
            .map_err(|e| ProviderError::DocumentRead(format!("{:?}: {}", file_path, e)))?;

        let file_name = file_path.file_name()
            .map(|f| f.to_string_lossy().to_string())
            .unwrap_or_else(|| "document.pdf".to_string());

        let form = Form::new()
            .part("file", Part::bytes(content).file_name(file_name))
            .text("auth_key", self.api_key.clone())
            .text("target_lang", target_language.to_string());

        let response = self.client.post(&self.endpoint)
            .multipart(form)
            .send()
            .await
            .map_err(|e| ProviderError::RequestFailed(format!("Failed to submit document: {}", e)))?;

        if !response.status().is_success() {
            return Err(Self::api_error(response).await);
        }

        let submit_response = response.json::<SubmitResponse>().await
            .map_err(|e| ProviderError::ParseError(format!("Failed to parse submission response: {}", e)))?;

        Ok(TranslationJob::new(
            submit_response.document_id,
            submit_response.document_key,
            file_path,
        ))
    }

    async fn document_status(&self, job: &TranslationJob) -> Result<StatusSnapshot, ProviderError> {
        let params = [
            ("auth_key", self.api_key.as_str()),
            ("document_key", job.document_key.as_str()),
        ];

        let response = self.client.post(self.status_url(job))
            .form(&params)
            .send()
            .await
            .map_err(|e| ProviderError::RequestFailed(format!("Failed to check document status: {}", e)))?;

        if !response.status().is_success() {
            return Err(Self::api_error(response).await);
        }

        response.json::<StatusSnapshot>().await
            .map_err(|e| ProviderError::ParseError(format!("Failed to parse status response: {}", e)))
    }

    async fn download_result(&self, job: &TranslationJob) -> Result<Bytes, ProviderError> {
        let params = [
            ("auth_key", self.api_key.as_str()),
            ("document_key", job.document_key.as_str()),
        ];

        let response = self.client.post(self.result_url(job))
            .form(&params)
            .send()
            .await
            .map_err(|e| ProviderError::RequestFailed(format!("Failed to download translated document: {}", e)))?;

        if !response.status().is_success() {
            return Err(Self::api_error(response).await);
        }

        response.bytes().await
            .map_err(|e| ProviderError::RequestFailed(format!("Failed to read translated document body: {}", e)))
    }
}
