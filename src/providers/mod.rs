/*!
 * Client implementations for document translation services.
 *
 * This module contains the `DocumentProvider` trait that the job runner is
 * written against, and the DeepL document API client implementing it.
 */

use async_trait::async_trait;
use bytes::Bytes;
use std::fmt::Debug;
use std::path::Path;

use crate::document::{StatusSnapshot, TranslationJob};
use crate::errors::ProviderError;

/// Common trait for document translation services
///
/// This trait defines the three remote calls the job runner makes per
/// document, allowing the real HTTP client and test doubles to be used
/// interchangeably.
#[async_trait]
pub trait DocumentProvider: Send + Sync + Debug {
    /// Submit a document for translation
    ///
    /// # Arguments
    /// * `file_path` - Local path of the document to upload
    /// * `target_language` - Language code to translate into
    ///
    /// # Returns
    /// * `Result<TranslationJob, ProviderError>` - The job handle assigned by the service, or an error
    async fn submit_document(
        &self,
        file_path: &Path,
        target_language: &str,
    ) -> Result<TranslationJob, ProviderError>;

    /// Query the current status of a submitted document
    async fn document_status(&self, job: &TranslationJob) -> Result<StatusSnapshot, ProviderError>;

    /// Download the translated document
    ///
    /// Only meaningful once the service has reported the job as done.
    async fn download_result(&self, job: &TranslationJob) -> Result<Bytes, ProviderError>;
}

pub mod deepl;
