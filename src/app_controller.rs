use anyhow::Result;
use log::{error, warn, info, debug};
use std::path::{Path, PathBuf};
use std::time::Duration;
use indicatif::{ProgressBar, ProgressStyle};

use crate::app_config::Config;
use crate::document::{DocumentStatus, TranslationJob};
use crate::errors::TranslationError;
use crate::file_utils::FileManager;
use crate::providers::DocumentProvider;
use crate::providers::deepl::DeepLDocument;

// @module: Application controller for batch document translation

/// Main application controller driving the submit/poll/fetch lifecycle
///
/// Files are processed strictly one at a time: a document's whole lifecycle
/// completes (or is abandoned) before the next file is touched. Per-file
/// failures are logged and skipped; they never abort the run.
pub struct Controller<P: DocumentProvider> {
    // @field: App configuration
    config: Config,
    // @field: Remote service client
    provider: P,
}

impl Controller<DeepLDocument> {
    // @method: Create a controller backed by the DeepL document API
    pub fn with_config(config: Config) -> Result<Self> {
        let provider = DeepLDocument::new(
            config.service.api_key.clone(),
            config.service.endpoint.clone(),
        );
        Self::with_provider(config, provider)
    }
}

impl<P: DocumentProvider> Controller<P> {
    /// Create a controller with an explicit service client
    pub fn with_provider(config: Config, provider: P) -> Result<Self> {
        Ok(Self { config, provider })
    }

    /// Check if the controller is properly initialized with configuration
    pub fn is_initialized(&self) -> bool {
        !self.config.service.endpoint.is_empty()
            && !self.config.translation.target_language.is_empty()
    }

    /// Run the main workflow: translate every PDF in the input folder
    ///
    /// Returns Ok even when individual files fail; only run-level problems
    /// (e.g. a missing input directory) are errors.
    pub async fn run(&self) -> Result<()> {
        // Start timing the process
        let start_time = std::time::Instant::now();

        let input_dir = PathBuf::from(&self.config.folders.input_folder);
        let output_dir = PathBuf::from(&self.config.folders.output_folder);

        // Check if the input directory exists
        if !input_dir.is_dir() {
            return Err(anyhow::anyhow!("Input directory does not exist: {:?}", input_dir));
        }

        // Ensure the output directory exists before anything is written
        FileManager::ensure_dir(&output_dir)?;

        // Find all PDF files in the directory (non-recursive)
        let pdf_files = FileManager::find_pdf_files(&input_dir)?;

        if pdf_files.is_empty() {
            warn!("No PDF files found in directory: {:?}", input_dir);
            return Ok(());
        }

        // Create a progress bar for batch processing
        let batch_pb = ProgressBar::new(pdf_files.len() as u64);
        let template_result = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files ({percent}%) {msg} {eta}")
            .or_else(|_| ProgressStyle::default_bar().template("{spinner} [{elapsed_precise}] [{bar:40}] {pos}/{len} ({percent}%) {msg}"))
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        batch_pb.set_style(template_result.progress_chars("█▓▒░"));
        batch_pb.set_message("Translating documents");

        // Track success and failure counts
        let mut success_count = 0;
        let mut error_count = 0;

        // Process each document file
        for pdf_file in pdf_files.iter() {
            // Get the file name for display
            let file_name = pdf_file.file_name()
                .map(|f| f.to_string_lossy().to_string())
                .unwrap_or_else(|| "unknown".to_string());

            batch_pb.set_message(format!("Processing: {}", file_name));
            info!("Processing file: {:?}", pdf_file);

            match self.process_file(pdf_file, &output_dir).await {
                Ok(output_path) => {
                    info!("Translated file saved: {}", output_path.display());
                    success_count += 1;
                },
                Err(e) => {
                    error!("Error processing file {}: {}", file_name, e);
                    error_count += 1;
                }
            }

            batch_pb.inc(1);
        }

        batch_pb.finish_with_message("Batch processing complete");

        // Give summary results - important for batch operations
        let duration = start_time.elapsed();
        info!("Batch completed: {} translated, {} errors - Duration: {}",
             success_count, error_count, Self::format_duration(duration));

        Ok(())
    }

    /// Drive one document through its full submit/poll/fetch lifecycle
    async fn process_file(&self, input_file: &Path, output_dir: &Path) -> Result<PathBuf, TranslationError> {
        let mut job = self.provider
            .submit_document(input_file, &self.config.translation.target_language)
            .await?;

        debug!("Submitted {} as document {}", job.file_name(), job.document_id);

        self.wait_for_completion(&mut job).await?;

        let content = self.provider.download_result(&job).await?;

        let output_path = FileManager::generate_output_path(input_file, output_dir);
        FileManager::write_bytes(&output_path, &content)
            .map_err(|e| TranslationError::OutputWrite(e.to_string()))?;

        Ok(output_path)
    }

    /// Poll the service until the job reaches a terminal status
    ///
    /// A transport failure during polling aborts the file: the service gave
    /// no status, so there is nothing sane to keep looping on. The attempt
    /// budget caps the wait for jobs the service never finishes.
    async fn wait_for_completion(&self, job: &mut TranslationJob) -> Result<(), TranslationError> {
        let max_attempts = self.config.polling.max_attempts;
        let interval = Duration::from_secs(self.config.polling.interval_secs);
        let mut attempts: u32 = 0;

        loop {
            attempts += 1;
            let snapshot = self.provider.document_status(job).await?;
            job.status = snapshot.document_status();

            match &job.status {
                DocumentStatus::Done => return Ok(()),
                DocumentStatus::Error => {
                    return Err(TranslationError::RemoteFailure { file: job.file_name() });
                },
                status => {
                    info!("Translation status for {}: {}", job.file_name(), status);
                    if let Some(secs) = snapshot.seconds_remaining {
                        debug!("Service estimates {}s remaining for {}", secs, job.file_name());
                    }

                    if attempts >= max_attempts {
                        return Err(TranslationError::PollLimitExceeded { attempts });
                    }

                    tokio::time::sleep(interval).await;
                }
            }
        }
    }

    // Format duration in a human-readable format (HH:MM:SS)
    fn format_duration(duration: std::time::Duration) -> String {
        let total_seconds = duration.as_secs();
        let hours = total_seconds / 3600;
        let minutes = (total_seconds % 3600) / 60;
        let seconds = total_seconds % 60;

        if hours > 0 {
            format!("{}h {}m {}s", hours, minutes, seconds)
        } else if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}.{:03}s", seconds, duration.subsec_millis())
        }
    }
}
