/*!
 * # doctrans - batch PDF document translation
 *
 * A Rust library for translating PDF documents through a remote
 * document-translation service (DeepL document API).
 *
 * ## Features
 *
 * - Scan an input directory for PDF files
 * - Submit each document to the service, poll until translated, download the result
 * - Bounded status polling with a configurable interval and attempt budget
 * - Per-file failure isolation: a failed document never aborts the batch
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `document`: Translation job and status model
 * - `providers`: Client implementations for document translation services:
 *   - `providers::deepl`: DeepL document API client
 * - `file_utils`: File system operations
 * - `app_controller`: Main application controller
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod document;
pub mod errors;
pub mod file_utils;
pub mod providers;

// Re-export main types for easier usage
pub use app_config::Config;
pub use app_controller::Controller;
pub use document::{DocumentStatus, StatusSnapshot, TranslationJob};
pub use errors::{AppError, ProviderError, TranslationError};
pub use providers::DocumentProvider;
