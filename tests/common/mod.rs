/*!
 * Common test utilities for the doctrans test suite
 */

use std::path::PathBuf;
use std::fs;
use anyhow::Result;
use tempfile::TempDir;

use doctrans::app_config::Config;


/// Sample PDF header bytes used as test document content
pub const SAMPLE_PDF_BYTES: &[u8] = b"%PDF-1.4\n1 0 obj\n<<>>\nendobj\ntrailer\n<<>>\n%%EOF\n";

/// Creates a temporary directory for test files
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Creates a test file with the given content in the specified directory
pub fn create_test_file(dir: &PathBuf, filename: &str, content: &[u8]) -> Result<PathBuf> {
    let file_path = dir.join(filename);
    fs::write(&file_path, content)?;
    Ok(file_path)
}

/// Creates a sample PDF file for testing
pub fn create_test_pdf(dir: &PathBuf, filename: &str) -> Result<PathBuf> {
    create_test_file(dir, filename, SAMPLE_PDF_BYTES)
}

/// Builds a config pointing at the given folders, tuned for fast tests
/// (no poll delay, small attempt budget)
pub fn test_config(input_folder: &PathBuf, output_folder: &PathBuf) -> Config {
    let mut config = Config::default();
    config.service.api_key = "test-key".to_string();
    config.folders.input_folder = input_folder.to_string_lossy().to_string();
    config.folders.output_folder = output_folder.to_string_lossy().to_string();
    config.polling.interval_secs = 0;
    config.polling.max_attempts = 5;
    config
}
