/*!
 * End-to-end batch translation tests
 */

use std::fs;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use anyhow::Result;
use doctrans::app_controller::Controller;
use doctrans::file_utils::FileManager;
use crate::common;
use crate::common::mock_provider::MockProvider;

/// Test that only PDF entries of a mixed directory are submitted
#[tokio::test]
async fn test_batch_withMixedDirectory_shouldOnlySubmitPdfFiles() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let input = temp_dir.path().join("in");
    let output = temp_dir.path().join("out");
    fs::create_dir(&input)?;

    let pdf = common::create_test_pdf(&input, "a.pdf")?;
    common::create_test_file(&input, "b.txt", b"plain text")?;

    let provider = MockProvider::working(&["translating", "done"], common::SAMPLE_PDF_BYTES);
    let submit_calls = Arc::clone(&provider.submit_calls);

    let controller = Controller::with_provider(common::test_config(&input, &output), provider)?;
    controller.run().await?;

    // b.txt was never submitted
    assert_eq!(submit_calls.lock().unwrap().clone(), vec![pdf]);

    // Only the PDF produced an output file
    assert!(output.join("translated_a.pdf").exists());
    assert!(!output.join("translated_b.txt").exists());

    Ok(())
}

/// Test that a rejected submission does not stop the rest of the batch
#[tokio::test]
async fn test_batch_withRejectedSubmissions_shouldProcessEveryFile() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let input = temp_dir.path().join("in");
    let output = temp_dir.path().join("out");
    fs::create_dir(&input)?;

    common::create_test_pdf(&input, "a.pdf")?;
    common::create_test_pdf(&input, "b.pdf")?;

    let provider = MockProvider::rejecting_submissions(403, "Invalid auth key");
    let submit_calls = Arc::clone(&provider.submit_calls);

    let controller = Controller::with_provider(common::test_config(&input, &output), provider)?;
    // Per-file failures never fail the run
    controller.run().await?;

    // The second file was still attempted after the first was rejected
    assert_eq!(submit_calls.lock().unwrap().len(), 2);

    // No outputs were written
    assert!(FileManager::find_pdf_files(&output)?.is_empty());

    Ok(())
}

/// Test that the output directory is created before anything is written
#[tokio::test]
async fn test_batch_withMissingOutputDir_shouldCreateIt() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let input = temp_dir.path().join("in");
    let output = temp_dir.path().join("nested").join("out");
    fs::create_dir(&input)?;

    common::create_test_pdf(&input, "a.pdf")?;

    let provider = MockProvider::working(&["done"], common::SAMPLE_PDF_BYTES);
    let controller = Controller::with_provider(common::test_config(&input, &output), provider)?;
    controller.run().await?;

    assert!(output.is_dir());
    assert_eq!(fs::read(output.join("translated_a.pdf"))?, common::SAMPLE_PDF_BYTES);

    Ok(())
}

/// Test that an empty input directory is not an error
#[tokio::test]
async fn test_batch_withEmptyInputDir_shouldSucceedWithoutCalls() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let input = temp_dir.path().join("in");
    let output = temp_dir.path().join("out");
    fs::create_dir(&input)?;

    let provider = MockProvider::working(&["done"], b"");
    let submit_calls = Arc::clone(&provider.submit_calls);
    let status_calls = Arc::clone(&provider.status_calls);

    let controller = Controller::with_provider(common::test_config(&input, &output), provider)?;
    controller.run().await?;

    assert!(submit_calls.lock().unwrap().is_empty());
    assert_eq!(status_calls.load(Ordering::SeqCst), 0);

    Ok(())
}

/// Test a two-document batch where both translate successfully
#[tokio::test]
async fn test_batch_withTwoDocuments_shouldTranslateBoth() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let input = temp_dir.path().join("in");
    let output = temp_dir.path().join("out");
    fs::create_dir(&input)?;

    common::create_test_pdf(&input, "first.pdf")?;
    common::create_test_pdf(&input, "second.pdf")?;

    // Each document polls straight to done
    let provider = MockProvider::working(&["done", "done"], common::SAMPLE_PDF_BYTES);
    let download_calls = Arc::clone(&provider.download_calls);

    let controller = Controller::with_provider(common::test_config(&input, &output), provider)?;
    controller.run().await?;

    assert_eq!(download_calls.load(Ordering::SeqCst), 2);
    assert_eq!(fs::read(output.join("translated_first.pdf"))?, common::SAMPLE_PDF_BYTES);
    assert_eq!(fs::read(output.join("translated_second.pdf"))?, common::SAMPLE_PDF_BYTES);

    Ok(())
}
