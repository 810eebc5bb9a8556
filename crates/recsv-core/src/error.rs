//! Error types for the recsv-core library.

use thiserror::Error;

/// Main error type for the recsv library.
///
/// Per-field extraction failures are not errors: extractors return
/// `Option` and the parser degrades to absent fields. Only the
/// surrounding pipeline (OCR input, export, configuration) can fail.
#[derive(Error, Debug)]
pub enum RecsvError {
    /// OCR collaborator error.
    #[error("OCR error: {0}")]
    Ocr(#[from] OcrError),

    /// Export error.
    #[error("export error: {0}")]
    Export(#[from] ExportError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors surfaced by the OCR collaborator boundary.
#[derive(Error, Debug)]
pub enum OcrError {
    /// Failed to load the OCR engine or its models.
    #[error("failed to load engine: {0}")]
    EngineLoad(String),

    /// Failed to decode the input image.
    #[error("failed to decode image: {0}")]
    ImageDecode(String),

    /// Text recognition failed.
    #[error("text recognition failed: {0}")]
    Recognition(String),
}

/// Errors related to tabular export.
#[derive(Error, Debug)]
pub enum ExportError {
    /// CSV serialization failed.
    #[error("CSV write failed: {0}")]
    Csv(#[from] csv::Error),

    /// Output was not valid UTF-8.
    #[error("output is not valid UTF-8")]
    Utf8(#[from] std::string::FromUtf8Error),

    /// I/O failure while writing.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for the recsv library.
pub type Result<T> = std::result::Result<T, RecsvError>;
