use thiserror::Error;

/// Errors that may occur while writing the report file.
///
/// # Variants
///
/// * `Serialization` - The report could not be serialized to JSON.
/// * `FileCreation` - The output file could not be created.
/// * `FileWrite` - The report could not be written to the output file.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("could not serialize the report: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("could not create the report file: {0}")]
    FileCreation(#[source] std::io::Error),
    #[error("could not write the report file: {0}")]
    FileWrite(#[source] std::io::Error),
}
