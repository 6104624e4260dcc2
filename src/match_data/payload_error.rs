use thiserror::Error;

/// Errors that may occur while loading a match payload.
///
/// # Variants
///
/// * `Io` - The payload file could not be opened or read.
/// * `Parse` - The payload file is not valid JSON for the expected shape.
#[derive(Debug, Error)]
pub enum PayloadError {
    #[error("could not read payload {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("could not parse payload {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}
