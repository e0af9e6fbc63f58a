use std::path::PathBuf;

/// Failures of the conversion pipeline. Hex strings that do not match are
/// never an error; they are passed through unchanged.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The source could not be read: it is missing, unreadable, or not
    /// valid UTF-8.
    #[error("failed to read source {}", .path.display())]
    SourceNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("manifest is not valid JSON after preprocessing: {0}")]
    MalformedJson(serde_json::Error),

    #[error("failed to encode converted manifest: {0}")]
    Serialize(serde_json::Error),

    #[error("failed to write destination {}", .path.display())]
    WriteFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
