use thiserror::Error;

/// Reasons an upload cannot become a session.
///
/// Every variant leaves the workspace untouched; the user can pick another file.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ImportError {
    #[error("Could not read the file: {0}")]
    Read(String),

    #[error("Could not decode the file: {0}")]
    Decode(String),

    #[error("The file contains no data")]
    EmptySheet,
}

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV buffer error: {0}")]
    Buffer(String),
}

impl From<csv::Error> for ImportError {
    fn from(err: csv::Error) -> Self {
        ImportError::Decode(err.to_string())
    }
}

impl From<calamine::Error> for ImportError {
    fn from(err: calamine::Error) -> Self {
        ImportError::Decode(err.to_string())
    }
}

impl From<calamine::XlsxError> for ImportError {
    fn from(err: calamine::XlsxError) -> Self {
        ImportError::Decode(err.to_string())
    }
}

impl From<calamine::XlsError> for ImportError {
    fn from(err: calamine::XlsError) -> Self {
        ImportError::Decode(err.to_string())
    }
}

impl From<calamine::XlsbError> for ImportError {
    fn from(err: calamine::XlsbError) -> Self {
        ImportError::Decode(err.to_string())
    }
}

impl From<calamine::OdsError> for ImportError {
    fn from(err: calamine::OdsError) -> Self {
        ImportError::Decode(err.to_string())
    }
}

pub type Result<T, E = ImportError> = std::result::Result<T, E>;
