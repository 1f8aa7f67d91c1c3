use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Failed to retrieve the page. Status Code: {0}")]
    UpstreamStatus(u16),

    #[error("Request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("An error occurred: {0}")]
    ExtractionError(String),

    #[error("An error occurred: {0}")]
    JoinError(#[from] tokio::task::JoinError),

    #[error("Invalid upstream template: {0}")]
    InvalidTemplate(String),
}

/// Coarse classification of a [`ScanError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The upstream page could not be retrieved.
    Upstream,
    /// The page was retrieved but could not be turned into a report.
    Extraction,
    Config,
}

impl ScanError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ScanError::UpstreamStatus(_) | ScanError::HttpError(_) => ErrorKind::Upstream,
            ScanError::ExtractionError(_) | ScanError::JoinError(_) => ErrorKind::Extraction,
            ScanError::InvalidTemplate(_) => ErrorKind::Config,
        }
    }
}

pub type Result<T> = std::result::Result<T, ScanError>;
