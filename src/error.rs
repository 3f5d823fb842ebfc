// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Catalog(String),
    Network(String),
    Preview(PreviewError),
}

/// Specific error types for preview clip playback.
/// Used to pick a localized message when a preview cannot start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreviewError {
    /// The clip could not be opened (missing file, unreachable URL, bad container).
    OpenFailed(String),

    /// The clip exists but contains no video stream.
    NoVideoStream,

    /// Decoding failed during playback.
    DecodingFailed(String),

    /// The decoder task has already terminated.
    NotRunning,
}

impl PreviewError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            PreviewError::OpenFailed(_) => "error-preview-open-failed",
            PreviewError::NoVideoStream => "error-preview-no-video-stream",
            PreviewError::DecodingFailed(_) => "error-preview-decoding-failed",
            PreviewError::NotRunning => "error-preview-not-running",
        }
    }
}

impl fmt::Display for PreviewError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PreviewError::OpenFailed(msg) => write!(f, "Failed to open preview: {}", msg),
            PreviewError::NoVideoStream => write!(f, "No video stream found"),
            PreviewError::DecodingFailed(msg) => write!(f, "Decoding failed: {}", msg),
            PreviewError::NotRunning => write!(f, "Preview decoder is not running"),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Catalog(e) => write!(f, "Catalog Error: {}", e),
            Error::Network(e) => write!(f, "Network Error: {}", e),
            Error::Preview(e) => write!(f, "Preview Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<PreviewError> for Error {
    fn from(err: PreviewError) -> Self {
        Error::Preview(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Network(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
