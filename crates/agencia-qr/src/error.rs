//! Error types for QR artifact handling

use thiserror::Error;

/// Errors that can occur while encoding or storing QR artifacts.
#[derive(Debug, Error)]
pub enum QrError {
    #[error("QR encoding failed: {0}")]
    Encode(#[from] qrcode::types::QrError),

    #[error("PNG rendering failed: {0}")]
    Png(#[from] image::ImageError),

    #[error("Artifact store error: {0}")]
    Store(String),
}

impl From<std::io::Error> for QrError {
    fn from(err: std::io::Error) -> Self {
        QrError::Store(err.to_string())
    }
}
