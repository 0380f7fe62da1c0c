//! Exporter error types

use thiserror::Error;

/// Construction-time failures.
///
/// Delivery failures never surface here: they resolve the per-call
/// [`ExportHandle`](crate::export::ExportHandle) to failed and are reported
/// through logs.
#[derive(Error, Debug)]
pub enum ExporterError {
    #[error("invalid destination URI: {0}")]
    InvalidEndpoint(#[from] url::ParseError),

    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_endpoint_display() {
        let err = ExporterError::from("not a uri".parse::<url::Url>().unwrap_err());
        assert!(err.to_string().starts_with("invalid destination URI:"));
    }

    #[test]
    fn test_io_error_from() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: ExporterError = io_err.into();
        assert!(err.to_string().contains("file not found"));
    }
}
