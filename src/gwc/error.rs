use std::{fmt, io};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GwcError {
    /// The input is not a cartridge, or uses a layout this decoder does not know.
    #[error("cartridge is corrupted or not valid: {0}")]
    CorruptedFormat(String),
    #[error("not enough bytes to read {wanted} byte(s) at offset {offset}")]
    TruncatedInput { offset: u64, wanted: usize },
    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type GwcResult<T> = Result<T, GwcError>;

impl GwcError {
    pub fn corrupted(details: impl fmt::Display) -> Self {
        Self::CorruptedFormat(details.to_string())
    }

    pub fn truncated(offset: u64, wanted: usize) -> Self {
        Self::TruncatedInput { offset, wanted }
    }

    pub fn is_truncated(&self) -> bool {
        matches!(self, Self::TruncatedInput { .. })
    }

    pub fn is_corrupted(&self) -> bool {
        matches!(self, Self::CorruptedFormat(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_failing_read() {
        let err = GwcError::truncated(42, 8);
        assert_eq!(
            err.to_string(),
            "not enough bytes to read 8 byte(s) at offset 42"
        );
        assert!(err.is_truncated());
        assert!(!err.is_corrupted());
    }

    #[test]
    fn io_errors_pass_through() {
        let err: GwcError = io::Error::new(io::ErrorKind::PermissionDenied, "denied").into();
        assert!(matches!(err, GwcError::Io(_)));
        assert_eq!(err.to_string(), "denied");
    }
}
