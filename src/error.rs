//! Library error type

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SegmentError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl SegmentError {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        SegmentError::InvalidArgument(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, SegmentError>;
