//! Result type alias for override generation operations

use crate::error::RtlcssError;

/// Standard Result type for override generation operations
pub type Result<T> = std::result::Result<T, RtlcssError>;
