//! Error types for docwire
//!
//! Two layers of errors live here:
//! - [`Error`] is the crate-level error returned by encode steps and by the
//!   frame parser. It covers contract violations and malformed transport
//!   frames, conditions the dispatcher must see directly.
//! - [`ErrorCode`] is the domain error taxonomy carried *inside* response
//!   objects. Decoding a server failure is not a codec failure: `make_response`
//!   always returns a response value and callers inspect its embedded code.

use thiserror::Error;

use crate::protocol::Opcode;

/// Result type alias using the crate error
pub type Result<T> = std::result::Result<T, Error>;

/// Crate-level error for encode and frame-transport failures
#[derive(Debug, Error)]
pub enum Error {
    // -------------------------------------------------------------------------
    // Contract Violations (programmer errors in the surrounding dispatch)
    // -------------------------------------------------------------------------
    /// A response frame was decoded against the wrong operation type.
    ///
    /// This indicates request/response pairing failure upstream, not a data
    /// condition, and is kept distinct from [`Error::MalformedFrame`].
    #[error("opcode mismatch: response bound to {expected:?} carries 0x{actual:02x}")]
    OpcodeMismatch { expected: Opcode, actual: u8 },

    // -------------------------------------------------------------------------
    // Wire Errors
    // -------------------------------------------------------------------------
    #[error("malformed frame: {0}")]
    MalformedFrame(String),

    // -------------------------------------------------------------------------
    // Encode Errors
    // -------------------------------------------------------------------------
    #[error("invalid key: {0}")]
    InvalidKey(String),

    #[error("durability requested but not negotiated on this connection")]
    DurabilityNotSupported,
}

/// Domain error classification embedded in responses
///
/// Mapped from wire status codes (binary transport) or HTTP status codes
/// (service transport). Unanticipated wire statuses map to
/// [`ErrorCode::UnknownServerFailure`] so protocol evolution never breaks
/// decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ErrorCode {
    #[error("document not found")]
    DocumentNotFound,

    #[error("document already exists or CAS mismatch")]
    DocumentExists,

    #[error("value too large")]
    ValueTooLarge,

    #[error("invalid argument")]
    InvalidArgument,

    #[error("not stored")]
    NotStored,

    #[error("not my partition")]
    NotMyPartition,

    #[error("document locked")]
    DocumentLocked,

    #[error("temporary failure")]
    TemporaryFailure,

    #[error("invalid durability level")]
    DurabilityLevelInvalid,

    #[error("durability requirements impossible for current topology")]
    DurabilityImpossible,

    #[error("durable write already in progress")]
    DurableWriteInProgress,

    #[error("durable write result ambiguous")]
    DurabilityAmbiguous,

    #[error("group not found")]
    GroupNotFound,

    #[error("index not found")]
    IndexNotFound,

    #[error("failed to parse response body")]
    ParsingFailure,

    #[error("internal server failure")]
    InternalServerFailure,

    #[error("unknown server failure (status 0x{0:04x})")]
    UnknownServerFailure(u16),
}
