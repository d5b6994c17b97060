//! Operation contract
//!
//! The uniform two-step interface every request/response pair implements,
//! parameterized by transport. The external dispatcher drives operations only
//! through this surface: it calls `encode` to populate an outgoing message
//! builder, hands the materialized bytes to a transport, and calls
//! `make_response` on the received counterpart. `make_response` never fails by
//! signal; errors travel inside the response's error context so the pipeline
//! can continue uniformly on success and failure alike.

use crate::error::{ErrorCode, Result};
use crate::protocol::{ResponseFrame, Status};
use crate::service::ServiceResponse;

/// Uniform encode/decode contract for one operation type
///
/// State machine: Idle, then Encoded (request materialized), then Sent (owned
/// by the transport, outside this crate), then Decoded (response parsed), then
/// Completed (typed response handed to the caller). This crate owns the first
/// and last transitions only.
pub trait Operation {
    /// Transport context consulted while encoding
    type Context;
    /// Outgoing message builder (frame or service request)
    type Encoded;
    /// Fully received transport message
    type Received;
    /// Correlation/error context threaded into the response
    type ErrorContext;
    /// Typed response produced by `make_response`
    type Response;

    /// Populate the outgoing message builder completely
    ///
    /// Side effects are confined to `encoded`; no I/O happens here.
    fn encode(&self, encoded: &mut Self::Encoded, ctx: &Self::Context) -> Result<()>;

    /// Produce the typed response from the received message
    ///
    /// Reads only its arguments and is expected to be called exactly once per
    /// response. Always returns a value; the embedded error context is the
    /// single source of truth for callers.
    fn make_response(&self, ctx: Self::ErrorContext, received: &Self::Received) -> Self::Response;
}

/// Correlation and error context of a binary key-value response
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyValueErrorContext {
    /// Domain error classification; `None` means success
    pub ec: Option<ErrorCode>,

    /// Correlation id echoed by the server
    pub opaque: u32,

    /// Raw wire status, kept for diagnostics even when `ec` is set
    pub status: Option<Status>,
}

impl KeyValueErrorContext {
    /// Build a context from a decoded frame, classifying its status
    pub fn for_frame(frame: &ResponseFrame) -> Self {
        Self {
            ec: frame.status.as_error_code(),
            opaque: frame.opaque,
            status: Some(frame.status),
        }
    }

    pub fn is_success(&self) -> bool {
        self.ec.is_none()
    }
}

/// Correlation and error context of a service (HTTP-shaped) response
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServiceErrorContext {
    /// Domain error classification; `None` means success
    pub ec: Option<ErrorCode>,

    /// HTTP status code of the exchange
    pub status_code: Option<u16>,

    /// Request path, for diagnostics
    pub path: String,
}

impl ServiceErrorContext {
    /// Build a context from a received service response
    pub fn for_response(path: impl Into<String>, received: &ServiceResponse) -> Self {
        Self {
            ec: None,
            status_code: Some(received.status_code),
            path: path.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.ec.is_none()
    }
}
