//! Transport contexts
//!
//! Carries the per-connection facts an encode step needs: negotiated protocol
//! features for the binary transport, endpoint defaults for the service
//! transport. Contexts are plain data; the codec never mutates them.

/// Context for encoding binary key-value operations
///
/// Mirrors the feature set negotiated during connection bootstrap. Only the
/// features that change the byte layout of a request live here.
#[derive(Debug, Clone, Copy)]
pub struct KeyValueContext {
    /// Whether the connection negotiated collection-aware key encoding.
    ///
    /// When set, document keys are prefixed with their collection id as
    /// unsigned LEB128 before being placed in the key segment.
    pub collections_enabled: bool,

    /// Whether the connection negotiated synchronous durability.
    ///
    /// Encoding a durability requirement on a connection without this feature
    /// is an encode-time error, caught before any bytes are produced.
    pub durability_enabled: bool,
}

impl Default for KeyValueContext {
    fn default() -> Self {
        Self {
            collections_enabled: true,
            durability_enabled: true,
        }
    }
}

/// Context for encoding HTTP-shaped service operations
#[derive(Debug, Clone, Default)]
pub struct ServiceContext {
    /// Path prefix prepended to every encoded request path (e.g. when the
    /// service sits behind a gateway). Empty by default.
    pub path_prefix: String,
}
