//! # docwire
//!
//! Request/response codec layer of a client for a distributed
//! document-oriented data store:
//! - Byte-exact serialization and parsing of the binary key-value frame
//!   format (header, framing extras, extras, key, value)
//! - Tag-length-value framing-extras records for durability requirements and
//!   expiry preservation
//! - Mutation-token and existence/observe codecs used by durability
//!   confirmation
//! - A transport-agnostic operation contract shared by binary and
//!   HTTP-shaped (service) operations
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                  External Dispatcher                        │
//! │          (retry / timeout / routing, not in crate)          │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │ Operation contract (encode / make_response)
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                     Operations                              │
//! │     get · replace · append · remove · exists · service      │
//! └──────────┬──────────────────────────────┬───────────────────┘
//!            │                              │
//!            ▼                              ▼
//!   ┌─────────────────┐            ┌─────────────────┐
//!   │    Protocol     │            │     Service     │
//!   │ (binary frames) │            │ (HTTP messages) │
//!   └─────────────────┘            └─────────────────┘
//! ```
//!
//! Every codec step is pure and synchronous: buffers in, buffers out. The
//! crate performs no I/O, holds no locks, and owns no in-flight state.

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod context;

pub mod protocol;
pub mod service;
pub mod operations;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{Error, ErrorCode, Result};
pub use context::{KeyValueContext, ServiceContext};
pub use operations::{KeyValueCommand, KeyValueResponse, Operation};
pub use protocol::{DurabilityLevel, MutationToken, Opcode, Status};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of docwire
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
