//! Service messages
//!
//! Transport-level request/response shapes for the HTTP-shaped management and
//! query operations. The crate only fills these in and reads them back; an
//! external HTTP client owns the actual exchange.

use std::collections::HashMap;

/// An outgoing service request under construction
#[derive(Debug, Clone, Default)]
pub struct ServiceRequest {
    pub method: String,
    pub path: String,
    pub headers: HashMap<String, String>,
    pub body: Option<Vec<u8>>,
}

/// A fully received service response
#[derive(Debug, Clone)]
pub struct ServiceResponse {
    pub status_code: u16,
    pub body: Vec<u8>,
}
