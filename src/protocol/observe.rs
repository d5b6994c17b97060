//! Existence/observe wire encoding
//!
//! A lightweight per-partition query returning a key's persistence state
//! without transferring its value. Protocol quirk: the request key travels in
//! the *value* segment, with the key segment left empty.
//!
//! This module only encodes one request body and decodes one response body;
//! the polling cadence, timeout, and per-partition fan-out belong to the
//! external durability-await routine.

use crate::protocol::MutationToken;

/// Persistence state of a key as reported by an observe response
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ObserveStatus {
    /// Present in memory but not yet persisted
    Found = 0x00,
    Persisted = 0x01,
    NotFound = 0x80,
    /// Deleted but the deletion is not yet persisted everywhere
    LogicallyDeleted = 0x81,
}

impl ObserveStatus {
    pub fn from_wire(byte: u8) -> Option<Self> {
        match byte {
            0x00 => Some(ObserveStatus::Found),
            0x01 => Some(ObserveStatus::Persisted),
            0x80 => Some(ObserveStatus::NotFound),
            0x81 => Some(ObserveStatus::LogicallyDeleted),
            _ => None,
        }
    }
}

/// Decoded success body of an observe response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObserveResult {
    pub partition_id: u16,
    pub key: Vec<u8>,
    pub status: ObserveStatus,
    pub cas: u64,
}

impl ObserveResult {
    /// Whether this result confirms the given mutation as persisted
    ///
    /// Confirmation requires the CAS reported for the key to match the state
    /// the token's write produced and the key to be persisted on this node.
    pub fn confirms(&self, token: &MutationToken, expected_cas: u64) -> bool {
        self.partition_id == token.partition_id
            && self.status == ObserveStatus::Persisted
            && self.cas == expected_cas
    }
}

/// Encode the observe request body: `[partition][key length][key]`
pub fn encode_observe_body(partition_id: u16, key: &[u8]) -> Vec<u8> {
    let mut body = Vec::with_capacity(4 + key.len());
    body.extend_from_slice(&partition_id.to_be_bytes());
    body.extend_from_slice(&(key.len() as u16).to_be_bytes());
    body.extend_from_slice(key);
    body
}

/// Decode the observe success body
///
/// Layout: 2 bytes partition id, 2 bytes key length, key bytes, 1 byte
/// status, 8 bytes CAS. Returns `None` on any size or status-byte mismatch,
/// and the caller reports "not yet confirmed" rather than an error.
pub fn decode_observe_body(body: &[u8]) -> Option<ObserveResult> {
    if body.len() < 4 {
        return None;
    }
    let partition_id = u16::from_be_bytes([body[0], body[1]]);
    let key_len = u16::from_be_bytes([body[2], body[3]]) as usize;
    if body.len() != 4 + key_len + 1 + 8 {
        return None;
    }
    let key = body[4..4 + key_len].to_vec();
    let status = ObserveStatus::from_wire(body[4 + key_len])?;
    let cas = u64::from_be_bytes(body[4 + key_len + 1..].try_into().ok()?);
    Some(ObserveResult {
        partition_id,
        key,
        status,
        cas,
    })
}
