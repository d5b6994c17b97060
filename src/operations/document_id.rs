//! Document identifiers
//!
//! A document is addressed by its collection and key. The protocol key placed
//! in a frame's key segment is derived from both: collection-aware
//! connections prefix the collection id as unsigned LEB128.

use crate::context::KeyValueContext;
use crate::error::{Error, Result};
use crate::protocol::{encode_leb128, MAX_KEY_SIZE};

/// Identifies one document within the store
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DocumentId {
    /// Collection id assigned during collection manifest resolution.
    /// Zero addresses the default collection.
    pub collection_id: u32,

    /// Raw document key bytes
    pub key: Vec<u8>,
}

impl DocumentId {
    pub fn new(collection_id: u32, key: impl Into<Vec<u8>>) -> Self {
        Self {
            collection_id,
            key: key.into(),
        }
    }

    /// Build the protocol key for the frame's key segment
    ///
    /// Rejects empty keys and keys whose encoded form exceeds
    /// [`MAX_KEY_SIZE`], before any frame bytes are produced.
    pub fn protocol_key(&self, ctx: &KeyValueContext) -> Result<Vec<u8>> {
        if self.key.is_empty() {
            return Err(Error::InvalidKey("empty document key".to_string()));
        }
        let mut encoded = Vec::with_capacity(5 + self.key.len());
        if ctx.collections_enabled {
            encode_leb128(&mut encoded, self.collection_id);
        }
        encoded.extend_from_slice(&self.key);
        if encoded.len() > MAX_KEY_SIZE {
            return Err(Error::InvalidKey(format!(
                "encoded key of {} bytes exceeds maximum of {}",
                encoded.len(),
                MAX_KEY_SIZE
            )));
        }
        Ok(encoded)
    }
}
