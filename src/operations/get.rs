//! Get operation
//!
//! Fetches a document's content and flags by key.

use crate::context::KeyValueContext;
use crate::error::{ErrorCode, Result};
use crate::operations::contract::{KeyValueErrorContext, Operation};
use crate::operations::DocumentId;
use crate::protocol::{Opcode, RequestFrame, ResponseFrame};

#[derive(Debug, Clone, Default)]
pub struct GetRequest {
    pub id: DocumentId,
    pub partition_id: u16,
    pub opaque: u32,
}

impl GetRequest {
    pub const OPCODE: Opcode = Opcode::Get;
}

/// Parsed get response
///
/// `flags` and `value` are populated only on success with a well-formed body.
#[derive(Debug, Clone, Default)]
pub struct GetResponse {
    pub ctx: KeyValueErrorContext,
    pub cas: u64,
    pub flags: u32,
    pub value: Vec<u8>,
}

impl Operation for GetRequest {
    type Context = KeyValueContext;
    type Encoded = RequestFrame;
    type Received = ResponseFrame;
    type ErrorContext = KeyValueErrorContext;
    type Response = GetResponse;

    fn encode(&self, encoded: &mut RequestFrame, ctx: &KeyValueContext) -> Result<()> {
        encoded.opcode = Self::OPCODE.to_u8();
        encoded.partition_id = self.partition_id;
        encoded.opaque = self.opaque;
        encoded.key = self.id.protocol_key(ctx)?;
        Ok(())
    }

    fn make_response(&self, ctx: KeyValueErrorContext, received: &ResponseFrame) -> GetResponse {
        debug_assert_eq!(received.opcode, Self::OPCODE.to_u8());
        let mut response = GetResponse {
            ctx,
            ..GetResponse::default()
        };
        if response.ctx.is_success() {
            // success schema: 4-byte flags extras, value carries the content
            let extras = received.extras();
            if extras.len() == 4 {
                response.flags = u32::from_be_bytes([extras[0], extras[1], extras[2], extras[3]]);
                response.cas = received.cas;
                response.value = received.value().to_vec();
            } else {
                tracing::debug!(
                    extras_size = extras.len(),
                    "get response with unexpected extras size"
                );
                response.ctx.ec = Some(ErrorCode::ParsingFailure);
            }
        }
        response
    }
}
