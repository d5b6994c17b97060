//! Remove operation
//!
//! Deletes a document by key, optionally CAS-guarded and durable.

use crate::context::KeyValueContext;
use crate::error::{Error, Result};
use crate::operations::contract::{KeyValueErrorContext, Operation};
use crate::operations::DocumentId;
use crate::protocol::{
    add_durability_frame_info, parse_token, DurabilityLevel, MutationToken, Opcode,
    RequestFrame, ResponseFrame,
};

#[derive(Debug, Clone, Default)]
pub struct RemoveRequest {
    pub id: DocumentId,
    pub partition_id: u16,
    pub opaque: u32,
    /// CAS guard; zero disables the check
    pub cas: u64,
    pub durability_level: DurabilityLevel,
    pub durability_timeout: Option<u16>,
}

impl RemoveRequest {
    pub const OPCODE: Opcode = Opcode::Remove;
}

#[derive(Debug, Clone, Default)]
pub struct RemoveResponse {
    pub ctx: KeyValueErrorContext,
    pub cas: u64,
    pub token: Option<MutationToken>,
}

impl Operation for RemoveRequest {
    type Context = KeyValueContext;
    type Encoded = RequestFrame;
    type Received = ResponseFrame;
    type ErrorContext = KeyValueErrorContext;
    type Response = RemoveResponse;

    fn encode(&self, encoded: &mut RequestFrame, ctx: &KeyValueContext) -> Result<()> {
        if self.durability_level != DurabilityLevel::None && !ctx.durability_enabled {
            return Err(Error::DurabilityNotSupported);
        }
        encoded.opcode = Self::OPCODE.to_u8();
        encoded.partition_id = self.partition_id;
        encoded.opaque = self.opaque;
        encoded.cas = self.cas;
        encoded.key = self.id.protocol_key(ctx)?;
        add_durability_frame_info(
            &mut encoded.framing_extras,
            self.durability_level,
            self.durability_timeout,
        );
        Ok(())
    }

    fn make_response(
        &self,
        ctx: KeyValueErrorContext,
        received: &ResponseFrame,
    ) -> RemoveResponse {
        debug_assert_eq!(received.opcode, Self::OPCODE.to_u8());
        let mut response = RemoveResponse {
            ctx,
            ..RemoveResponse::default()
        };
        if response.ctx.is_success() {
            response.cas = received.cas;
            response.token =
                parse_token(received.extras()).map(|(uuid, seqno)| MutationToken {
                    partition_id: self.partition_id,
                    partition_uuid: uuid,
                    sequence_number: seqno,
                });
        }
        response
    }
}
