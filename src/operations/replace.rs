//! Replace operation
//!
//! Replaces an existing document's content, optionally CAS-guarded, with
//! optional durability requirements and expiry preservation.

use crate::context::KeyValueContext;
use crate::error::{Error, Result};
use crate::operations::contract::{KeyValueErrorContext, Operation};
use crate::operations::DocumentId;
use crate::protocol::{
    add_durability_frame_info, add_preserve_expiry_frame_info, parse_token,
    DurabilityLevel, MutationToken, Opcode, RequestFrame, ResponseFrame,
};

#[derive(Debug, Clone, Default)]
pub struct ReplaceRequest {
    pub id: DocumentId,
    pub partition_id: u16,
    pub opaque: u32,
    pub value: Vec<u8>,
    pub flags: u32,
    /// Expiry in seconds; zero means no expiry
    pub expiry: u32,
    /// CAS guard; zero disables the check
    pub cas: u64,
    pub durability_level: DurabilityLevel,
    pub durability_timeout: Option<u16>,
    pub preserve_expiry: bool,
}

impl ReplaceRequest {
    pub const OPCODE: Opcode = Opcode::Replace;
}

#[derive(Debug, Clone, Default)]
pub struct ReplaceResponse {
    pub ctx: KeyValueErrorContext,
    pub cas: u64,
    /// Present only when the response carried the 16-byte token extras
    pub token: Option<MutationToken>,
}

impl Operation for ReplaceRequest {
    type Context = KeyValueContext;
    type Encoded = RequestFrame;
    type Received = ResponseFrame;
    type ErrorContext = KeyValueErrorContext;
    type Response = ReplaceResponse;

    fn encode(&self, encoded: &mut RequestFrame, ctx: &KeyValueContext) -> Result<()> {
        if self.durability_level != DurabilityLevel::None && !ctx.durability_enabled {
            return Err(Error::DurabilityNotSupported);
        }
        encoded.opcode = Self::OPCODE.to_u8();
        encoded.partition_id = self.partition_id;
        encoded.opaque = self.opaque;
        encoded.cas = self.cas;
        encoded.key = self.id.protocol_key(ctx)?;
        encoded.value = self.value.clone();

        // durability always precedes preserve-expiry in the framing extras
        add_durability_frame_info(
            &mut encoded.framing_extras,
            self.durability_level,
            self.durability_timeout,
        );
        if self.preserve_expiry {
            add_preserve_expiry_frame_info(&mut encoded.framing_extras);
        }

        encoded.extras = Vec::with_capacity(8);
        encoded.extras.extend_from_slice(&self.flags.to_be_bytes());
        encoded.extras.extend_from_slice(&self.expiry.to_be_bytes());
        Ok(())
    }

    fn make_response(
        &self,
        ctx: KeyValueErrorContext,
        received: &ResponseFrame,
    ) -> ReplaceResponse {
        debug_assert_eq!(received.opcode, Self::OPCODE.to_u8());
        let mut response = ReplaceResponse {
            ctx,
            ..ReplaceResponse::default()
        };
        if response.ctx.is_success() {
            response.cas = received.cas;
            // any extras size other than the token layout means no token,
            // which is not an error
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
