//! Existence/observe operation
//!
//! Confirms that a mutation has reached persistence on one specific
//! partition/node pair by issuing a lightweight existence check instead of
//! re-reading the document. An external durability-await routine calls this
//! operation repeatedly until every required partition reports the mutation
//! as persisted or its deadline passes; this module neither loops nor sleeps.

use crate::context::KeyValueContext;
use crate::error::Result;
use crate::operations::contract::{KeyValueErrorContext, Operation};
use crate::operations::DocumentId;
use crate::protocol::{
    decode_observe_body, encode_observe_body, ObserveResult, ObserveStatus, Opcode,
    RequestFrame, ResponseFrame,
};

#[derive(Debug, Clone, Default)]
pub struct ExistsRequest {
    pub id: DocumentId,
    pub partition_id: u16,
    pub opaque: u32,
}

impl ExistsRequest {
    pub const OPCODE: Opcode = Opcode::Observe;
}

/// Parsed existence-check response
#[derive(Debug, Clone, Default)]
pub struct ExistsResponse {
    pub ctx: KeyValueErrorContext,
    /// Populated only for a success status with a well-formed observe body
    pub result: Option<ObserveResult>,
}

impl ExistsResponse {
    /// Whether the key is persisted on the answering node
    pub fn persisted(&self) -> bool {
        matches!(
            self.result.as_ref().map(|r| r.status),
            Some(ObserveStatus::Persisted)
        )
    }

    /// Polling signal for the durability-await routine
    ///
    /// True until a success response reports the key as persisted. Covers
    /// both non-success statuses and intermediate observe states.
    pub fn not_yet_confirmed(&self) -> bool {
        !self.persisted()
    }
}

impl Operation for ExistsRequest {
    type Context = KeyValueContext;
    type Encoded = RequestFrame;
    type Received = ResponseFrame;
    type ErrorContext = KeyValueErrorContext;
    type Response = ExistsResponse;

    fn encode(&self, encoded: &mut RequestFrame, ctx: &KeyValueContext) -> Result<()> {
        encoded.opcode = Self::OPCODE.to_u8();
        encoded.partition_id = self.partition_id;
        encoded.opaque = self.opaque;
        // protocol quirk: the key travels in the value segment, the key
        // segment stays empty
        encoded.value = encode_observe_body(self.partition_id, &self.id.protocol_key(ctx)?);
        Ok(())
    }

    fn make_response(&self, ctx: KeyValueErrorContext, received: &ResponseFrame) -> ExistsResponse {
        debug_assert_eq!(received.opcode, Self::OPCODE.to_u8());
        let mut response = ExistsResponse {
            ctx,
            ..ExistsResponse::default()
        };
        if response.ctx.is_success() {
            response.result = decode_observe_body(received.value());
        } else {
            // a non-success status here is an expected intermediate state
            // while replication is in flight, not an error
            response.ctx.ec = None;
        }
        response
    }
}
