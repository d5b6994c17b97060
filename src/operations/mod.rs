//! Operations Module
//!
//! One submodule per operation type, each a request/response pair bound to
//! one opcode (binary transport) or one endpoint (service transport), all
//! satisfying the same [`Operation`] contract. [`KeyValueCommand`] closes the
//! binary set into a tagged enum so the external dispatcher's control flow
//! stays exhaustive.

mod append;
mod contract;
mod document_id;
mod exists;
mod get;
mod group_get;
mod query_index_drop;
mod remove;
mod replace;

pub use append::{AppendRequest, AppendResponse};
pub use contract::{KeyValueErrorContext, Operation, ServiceErrorContext};
pub use document_id::DocumentId;
pub use exists::{ExistsRequest, ExistsResponse};
pub use get::{GetRequest, GetResponse};
pub use group_get::{Group, GroupGetRequest, GroupGetResponse};
pub use query_index_drop::{
    QueryIndexDropRequest, QueryIndexDropResponse, QueryProblem,
};
pub use remove::{RemoveRequest, RemoveResponse};
pub use replace::{ReplaceRequest, ReplaceResponse};

use crate::context::KeyValueContext;
use crate::error::Result;
use crate::protocol::{Opcode, RequestFrame, ResponseFrame};

/// Closed set of binary key-value operations
///
/// One variant per operation type. The dispatcher encodes through
/// [`KeyValueCommand::encode`] and pairs replies through
/// [`KeyValueCommand::decode`]; the enum keeps both paths exhaustively
/// matched at compile time.
#[derive(Debug, Clone)]
pub enum KeyValueCommand {
    Get(GetRequest),
    Replace(ReplaceRequest),
    Append(AppendRequest),
    Remove(RemoveRequest),
    Exists(ExistsRequest),
}

/// Typed responses of [`KeyValueCommand`], variant for variant
#[derive(Debug, Clone)]
pub enum KeyValueResponse {
    Get(GetResponse),
    Replace(ReplaceResponse),
    Append(AppendResponse),
    Remove(RemoveResponse),
    Exists(ExistsResponse),
}

impl KeyValueCommand {
    /// Opcode this command is bound to
    pub fn opcode(&self) -> Opcode {
        match self {
            KeyValueCommand::Get(_) => GetRequest::OPCODE,
            KeyValueCommand::Replace(_) => ReplaceRequest::OPCODE,
            KeyValueCommand::Append(_) => AppendRequest::OPCODE,
            KeyValueCommand::Remove(_) => RemoveRequest::OPCODE,
            KeyValueCommand::Exists(_) => ExistsRequest::OPCODE,
        }
    }

    /// Encode the command into a request frame ready for materialization
    pub fn encode(&self, ctx: &KeyValueContext) -> Result<RequestFrame> {
        let mut frame = RequestFrame::new(self.opcode());
        match self {
            KeyValueCommand::Get(op) => op.encode(&mut frame, ctx)?,
            KeyValueCommand::Replace(op) => op.encode(&mut frame, ctx)?,
            KeyValueCommand::Append(op) => op.encode(&mut frame, ctx)?,
            KeyValueCommand::Remove(op) => op.encode(&mut frame, ctx)?,
            KeyValueCommand::Exists(op) => op.encode(&mut frame, ctx)?,
        }
        Ok(frame)
    }

    /// Decode a paired response frame into the typed response
    ///
    /// Fails only on an opcode mismatch, which marks a pairing bug in the
    /// surrounding dispatch, never a data condition. Server failures come
    /// back inside the response's error context.
    pub fn decode(&self, frame: &ResponseFrame) -> Result<KeyValueResponse> {
        frame.expect_opcode(self.opcode())?;
        let ctx = KeyValueErrorContext::for_frame(frame);
        Ok(match self {
            KeyValueCommand::Get(op) => KeyValueResponse::Get(op.make_response(ctx, frame)),
            KeyValueCommand::Replace(op) => {
                KeyValueResponse::Replace(op.make_response(ctx, frame))
            }
            KeyValueCommand::Append(op) => {
                KeyValueResponse::Append(op.make_response(ctx, frame))
            }
            KeyValueCommand::Remove(op) => {
                KeyValueResponse::Remove(op.make_response(ctx, frame))
            }
            KeyValueCommand::Exists(op) => {
                KeyValueResponse::Exists(op.make_response(ctx, frame))
            }
        })
    }
}
