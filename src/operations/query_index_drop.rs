//! Query index drop (service operation)
//!
//! Builds a `DROP INDEX` statement and submits it to the query service. The
//! service reports problems inside a 200 body rather than through the HTTP
//! status, so decoding inspects the returned problem list.

use serde::Deserialize;

use crate::context::ServiceContext;
use crate::error::{ErrorCode, Result};
use crate::operations::contract::{Operation, ServiceErrorContext};
use crate::service::{ServiceRequest, ServiceResponse};

/// Problem codes the query service uses for a missing index
const INDEX_NOT_FOUND_CODES: [u64; 2] = [12004, 12016];

/// One problem entry from the query service
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct QueryProblem {
    pub code: u64,
    pub msg: String,
}

#[derive(Debug, Clone, Deserialize)]
struct QueryBody {
    #[serde(default)]
    status: String,
    #[serde(default)]
    errors: Vec<QueryProblem>,
}

#[derive(Debug, Clone, Default)]
pub struct QueryIndexDropRequest {
    pub client_context_id: String,
    pub bucket_name: String,
    pub scope_name: String,
    pub collection_name: String,
    pub index_name: String,
    pub is_primary: bool,
    /// Suppress the missing-index error, for idempotent teardown
    pub ignore_if_does_not_exist: bool,
}

impl QueryIndexDropRequest {
    fn keyspace(&self) -> String {
        format!(
            "`{}`.`{}`.`{}`",
            self.bucket_name, self.scope_name, self.collection_name
        )
    }

    fn statement(&self) -> String {
        if self.is_primary {
            format!("DROP PRIMARY INDEX ON {}", self.keyspace())
        } else {
            format!("DROP INDEX {}.`{}`", self.keyspace(), self.index_name)
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct QueryIndexDropResponse {
    pub ctx: ServiceErrorContext,
    pub status: String,
    pub errors: Vec<QueryProblem>,
}

impl Operation for QueryIndexDropRequest {
    type Context = ServiceContext;
    type Encoded = ServiceRequest;
    type Received = ServiceResponse;
    type ErrorContext = ServiceErrorContext;
    type Response = QueryIndexDropResponse;

    fn encode(&self, encoded: &mut ServiceRequest, ctx: &ServiceContext) -> Result<()> {
        encoded.method = "POST".to_string();
        encoded.path = format!("{}/query/service", ctx.path_prefix);
        encoded
            .headers
            .insert("content-type".to_string(), "application/json".to_string());
        let body = serde_json::json!({
            "statement": self.statement(),
            "client_context_id": self.client_context_id,
        });
        encoded.body = Some(body.to_string().into_bytes());
        Ok(())
    }

    fn make_response(
        &self,
        ctx: ServiceErrorContext,
        received: &ServiceResponse,
    ) -> QueryIndexDropResponse {
        let mut response = QueryIndexDropResponse {
            ctx,
            ..QueryIndexDropResponse::default()
        };
        if response.ctx.is_success() {
            match received.status_code {
                200 => match serde_json::from_slice::<QueryBody>(&received.body) {
                    Ok(body) => {
                        response.status = body.status;
                        response.errors = body.errors;
                        let index_missing = response
                            .errors
                            .iter()
                            .any(|p| INDEX_NOT_FOUND_CODES.contains(&p.code));
                        if index_missing && !self.ignore_if_does_not_exist {
                            response.ctx.ec = Some(ErrorCode::IndexNotFound);
                        }
                    }
                    Err(err) => {
                        tracing::debug!(error = %err, "failed to parse query body");
                        response.ctx.ec = Some(ErrorCode::ParsingFailure);
                    }
                },
                _ => response.ctx.ec = Some(ErrorCode::InternalServerFailure),
            }
        }
        response
    }
}
