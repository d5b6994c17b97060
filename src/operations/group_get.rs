//! Group fetch (service operation)
//!
//! Fetches one access-control group definition from the management endpoint.
//! Included here because it satisfies the same operation contract as the
//! binary codecs, not because it carries comparable wire complexity.

use serde::{Deserialize, Serialize};

use crate::context::ServiceContext;
use crate::error::{ErrorCode, Result};
use crate::operations::contract::{Operation, ServiceErrorContext};
use crate::service::{ServiceRequest, ServiceResponse};

/// An access-control group definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub roles: Vec<String>,
}

#[derive(Debug, Clone, Default)]
pub struct GroupGetRequest {
    pub name: String,
}

#[derive(Debug, Clone, Default)]
pub struct GroupGetResponse {
    pub ctx: ServiceErrorContext,
    pub group: Option<Group>,
}

impl Operation for GroupGetRequest {
    type Context = ServiceContext;
    type Encoded = ServiceRequest;
    type Received = ServiceResponse;
    type ErrorContext = ServiceErrorContext;
    type Response = GroupGetResponse;

    fn encode(&self, encoded: &mut ServiceRequest, ctx: &ServiceContext) -> Result<()> {
        encoded.method = "GET".to_string();
        encoded.path = format!("{}/admin/groups/{}", ctx.path_prefix, self.name);
        encoded.headers.insert(
            "content-type".to_string(),
            "application/x-www-form-urlencoded".to_string(),
        );
        Ok(())
    }

    fn make_response(
        &self,
        ctx: ServiceErrorContext,
        received: &ServiceResponse,
    ) -> GroupGetResponse {
        let mut response = GroupGetResponse {
            ctx,
            ..GroupGetResponse::default()
        };
        if response.ctx.is_success() {
            match received.status_code {
                200 => match serde_json::from_slice::<Group>(&received.body) {
                    Ok(group) => response.group = Some(group),
                    Err(err) => {
                        tracing::debug!(error = %err, "failed to parse group body");
                        response.ctx.ec = Some(ErrorCode::ParsingFailure);
                    }
                },
                404 => response.ctx.ec = Some(ErrorCode::GroupNotFound),
                _ => response.ctx.ec = Some(ErrorCode::InternalServerFailure),
            }
        }
        response
    }
}
