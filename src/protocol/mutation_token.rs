//! Mutation token codec
//!
//! Successful writes return a fixed 16-byte extras block identifying the
//! write's position in the partition's replication log. The partition id is
//! not on the wire; the caller copies it from the request.

/// Expected extras size of a token-bearing write response
pub const TOKEN_EXTRAS_SIZE: usize = 16;

/// Position of a write in a partition's replication log
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MutationToken {
    /// Assigned by the client from the request, not parsed from the wire
    pub partition_id: u16,
    pub partition_uuid: u64,
    pub sequence_number: u64,
}

/// Extract (partition UUID, sequence number) from response extras
///
/// Only an extras slice of exactly [`TOKEN_EXTRAS_SIZE`] bytes carries a
/// token; any other size means the server answered with a different response
/// shape and yields `None`. The caller treats that as "no token available",
/// not as an error.
pub fn parse_token(extras: &[u8]) -> Option<(u64, u64)> {
    if extras.len() != TOKEN_EXTRAS_SIZE {
        return None;
    }
    let uuid = u64::from_be_bytes(extras[0..8].try_into().ok()?);
    let seqno = u64::from_be_bytes(extras[8..16].try_into().ok()?);
    Some((uuid, seqno))
}
