//! Operation contract tests
//!
//! Drives the binary operations end to end through the closed command enum:
//! encode to a frame, materialize, then decode a hand-built response frame
//! into the typed response.

use docwire::error::{Error, ErrorCode};
use docwire::operations::{
    AppendRequest, DocumentId, ExistsRequest, GetRequest, KeyValueCommand,
    KeyValueResponse, RemoveRequest, ReplaceRequest,
};
use docwire::protocol::{
    ObserveStatus, ResponseFrame, HEADER_SIZE, MAGIC_ALT_RESPONSE, MAGIC_RESPONSE,
};
use docwire::{DurabilityLevel, KeyValueContext};

/// Build raw response bytes from segments
fn response_bytes(
    opcode: u8,
    status: u16,
    cas: u64,
    framing_extras: &[u8],
    extras: &[u8],
    value: &[u8],
) -> Vec<u8> {
    let body_len = framing_extras.len() + extras.len() + value.len();
    let mut bytes = Vec::with_capacity(HEADER_SIZE + body_len);
    if framing_extras.is_empty() {
        bytes.push(MAGIC_RESPONSE);
        bytes.push(opcode);
        bytes.extend_from_slice(&[0x00, 0x00]); // key length
    } else {
        bytes.push(MAGIC_ALT_RESPONSE);
        bytes.push(opcode);
        bytes.push(framing_extras.len() as u8);
        bytes.push(0x00);
    }
    bytes.push(extras.len() as u8);
    bytes.push(0x00);
    bytes.extend_from_slice(&status.to_be_bytes());
    bytes.extend_from_slice(&(body_len as u32).to_be_bytes());
    bytes.extend_from_slice(&0x0bad_0000u32.to_be_bytes());
    bytes.extend_from_slice(&cas.to_be_bytes());
    bytes.extend_from_slice(framing_extras);
    bytes.extend_from_slice(extras);
    bytes.extend_from_slice(value);
    bytes
}

fn parse(bytes: &[u8]) -> ResponseFrame {
    ResponseFrame::parse(bytes).unwrap()
}

// =============================================================================
// Key Encoding Tests
// =============================================================================

#[test]
fn test_collection_prefix_on_key() {
    let command = KeyValueCommand::Get(GetRequest {
        id: DocumentId::new(0x20, "airline_10"),
        partition_id: 5,
        opaque: 1,
    });
    let frame = command.encode(&KeyValueContext::default()).unwrap();
    assert_eq!(frame.key[0], 0x20);
    assert_eq!(&frame.key[1..], b"airline_10");
}

#[test]
fn test_raw_key_without_collections() {
    let ctx = KeyValueContext {
        collections_enabled: false,
        ..KeyValueContext::default()
    };
    let command = KeyValueCommand::Get(GetRequest {
        id: DocumentId::new(0x20, "airline_10"),
        partition_id: 5,
        opaque: 1,
    });
    let frame = command.encode(&ctx).unwrap();
    assert_eq!(frame.key, b"airline_10");
}

#[test]
fn test_empty_key_is_rejected() {
    let command = KeyValueCommand::Get(GetRequest::default());
    let result = command.encode(&KeyValueContext::default());
    assert!(matches!(result, Err(Error::InvalidKey(_))));
}

#[test]
fn test_oversized_key_is_rejected() {
    let command = KeyValueCommand::Get(GetRequest {
        id: DocumentId::new(0, vec![b'k'; 251]),
        ..GetRequest::default()
    });
    let result = command.encode(&KeyValueContext::default());
    assert!(matches!(result, Err(Error::InvalidKey(_))));
}

// =============================================================================
// Get Tests
// =============================================================================

#[test]
fn test_get_round_trip() {
    let command = KeyValueCommand::Get(GetRequest {
        id: DocumentId::new(0, "doc"),
        partition_id: 11,
        opaque: 99,
    });
    let encoded = command.encode(&KeyValueContext::default()).unwrap();
    assert_eq!(encoded.partition_id, 11);
    assert_eq!(encoded.opaque, 99);
    assert!(encoded.extras.is_empty());
    assert!(encoded.value.is_empty());

    let reply = response_bytes(
        0x00,
        0x0000,
        0x0102_0304,
        &[],
        &0x2000_0000u32.to_be_bytes(),
        b"{\"kind\":\"doc\"}",
    );
    let response = match command.decode(&parse(&reply)).unwrap() {
        KeyValueResponse::Get(r) => r,
        other => panic!("expected get response, got {other:?}"),
    };
    assert!(response.ctx.is_success());
    assert_eq!(response.cas, 0x0102_0304);
    assert_eq!(response.flags, 0x2000_0000);
    assert_eq!(response.value, b"{\"kind\":\"doc\"}");
}

#[test]
fn test_get_not_found_maps_to_domain_error() {
    let command = KeyValueCommand::Get(GetRequest {
        id: DocumentId::new(0, "doc"),
        ..GetRequest::default()
    });
    let reply = response_bytes(0x00, 0x0001, 0, &[], &[], &[]);
    let response = match command.decode(&parse(&reply)).unwrap() {
        KeyValueResponse::Get(r) => r,
        other => panic!("expected get response, got {other:?}"),
    };
    assert_eq!(response.ctx.ec, Some(ErrorCode::DocumentNotFound));
    assert!(response.value.is_empty());
}

#[test]
fn test_get_bad_extras_is_parsing_failure() {
    let command = KeyValueCommand::Get(GetRequest {
        id: DocumentId::new(0, "doc"),
        ..GetRequest::default()
    });
    // success status but a 2-byte extras block
    let reply = response_bytes(0x00, 0x0000, 1, &[], &[0x00, 0x01], b"x");
    let response = match command.decode(&parse(&reply)).unwrap() {
        KeyValueResponse::Get(r) => r,
        other => panic!("expected get response, got {other:?}"),
    };
    assert_eq!(response.ctx.ec, Some(ErrorCode::ParsingFailure));
}

// =============================================================================
// Replace Tests
// =============================================================================

#[test]
fn test_replace_encodes_extras_and_frame_infos() {
    let command = KeyValueCommand::Replace(ReplaceRequest {
        id: DocumentId::new(0, "doc"),
        partition_id: 2,
        opaque: 3,
        value: b"body".to_vec(),
        flags: 0x0a0b_0c0d,
        expiry: 300,
        cas: 77,
        durability_level: DurabilityLevel::Majority,
        durability_timeout: Some(2500),
        preserve_expiry: true,
    });
    let frame = command.encode(&KeyValueContext::default()).unwrap();

    assert_eq!(frame.cas, 77);
    assert_eq!(&frame.extras[0..4], &[0x0a, 0x0b, 0x0c, 0x0d]);
    assert_eq!(&frame.extras[4..8], &300u32.to_be_bytes());
    // durability record first, then preserve-expiry
    assert_eq!(
        frame.framing_extras,
        vec![0x01, 3, 0x01, 0x09, 0xc4, 0x05, 0]
    );
    assert_eq!(frame.value, b"body");
}

#[test]
fn test_replace_without_durability_has_no_framing_extras() {
    let command = KeyValueCommand::Replace(ReplaceRequest {
        id: DocumentId::new(0, "doc"),
        value: b"body".to_vec(),
        ..ReplaceRequest::default()
    });
    let frame = command.encode(&KeyValueContext::default()).unwrap();
    assert!(frame.framing_extras.is_empty());
}

#[test]
fn test_replace_durability_requires_negotiation() {
    let ctx = KeyValueContext {
        durability_enabled: false,
        ..KeyValueContext::default()
    };
    let command = KeyValueCommand::Replace(ReplaceRequest {
        id: DocumentId::new(0, "doc"),
        durability_level: DurabilityLevel::PersistToMajority,
        ..ReplaceRequest::default()
    });
    let result = command.encode(&ctx);
    assert!(matches!(result, Err(Error::DurabilityNotSupported)));
}

#[test]
fn test_replace_extracts_mutation_token() {
    let command = KeyValueCommand::Replace(ReplaceRequest {
        id: DocumentId::new(0, "doc"),
        partition_id: 13,
        value: b"body".to_vec(),
        ..ReplaceRequest::default()
    });
    let mut extras = Vec::new();
    extras.extend_from_slice(&0xaaaa_bbbb_cccc_ddddu64.to_be_bytes());
    extras.extend_from_slice(&42u64.to_be_bytes());
    let reply = response_bytes(0x03, 0x0000, 9000, &[], &extras, &[]);

    let response = match command.decode(&parse(&reply)).unwrap() {
        KeyValueResponse::Replace(r) => r,
        other => panic!("expected replace response, got {other:?}"),
    };
    assert_eq!(response.cas, 9000);
    let token = response.token.unwrap();
    assert_eq!(token.partition_id, 13); // from the request, not the wire
    assert_eq!(token.partition_uuid, 0xaaaa_bbbb_cccc_dddd);
    assert_eq!(token.sequence_number, 42);
}

#[test]
fn test_replace_other_extras_size_means_no_token() {
    let command = KeyValueCommand::Replace(ReplaceRequest {
        id: DocumentId::new(0, "doc"),
        value: b"body".to_vec(),
        ..ReplaceRequest::default()
    });
    let reply = response_bytes(0x03, 0x0000, 9000, &[], &[0u8; 8], &[]);
    let response = match command.decode(&parse(&reply)).unwrap() {
        KeyValueResponse::Replace(r) => r,
        other => panic!("expected replace response, got {other:?}"),
    };
    // still a success, just without a token
    assert!(response.ctx.is_success());
    assert_eq!(response.cas, 9000);
    assert!(response.token.is_none());
}

// =============================================================================
// Append / Remove Tests
// =============================================================================

#[test]
fn test_append_has_no_extras() {
    let command = KeyValueCommand::Append(AppendRequest {
        id: DocumentId::new(0, "doc"),
        value: b"-tail".to_vec(),
        ..AppendRequest::default()
    });
    let frame = command.encode(&KeyValueContext::default()).unwrap();
    assert!(frame.extras.is_empty());
    assert_eq!(frame.value, b"-tail");
}

#[test]
fn test_remove_carries_cas_guard_and_token() {
    let command = KeyValueCommand::Remove(RemoveRequest {
        id: DocumentId::new(0, "doc"),
        partition_id: 4,
        cas: 555,
        ..RemoveRequest::default()
    });
    let frame = command.encode(&KeyValueContext::default()).unwrap();
    assert_eq!(frame.cas, 555);
    assert!(frame.value.is_empty());

    let mut extras = Vec::new();
    extras.extend_from_slice(&1u64.to_be_bytes());
    extras.extend_from_slice(&2u64.to_be_bytes());
    let reply = response_bytes(0x04, 0x0000, 556, &[], &extras, &[]);
    let response = match command.decode(&parse(&reply)).unwrap() {
        KeyValueResponse::Remove(r) => r,
        other => panic!("expected remove response, got {other:?}"),
    };
    assert_eq!(response.token.unwrap().partition_id, 4);
}

#[test]
fn test_cas_mismatch_maps_to_document_exists() {
    let command = KeyValueCommand::Remove(RemoveRequest {
        id: DocumentId::new(0, "doc"),
        cas: 1,
        ..RemoveRequest::default()
    });
    let reply = response_bytes(0x04, 0x0002, 0, &[], &[], &[]);
    let response = match command.decode(&parse(&reply)).unwrap() {
        KeyValueResponse::Remove(r) => r,
        other => panic!("expected remove response, got {other:?}"),
    };
    assert_eq!(response.ctx.ec, Some(ErrorCode::DocumentExists));
}

// =============================================================================
// Exists Tests
// =============================================================================

#[test]
fn test_exists_key_travels_in_value_segment() {
    let ctx = KeyValueContext {
        collections_enabled: false,
        ..KeyValueContext::default()
    };
    let command = KeyValueCommand::Exists(ExistsRequest {
        id: DocumentId::new(0, "doc"),
        partition_id: 3,
        opaque: 8,
    });
    let frame = command.encode(&ctx).unwrap();
    assert!(frame.key.is_empty());
    assert!(frame.extras.is_empty());
    assert!(frame.framing_extras.is_empty());
    assert_eq!(&frame.value[0..2], &[0x00, 0x03]);
    assert_eq!(&frame.value[2..4], &[0x00, 0x03]);
    assert_eq!(&frame.value[4..], b"doc");
}

#[test]
fn test_exists_decodes_persisted_result() {
    let command = KeyValueCommand::Exists(ExistsRequest {
        id: DocumentId::new(0, "doc"),
        partition_id: 3,
        opaque: 8,
    });
    let mut value = vec![0x00, 0x03, 0x00, 0x00, 0x01];
    value.extend_from_slice(&1000u64.to_be_bytes());
    let reply = response_bytes(0x92, 0x0000, 0, &[], &[], &value);

    let response = match command.decode(&parse(&reply)).unwrap() {
        KeyValueResponse::Exists(r) => r,
        other => panic!("expected exists response, got {other:?}"),
    };
    let result = response.result.as_ref().unwrap();
    assert_eq!(result.partition_id, 3);
    assert_eq!(result.status, ObserveStatus::Persisted);
    assert_eq!(result.cas, 1000);
    assert!(response.persisted());
    assert!(!response.not_yet_confirmed());
}

#[test]
fn test_exists_non_success_is_a_polling_signal() {
    let command = KeyValueCommand::Exists(ExistsRequest {
        id: DocumentId::new(0, "doc"),
        partition_id: 3,
        opaque: 8,
    });
    // temporary failure with garbage body content
    let reply = response_bytes(0x92, 0x0086, 0, &[], &[], b"ignored");
    let response = match command.decode(&parse(&reply)).unwrap() {
        KeyValueResponse::Exists(r) => r,
        other => panic!("expected exists response, got {other:?}"),
    };
    assert!(response.result.is_none());
    assert!(response.not_yet_confirmed());
    // not surfaced as an error: replication may simply still be in flight
    assert!(response.ctx.ec.is_none());
}

// =============================================================================
// Pairing Tests
// =============================================================================

#[test]
fn test_mismatched_reply_is_a_contract_violation() {
    let command = KeyValueCommand::Get(GetRequest {
        id: DocumentId::new(0, "doc"),
        ..GetRequest::default()
    });
    // a replace reply routed to a get command
    let reply = response_bytes(0x03, 0x0000, 0, &[], &[], &[]);
    let result = command.decode(&parse(&reply));
    assert!(matches!(result, Err(Error::OpcodeMismatch { .. })));
}
