//! Benchmarks for docwire encode/decode hot paths

use criterion::{criterion_group, criterion_main, Criterion};

use docwire::operations::{DocumentId, GetRequest, KeyValueCommand, ReplaceRequest};
use docwire::protocol::ResponseFrame;
use docwire::{DurabilityLevel, KeyValueContext};

fn encode_benchmarks(c: &mut Criterion) {
    let ctx = KeyValueContext::default();

    let get = KeyValueCommand::Get(GetRequest {
        id: DocumentId::new(0x20, "airline_10"),
        partition_id: 512,
        opaque: 1,
    });
    c.bench_function("encode_get", |b| {
        b.iter(|| get.encode(&ctx).unwrap().to_bytes())
    });

    let replace = KeyValueCommand::Replace(ReplaceRequest {
        id: DocumentId::new(0x20, "airline_10"),
        partition_id: 512,
        opaque: 2,
        value: vec![0xab; 1024],
        flags: 0x2000_0000,
        durability_level: DurabilityLevel::Majority,
        durability_timeout: Some(2500),
        ..ReplaceRequest::default()
    });
    c.bench_function("encode_replace_durable_1k", |b| {
        b.iter(|| replace.encode(&ctx).unwrap().to_bytes())
    });
}

fn decode_benchmarks(c: &mut Criterion) {
    // success get response with 4-byte flags extras and a 1 KB value
    let mut reply = vec![
        0x81, 0x00, 0x00, 0x00, 0x04, 0x00, 0x00, 0x00, 0x00, 0x00, 0x04, 0x04, 0x00,
        0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x2a,
    ];
    reply.extend_from_slice(&[0x20, 0x00, 0x00, 0x00]);
    reply.extend_from_slice(&[0xab; 1024]);

    c.bench_function("parse_get_response_1k", |b| {
        b.iter(|| ResponseFrame::parse(&reply).unwrap())
    });
}

criterion_group!(benches, encode_benchmarks, decode_benchmarks);
criterion_main!(benches);
