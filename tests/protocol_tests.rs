//! Tests for the wire protocol codec
//!
//! These tests verify:
//! - Request framing (tokens through a byte stream)
//! - Reply framing for every variant, including errors
//! - Malformed frame rejection

use std::io::Cursor;

use rankdb::protocol::{
    decode_reply, decode_request, encode_error, encode_reply, encode_request, read_reply,
    read_request, write_request, Reply, Request,
};
use rankdb::RankError;

// =============================================================================
// Request Tests
// =============================================================================

#[test]
fn test_request_round_trip_through_stream() {
    let request = Request::from_tokens(&["ZADD", "users", "10", "u1"]).unwrap();

    let mut wire = Vec::new();
    write_request(&mut wire, &request).unwrap();
    let decoded = read_request(&mut Cursor::new(wire)).unwrap();

    assert_eq!(decoded, request);
    assert_eq!(decoded.command(), "ZADD");
    assert_eq!(decoded.args().len(), 3);
}

#[test]
fn test_empty_request_is_rejected() {
    assert!(matches!(
        Request::new(Vec::new()),
        Err(RankError::Protocol(_))
    ));
}

#[test]
fn test_request_with_empty_token() {
    // An empty argument is legal on the wire (e.g. SET key "")
    let request = Request::from_tokens(&["SET", "k", ""]).unwrap();
    let bytes = encode_request(&request).unwrap();

    assert_eq!(decode_request(&bytes).unwrap(), request);
}

#[test]
fn test_oversized_request_is_rejected_on_encode() {
    // One token past the 16 MB cap never reaches the wire
    let huge = "x".repeat(17 * 1024 * 1024);
    let request = Request::new(vec!["SET".to_string(), "k".to_string(), huge]).unwrap();

    assert!(matches!(
        encode_request(&request),
        Err(RankError::Protocol(_))
    ));
}

#[test]
fn test_unknown_request_marker_is_rejected() {
    let request = Request::from_tokens(&["PING"]).unwrap();
    let mut bytes = encode_request(&request).unwrap().to_vec();
    bytes[0] = 0x7f;

    assert!(matches!(
        decode_request(&bytes),
        Err(RankError::Protocol(_))
    ));
}

#[test]
fn test_truncated_request_is_rejected() {
    let request = Request::from_tokens(&["ZADD", "users", "10", "u1"]).unwrap();
    let bytes = encode_request(&request).unwrap();

    let result = decode_request(&bytes[..bytes.len() - 3]);

    assert!(matches!(result, Err(RankError::Protocol(_))));
}

#[test]
fn test_request_token_count_mismatch_is_rejected() {
    // Claims 3 tokens but carries only 1
    let mut bytes = vec![0x01];
    let payload: Vec<u8> = {
        let mut p = Vec::new();
        p.extend_from_slice(&3u32.to_be_bytes());
        p.extend_from_slice(&4u32.to_be_bytes());
        p.extend_from_slice(b"PING");
        p
    };
    bytes.extend_from_slice(&(payload.len() as u32).to_be_bytes());
    bytes.extend_from_slice(&payload);

    assert!(matches!(
        decode_request(&bytes),
        Err(RankError::Protocol(_))
    ));
}

// =============================================================================
// Reply Tests
// =============================================================================

#[test]
fn test_reply_variants_round_trip() {
    for reply in [
        Reply::Count(0),
        Reply::Count(42),
        Reply::Score(-7),
        Reply::Score(i64::MAX),
        Reply::Simple("PONG".to_string()),
        Reply::Nil,
    ] {
        let bytes = encode_reply(&reply);
        assert_eq!(decode_reply(&bytes).unwrap(), reply);
    }
}

#[test]
fn test_count_and_score_stay_distinct_on_the_wire() {
    // The dual return shape must survive framing: a Count(5) never decodes
    // as Score(5).
    let count = decode_reply(&encode_reply(&Reply::Count(5))).unwrap();
    let score = decode_reply(&encode_reply(&Reply::Score(5))).unwrap();

    assert_eq!(count, Reply::Count(5));
    assert_eq!(score, Reply::Score(5));
    assert_ne!(count, score);
}

#[test]
fn test_error_frame_surfaces_as_server_error() {
    let bytes = encode_error("operation against a key holding the wrong kind of value");

    let err = decode_reply(&bytes).unwrap_err();

    assert!(matches!(err, RankError::Server(msg) if msg.contains("wrong kind")));
}

#[test]
fn test_reply_round_trip_through_stream() {
    let mut wire = Vec::new();
    wire.extend_from_slice(&encode_reply(&Reply::Score(11)));

    let decoded = read_reply(&mut Cursor::new(wire)).unwrap();

    assert_eq!(decoded, Reply::Score(11));
}

#[test]
fn test_unknown_status_is_rejected() {
    let mut bytes = encode_reply(&Reply::Nil).to_vec();
    bytes[0] = 0x7f;

    assert!(matches!(decode_reply(&bytes), Err(RankError::Protocol(_))));
}

#[test]
fn test_unknown_ok_kind_is_rejected() {
    let mut bytes = encode_reply(&Reply::Count(1)).to_vec();
    bytes[5] = 0x7f; // kind byte

    assert!(matches!(decode_reply(&bytes), Err(RankError::Protocol(_))));
}

#[test]
fn test_oversized_payload_is_rejected() {
    // Header claims a payload beyond the 16 MB cap
    let mut bytes = vec![0x00];
    bytes.extend_from_slice(&u32::MAX.to_be_bytes());

    assert!(matches!(decode_reply(&bytes), Err(RankError::Protocol(_))));
}

#[test]
fn test_truncated_stream_is_an_io_error() {
    let bytes = encode_reply(&Reply::Count(1));
    let truncated = &bytes[..bytes.len() - 2];

    let err = read_reply(&mut Cursor::new(truncated.to_vec())).unwrap_err();

    assert!(matches!(err, RankError::Io(_)));
}
