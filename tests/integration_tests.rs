//! Integration tests for RankDB
//!
//! Drives full client sessions through the wire codec and the engine, the
//! same path a TCP connection takes minus the socket.

use std::io::Cursor;
use std::sync::Arc;

use rankdb::protocol::{
    encode_error, encode_reply, read_reply, read_request, write_request, Reply, Request,
};
use rankdb::{Config, Engine, RankError};

// =============================================================================
// Helper Functions
// =============================================================================

fn setup_engine() -> Arc<Engine> {
    let config = Config::builder().shard_count(4).build();
    Arc::new(Engine::new(config).unwrap())
}

/// One request/reply exchange: encode the request, decode it server-side,
/// execute, encode the reply (or error frame), decode it client-side.
fn exchange(engine: &Engine, tokens: &[&str]) -> rankdb::Result<Reply> {
    let request = Request::from_tokens(tokens).unwrap();

    // Client → server
    let mut wire = Vec::new();
    write_request(&mut wire, &request).unwrap();
    let received = read_request(&mut Cursor::new(wire)).unwrap();

    // Server executes and frames the outcome
    let frame = match engine.execute(&received) {
        Ok(reply) => encode_reply(&reply),
        Err(e) => encode_error(&e.to_string()),
    };

    // Server → client
    read_reply(&mut Cursor::new(frame.to_vec()))
}

// =============================================================================
// Session Tests
// =============================================================================

#[test]
fn test_zadd_session_over_the_wire() {
    let engine = setup_engine();

    assert_eq!(exchange(&engine, &["ZADD", "users", "10", "u1"]).unwrap(), Reply::Count(1));
    assert_eq!(exchange(&engine, &["ZADD", "users", "5", "u2"]).unwrap(), Reply::Count(1));
    assert_eq!(exchange(&engine, &["ZADD", "users", "10", "u1"]).unwrap(), Reply::Count(0));
    assert_eq!(
        exchange(&engine, &["ZADD", "users", "CH", "11", "u1"]).unwrap(),
        Reply::Count(1)
    );
    assert_eq!(exchange(&engine, &["ZSCORE", "users", "u1"]).unwrap(), Reply::Score(11));
    assert_eq!(exchange(&engine, &["ZCARD", "users"]).unwrap(), Reply::Count(2));
}

#[test]
fn test_incr_reply_shape_over_the_wire() {
    let engine = setup_engine();

    assert_eq!(
        exchange(&engine, &["ZADD", "k", "INCR", "5", "m"]).unwrap(),
        Reply::Score(5)
    );
    // A skipped INCR pair arrives as a Nil frame
    assert_eq!(
        exchange(&engine, &["ZADD", "k", "NX", "INCR", "5", "m"]).unwrap(),
        Reply::Nil
    );
}

#[test]
fn test_command_error_arrives_as_error_frame() {
    let engine = setup_engine();
    exchange(&engine, &["SET", "greeting", "hello"]).unwrap();

    let err = exchange(&engine, &["ZADD", "greeting", "1", "m"]).unwrap_err();

    assert!(matches!(err, RankError::Server(msg) if msg.contains("wrong kind")));
    // The string value survived the failed command
    assert_eq!(
        exchange(&engine, &["GET", "greeting"]).unwrap(),
        Reply::Simple("hello".to_string())
    );
}

#[test]
fn test_modifier_conflict_over_the_wire() {
    let engine = setup_engine();

    let err = exchange(&engine, &["ZADD", "key", "NX", "XX", "1", "m"]).unwrap_err();

    assert!(matches!(err, RankError::Server(msg) if msg.contains("mutually exclusive")));
    assert_eq!(exchange(&engine, &["ZCARD", "key"]).unwrap(), Reply::Count(0));
}
