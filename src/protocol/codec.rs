//! Protocol codec
//!
//! Encoding and decoding functions for the wire protocol.
//!
//! ## Wire Format
//!
//! ### Request Format
//! ```text
//! ┌──────────┬──────────┬─────────────────────────────┐
//! │Marker(1) │ Len (4)  │         Payload             │
//! └──────────┴──────────┴─────────────────────────────┘
//! ```
//! Payload: token count (4 bytes) + per token: length (4 bytes) + UTF-8 bytes
//!
//! ### Reply Format
//! ```text
//! ┌──────────┬──────────┬─────────────────────────────┐
//! │Status(1) │ Len (4)  │         Payload             │
//! └──────────┴──────────┴─────────────────────────────┘
//! ```

use std::io::{Read, Write};

use bytes::{BufMut, Bytes, BytesMut};

use crate::error::{RankError, Result};

use super::{Reply, Request, Status};

/// Header size: 1 byte marker/status + 4 bytes length
pub const HEADER_SIZE: usize = 5;

/// Request frame marker
pub const REQUEST_MARKER: u8 = 0x01;

/// Maximum payload size (16 MB)
pub const MAX_PAYLOAD_SIZE: u32 = 16 * 1024 * 1024;

// Reply payload kind tags
const KIND_COUNT: u8 = 0x01;
const KIND_SCORE: u8 = 0x02;
const KIND_SIMPLE: u8 = 0x03;

// =============================================================================
// Request Encoding/Decoding
// =============================================================================

/// Encode a request to bytes
///
/// Format: marker (1) + payload_len (4) + token_count (4) + tokens
///
/// Enforces the same payload cap as the decode side, so a client can never
/// emit a frame the server would reject as oversized.
pub fn encode_request(request: &Request) -> Result<Bytes> {
    let payload_len: usize = 4 + request
        .tokens
        .iter()
        .map(|t| 4 + t.len())
        .sum::<usize>();

    if payload_len > MAX_PAYLOAD_SIZE as usize {
        return Err(RankError::Protocol(format!(
            "Payload too large: {} bytes (max {})",
            payload_len, MAX_PAYLOAD_SIZE
        )));
    }

    let mut buf = BytesMut::with_capacity(HEADER_SIZE + payload_len);
    buf.put_u8(REQUEST_MARKER);
    buf.put_u32(payload_len as u32);
    buf.put_u32(request.tokens.len() as u32);
    for token in &request.tokens {
        buf.put_u32(token.len() as u32);
        buf.put_slice(token.as_bytes());
    }

    Ok(buf.freeze())
}

/// Decode a request from a complete frame
pub fn decode_request(bytes: &[u8]) -> Result<Request> {
    let payload = frame_payload(bytes, "request")?;

    let marker = bytes[0];
    if marker != REQUEST_MARKER {
        return Err(RankError::Protocol(format!(
            "Unknown request marker: 0x{:02x}",
            marker
        )));
    }

    if payload.len() < 4 {
        return Err(RankError::Protocol(
            "Request payload: missing token count".to_string(),
        ));
    }
    let token_count = u32::from_be_bytes([payload[0], payload[1], payload[2], payload[3]]) as usize;

    let mut tokens = Vec::with_capacity(token_count.min(64));
    let mut offset = 4;
    for i in 0..token_count {
        if payload.len() < offset + 4 {
            return Err(RankError::Protocol(format!(
                "Request payload: missing length of token {}",
                i
            )));
        }
        let token_len = u32::from_be_bytes([
            payload[offset],
            payload[offset + 1],
            payload[offset + 2],
            payload[offset + 3],
        ]) as usize;
        offset += 4;

        if payload.len() < offset + token_len {
            return Err(RankError::Protocol(format!(
                "Request payload: incomplete token {} (expected {}, got {})",
                i,
                token_len,
                payload.len() - offset
            )));
        }
        let token = std::str::from_utf8(&payload[offset..offset + token_len])
            .map_err(|_| RankError::Protocol(format!("Request token {} is not UTF-8", i)))?;
        tokens.push(token.to_string());
        offset += token_len;
    }

    Request::new(tokens)
}

// =============================================================================
// Reply Encoding/Decoding
// =============================================================================

/// Encode a successful reply to bytes
///
/// Format: status (1) + payload_len (4) + payload
pub fn encode_reply(reply: &Reply) -> Bytes {
    let payload: Vec<u8> = match reply {
        Reply::Count(n) => {
            let mut p = Vec::with_capacity(9);
            p.push(KIND_COUNT);
            p.extend_from_slice(&n.to_be_bytes());
            p
        }
        Reply::Score(n) => {
            let mut p = Vec::with_capacity(9);
            p.push(KIND_SCORE);
            p.extend_from_slice(&n.to_be_bytes());
            p
        }
        Reply::Simple(s) => {
            let mut p = Vec::with_capacity(1 + s.len());
            p.push(KIND_SIMPLE);
            p.extend_from_slice(s.as_bytes());
            p
        }
        Reply::Nil => Vec::new(),
    };

    let mut buf = BytesMut::with_capacity(HEADER_SIZE + payload.len());
    buf.put_u8(reply.status() as u8);
    buf.put_u32(payload.len() as u32);
    buf.put_slice(&payload);

    buf.freeze()
}

/// Encode an error reply to bytes
pub fn encode_error(message: &str) -> Bytes {
    let mut buf = BytesMut::with_capacity(HEADER_SIZE + message.len());
    buf.put_u8(Status::Error as u8);
    buf.put_u32(message.len() as u32);
    buf.put_slice(message.as_bytes());

    buf.freeze()
}

/// Decode a reply from a complete frame
///
/// A frame carrying a server-side error surfaces as `RankError::Server`.
pub fn decode_reply(bytes: &[u8]) -> Result<Reply> {
    let payload = frame_payload(bytes, "reply")?;

    match bytes[0] {
        s if s == Status::Ok as u8 => decode_ok_payload(payload),
        s if s == Status::Nil as u8 => {
            if !payload.is_empty() {
                return Err(RankError::Protocol(format!(
                    "Nil reply: unexpected payload of {} bytes",
                    payload.len()
                )));
            }
            Ok(Reply::Nil)
        }
        s if s == Status::Error as u8 => {
            let message = String::from_utf8_lossy(payload).into_owned();
            Err(RankError::Server(message))
        }
        other => Err(RankError::Protocol(format!(
            "Unknown reply status: 0x{:02x}",
            other
        ))),
    }
}

fn decode_ok_payload(payload: &[u8]) -> Result<Reply> {
    if payload.is_empty() {
        return Err(RankError::Protocol("Ok reply: missing kind byte".to_string()));
    }

    match payload[0] {
        KIND_COUNT | KIND_SCORE => {
            if payload.len() != 9 {
                return Err(RankError::Protocol(format!(
                    "Integer reply: expected 8 data bytes, got {}",
                    payload.len() - 1
                )));
            }
            let mut data = [0u8; 8];
            data.copy_from_slice(&payload[1..9]);
            let n = i64::from_be_bytes(data);
            Ok(if payload[0] == KIND_COUNT {
                Reply::Count(n)
            } else {
                Reply::Score(n)
            })
        }
        KIND_SIMPLE => {
            let s = std::str::from_utf8(&payload[1..])
                .map_err(|_| RankError::Protocol("Simple reply is not UTF-8".to_string()))?;
            Ok(Reply::Simple(s.to_string()))
        }
        other => Err(RankError::Protocol(format!(
            "Unknown reply kind: 0x{:02x}",
            other
        ))),
    }
}

/// Validate a frame header and return its payload slice
fn frame_payload<'a>(bytes: &'a [u8], what: &str) -> Result<&'a [u8]> {
    if bytes.len() < HEADER_SIZE {
        return Err(RankError::Protocol(format!(
            "Incomplete {} header: expected {} bytes, got {}",
            what,
            HEADER_SIZE,
            bytes.len()
        )));
    }

    let payload_len = u32::from_be_bytes([bytes[1], bytes[2], bytes[3], bytes[4]]) as usize;
    if payload_len > MAX_PAYLOAD_SIZE as usize {
        return Err(RankError::Protocol(format!(
            "Payload too large: {} bytes (max {})",
            payload_len, MAX_PAYLOAD_SIZE
        )));
    }

    let total_len = HEADER_SIZE + payload_len;
    if bytes.len() < total_len {
        return Err(RankError::Protocol(format!(
            "Incomplete {} payload: expected {} bytes, got {}",
            what,
            total_len,
            bytes.len()
        )));
    }

    Ok(&bytes[HEADER_SIZE..total_len])
}

// =============================================================================
// Stream-based I/O helpers
// =============================================================================

/// Read a complete frame (header + payload) from a stream
fn read_frame<R: Read>(reader: &mut R) -> Result<Vec<u8>> {
    let mut header = [0u8; HEADER_SIZE];
    reader.read_exact(&mut header)?;

    let payload_len = u32::from_be_bytes([header[1], header[2], header[3], header[4]]) as usize;
    if payload_len > MAX_PAYLOAD_SIZE as usize {
        return Err(RankError::Protocol(format!(
            "Payload too large: {} bytes (max {})",
            payload_len, MAX_PAYLOAD_SIZE
        )));
    }

    let mut frame = vec![0u8; HEADER_SIZE + payload_len];
    frame[..HEADER_SIZE].copy_from_slice(&header);
    if payload_len > 0 {
        reader.read_exact(&mut frame[HEADER_SIZE..])?;
    }

    Ok(frame)
}

/// Read a complete request from a stream
///
/// Blocks until a complete request is received or an error occurs
pub fn read_request<R: Read>(reader: &mut R) -> Result<Request> {
    let frame = read_frame(reader)?;
    decode_request(&frame)
}

/// Write a request to a stream
pub fn write_request<W: Write>(writer: &mut W, request: &Request) -> Result<()> {
    writer.write_all(&encode_request(request)?)?;
    writer.flush()?;
    Ok(())
}

/// Read a complete reply from a stream
pub fn read_reply<R: Read>(reader: &mut R) -> Result<Reply> {
    let frame = read_frame(reader)?;
    decode_reply(&frame)
}

/// Write a successful reply to a stream
pub fn write_reply<W: Write>(writer: &mut W, reply: &Reply) -> Result<()> {
    writer.write_all(&encode_reply(reply))?;
    writer.flush()?;
    Ok(())
}

/// Write an error reply to a stream
pub fn write_error<W: Write>(writer: &mut W, message: &str) -> Result<()> {
    writer.write_all(&encode_error(message))?;
    writer.flush()?;
    Ok(())
}
