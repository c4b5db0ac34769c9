// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Wire format tests: newline-delimited JSON framing.

use super::*;
use crate::response::ResponseBody;

#[test]
fn encode_returns_bare_json_without_trailing_newline() {
    let encoded = encode(&Response::ok(ResponseBody::Pong)).expect("encode failed");
    let json_str = std::str::from_utf8(&encoded).expect("should be valid UTF-8");
    assert!(json_str.starts_with('{'));
    assert!(!json_str.ends_with('\n'));
}

#[test]
fn decode_trims_the_trailing_newline() {
    let line = "{\"cmd\":\"ping\"}\n";
    let request: Request = decode(line).expect("decode failed");
    assert_eq!(request, Request::Ping);
}

#[tokio::test]
async fn read_request_reads_one_newline_terminated_line() {
    let cursor = std::io::Cursor::new(b"{\"cmd\":\"ping\"}\n".to_vec());
    let mut reader = tokio::io::BufReader::new(cursor);
    let request = read_request(&mut reader).await.expect("read failed");
    assert_eq!(request, Request::Ping);
}

#[tokio::test]
async fn read_request_returns_closed_at_eof() {
    let cursor = std::io::Cursor::new(Vec::new());
    let mut reader = tokio::io::BufReader::new(cursor);
    let result = read_request(&mut reader).await;
    assert!(matches!(result, Err(ProtocolError::Closed)));
}

#[tokio::test]
async fn read_request_surfaces_invalid_json_without_closing() {
    let cursor = std::io::Cursor::new(b"not json\n".to_vec());
    let mut reader = tokio::io::BufReader::new(cursor);
    let result = read_request(&mut reader).await;
    assert!(matches!(result, Err(ProtocolError::Json(_))));
}

#[tokio::test]
async fn write_response_appends_exactly_one_newline() {
    let mut buffer = Vec::new();
    write_response(&mut buffer, &Response::ok(ResponseBody::Pong)).await.expect("write failed");

    assert_eq!(buffer.last(), Some(&b'\n'));
    assert_eq!(buffer.iter().filter(|&&b| b == b'\n').count(), 1);

    let line = std::str::from_utf8(&buffer).unwrap();
    let decoded: Response = decode(line).expect("decode failed");
    assert_eq!(decoded, Response::ok(ResponseBody::Pong));
}
