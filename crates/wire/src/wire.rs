// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Newline-delimited JSON framing for the daemon socket.
//!
//! Each request and response is exactly one line: a JSON object followed by
//! `\n`. On a malformed line the daemon replies with a protocol-level error
//! and keeps the connection open rather than closing it.

use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt};

use crate::{Request, Response};

#[derive(Debug, Error)]
pub enum ProtocolError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("connection closed")]
    Closed,
}

/// Serialize a value to a single line of JSON, without the trailing newline.
pub fn encode<T: Serialize>(value: &T) -> Result<Vec<u8>, ProtocolError> {
    Ok(serde_json::to_vec(value)?)
}

/// Parse one line of JSON into `T`.
pub fn decode<T: DeserializeOwned>(line: &str) -> Result<T, ProtocolError> {
    Ok(serde_json::from_str(line.trim_end())?)
}

/// Read one newline-terminated request line. Returns [`ProtocolError::Closed`]
/// at EOF (the peer hung up without sending a final line).
pub async fn read_request(reader: &mut (impl AsyncBufReadExt + Unpin)) -> Result<Request, ProtocolError> {
    let mut line = String::new();
    let bytes_read = reader.read_line(&mut line).await?;
    if bytes_read == 0 {
        return Err(ProtocolError::Closed);
    }
    decode(&line)
}

/// Write one response as a newline-terminated line and flush.
pub async fn write_response(
    writer: &mut (impl AsyncWriteExt + Unpin),
    response: &Response,
) -> Result<(), ProtocolError> {
    let mut bytes = encode(response)?;
    bytes.push(b'\n');
    writer.write_all(&bytes).await?;
    writer.flush().await?;
    Ok(())
}

#[cfg(test)]
#[path = "wire_tests.rs"]
mod tests;
