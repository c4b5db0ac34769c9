// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Thin RPC client over the Agent Daemon's Unix socket, shared by every
//! `oj daemon` subcommand. One request per round trip; the connection is
//! closed after each call rather than kept open across invocations of the
//! CLI.

use std::path::Path;

use oj_wire::{decode, encode, Request, Response};
use thiserror::Error;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::UnixStream;

#[derive(Debug, Error)]
pub enum DaemonClientError {
    #[error("daemon is not running at {0}")]
    NotRunning(String),
    #[error("i/o error talking to daemon: {0}")]
    Io(#[from] std::io::Error),
    #[error("protocol error talking to daemon: {0}")]
    Protocol(#[from] oj_wire::ProtocolError),
    #[error("daemon rejected the request: {0}")]
    Rejected(String),
}

impl DaemonClientError {
    pub fn is_not_running(&self) -> bool {
        matches!(self, Self::NotRunning(_))
    }
}

/// Sends one request to the daemon listening at `socket_path` and returns
/// its response, or [`DaemonClientError::NotRunning`] if nothing is
/// listening there.
pub async fn call(socket_path: &Path, request: Request) -> Result<Response, DaemonClientError> {
    let stream = UnixStream::connect(socket_path)
        .await
        .map_err(|_| DaemonClientError::NotRunning(socket_path.display().to_string()))?;
    let (read_half, mut write_half) = stream.into_split();
    let mut reader = BufReader::new(read_half);

    let mut bytes = encode(&request)?;
    bytes.push(b'\n');
    write_half.write_all(&bytes).await?;
    write_half.flush().await?;

    let mut line = String::new();
    let n = reader.read_line(&mut line).await?;
    if n == 0 {
        return Err(DaemonClientError::Io(std::io::Error::new(
            std::io::ErrorKind::UnexpectedEof,
            "daemon closed the connection without replying",
        )));
    }
    Ok(decode(&line)?)
}

/// Sends `request` and unwraps a successful response, turning
/// `Response::Error` into [`DaemonClientError::Rejected`].
pub async fn call_ok(socket_path: &Path, request: Request) -> Result<oj_wire::ResponseBody, DaemonClientError> {
    match call(socket_path, request).await? {
        Response::Ok { body } => Ok(body),
        Response::Error { message } => Err(DaemonClientError::Rejected(message)),
    }
}

#[cfg(test)]
#[path = "daemon_client_tests.rs"]
mod tests;
