// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Newline-delimited JSON-RPC protocol between `oj-cli` and the Agent Daemon.

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

mod request;
mod response;
mod wire;

pub use request::Request;
pub use response::{Response, ResponseBody};
pub use wire::{decode, encode, read_request, write_response, ProtocolError};
