// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Accept loop for the daemon's Unix-socket JSON-RPC endpoint.

use std::io;
use std::path::Path;

use oj_wire::{read_request, write_response, ProtocolError, Request, Response, ResponseBody};
use tokio::net::{UnixListener, UnixStream};
use tracing::{debug, error, info, warn};

use crate::manager::{AgentManager, ManagerError};

/// Bind the rendezvous socket, clearing a stale socket file left behind by
/// a daemon that died without cleaning up after itself. A live daemon
/// already listening causes this to fail instead of silently replacing it.
pub async fn bind(socket_path: &Path) -> io::Result<UnixListener> {
    match UnixListener::bind(socket_path) {
        Ok(listener) => Ok(listener),
        Err(err) if err.kind() == io::ErrorKind::AddrInUse => {
            if UnixStream::connect(socket_path).await.is_ok() {
                return Err(io::Error::new(
                    io::ErrorKind::AddrInUse,
                    "another daemon instance is already listening on this socket",
                ));
            }
            std::fs::remove_file(socket_path)?;
            UnixListener::bind(socket_path)
        }
        Err(err) => Err(err),
    }
}

/// Accept connections until a `shutdown` request arrives over the socket
/// or `shutdown_tx` is otherwise signalled (e.g. by a process signal
/// handler), dispatching each request line through `manager`.
pub async fn serve(listener: UnixListener, manager: AgentManager, shutdown_tx: tokio::sync::watch::Sender<bool>) {
    let mut shutdown_rx = shutdown_tx.subscribe();
    loop {
        tokio::select! {
            accepted = listener.accept() => {
                match accepted {
                    Ok((stream, _addr)) => {
                        let manager = manager.clone();
                        let shutdown_tx = shutdown_tx.clone();
                        tokio::spawn(async move {
                            if let Err(err) = handle_connection(stream, manager, shutdown_tx).await {
                                debug!(%err, "connection closed");
                            }
                        });
                    }
                    Err(err) => warn!(%err, "failed to accept connection"),
                }
            }
            _ = shutdown_rx.changed() => {
                if *shutdown_rx.borrow() {
                    info!("listener shutting down");
                    break;
                }
            }
        }
    }
}

async fn handle_connection(
    stream: UnixStream,
    manager: AgentManager,
    shutdown_tx: tokio::sync::watch::Sender<bool>,
) -> Result<(), ProtocolError> {
    let (read_half, mut write_half) = stream.into_split();
    let mut reader = tokio::io::BufReader::new(read_half);

    loop {
        let request = match read_request(&mut reader).await {
            Ok(request) => request,
            Err(ProtocolError::Closed) => return Ok(()),
            Err(ProtocolError::Json(err)) => {
                warn!(%err, "received malformed request");
                write_response(&mut write_half, &Response::error(format!("invalid request: {err}"))).await?;
                continue;
            }
            Err(err) => return Err(err),
        };

        let is_shutdown = matches!(request, Request::Shutdown);
        let response = dispatch(&manager, request).await;
        write_response(&mut write_half, &response).await?;

        if is_shutdown {
            let _ = shutdown_tx.send(true);
            return Ok(());
        }
    }
}

async fn dispatch(manager: &AgentManager, request: Request) -> Response {
    match request {
        Request::Ping => Response::ok(ResponseBody::Pong),
        Request::List => Response::ok(ResponseBody::Agents { agents: manager.list().await }),
        Request::Register { agent_id, config } => match manager.register(agent_id, config).await {
            Ok(agent) => Response::ok(ResponseBody::Agent { agent }),
            Err(err) => to_response_error(err),
        },
        Request::Start { agent_id, config } => match manager.start(agent_id, config).await {
            Ok(agent) => Response::ok(ResponseBody::Agent { agent }),
            Err(err) => to_response_error(err),
        },
        Request::Stop { agent_id } => match manager.stop(agent_id).await {
            Ok(agent) => Response::ok(ResponseBody::Agent { agent }),
            Err(err) => to_response_error(err),
        },
        Request::Status { agent_id } => match manager.status(agent_id).await {
            Ok(agent) => Response::ok(ResponseBody::Agent { agent }),
            Err(err) => to_response_error(err),
        },
        Request::Remove { agent_id } => match manager.remove(agent_id).await {
            Ok(()) => Response::ok(ResponseBody::Removed),
            Err(err) => to_response_error(err),
        },
        Request::Shutdown => {
            let manager = manager.clone();
            tokio::spawn(async move { manager.shutdown_all().await });
            Response::ok(ResponseBody::ShuttingDown)
        }
    }
}

fn to_response_error(err: ManagerError) -> Response {
    if let ManagerError::Io(io_err) = &err {
        error!(%io_err, "i/o error handling request");
    }
    Response::error(err.to_string())
}

#[cfg(test)]
#[path = "listener_tests.rs"]
mod tests;
