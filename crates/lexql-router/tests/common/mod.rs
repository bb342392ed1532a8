//! Shared helpers for adapter integration tests.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::Arc;

use lexql_router::{serve_listener, Router, DEFAULT_MAX_BODY_BYTES};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

/// Starts the SQL API on an ephemeral port and returns its address.
pub async fn spawn_server() -> SocketAddr {
    spawn_server_with_limit(DEFAULT_MAX_BODY_BYTES).await
}

/// Starts the SQL API with the given body limit.
pub async fn spawn_server_with_limit(max_body_bytes: usize) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(serve_listener(
        listener,
        Arc::new(Router::sql_api()),
        max_body_bytes,
    ));
    addr
}

/// Sends a raw HTTP/1.1 request and returns `(status, body)`.
pub async fn send(
    addr: SocketAddr,
    method: &str,
    path: &str,
    content_type: Option<&str>,
    body: &str,
) -> (u16, String) {
    let mut raw = format!(
        "{method} {path} HTTP/1.1\r\nHost: {addr}\r\nConnection: close\r\nContent-Length: {}\r\n",
        body.len()
    );
    if let Some(ct) = content_type {
        raw.push_str(&format!("Content-Type: {ct}\r\n"));
    }
    raw.push_str("\r\n");
    raw.push_str(body);
    send_raw(addr, &raw).await
}

/// Writes `raw` in one go and returns `(status, body)` of the reply.
pub async fn send_raw(addr: SocketAddr, raw: &str) -> (u16, String) {
    let mut stream = TcpStream::connect(addr).await.unwrap();
    stream.write_all(raw.as_bytes()).await.unwrap();

    let mut reply = String::new();
    stream.read_to_string(&mut reply).await.unwrap();

    let status = reply
        .split_whitespace()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap();
    let body = reply
        .split_once("\r\n\r\n")
        .map(|(_, b)| b.to_string())
        .unwrap_or_default();
    (status, body)
}

/// Parses a response body as JSON.
pub fn json(body: &str) -> serde_json::Value {
    serde_json::from_str(body).unwrap()
}
