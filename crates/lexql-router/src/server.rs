//! HTTP/1 server built on hyper.

use std::convert::Infallible;
use std::io;
use std::net::SocketAddr;
use std::sync::Arc;

use http_body_util::{BodyExt, Full, LengthLimitError, Limited};
use hyper::body::Bytes;
use hyper::header::{HeaderMap, CONTENT_LENGTH};
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper::{Request as HyperRequest, Response as HyperResponse, StatusCode};
use hyper_util::rt::TokioIo;
use tokio::net::TcpListener;
use tracing::{debug, info, warn};

use crate::error::RouterError;
use crate::handlers::error_response;
use crate::request::{Method, Request};
use crate::response::Response;
use crate::router::Router;

/// Body limit used when none is configured.
pub const DEFAULT_MAX_BODY_BYTES: usize = 64 * 1024;

/// Binds `addr` and serves `router` until the listener fails.
///
/// Request bodies larger than `max_body_bytes` are refused with `413`
/// before they are buffered.
///
/// # Errors
///
/// Returns the I/O error from binding or accepting connections.
pub async fn serve(
    addr: SocketAddr,
    router: Arc<Router>,
    max_body_bytes: usize,
) -> io::Result<()> {
    let listener = TcpListener::bind(addr).await?;
    serve_listener(listener, router, max_body_bytes).await
}

/// Serves `router` on an already bound listener.
///
/// # Errors
///
/// Returns the I/O error from accepting connections.
pub async fn serve_listener(
    listener: TcpListener,
    router: Arc<Router>,
    max_body_bytes: usize,
) -> io::Result<()> {
    info!(addr = %listener.local_addr()?, max_body_bytes, "listening");

    loop {
        let (stream, peer) = listener.accept().await?;
        let io = TokioIo::new(stream);
        let router = Arc::clone(&router);

        tokio::task::spawn(async move {
            let service = service_fn(move |req| {
                handle_request(req, Arc::clone(&router), max_body_bytes)
            });

            if let Err(err) = http1::Builder::new().serve_connection(io, service).await {
                warn!(%peer, error = %err, "error serving connection");
            }
        });
    }
}

/// Parses the `Content-Length` header, if present and well formed.
fn declared_length(headers: &HeaderMap) -> Option<usize> {
    headers
        .get(CONTENT_LENGTH)?
        .to_str()
        .ok()?
        .trim()
        .parse()
        .ok()
}

async fn handle_request(
    req: HyperRequest<hyper::body::Incoming>,
    router: Arc<Router>,
    limit: usize,
) -> Result<HyperResponse<Full<Bytes>>, Infallible> {
    let Some(method) = Method::parse(req.method().as_str()) else {
        let err = RouterError::MethodNotAllowed {
            method: req.method().to_string(),
            path: req.uri().path().to_string(),
        };
        return Ok(into_hyper(error_response(&err)));
    };

    if declared_length(req.headers()).is_some_and(|len| len > limit) {
        debug!(limit, "rejecting body by Content-Length");
        return Ok(into_hyper(error_response(&RouterError::BodyTooLarge { limit })));
    }

    let mut request = Request::new(method, req.uri().path());
    for (key, value) in req.headers() {
        if let Ok(v) = value.to_str() {
            request.headers.insert(key.to_string(), v.to_string());
        }
    }

    // Chunked bodies carry no length up front; stop reading at the limit.
    match Limited::new(req.into_body(), limit).collect().await {
        Ok(body) => request.body = body.to_bytes().to_vec(),
        Err(err) if err.downcast_ref::<LengthLimitError>().is_some() => {
            debug!(limit, "rejecting streamed body over limit");
            return Ok(into_hyper(error_response(&RouterError::BodyTooLarge { limit })));
        }
        Err(err) => {
            warn!(error = %err, "failed to read request body");
            let err = RouterError::InvalidBody(err.to_string());
            return Ok(into_hyper(error_response(&err)));
        }
    }

    Ok(into_hyper(router.handle(request).await))
}

fn into_hyper(res: Response) -> HyperResponse<Full<Bytes>> {
    let mut builder = HyperResponse::builder()
        .status(StatusCode::from_u16(res.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR));

    for (key, value) in &res.headers {
        builder = builder.header(key.as_str(), value.as_str());
    }

    builder
        .body(Full::new(Bytes::from(res.body)))
        .unwrap_or_else(|err| {
            warn!(error = %err, "invalid response, sending 500");
            let mut fallback = HyperResponse::new(Full::new(Bytes::from_static(
                b"Internal Server Error",
            )));
            *fallback.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
            fallback
        })
}
