//! Middleware support for request/response processing.

use std::future::Future;
use std::pin::Pin;

use tracing::info;

use crate::error::RouterError;
use crate::handlers::error_response;
use crate::request::Request;
use crate::response::Response;

/// A boxed future for async middleware operations.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Result of middleware processing.
pub enum MiddlewareResult {
    /// Continue to the next middleware/handler.
    Continue(Request),
    /// Stop processing and return this response.
    Response(Response),
}

/// Trait for middleware that processes requests and responses.
///
/// Middleware can rewrite the request, short-circuit with its own response,
/// or rewrite the handler's response on the way out.
pub trait Middleware: Send + Sync {
    /// Called before the request handler.
    fn before<'a>(&'a self, req: &'a Request) -> BoxFuture<'a, MiddlewareResult>;

    /// Called after the request handler.
    fn after<'a>(&'a self, res: Response) -> BoxFuture<'a, Response>;
}

/// Middleware that logs requests and response statuses.
pub struct LoggingMiddleware;

impl Middleware for LoggingMiddleware {
    fn before<'a>(&'a self, req: &'a Request) -> BoxFuture<'a, MiddlewareResult> {
        Box::pin(async move {
            info!(method = %req.method, path = %req.path, bytes = req.body.len(), "-->");
            MiddlewareResult::Continue(req.clone())
        })
    }

    fn after<'a>(&'a self, res: Response) -> BoxFuture<'a, Response> {
        Box::pin(async move {
            info!(status = res.status, "<--");
            res
        })
    }
}

/// Middleware that rejects bodies larger than a fixed number of bytes.
pub struct BodyLimitMiddleware {
    /// Maximum accepted body size in bytes.
    pub limit: usize,
}

impl BodyLimitMiddleware {
    /// Creates a body limit middleware.
    #[must_use]
    pub const fn new(limit: usize) -> Self {
        Self { limit }
    }
}

impl Middleware for BodyLimitMiddleware {
    fn before<'a>(&'a self, req: &'a Request) -> BoxFuture<'a, MiddlewareResult> {
        Box::pin(async move {
            if req.body.len() > self.limit {
                let err = RouterError::BodyTooLarge { limit: self.limit };
                return MiddlewareResult::Response(error_response(&err));
            }
            MiddlewareResult::Continue(req.clone())
        })
    }

    fn after<'a>(&'a self, res: Response) -> BoxFuture<'a, Response> {
        Box::pin(async move { res })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_body_limit_rejects_large_body() {
        let mw = BodyLimitMiddleware::new(4);
        let req = Request::post("/parse").body("SELECT a FROM t");
        match mw.before(&req).await {
            MiddlewareResult::Response(res) => {
                assert_eq!(res.status, 413);
                assert_eq!(res.body_json().unwrap()["kind"], "body_too_large");
            }
            MiddlewareResult::Continue(_) => panic!("expected rejection"),
        }
    }

    #[tokio::test]
    async fn test_body_limit_allows_small_body() {
        let mw = BodyLimitMiddleware::new(64);
        let req = Request::post("/parse").body("SELECT a FROM t");
        assert!(matches!(
            mw.before(&req).await,
            MiddlewareResult::Continue(_)
        ));
    }

    #[tokio::test]
    async fn test_logging_passes_through() {
        let req = Request::get("/health");
        assert!(matches!(
            LoggingMiddleware.before(&req).await,
            MiddlewareResult::Continue(_)
        ));
        let res = LoggingMiddleware.after(Response::ok()).await;
        assert_eq!(res.status, 200);
    }
}
