//! # lexql-router
//!
//! HTTP adapter exposing the `lexql-core` tokenizer and parser.
//!
//! ## Endpoints
//!
//! - `POST /parse` returns `{"status":"success","ast":...}` or a JSON error
//!   with `kind`, `message` and `position`
//! - `POST /tokens` returns the token stream
//! - `GET /health`
//!
//! ## Example
//!
//! ```rust
//! use lexql_router::{Request, Router};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let router = Router::sql_api();
//! let res = router.handle(Request::post("/parse").body("SELECT id FROM users")).await;
//! assert_eq!(res.status, 200);
//! # }
//! ```

mod error;
mod handlers;
mod middleware;
mod request;
mod response;
mod router;
mod server;

pub use error::{Result, RouterError};
pub use handlers::{error_response, health_handler, parse_handler, tokens_handler};
pub use middleware::{
    BodyLimitMiddleware, BoxFuture, LoggingMiddleware, Middleware, MiddlewareResult,
};
pub use request::{Method, Request};
pub use response::Response;
pub use router::{Handler, Route, Router};
pub use server::{serve, serve_listener, DEFAULT_MAX_BODY_BYTES};
