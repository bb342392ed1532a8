//! Main router implementation.

use std::future::Future;
use std::sync::Arc;

use crate::error::{Result, RouterError};
use crate::handlers::{error_response, health_handler, parse_handler, tokens_handler};
use crate::middleware::{BoxFuture, LoggingMiddleware, Middleware, MiddlewareResult};
use crate::request::{Method, Request};
use crate::response::Response;

/// A boxed async handler function.
pub type Handler = Arc<dyn Fn(Request) -> BoxFuture<'static, Response> + Send + Sync>;

/// A single route definition.
#[derive(Clone)]
pub struct Route {
    /// HTTP method.
    pub method: Method,
    /// Exact path, without a trailing slash.
    pub path: String,
    /// Request handler.
    pub handler: Handler,
}

impl Route {
    /// Creates a new route.
    pub fn new<F, Fut>(method: Method, path: &str, handler: F) -> Self
    where
        F: Fn(Request) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Response> + Send + 'static,
    {
        Self {
            method,
            path: normalize(path).to_string(),
            handler: Arc::new(move |req| Box::pin(handler(req))),
        }
    }

    fn matches(&self, path: &str) -> bool {
        self.path == normalize(path)
    }
}

/// Strips a trailing slash, keeping the root path intact.
fn normalize(path: &str) -> &str {
    match path.strip_suffix('/') {
        Some("") | None => path,
        Some(stripped) => stripped,
    }
}

/// The router dispatching requests to handlers.
pub struct Router {
    routes: Vec<Route>,
    middleware: Vec<Arc<dyn Middleware>>,
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

impl Router {
    /// Creates a new empty router.
    #[must_use]
    pub fn new() -> Self {
        Self {
            routes: Vec::new(),
            middleware: Vec::new(),
        }
    }

    /// Router serving `POST /parse`, `POST /tokens` and `GET /health`,
    /// with request logging.
    #[must_use]
    pub fn sql_api() -> Self {
        Self::new()
            .post("/parse", parse_handler)
            .post("/tokens", tokens_handler)
            .get("/health", health_handler)
            .middleware(LoggingMiddleware)
    }

    /// Adds a GET route.
    #[must_use]
    pub fn get<F, Fut>(self, path: &str, handler: F) -> Self
    where
        F: Fn(Request) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Response> + Send + 'static,
    {
        self.route(Method::Get, path, handler)
    }

    /// Adds a POST route.
    #[must_use]
    pub fn post<F, Fut>(self, path: &str, handler: F) -> Self
    where
        F: Fn(Request) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Response> + Send + 'static,
    {
        self.route(Method::Post, path, handler)
    }

    /// Adds a route with any method.
    #[must_use]
    pub fn route<F, Fut>(mut self, method: Method, path: &str, handler: F) -> Self
    where
        F: Fn(Request) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Response> + Send + 'static,
    {
        self.routes.push(Route::new(method, path, handler));
        self
    }

    /// Adds global middleware.
    #[must_use]
    pub fn middleware(mut self, mw: impl Middleware + 'static) -> Self {
        self.middleware.push(Arc::new(mw));
        self
    }

    /// Handles an incoming request.
    pub fn handle(&self, mut request: Request) -> BoxFuture<'_, Response> {
        Box::pin(async move {
            for mw in &self.middleware {
                match mw.before(&request).await {
                    MiddlewareResult::Continue(req) => request = req,
                    MiddlewareResult::Response(res) => {
                        // After hooks still run on early return.
                        let mut response = res;
                        for mw in self.middleware.iter().rev() {
                            response = mw.after(response).await;
                        }
                        return response;
                    }
                }
            }

            let mut response = match self.find_route(&request) {
                Ok(route) => (route.handler)(request).await,
                Err(e) => error_response(&e),
            };

            for mw in self.middleware.iter().rev() {
                response = mw.after(response).await;
            }

            response
        })
    }

    /// Finds a matching route for the request.
    fn find_route(&self, request: &Request) -> Result<&Route> {
        let mut path_matched = false;

        for route in self.routes.iter().filter(|r| r.matches(&request.path)) {
            path_matched = true;
            if route.method == request.method {
                return Ok(route);
            }
        }

        let method = request.method.to_string();
        let path = request.path.clone();
        if path_matched {
            Err(RouterError::MethodNotAllowed { method, path })
        } else {
            Err(RouterError::NotFound { method, path })
        }
    }
}
