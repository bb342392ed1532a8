//! Request handlers for the SQL endpoints.

use serde::Serialize;
use tracing::debug;

use lexql_core::{Statement, Token};

use crate::error::RouterError;
use crate::request::Request;
use crate::response::Response;

#[derive(Serialize)]
struct AstBody<'a> {
    status: &'static str,
    ast: &'a Statement,
}

#[derive(Serialize)]
struct TokensBody<'a> {
    status: &'static str,
    tokens: &'a [Token],
}

#[derive(Serialize)]
struct ErrorBody {
    status: &'static str,
    kind: &'static str,
    message: String,
    position: Option<usize>,
}

/// Renders an error as a JSON response with the matching status code.
#[must_use]
pub fn error_response(err: &RouterError) -> Response {
    let body = ErrorBody {
        status: "error",
        kind: err.kind(),
        message: err.to_string(),
        position: err.position(),
    };
    Response::json_with_status(err.status(), &body)
}

/// `POST /parse`: tokenizes and parses the body, returning the AST.
#[allow(clippy::unused_async)]
pub async fn parse_handler(req: Request) -> Response {
    let result = req
        .sql()
        .and_then(|sql| lexql_core::parse_sql(&sql).map_err(RouterError::from));

    match result {
        Ok(statement) => Response::json(&AstBody {
            status: "success",
            ast: &statement,
        }),
        Err(e) => {
            debug!(error = %e, "rejecting /parse request");
            error_response(&e)
        }
    }
}

/// `POST /tokens`: returns the token stream for the body.
#[allow(clippy::unused_async)]
pub async fn tokens_handler(req: Request) -> Response {
    match req.sql() {
        Ok(sql) => {
            let tokens = lexql_core::tokenize(&sql);
            Response::json(&TokensBody {
                status: "success",
                tokens: &tokens,
            })
        }
        Err(e) => error_response(&e),
    }
}

/// `GET /health`.
#[allow(clippy::unused_async)]
pub async fn health_handler(_req: Request) -> Response {
    Response::json(&serde_json::json!({ "status": "ok" }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_parse_success_payload() {
        let res = parse_handler(Request::post("/parse").body("SELECT id FROM users")).await;
        assert_eq!(res.status, 200);

        let json = res.body_json().unwrap();
        assert_eq!(json["status"], "success");
        assert_eq!(json["ast"]["statement"], "select");
        assert_eq!(json["ast"]["data_source"]["selector"], "users");
        assert_eq!(json["ast"]["display_values"][0]["selector"], "id");
    }

    #[tokio::test]
    async fn test_parse_error_payload() {
        let res = parse_handler(Request::post("/parse").body("SELECT * BY")).await;
        assert_eq!(res.status, 400);

        let json = res.body_json().unwrap();
        assert_eq!(json["status"], "error");
        assert_eq!(json["kind"], "syntax");
        assert_eq!(json["message"], "Expected FROM at position 9");
        assert_eq!(json["position"], 9);
    }

    #[tokio::test]
    async fn test_parse_empty_body() {
        let res = parse_handler(Request::post("/parse")).await;
        assert_eq!(res.status, 400);

        let json = res.body_json().unwrap();
        assert_eq!(json["kind"], "empty");
        assert!(json["position"].is_null());
    }

    #[tokio::test]
    async fn test_parse_json_body() {
        let req = Request::post("/parse")
            .header("Content-Type", "application/json")
            .body(r#"{"sql":"SELECT COUNT(*) FROM t"}"#);
        let res = parse_handler(req).await;
        assert_eq!(res.status, 200);

        let json = res.body_json().unwrap();
        assert_eq!(
            json["ast"]["display_values"][0]["function_name"],
            "COUNT"
        );
    }

    #[tokio::test]
    async fn test_tokens_payload() {
        let res = tokens_handler(Request::post("/tokens").body("SELECT * FROM t")).await;
        assert_eq!(res.status, 200);

        let json = res.body_json().unwrap();
        let tokens = json["tokens"].as_array().unwrap();
        assert_eq!(tokens.len(), 4);
        assert_eq!(tokens[0]["kind"], "KEYWORD");
        assert_eq!(tokens[3]["position"], 14);
    }

    #[tokio::test]
    async fn test_invalid_body() {
        let req = Request::post("/tokens")
            .header("Content-Type", "application/json")
            .body("not json");
        let res = tokens_handler(req).await;
        assert_eq!(res.status, 400);
        assert_eq!(res.body_json().unwrap()["kind"], "invalid_body");
    }
}
