//! HTTP boundary.
//!
//! Routes:
//! - `GET /ping` liveness probe
//! - `GET /{lang}/{symbol}?package=<pkg>&format=<text|html|json>`
//! - `GET /{lang}/{package}/.../{symbol}?format=...`
//! - `GET /{lang}` and `GET /{lang}/` answer 400, a symbol is required
//!
//! All lookup shapes share one catch-all route; path decomposition sorts
//! them out. A query key given more than once is ignored, so a repeated
//! `format` falls back to JSON like any other unusable value.

pub mod server;

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{DefaultBodyLimit, Path, Query, State, rejection::QueryRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use tower_http::cors::CorsLayer;

use crate::config::ServerConfig;
use crate::error::ExampleError;
use crate::pipeline::{ExampleService, error_response};
use crate::render::{RenderedResponse, ResponseBody};
use crate::request::RawRequest;

pub use server::serve;

/// Query parameters accepted on lookup routes
#[derive(Debug, Default, PartialEq, Eq)]
pub struct LookupQuery {
    pub package: Option<String>,
    pub format: Option<String>,
    pub method: Option<String>,
    pub document: Option<String>,
    pub position: Option<String>,
}

impl LookupQuery {
    /// Collect known keys from decoded pairs. Repeated keys are ambiguous
    /// and dropped; unknown keys are ignored.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for (key, _) in &pairs {
            *counts.entry(key.as_str()).or_default() += 1;
        }
        let single = |name: &str| {
            if counts.get(name) != Some(&1) {
                return None;
            }
            pairs
                .iter()
                .find(|(key, _)| key == name)
                .map(|(_, value)| value.clone())
        };

        Self {
            package: single("package"),
            format: single("format"),
            method: single("method"),
            document: single("document"),
            position: single("position"),
        }
    }
}

/// Build the application router.
pub fn router(service: Arc<ExampleService>, config: &ServerConfig) -> Router {
    let mut router = Router::new()
        .route("/ping", get(ping))
        .route("/{lang}", get(missing_symbol))
        .route("/{lang}/", get(missing_symbol))
        .route("/{lang}/{*path}", get(lookup))
        .with_state(service)
        .layer(DefaultBodyLimit::max(config.body_limit));

    if config.cors {
        router = router.layer(CorsLayer::permissive());
    }

    router
}

async fn ping() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "pong": "pong" }))
}

async fn missing_symbol(Path(lang): Path<String>) -> Response {
    let err = ExampleError::MalformedRequest(format!("missing symbol for language '{lang}'"));
    into_http(error_response(&err))
}

async fn lookup(
    State(service): State<Arc<ExampleService>>,
    Path((lang, path)): Path<(String, String)>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Response {
    let query = match query {
        Ok(Query(pairs)) => LookupQuery::from_pairs(pairs),
        Err(rejection) => {
            let err = ExampleError::MalformedRequest(rejection.body_text());
            return into_http(error_response(&err));
        }
    };

    let raw = RawRequest {
        language: lang,
        path: path.split('/').map(str::to_string).collect(),
        package: query.package,
        format: query.format,
        method: query.method,
        document: query.document,
        position: query.position,
    };

    into_http(service.handle(raw).await)
}

/// Convert a rendered response into an axum response.
pub fn into_http(rendered: RenderedResponse) -> Response {
    let status =
        StatusCode::from_u16(rendered.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    match rendered.body {
        ResponseBody::Json(value) => (status, Json(value)).into_response(),
        ResponseBody::Text(text) => {
            (status, [(header::CONTENT_TYPE, rendered.content_type)], text).into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
        items
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_query_from_pairs() {
        let query = LookupQuery::from_pairs(pairs(&[
            ("package", "io"),
            ("format", "text"),
            ("unrelated", "x"),
        ]));
        assert_eq!(query.package.as_deref(), Some("io"));
        assert_eq!(query.format.as_deref(), Some("text"));
        assert_eq!(query.method, None);
    }

    #[test]
    fn test_repeated_key_is_dropped() {
        let query = LookupQuery::from_pairs(pairs(&[
            ("format", "text"),
            ("package", "io"),
            ("format", "html"),
        ]));
        assert_eq!(query.format, None);
        assert_eq!(query.package.as_deref(), Some("io"));
    }
}
