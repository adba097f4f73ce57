//! Lookup pipeline: request normalization, provider dispatch, extraction
//! and rendering.
//!
//! [`ExampleService`] holds only read-only state, so one instance can serve
//! any number of concurrent requests behind an `Arc`.

use crate::config::Settings;
use crate::error::{ExampleError, ExampleResult};
use crate::extract::extract;
use crate::provider::LanguageRegistry;
use crate::render::{CONTENT_TYPE_JSON, RenderedResponse, ResponseBody, render};
use crate::request::{DocRequest, RawRequest, decompose};

pub struct ExampleService {
    registry: LanguageRegistry,
    /// Log every request and tool invocation at info level
    debug: bool,
}

impl ExampleService {
    pub fn new(registry: LanguageRegistry, debug: bool) -> Self {
        Self { registry, debug }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(
            LanguageRegistry::from_config(&settings.providers),
            settings.debug,
        )
    }

    pub fn registry(&self) -> &LanguageRegistry {
        &self.registry
    }

    /// Run a lookup, reporting every failure as an [`ExampleError`].
    pub async fn lookup(&self, raw: RawRequest) -> ExampleResult<RenderedResponse> {
        let request = decompose(raw)?;
        self.trace_request(&request);
        self.lookup_request(&request).await
    }

    /// Run a lookup on an already normalized request.
    pub async fn lookup_request(&self, request: &DocRequest) -> ExampleResult<RenderedResponse> {
        let language = request.language.to_lowercase();
        let provider = self
            .registry
            .get(&language)
            .ok_or(ExampleError::UnsupportedLanguage(language))?;

        if self.debug {
            crate::log_event!(
                "pipeline",
                "exec",
                "{}",
                provider.command_line(&request.package_path, &request.symbol)
            );
        }
        let result = provider.fetch(&request.package_path, &request.symbol).await;
        if !result.success {
            let detail = result
                .error_detail
                .unwrap_or_else(|| "provider unavailable".to_string());
            tracing::warn!(
                "[pipeline] {} failed for {}: {detail}",
                provider.tool(),
                request.symbol
            );
            return Err(ExampleError::Provider {
                tool: provider.tool().to_string(),
                detail,
            });
        }

        let content = extract(&result.raw_output);
        render(&content, request.format).ok_or_else(|| ExampleError::NoContent {
            package: request.package_display(),
            symbol: request.symbol.clone(),
        })
    }

    /// Run a lookup and fold errors into their client-facing response.
    pub async fn handle(&self, raw: RawRequest) -> RenderedResponse {
        match self.lookup(raw).await {
            Ok(response) => response,
            Err(e) => {
                crate::debug_event!("pipeline", "rejected", "{e}");
                error_response(&e)
            }
        }
    }

    fn trace_request(&self, request: &DocRequest) {
        let package = request.package_display();
        if self.debug {
            crate::log_event!(
                "pipeline",
                "lookup",
                "lang: {}, {} {} (format: {})",
                request.language,
                package,
                request.symbol,
                request.format.as_str()
            );
            if let Some(method) = &request.method_name {
                crate::log_event!("pipeline", "method hint", "{method}");
            }
        } else {
            crate::debug_event!(
                "pipeline",
                "lookup",
                "lang: {}, {} {}",
                request.language,
                package,
                request.symbol
            );
        }
    }
}

/// `{"error": ...}` response with the error's status code.
pub fn error_response(error: &ExampleError) -> RenderedResponse {
    RenderedResponse {
        status_code: error.status_code(),
        content_type: CONTENT_TYPE_JSON,
        body: ResponseBody::Json(error.to_json()),
    }
}
