//! Documentation providers.
//!
//! A provider turns a package path and a symbol into the raw text output of
//! an external documentation tool. Providers never fail past their boundary:
//! every execution problem is folded into a [`ProviderResult`].

pub mod command;
pub mod go;
pub mod registry;

use async_trait::async_trait;
use serde::Serialize;

pub use command::CommandProvider;
pub use go::GoDocProvider;
pub use registry::LanguageRegistry;

/// Outcome of one provider invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProviderResult {
    pub success: bool,
    pub raw_output: String,
    pub error_detail: Option<String>,
}

impl ProviderResult {
    pub fn ok(raw_output: impl Into<String>) -> Self {
        Self {
            success: true,
            raw_output: raw_output.into(),
            error_detail: None,
        }
    }

    pub fn failed(detail: impl Into<String>) -> Self {
        Self {
            success: false,
            raw_output: String::new(),
            error_detail: Some(detail.into()),
        }
    }
}

/// Per-language documentation source.
#[async_trait]
pub trait DocProvider: Send + Sync {
    /// Name of the underlying tool, used in diagnostics (`godoc`).
    fn tool(&self) -> &str;

    /// Command line a lookup would run, for debug logging.
    fn command_line(&self, package: &[String], symbol: &str) -> String {
        let mut line = self.tool().to_string();
        for part in package.iter().map(String::as_str).chain([symbol]) {
            line.push(' ');
            line.push_str(part);
        }
        line
    }

    /// Fetch example-annotated documentation for `symbol` in `package`.
    async fn fetch(&self, package: &[String], symbol: &str) -> ProviderResult;
}
