//! Error taxonomy for example lookups.
//!
//! Every variant is a terminal, single-attempt outcome for one request.
//! None of them is retried and none of them takes the process down.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExampleError {
    /// Language or symbol missing from the decomposed request
    #[error("Malformed request: {0}")]
    MalformedRequest(String),

    /// No provider registered for the (lower-cased) language key
    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),

    /// The external documentation tool was missing, failed or timed out
    #[error("Error running {tool}.  Is it installed? {detail}")]
    Provider { tool: String, detail: String },

    /// The tool ran but its output contained neither marker
    #[error("No example available for {}", qualified_name(.package, .symbol))]
    NoContent { package: String, symbol: String },
}

impl ExampleError {
    /// HTTP status code this outcome is reported with.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::MalformedRequest(_) => 400,
            Self::UnsupportedLanguage(_) => 404,
            Self::Provider { .. } => 500,
            Self::NoContent { .. } => 404,
        }
    }

    /// Client-facing JSON body: `{"error": "<message>"}`.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({ "error": self.to_string() })
    }
}

fn qualified_name(package: &str, symbol: &str) -> String {
    if package.is_empty() {
        symbol.to_string()
    } else {
        format!("{package}.{symbol}")
    }
}

pub type ExampleResult<T> = Result<T, ExampleError>;
