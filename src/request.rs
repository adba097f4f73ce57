//! Request normalization.
//!
//! Turns the raw values delivered by the HTTP boundary (or the `lookup`
//! command) into a [`DocRequest`]. The package path can arrive either as a
//! single dotted or slash-delimited string (`?package=net/http`) or as
//! already-split path segments (`/go/net/http/Get`); both end up as the same
//! ordered list of segments.

use serde::{Deserialize, Serialize};

use crate::error::{ExampleError, ExampleResult};

/// Representation requested by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Html,
    #[default]
    Json,
}

impl OutputFormat {
    /// Parse a format hint. Absent or unrecognized values fall back to JSON.
    pub fn parse(value: Option<&str>) -> Self {
        match value.map(|v| v.trim().to_ascii_lowercase()).as_deref() {
            Some("text") => Self::Text,
            Some("html") => Self::Html,
            _ => Self::Json,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Html => "html",
            Self::Json => "json",
        }
    }
}

/// Unvalidated input as extracted from the URL.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawRequest {
    pub language: String,
    /// Path segments after the language, in order
    pub path: Vec<String>,
    /// `package` query value, used when the path names only the symbol
    pub package: Option<String>,
    pub format: Option<String>,
    pub method: Option<String>,
    pub document: Option<String>,
    pub position: Option<String>,
}

/// Normalized lookup request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocRequest {
    pub language: String,
    pub package_path: Vec<String>,
    pub symbol: String,
    /// Passthrough hints. Accepted and logged, not used for provider
    /// invocation yet.
    pub method_name: Option<String>,
    pub document: Option<String>,
    pub position: Option<String>,
    pub format: OutputFormat,
}

impl DocRequest {
    /// Package path as shown in diagnostics (`net/http`, or empty).
    pub fn package_display(&self) -> String {
        self.package_path.join("/")
    }
}

/// Split a package path on `.` and `/`, dropping empty segments.
///
/// `net/http` and `net.http` both yield `["net", "http"]`; an empty string
/// yields no segments at all.
pub fn split_package_path(path: &str) -> Vec<String> {
    path.split(['.', '/'])
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .collect()
}

/// Build a [`DocRequest`] from raw boundary values.
///
/// A single path segment is the symbol and the package comes from the
/// `package` value. With several segments the last one is the symbol and the
/// rest form the package path; the `package` value is ignored then.
pub fn decompose(raw: RawRequest) -> ExampleResult<DocRequest> {
    let language = raw.language.trim().to_string();
    if language.is_empty() {
        return Err(ExampleError::MalformedRequest(
            "missing language".to_string(),
        ));
    }

    let mut segments: Vec<String> = raw
        .path
        .iter()
        .map(|segment| segment.trim())
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .collect();

    let symbol = segments.pop().ok_or_else(|| {
        ExampleError::MalformedRequest(format!("missing symbol for language '{language}'"))
    })?;

    let package_path = if segments.is_empty() {
        raw.package
            .as_deref()
            .map(split_package_path)
            .unwrap_or_default()
    } else {
        segments
            .iter()
            .flat_map(|segment| split_package_path(segment))
            .collect()
    };

    Ok(DocRequest {
        language,
        package_path,
        symbol,
        method_name: non_blank(raw.method),
        document: non_blank(raw.document),
        position: non_blank(raw.position),
        format: OutputFormat::parse(raw.format.as_deref()),
    })
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
