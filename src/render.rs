//! Rendering of extracted content into the requested representation.

use serde::Serialize;

use crate::extract::ExtractedContent;
use crate::request::OutputFormat;

pub const CONTENT_TYPE_TEXT: &str = "text/plain; charset=utf-8";
pub const CONTENT_TYPE_HTML: &str = "text/html; charset=utf-8";
pub const CONTENT_TYPE_JSON: &str = "application/json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResponseBody {
    Text(String),
    Json(serde_json::Value),
}

impl ResponseBody {
    /// Body as bytes on the wire.
    pub fn into_string(self) -> String {
        match self {
            Self::Text(text) => text,
            Self::Json(value) => value.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedResponse {
    pub status_code: u16,
    pub content_type: &'static str,
    pub body: ResponseBody,
}

/// JSON representation: always carries both segments.
#[derive(Debug, Serialize)]
struct ExamplePayload<'a> {
    example: &'a str,
    doc: &'a str,
}

/// Render extracted content, or `None` when both segments are empty.
pub fn render(content: &ExtractedContent, format: OutputFormat) -> Option<RenderedResponse> {
    let chosen = content.preferred()?;

    let (content_type, body) = match format {
        OutputFormat::Text => (CONTENT_TYPE_TEXT, ResponseBody::Text(chosen.to_string())),
        OutputFormat::Html => (CONTENT_TYPE_HTML, ResponseBody::Text(format_html(chosen))),
        OutputFormat::Json => {
            let payload = ExamplePayload {
                example: &content.example_code,
                doc: &content.documentation,
            };
            (
                CONTENT_TYPE_JSON,
                ResponseBody::Json(serde_json::json!(payload)),
            )
        }
    };

    Some(RenderedResponse {
        status_code: 200,
        content_type,
        body,
    })
}

/// HTML rendering of godoc text.
///
/// Newlines become `<br>` and the first `Example:` becomes an `<h2>`
/// heading. A closing `</h2>` is always appended, even without a heading;
/// existing clients depend on that exact output.
pub fn format_html(segment: &str) -> String {
    let mut html = segment.replace('\n', "<br>");
    html.push_str("</h2>");
    html.replacen("Example:", "<h2>Example</h2>", 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn content(doc: &str, example: &str) -> ExtractedContent {
        ExtractedContent {
            documentation: doc.to_string(),
            example_code: example.to_string(),
        }
    }

    #[test]
    fn test_text_prefers_example() {
        let rendered = render(
            &content("func Foo(x int) int\n", "Example:\n  Foo(3)\n"),
            OutputFormat::Text,
        )
        .unwrap();
        assert_eq!(rendered.status_code, 200);
        assert_eq!(rendered.content_type, CONTENT_TYPE_TEXT);
        assert_eq!(
            rendered.body,
            ResponseBody::Text("Example:\n  Foo(3)\n".to_string())
        );
    }

    #[test]
    fn test_text_falls_back_to_documentation() {
        let rendered = render(&content("func Foo()\n", ""), OutputFormat::Text).unwrap();
        assert_eq!(rendered.body, ResponseBody::Text("func Foo()\n".to_string()));
    }

    #[test]
    fn test_html() {
        let rendered = render(
            &content("func Foo(x int) int\n", "Example:\n  Foo(3)\n"),
            OutputFormat::Html,
        )
        .unwrap();
        assert_eq!(rendered.content_type, CONTENT_TYPE_HTML);
        assert_eq!(
            rendered.body,
            ResponseBody::Text("<h2>Example</h2><br>  Foo(3)<br></h2>".to_string())
        );
    }

    #[test]
    fn test_format_html_without_heading() {
        assert_eq!(format_html("func A()\nfunc B()"), "func A()<br>func B()</h2>");
        assert_eq!(
            format_html("Example:\nExample:\n"),
            "<h2>Example</h2><br>Example:<br></h2>"
        );
    }

    #[test]
    fn test_json_includes_both_segments() {
        let rendered = render(
            &content("func Foo()\n", "Example:\n Foo()\n"),
            OutputFormat::Json,
        )
        .unwrap();
        assert_eq!(rendered.content_type, CONTENT_TYPE_JSON);
        assert_eq!(
            rendered.body,
            ResponseBody::Json(serde_json::json!({
                "example": "Example:\n Foo()\n",
                "doc": "func Foo()\n",
            }))
        );
    }

    #[test]
    fn test_json_with_documentation_only() {
        let rendered = render(&content("func Foo()\n", ""), OutputFormat::Json).unwrap();
        let wire: serde_json::Value =
            serde_json::from_str(&rendered.body.into_string()).unwrap();
        assert_eq!(wire["example"], "");
        assert_eq!(wire["doc"], "func Foo()\n");
    }

    #[test]
    fn test_json_wire_order() {
        let rendered = render(&content("func Foo()\n", "Example:\n"), OutputFormat::Json).unwrap();
        assert_eq!(
            rendered.body.into_string(),
            r#"{"example":"Example:\n","doc":"func Foo()\n"}"#
        );
    }

    #[test]
    fn test_empty_content_renders_nothing() {
        assert!(render(&ExtractedContent::default(), OutputFormat::Text).is_none());
        assert!(render(&ExtractedContent::default(), OutputFormat::Json).is_none());
    }
}
