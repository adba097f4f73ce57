//! Marker-based splitting of documentation tool output.
//!
//! Documentation starts at the first `func` and example code at the first
//! `Example` found at or after it. Only the first documentation block and the
//! first example following it are recovered; grouped or overloaded symbols
//! with several entries are not disambiguated.

use serde::Serialize;

pub const DOC_MARKER: &str = "func";
pub const EXAMPLE_MARKER: &str = "Example";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExtractedContent {
    pub documentation: String,
    pub example_code: String,
}

impl ExtractedContent {
    /// Neither marker was found.
    pub fn is_empty(&self) -> bool {
        self.documentation.is_empty() && self.example_code.is_empty()
    }

    /// The segment shown by single-segment representations: the example if
    /// there is one, otherwise the documentation.
    pub fn preferred(&self) -> Option<&str> {
        if !self.example_code.is_empty() {
            Some(&self.example_code)
        } else if !self.documentation.is_empty() {
            Some(&self.documentation)
        } else {
            None
        }
    }
}

/// Split raw tool output into documentation and example code.
pub fn extract(raw: &str) -> ExtractedContent {
    let func = raw.find(DOC_MARKER);
    let example = match func {
        Some(f) => raw[f..].find(EXAMPLE_MARKER).map(|e| f + e),
        None => raw.find(EXAMPLE_MARKER),
    };

    let documentation = match (func, example) {
        (Some(f), Some(e)) if e > f => &raw[f..e],
        (Some(f), _) => &raw[f..],
        (None, _) => "",
    };
    let example_code = example.map(|e| &raw[e..]).unwrap_or_default();

    ExtractedContent {
        documentation: documentation.to_string(),
        example_code: example_code.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_doc_and_example() {
        let raw = "package strings\n\nfunc Foo(x int) int\n    Foo doubles.\n\nExample:\n  Foo(3)\n";
        let content = extract(raw);
        let f = raw.find("func").unwrap();
        let e = raw.find("Example").unwrap();
        assert_eq!(content.documentation, &raw[f..e]);
        assert_eq!(content.example_code, &raw[e..]);
        assert_eq!(content.preferred(), Some(&raw[e..]));
    }

    #[test]
    fn test_scenario_output() {
        let content = extract("func Foo(x int) int\nExample:\n  Foo(3)\n");
        assert_eq!(content.documentation, "func Foo(x int) int\n");
        assert_eq!(content.example_code, "Example:\n  Foo(3)\n");
    }

    #[test]
    fn test_func_without_example() {
        let content = extract("use this\nfunc Bar() error\n    Bar fails.\n");
        assert_eq!(content.documentation, "func Bar() error\n    Bar fails.\n");
        assert!(content.example_code.is_empty());
        assert_eq!(content.preferred(), Some("func Bar() error\n    Bar fails.\n"));
    }

    #[test]
    fn test_example_before_func_is_not_used_as_example() {
        // The example search starts at the first func
        let content = extract("Example header\nfunc Baz()\n");
        assert_eq!(content.documentation, "func Baz()\n");
        assert!(content.example_code.is_empty());
    }

    #[test]
    fn test_example_without_func() {
        let content = extract("type T struct{}\nExample:\n  T{}\n");
        assert!(content.documentation.is_empty());
        assert_eq!(content.example_code, "Example:\n  T{}\n");
    }

    #[test]
    fn test_no_markers() {
        let content = extract("package io provides...");
        assert!(content.is_empty());
        assert_eq!(content.preferred(), None);
        assert!(extract("").is_empty());
    }

    #[test]
    fn test_first_occurrence_wins() {
        let raw = "func A()\nExample:\n a()\nfunc B()\nExample:\n b()\n";
        let content = extract(raw);
        assert_eq!(content.documentation, "func A()\n");
        assert_eq!(content.example_code, &raw[9..]);
    }

    #[test]
    fn test_multibyte_text_around_markers() {
        let content = extract("¿qué? func Ñ() — Example: ü\n");
        assert_eq!(content.documentation, "func Ñ() — ");
        assert_eq!(content.example_code, "Example: ü\n");
    }
}
