//! Go documentation provider (`godoc -ex <package> <symbol>`).
//!
//! `godoc` prints declarations starting with `func` and, with `-ex`, the
//! package examples introduced by `Example:` lines. Go must be installed
//! on the host for lookups to succeed.

use std::time::Duration;

use async_trait::async_trait;

use super::{CommandProvider, DocProvider, ProviderResult};

/// Language key the provider is registered under
pub const LANGUAGE: &str = "go";
pub const GODOC_COMMAND: &str = "godoc";
pub const GODOC_ARGS: &[&str] = &["-ex"];

pub struct GoDocProvider {
    inner: CommandProvider,
}

impl GoDocProvider {
    pub fn new(timeout: Duration) -> Self {
        Self::with_command(GODOC_COMMAND, timeout)
    }

    /// Use a different `godoc` binary, e.g. an absolute path.
    pub fn with_command(command: impl Into<String>, timeout: Duration) -> Self {
        let args = GODOC_ARGS.iter().map(|a| a.to_string()).collect();
        Self {
            inner: CommandProvider::new(command, args).with_timeout(timeout),
        }
    }
}

#[async_trait]
impl DocProvider for GoDocProvider {
    fn tool(&self) -> &str {
        self.inner.command()
    }

    fn command_line(&self, package: &[String], symbol: &str) -> String {
        self.inner.command_line(package, symbol)
    }

    async fn fetch(&self, package: &[String], symbol: &str) -> ProviderResult {
        self.inner.fetch(package, symbol).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_godoc_command_line() {
        let provider = GoDocProvider::new(Duration::from_secs(30));
        let package = vec!["net".to_string(), "http".to_string()];
        assert_eq!(
            provider.command_line(&package, "Get"),
            "godoc -ex net http Get"
        );
        assert_eq!(provider.tool(), "godoc");
    }

    #[test]
    fn test_tool_names_configured_binary() {
        let provider = GoDocProvider::with_command("/opt/go/bin/godoc", Duration::from_secs(30));
        assert_eq!(provider.tool(), "/opt/go/bin/godoc");
        assert_eq!(
            provider.command_line(&["io".to_string()], "Reader"),
            "/opt/go/bin/godoc -ex io Reader"
        );
    }

    #[tokio::test]
    async fn test_missing_binary_reports_failure() {
        let provider =
            GoDocProvider::with_command("/nonexistent/bin/godoc", Duration::from_secs(5));
        let result = provider.fetch(&["io".to_string()], "Reader").await;
        assert!(!result.success);
        assert!(result.error_detail.is_some());
    }
}
