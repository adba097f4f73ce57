//! External process invocation.
//!
//! [`CommandProvider`] runs `<command> <args...> <package segments...> <symbol>`
//! without a shell. The child is spawned with `kill_on_drop`, so a timed out
//! invocation is killed when its future is dropped, and `output()` drains
//! both pipes on every exit path.

use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use tokio::process::Command;

use super::{DocProvider, ProviderResult};

#[derive(Debug, Clone)]
pub struct CommandProvider {
    command: String,
    args: Vec<String>,
    /// `None` waits forever
    timeout: Option<Duration>,
}

impl CommandProvider {
    pub fn new(command: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            command: command.into(),
            args,
            timeout: None,
        }
    }

    /// Set the invocation timeout. A zero duration disables it.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = (!timeout.is_zero()).then_some(timeout);
        self
    }

    pub fn command(&self) -> &str {
        &self.command
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Full argument vector passed to the tool for a lookup.
    pub fn argv(&self, package: &[String], symbol: &str) -> Vec<String> {
        let mut argv = self.args.clone();
        argv.extend(package.iter().cloned());
        argv.push(symbol.to_string());
        argv
    }

    async fn run(&self, argv: Vec<String>) -> ProviderResult {
        let mut cmd = Command::new(&self.command);
        cmd.args(&argv)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        let output = match self.timeout {
            Some(limit) => match tokio::time::timeout(limit, cmd.output()).await {
                Ok(result) => result,
                Err(_) => {
                    tracing::warn!(
                        "[provider] {} timed out after {}s",
                        self.command,
                        limit.as_secs_f64()
                    );
                    return ProviderResult::failed(format!(
                        "timed out after {}s",
                        limit.as_secs_f64()
                    ));
                }
            },
            None => cmd.output().await,
        };

        let output = match output {
            Ok(output) => output,
            Err(e) => {
                tracing::warn!("[provider] failed to start {}: {e}", self.command);
                return ProviderResult::failed(e.to_string());
            }
        };

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            let detail = if stderr.is_empty() {
                format!("provider unavailable ({})", output.status)
            } else {
                stderr
            };
            return ProviderResult::failed(detail);
        }

        ProviderResult::ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

#[async_trait]
impl DocProvider for CommandProvider {
    fn tool(&self) -> &str {
        &self.command
    }

    fn command_line(&self, package: &[String], symbol: &str) -> String {
        let mut line = self.command.clone();
        for arg in self.argv(package, symbol) {
            line.push(' ');
            line.push_str(&arg);
        }
        line
    }

    async fn fetch(&self, package: &[String], symbol: &str) -> ProviderResult {
        crate::debug_event!(
            "provider",
            "exec",
            "{}",
            self.command_line(package, symbol)
        );
        self.run(self.argv(package, symbol)).await
    }
}
