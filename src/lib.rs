//! Code example lookup service.
//!
//! Answers "show me an example for symbol S in package P of language L" by
//! running a language-specific documentation tool, splitting its output
//! into documentation and example code, and rendering the result as text,
//! HTML or JSON.

pub mod cli;
pub mod config;
pub mod error;
pub mod extract;
#[cfg(feature = "http-server")]
pub mod http;
pub mod logging;
pub mod pipeline;
pub mod provider;
pub mod render;
pub mod request;

pub use config::Settings;
pub use error::{ExampleError, ExampleResult};
pub use extract::{ExtractedContent, extract};
pub use pipeline::ExampleService;
pub use provider::{DocProvider, LanguageRegistry, ProviderResult};
pub use render::{RenderedResponse, ResponseBody, render};
pub use request::{DocRequest, OutputFormat, RawRequest, decompose};
