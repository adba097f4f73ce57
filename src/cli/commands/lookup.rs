//! Lookup command - run the pipeline once from the command line.

use std::process::ExitCode;

use crate::cli::LookupArgs;
use crate::config::Settings;
use crate::pipeline::ExampleService;
use crate::request::RawRequest;

/// Run the lookup command. The rendered body goes to stdout on success,
/// the error message to stderr otherwise.
pub async fn run(args: LookupArgs, settings: &Settings) -> ExitCode {
    let service = ExampleService::from_settings(settings);

    let raw = RawRequest {
        language: args.language,
        path: args.path,
        package: args.package,
        format: args.format,
        method: args.method,
        document: None,
        position: None,
    };

    match service.lookup(raw).await {
        Ok(rendered) => {
            let body = rendered.body.into_string();
            print!("{body}");
            if !body.ends_with('\n') {
                println!();
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
