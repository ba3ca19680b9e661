//! Print the OpenAPI document as JSON.

use std::io::{self, Write};
use std::process::ExitCode;

use backend::ApiDoc;
use utoipa::OpenApi;

fn main() -> ExitCode {
    match ApiDoc::openapi().to_pretty_json() {
        Ok(json) => {
            if let Err(err) = writeln!(io::stdout().lock(), "{json}") {
                drop(err);
                return ExitCode::FAILURE;
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            if let Err(write_err) =
                writeln!(io::stderr().lock(), "failed to serialise OpenAPI document: {err}")
            {
                drop(write_err);
            }
            ExitCode::FAILURE
        }
    }
}
