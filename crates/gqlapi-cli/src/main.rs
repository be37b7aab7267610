use gqlapi_cli::{cli, run, telemetry, Invocation};
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    let matches = cli().get_matches();

    let invocation = match Invocation::from_matches(&matches) {
        Ok(invocation) => invocation,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::from(2);
        }
    };

    telemetry::init(invocation.verbose);

    match run(&invocation).await {
        Ok(code) => code,
        Err(e) => {
            tracing::error!("Walkthrough failed: {:#}", e);
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
