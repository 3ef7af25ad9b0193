//! CLI entry point for darght.

use darght::build_info::BuildInfo;
use darght::cli;
use darght::config::load_config;
use darght::detector::Detector;
use std::process::ExitCode;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let loaded = load_config();
    darght::logging::init(&loaded.config.log_filter);
    for warning in &loaded.diagnostics.warnings {
        eprintln!("warning: {warning}");
    }

    let detector = Detector::for_host();
    let build = BuildInfo::current();
    let mut stdout = std::io::stdout();
    if let Err(e) = cli::run(
        std::env::args_os(),
        &detector,
        &build,
        &loaded.config,
        &mut stdout,
    )
    .await
    {
        tracing::debug!(error = %e, "failed to write command output");
    }
    ExitCode::SUCCESS
}
