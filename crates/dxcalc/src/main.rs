//! DxCalc: diagnostic test calculator.

use std::process::ExitCode;

use dxcalc_cli::ui::print_error;
use dxcalc_lib::{app, config, errors};

fn main() -> ExitCode {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    // Parse CLI args and run
    let config = config::AppConfig::parse();
    match app::run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            print_error(&format!("{err:#}"));
            let code = errors::exit_code(&err);
            ExitCode::from(u8::try_from(code).unwrap_or(1))
        }
    }
}
