//! Application entry point and dispatch.

use std::io::{self, Write};

use anyhow::Result;

use dxcalc_cli::registry::DefaultPresenterFactory;
use dxcalc_cli::ui::print_warning;
use dxcalc_core::{MetricsCalculator, MAX_DECIMALS};
use dxcalc_orchestration::orchestrator::{
    analyze_presentation_results, evaluate_input, execute_presenters,
};
use dxcalc_orchestration::presenter_selection::get_presenters_to_run;
use dxcalc_tui::{FormState, TuiApp, TuiMessage};

use crate::config::AppConfig;
use crate::version::full_version;

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        dxcalc_cli::completion::generate_completion(&mut cmd, shell, &mut io::stdout());
        return Ok(());
    }

    if config.decimals > MAX_DECIMALS && !config.quiet {
        print_warning(&format!(
            "--decimals {} is above the maximum, using {MAX_DECIMALS}",
            config.decimals
        ));
    }

    if config.tui {
        return run_tui(config);
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_cli(config, &mut out)
}

/// Evaluate the configured input and write the selected presenters to `out`.
pub fn run_cli(config: &AppConfig, out: &mut dyn Write) -> Result<()> {
    let opts = config.options()?;
    let input = config.input()?;
    let display = config.display_options(&opts);

    let factory = DefaultPresenterFactory::new(display);
    let presenters = get_presenters_to_run(&config.format, &factory)?;

    if display.verbose {
        writeln!(out, "{}", full_version())?;
    }

    let evaluation = evaluate_input(&input, &opts);
    let undefined = evaluation.undefined_metrics();
    if !undefined.is_empty() {
        tracing::info!(
            count = undefined.len(),
            "metrics with a zero denominator are reported as 0"
        );
    }

    let results = execute_presenters(&evaluation, &presenters, out);
    analyze_presentation_results(&results)?;
    Ok(())
}

fn run_tui(config: &AppConfig) -> Result<()> {
    let opts = config.options()?;
    let input = config.input()?;
    let display = config.display_options(&opts);

    let (tx, rx) = crossbeam_channel::unbounded::<TuiMessage>();
    let mut app = TuiApp::new(
        rx,
        FormState::from_input(&input),
        MetricsCalculator::new(opts),
        display,
    );

    let _ = tx.send(TuiMessage::Log(format!(
        "started in {} mode, rounding {}",
        input.mode_name(),
        opts.rounding
    )));

    // Run TUI event loop on the main thread
    app.run().map_err(|e| anyhow::anyhow!("TUI error: {e}"))?;

    Ok(())
}
