//! one-start CLI
//!
//! Usage: one-start [--config <PATH>] [--color <WHEN>] [-v]

use std::io;
use std::process::ExitCode;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use one_start::config::load_with_warnings;
use one_start::presentation::{create_session_ports, Cli};
use one_start::ui::context::UiContext;
use one_start::ui::messages;
use one_start::ui::output::{print_config_warnings, status_line};
use one_start::ui::primitives::icon::Icon;
use one_start::ui::primitives::text::ColoredText;
use one_start::{OneStartError, Session, SessionOutcome};

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let ui = UiContext::new(cli.verbose, cli.color);
    let cwd = std::env::current_dir().context("cannot determine the working directory")?;
    let config_path = cli.config_path(&cwd);

    let (config, warnings) = load_with_warnings(&config_path)?;
    print_config_warnings(&config_path, &warnings, &ui);

    if !ui.caps.is_interactive {
        eprintln!(
            "{}",
            status_line(Icon::Warning, &ColoredText::warning(messages::NOT_INTERACTIVE), &ui)
        );
        return Ok(ExitCode::SUCCESS);
    }

    let interrupt = install_interrupt_handler();

    let mut ports = create_session_ports(&config, &cwd, &ui);
    let session = Session::new(&config, &cwd, ports.runner.as_ref(), &ports.hooks)
        .with_events(ports.events.clone())
        .with_interrupt(interrupt);

    match session.run(&mut ports.prompter) {
        Ok(SessionOutcome::Completed { .. }) => Ok(ExitCode::SUCCESS),
        Ok(SessionOutcome::Aborted) => {
            eprintln!(
                "{}",
                status_line(Icon::Arrow, &ColoredText::dim(messages::ABORTED), &ui)
            );
            Ok(ExitCode::SUCCESS)
        }
        // the event sink has already reported the failed build
        Err(OneStartError::BuildAborted(_)) => Ok(ExitCode::FAILURE),
        Err(OneStartError::Interrupted) => Ok(ExitCode::from(INTERRUPTED_EXIT_CODE)),
        Err(err) => Err(err.into()),
    }
}

/// `RUST_LOG` wins; otherwise `-v` enables debug and `-vv` trace output.
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "one_start=debug",
        _ => "one_start=trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

/// 128 + SIGINT, as shells report it
const INTERRUPTED_EXIT_CODE: u8 = 130;

/// Children get Ctrl-C too. one-start restores the cursor, waits for the
/// running child to exit, then runs nothing else.
fn install_interrupt_handler() -> Arc<AtomicBool> {
    let interrupted = Arc::new(AtomicBool::new(false));
    let interrupted_clone = interrupted.clone();
    let result = ctrlc::set_handler(move || {
        interrupted_clone.store(true, Ordering::SeqCst);
        let _ = crossterm::execute!(io::stderr(), crossterm::cursor::Show);
    });
    if let Err(err) = result {
        tracing::warn!(error = %err, "could not install Ctrl-C handler");
    }
    interrupted
}
