use anyhow::Context;
use launch_core::{LaunchError, Launcher};

fn main() {
    // stdout carries only the announcement line; diagnostics go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let code = match run() {
        Ok(code) => code,
        Err(e) => {
            // Print the full error chain (anyhow's alternate Display)
            eprintln!("error: {e:#}");
            exit_code(&e)
        }
    };
    std::process::exit(code);
}

/// Command-line arguments are ignored: the script is chosen by `RUN_SCRIPT`
/// alone.
fn run() -> anyhow::Result<i32> {
    let launcher = Launcher::from_env();
    tracing::debug!(config = ?launcher.config(), "resolved launch config");

    let stdout = std::io::stdout();
    let code = launcher
        .run(&mut stdout.lock())
        .with_context(|| format!("failed to launch {}", launcher.script_display()))?;
    Ok(code)
}

fn exit_code(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<LaunchError>()
        .map(LaunchError::exit_code)
        .unwrap_or(1)
}
