//! Letter Slider binary entry point
//!
//! Dispatches to the TUI or to a one-shot command based on CLI arguments.

use clap::Parser;
use color_eyre::eyre::Result;
use letter_slider::{
    cli::{Args, Command},
    commands,
};

/// Initialize logging
///
/// - For CLI commands: `tracing_subscriber::fmt` on stderr, filtered by `RUST_LOG` (default `warn`).
/// - For TUI mode: `TuiTracingSubscriberLayer` captures events for the log pane.
fn init_logging(tui_level: Option<&str>) {
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    if let Some(level) = tui_level {
        // TUI mode: stderr is the terminal, so events only go to the log pane
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(format!("letter_slider={level}")));

        tracing_subscriber::registry()
            .with(filter)
            .with(tui_logger::TuiTracingSubscriberLayer)
            .init();

        let level_filter = level.parse().unwrap_or(log::LevelFilter::Info);
        if let Err(e) = tui_logger::init_logger(level_filter) {
            eprintln!("Failed to initialize log pane: {e}");
        }
        tui_logger::set_default_level(level_filter);
    } else {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
            )
            .init();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    let config_path = args.config.as_deref();

    match args.command {
        Some(Command::Replay { steps, json }) => {
            init_logging(None);
            let config = commands::load_config(config_path)?;
            commands::replay(&config, &steps, json)
        }

        Some(Command::Validate) => {
            init_logging(None);
            let config = commands::load_config(config_path)?;
            config.print_summary();
            Ok(())
        }

        // No subcommand - interactive picker
        None | Some(Command::Tui) => {
            // Load config BEFORE entering alternate screen so first-run messages stay visible
            let config = commands::load_config(config_path)?;

            #[cfg(feature = "tui")]
            {
                init_logging(Some(&config.settings.log_level));
                letter_slider::tui::run(config).await
            }
            #[cfg(not(feature = "tui"))]
            {
                let _ = config;
                eprintln!("TUI feature not enabled");
                eprintln!("Rebuild with: cargo build --features tui");
                std::process::exit(1);
            }
        }
    }
}
