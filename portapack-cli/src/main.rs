// ============================================================================
// portapack-cli/src/main.rs
// ============================================================================
//
// MAIN ENTRY POINT: Portapack CLI Application
//
// Parses arguments, sets up logging, builds the Console and the tool runner
// once, then hands them to the selected command. With no subcommand the
// interactive menu runs.
//
// Exit status: 0 on success and whenever the menu ends, 1 when a direct
// subcommand fails.
//
// AI-ASSISTANT-INFO: Main entry point for the portapack CLI

use anyhow::Context as _;
use clap::Parser;
use owo_colors::OwoColorize;

use portapack_cli::logging::init_logging;
use portapack_cli::terminal::should_use_color;
use portapack_cli::{Cli, Console, Context, StdinInput, dispatch};
use portapack_core::SystemToolRunner;

use std::process;

fn main() {
    let cli = Cli::parse();
    let use_color = should_use_color(cli.global.no_color);

    if let Err(e) = run(&cli, use_color) {
        let label = if use_color { "Error:".red().bold().to_string() } else { "Error:".to_string() };
        eprintln!("{} {:#}", label, e);
        process::exit(1);
    }
}

fn run(cli: &Cli, use_color: bool) -> anyhow::Result<()> {
    let log_file = init_logging(cli.global.verbose, use_color, cli.global.log_dir.as_deref())
        .context("Could not set up logging")?;
    if let Some(path) = &log_file {
        log::info!("Logging to {}", path.display());
    }
    log::debug!("Arguments: {:?}", cli);

    let console = Console::stdout(use_color);
    let config = cli.global.core_config();
    let runner = SystemToolRunner;
    let ctx = Context {
        runner: &runner,
        config: &config,
        console: &console,
    };

    let mut input = StdinInput;
    dispatch(&ctx, cli.selected_command(), &mut input)?;
    Ok(())
}
