// portapack-cli/src/commands/probe.rs
//
// `probe` subcommand: reports which packaging tools answer a version query.

use super::Context;
use crate::cli::ProbeArgs;
use crate::error::{CliError, CliResult};

use portapack_core::Tool;

/// Checks each requested program, or the three configured packagers when
/// none is given. Fails listing the missing ones.
pub fn run_probe(ctx: &Context<'_>, args: &ProbeArgs) -> CliResult<()> {
    let mut missing = Vec::new();

    if args.tools.is_empty() {
        for tool in Tool::ALL {
            let program = ctx.config.program(tool);
            if ctx.runner.is_installed(program) {
                ctx.console.success(&format!("{} found ({})", tool, program));
            } else {
                ctx.console
                    .error(&format!("{} not found ({}). {}", tool, program, tool.install_hint()));
                missing.push(program.to_string());
            }
        }
    } else {
        for program in &args.tools {
            if ctx.runner.is_installed(program) {
                ctx.console.success(&format!("{} found", program));
            } else {
                ctx.console.error(&format!("{} not found", program));
                missing.push(program.clone());
            }
        }
    }

    if missing.is_empty() {
        Ok(())
    } else {
        Err(CliError::MissingTools(missing))
    }
}
