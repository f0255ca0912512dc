// portapack-cli/src/commands/copy.rs
//
// Copy of an arbitrary file or folder: menu flow and `copy` subcommand.
// The entry lands inside the destination directory under its own name,
// replacing whatever was there.

use super::{Context, require_non_empty};
use crate::cli::CopyArgs;
use crate::error::{CliResult, invalid_input};
use crate::input::{InputProvider, ask_path, confirm};

use portapack_core::{CoreError, copy_single};

use std::fs;
use std::path::Path;

pub fn copy_flow(ctx: &Context<'_>, input: &mut dyn InputProvider) -> CliResult<()> {
    let source = ask_path(input, "Enter source file or folder path: ")?;
    if !source.exists() {
        return Err(CoreError::SourceNotFound(source).into());
    }

    let destination = ask_path(input, "Enter destination directory: ")?;
    require_non_empty(&destination, "Destination directory cannot be empty")?;

    if !destination.exists() {
        if !confirm(input, "Destination does not exist. Create it? (y/n): ")? {
            ctx.console
                .info("Destination directory not created. Operation cancelled.");
            return Ok(());
        }
        create_destination(&destination)?;
    }

    copy(ctx, &source, &destination)
}

pub fn run_copy(ctx: &Context<'_>, args: &CopyArgs) -> CliResult<()> {
    if !args.source.exists() {
        return Err(CoreError::SourceNotFound(args.source.clone()).into());
    }
    require_non_empty(&args.dest, "Destination directory cannot be empty")?;

    if !args.dest.exists() {
        if !args.create {
            return Err(invalid_input(format!(
                "Destination '{}' does not exist (pass --create to create it)",
                args.dest.display()
            )));
        }
        create_destination(&args.dest)?;
    }

    copy(ctx, &args.source, &args.dest)
}

fn create_destination(destination: &Path) -> CliResult<()> {
    log::debug!("Creating destination directory {}", destination.display());
    fs::create_dir_all(destination).map_err(|e| {
        invalid_input(format!(
            "Cannot create destination directory '{}': {}",
            destination.display(),
            e
        ))
    })
}

fn copy(ctx: &Context<'_>, source: &Path, destination: &Path) -> CliResult<()> {
    let copied = copy_single(source, destination)?;
    if copied.is_dir() {
        ctx.console
            .success(&format!("Folder copied to {}", copied.display()));
    } else {
        ctx.console
            .success(&format!("File copied to {}", destination.display()));
    }
    Ok(())
}
