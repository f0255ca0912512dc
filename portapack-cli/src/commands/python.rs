// portapack-cli/src/commands/python.rs
//
// Python packaging: menu flow and `python` subcommand.

use super::{Context, report_sync, require_non_empty, with_spinner};
use crate::cli::PythonArgs;
use crate::error::{CliResult, invalid_input};
use crate::input::{InputProvider, ask_path, confirm};

use portapack_core::packaging::{PythonPackageRequest, package_python};
use portapack_core::utils::is_file_with_extension;

/// Prompts for script, output directory, single-file mode and icon, then
/// packages. Invalid answers end the flow before the next question.
pub fn python_flow(ctx: &Context<'_>, input: &mut dyn InputProvider) -> CliResult<()> {
    let script = ask_path(input, "Enter path to your main Python file (e.g. main.py): ")?;
    if !is_file_with_extension(&script, "py") {
        return Err(invalid_input(format!(
            "'{}' is not an existing .py file",
            script.display()
        )));
    }

    let output_dir = ask_path(input, "Enter output directory: ")?;
    require_non_empty(&output_dir, "Output directory cannot be empty")?;

    let onefile = confirm(input, "Create single EXE file? (y/n): ")?;

    let icon = ask_path(input, "Enter icon file path (leave empty for none): ")?;
    let icon = (!icon.as_os_str().is_empty()).then_some(icon);

    package(
        ctx,
        &PythonPackageRequest {
            script,
            output_dir,
            onefile,
            icon,
        },
    )
}

pub fn run_python(ctx: &Context<'_>, args: &PythonArgs) -> CliResult<()> {
    package(
        ctx,
        &PythonPackageRequest {
            script: args.script.clone(),
            output_dir: args.output.clone(),
            onefile: args.onefile,
            icon: args.icon.clone(),
        },
    )
}

fn package(ctx: &Context<'_>, request: &PythonPackageRequest) -> CliResult<()> {
    if let Some(icon) = &request.icon {
        if request.usable_icon().is_none() {
            ctx.console
                .warning(&format!("Icon file '{}' not found. Ignoring icon.", icon.display()));
        }
    }

    let message = format!(
        "Packaging '{}' into '{}' with PyInstaller...",
        request.script.display(),
        request.output_dir.display()
    );
    let outcome = with_spinner(ctx.console, &message, || {
        package_python(ctx.runner, ctx.config, request)
    })?;
    ctx.console.success("Python packaging done.");

    match &outcome.supporting_files {
        Some(Ok(report)) => report_sync(ctx.console, report),
        Some(Err(e)) => ctx
            .console
            .warning(&format!("Supporting files were not copied: {}", e)),
        None => {}
    }
    Ok(())
}
