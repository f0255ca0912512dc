// portapack-cli/src/commands/about.rs

use crate::terminal::Console;

const ABOUT_BODY: &[&str] = &[
    "This tool helps you package projects from",
    "different programming languages into",
    "portable executables or folders.",
    "",
    "Supports Python, C#, Java, and generic files.",
    "",
    "Make sure required tools are installed:",
    "- Python & PyInstaller for Python projects",
    "- .NET SDK for C# projects",
    "- JDK 14+ for Java projects (with jpackage tool)",
    "",
    "Thank you for using this tool!",
];

pub fn about_title() -> String {
    format!("Portable App Packager v{}", env!("CARGO_PKG_VERSION"))
}

/// Prints the about screen.
pub fn show_about(console: &Console) {
    console.clear_screen();
    console.line("");
    console.heading(&about_title());
    console.line("");
    for line in ABOUT_BODY {
        console.line(line);
    }
    console.line("");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terminal::CapturedOutput;

    #[test]
    fn test_about_lists_prerequisites() {
        let (console, captured) = CapturedOutput::console();
        show_about(&console);
        let text = captured.text();
        assert!(text.contains(&about_title()));
        assert!(text.contains("Supports Python, C#, Java, and generic files."));
        assert!(text.contains("JDK 14+"));
    }
}
