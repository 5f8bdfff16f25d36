//! Output formatting for style check results.

use anyhow::Result;
use cpp_inspector_core::Diagnostic;
use std::path::Path;

/// Output format for style check results.
#[derive(Clone, Copy, Debug, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output.
    #[default]
    Text,
    /// JSON output.
    Json,
    /// One-line-per-diagnostic compact format.
    Compact,
}

/// Print diagnostics in the requested format.
pub fn print(diagnostics: &[Diagnostic], file: &Path, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => print_text(diagnostics, file),
        OutputFormat::Json => return print_json(diagnostics, file),
        OutputFormat::Compact => print_compact(diagnostics, file),
    }
    Ok(())
}

fn print_text(diagnostics: &[Diagnostic], file: &Path) {
    for diagnostic in diagnostics {
        println!("{}", diagnostic.render());
    }

    if diagnostics.is_empty() {
        println!("\x1b[32mNo style issues found in {}\x1b[0m", file.display());
    } else {
        println!(
            "\x1b[31mFound {} style issue(s) in {}\x1b[0m",
            diagnostics.len(),
            file.display()
        );
    }
}

fn print_json(diagnostics: &[Diagnostic], file: &Path) -> Result<()> {
    #[derive(serde::Serialize)]
    struct Report<'a> {
        file: String,
        diagnostics: &'a [Diagnostic],
    }

    let report = Report {
        file: file.display().to_string(),
        diagnostics,
    };
    let json = serde_json::to_string_pretty(&report)?;
    println!("{json}");
    Ok(())
}

fn print_compact(diagnostics: &[Diagnostic], file: &Path) {
    for diagnostic in diagnostics {
        println!(
            "{}:{}: [{}] {}",
            file.display(),
            diagnostic.line,
            diagnostic.kind,
            diagnostic.message,
        );
    }
}
