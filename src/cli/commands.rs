//! Command implementations. Each returns the rendered output instead of printing it.

use serde::Serialize;

use fnreflect_core::registry::VocabInfo;
use fnreflect_core::{categories, families};

use super::{CliError, CliResult, OutputFormat, demo};
use crate::summary::FunctionSummary;

#[derive(Serialize)]
struct VocabEntry {
    name: &'static str,
    aliases: &'static [&'static str],
    description: &'static str,
}

#[derive(Serialize)]
struct Reference {
    categories: Vec<VocabEntry>,
    families: Vec<VocabEntry>,
}

fn entries<Id>(table: &[VocabInfo<Id>]) -> Vec<VocabEntry> {
    table
        .iter()
        .map(|info| VocabEntry {
            name: info.canonical,
            aliases: info.aliases,
            description: info.description,
        })
        .collect()
}

fn to_json(value: &impl Serialize) -> CliResult<String> {
    serde_json::to_string_pretty(value)
        .map(|mut s| {
            s.push('\n');
            s
        })
        .map_err(|e| CliError::failure(format!("failed to serialize output: {e}")))
}

/// `context: message [code]`, keeping the diagnostic code when there is one.
fn diagnostic_message(context: &str, report: &miette::Report) -> String {
    match report.code() {
        Some(code) => format!("{context}: {report} [{code}]"),
        None => format!("{context}: {report}"),
    }
}

fn render_table_text<Id>(out: &mut String, heading: &str, table: &[VocabInfo<Id>]) {
    out.push_str(heading);
    out.push('\n');
    for info in table {
        out.push_str(&format!("  {:<16} {}\n", info.canonical, info.description));
    }
}

/// Render the vocabulary reference.
pub fn reference(format: OutputFormat) -> CliResult<String> {
    match format {
        OutputFormat::Json => to_json(&Reference {
            categories: entries(categories::CATEGORIES),
            families: entries(families::FAMILIES),
        }),
        OutputFormat::Text => {
            let mut out = String::new();
            render_table_text(&mut out, "Value categories:", categories::CATEGORIES);
            out.push('\n');
            render_table_text(&mut out, "Function families:", families::FAMILIES);
            Ok(out)
        }
    }
}

/// Describe the demo registry, optionally keeping only names containing `filter`.
pub fn demo(format: OutputFormat, filter: Option<&str>) -> CliResult<String> {
    let registry = demo::registry()
        .map_err(|e| CliError::failure(diagnostic_message("failed to build demo registry", &e)))?;
    let selected: Vec<_> = registry
        .iter()
        .filter(|f| filter.is_none_or(|k| f.name().contains(k)))
        .collect();

    tracing::info!(total = registry.len(), shown = selected.len(), "described demo functions");

    match format {
        OutputFormat::Json => to_json(&selected.iter().map(|f| FunctionSummary::of(*f)).collect::<Vec<_>>()),
        OutputFormat::Text => {
            let mut out = String::new();
            for function in selected {
                out.push_str(&format!("{:<16} {function}", function.family().to_string()));
                let extensions: Vec<_> = function.user_data().iter().map(|e| e.module()).collect();
                if !extensions.is_empty() {
                    out.push_str(&format!("  [{}]", extensions.join(", ")));
                }
                out.push('\n');
            }
            Ok(out)
        }
    }
}
