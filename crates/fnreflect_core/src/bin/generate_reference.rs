//! Generate a Markdown reference of the `fnreflect_core` vocabularies.
//!
//! Renders the value-category and function-family registries as Markdown tables. Output goes to stdout, or to the
//! file given as the first argument.
//!
//! ## Examples
//! Run from the workspace root:
//! ```bash
//! cargo run -p fnreflect_core --bin generate_reference -- docs/reference.md
//! ```

use std::env;
use std::fs;
use std::io::{self, Write as _};
use std::process::ExitCode;

use fnreflect_core::registry::VocabInfo;
use fnreflect_core::{categories, families};

fn ensure_single_blank_line(out: &mut String) {
    while out.ends_with("\n\n\n") {
        out.pop();
    }
    if out.is_empty() || out.ends_with("\n\n") {
        return;
    }
    if out.ends_with('\n') {
        out.push('\n');
    } else {
        out.push_str("\n\n");
    }
}

fn start_section(out: &mut String, heading: &str) {
    ensure_single_blank_line(out);
    out.push_str(heading);
    out.push_str("\n\n");
}

fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|")
}

fn write_table<Id>(out: &mut String, table: &[VocabInfo<Id>]) {
    out.push_str("| Name | Aliases | Description | Examples |\n");
    out.push_str("|---|---|---|---|\n");
    for info in table {
        let aliases = if info.aliases.is_empty() {
            String::new()
        } else {
            info.aliases
                .iter()
                .map(|a| format!("`{a}`"))
                .collect::<Vec<_>>()
                .join(", ")
        };
        let examples = info
            .examples
            .iter()
            .map(|e| format!("`{}`", escape_cell(e.code)))
            .collect::<Vec<_>>()
            .join("<br>");
        out.push_str(&format!(
            "| `{}` | {} | {} | {} |\n",
            info.canonical,
            aliases,
            escape_cell(info.description),
            examples
        ));
    }
}

fn render() -> String {
    let mut out = String::new();
    out.push_str("# fnreflect vocabulary reference\n\n");
    out.push_str("Generated from `fnreflect_core` registries. Do not edit by hand.\n");

    start_section(&mut out, "## Value categories");
    write_table(&mut out, categories::CATEGORIES);

    start_section(&mut out, "## Function families");
    write_table(&mut out, families::FAMILIES);

    out
}

fn main() -> ExitCode {
    let rendered = render();
    let result = match env::args().nth(1) {
        Some(path) => fs::write(&path, rendered),
        None => io::stdout().write_all(rendered.as_bytes()),
    };
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("failed to write reference: {err}");
            ExitCode::FAILURE
        }
    }
}
