//! `toolbelt new` - scaffold a C++/CMake project

use anyhow::Result;
use std::io::{self, Write};
use std::path::PathBuf;

use toolbelt::config;
use toolbelt::prompt::{self, LineSource};
use toolbelt::scaffold::{Scaffold, ScaffoldReport};

const NAME_PROMPT: &str = "Please enter project name:";

pub fn execute(name: Option<String>, dir: Option<PathBuf>) -> Result<()> {
    let config = config::load()?;
    let base_dir = dir.unwrap_or_else(|| config.scaffold.resolved_base_dir());

    let stdin = io::stdin();
    let name = resolve_name(name, &mut stdin.lock(), &mut io::stdout())?;

    let report = Scaffold::new(&base_dir).generate(&name)?;
    display_report(&report);

    Ok(())
}

/// Use the argument if given, otherwise ask for it
fn resolve_name(
    name: Option<String>,
    input: &mut impl LineSource,
    out: &mut impl Write,
) -> Result<String> {
    match name {
        Some(name) => Ok(name),
        None => prompt::ask(NAME_PROMPT, input, out),
    }
}

fn display_report(report: &ScaffoldReport) {
    println!("📁 Created {}", report.root.display());
    for file in &report.files {
        println!("  ✓ {}", file.display());
    }
    println!("\n🚀 Next: cd {} && cmake -B build && cmake --build build", report.root.display());
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_argument_skips_prompt() {
        let mut input = Cursor::new("ignored\n");
        let mut out = Vec::new();

        let name = resolve_name(Some("demo".to_string()), &mut input, &mut out).unwrap();

        assert_eq!(name, "demo");
        assert!(out.is_empty());
    }

    #[test]
    fn test_missing_argument_prompts() {
        let mut input = Cursor::new("demo\n");
        let mut out = Vec::new();

        let name = resolve_name(None, &mut input, &mut out).unwrap();

        assert_eq!(name, "demo");
        assert_eq!(String::from_utf8(out).unwrap(), format!("{NAME_PROMPT}\n"));
    }
}
