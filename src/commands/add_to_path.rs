//! `toolbelt add-to-path` - install a script into the scripts directory
//! and put that directory on PATH

use anyhow::Result;
use colored::Colorize;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use toolbelt::config;
use toolbelt::installer::{InstallError, InstallReport, Installer, InstallerSettings, PathUpdate};
use toolbelt::prompt::{self, LineSource};

const FILE_PROMPT: &str = "Enter file name:";

/// Returns the process exit code: 0 on success, 1 if the file is missing
pub fn execute(
    file: Option<String>,
    scripts_dir: Option<PathBuf>,
    self_install: bool,
) -> Result<i32> {
    let config = config::load()?;
    let mut settings = InstallerSettings::from_config(&config.installer);
    if let Some(dir) = scripts_dir {
        settings.scripts_dir = dir;
    }
    settings.self_install |= self_install;

    let stdin = io::stdin();
    let file = resolve_file(file, &mut stdin.lock(), &mut io::stdout())?;

    run(settings, Path::new(&file))
}

fn run(settings: InstallerSettings, file: &Path) -> Result<i32> {
    let rc_files = settings.rc_files.clone();
    match Installer::new(settings).install(file) {
        Ok(report) => {
            display_report(&report, &rc_files);
            Ok(0)
        }
        Err(e) => match e.downcast_ref::<InstallError>() {
            Some(precondition) => {
                eprintln!("{} {}", "❌".red(), precondition.to_string().as_str().red());
                Ok(1)
            }
            None => Err(e),
        },
    }
}

fn resolve_file(
    file: Option<String>,
    input: &mut impl LineSource,
    out: &mut impl Write,
) -> Result<String> {
    match file {
        Some(file) => Ok(file),
        None => prompt::ask(FILE_PROMPT, input, out),
    }
}

/// Warning shown when none of the configured startup files exist
fn missing_rc_message(rc_files: &[String]) -> String {
    let names: Vec<String> = rc_files.iter().map(|name| format!("~/{name}")).collect();
    format!(
        "⚠️  Could not find {}. Please add the following line manually:",
        names.join(" or ")
    )
}

fn display_report(report: &InstallReport, rc_files: &[String]) {
    println!(
        "  ✓ Copied {} to {} and made it executable",
        report.source_path.display(),
        report.scripts_dir.display()
    );

    if let Some(self_path) = &report.self_installed {
        println!("  ✓ Installed toolbelt itself as {}", self_path.display());
    }

    match &report.path_update {
        PathUpdate::Added { rc_file } => {
            if let Some(backup) = &report.rc_backup {
                println!("  ✓ Backed up {} to {}", rc_file.display(), backup.display());
            }
            println!(
                "  ✓ Added {} to PATH in {}",
                report.scripts_dir.display(),
                rc_file.display()
            );
            println!("\nPlease run the following command to update your current shell session:");
            println!("{}", format!("source {}", rc_file.display()).as_str().bold());
        }
        PathUpdate::AlreadyPresent { rc_file } => {
            println!(
                "  ✓ The path {} is already in the PATH variable in {}",
                report.scripts_dir.display(),
                rc_file.display()
            );
        }
        PathUpdate::NoStartupFile => {
            println!("{}", missing_rc_message(rc_files).as_str().yellow());
            println!("{}", report.export_line);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Cursor;
    use tempfile::TempDir;

    fn settings_in(tmp: &TempDir) -> InstallerSettings {
        InstallerSettings {
            scripts_dir: tmp.path().join("scripts"),
            home_dir: tmp.path().to_path_buf(),
            rc_files: vec![".zshrc".to_string(), ".bashrc".to_string()],
            self_install: false,
            self_exe: None,
            backup_rc: false,
            backups_dir: tmp.path().join("backups"),
        }
    }

    #[test]
    fn test_missing_file_exits_one() -> Result<()> {
        let tmp = TempDir::new()?;
        let code = run(settings_in(&tmp), &tmp.path().join("missing.sh"))?;

        assert_eq!(code, 1);
        assert!(!tmp.path().join("scripts").exists());
        Ok(())
    }

    #[test]
    fn test_success_exits_zero() -> Result<()> {
        let tmp = TempDir::new()?;
        let script = tmp.path().join("hello.sh");
        fs::write(&script, "echo hi\n")?;

        let code = run(settings_in(&tmp), &script)?;

        assert_eq!(code, 0);
        assert!(tmp.path().join("scripts/hello.sh").is_file());
        Ok(())
    }

    #[test]
    fn test_missing_rc_message_lists_default_files() {
        let rc_files = vec![".zshrc".to_string(), ".bashrc".to_string()];
        assert_eq!(
            missing_rc_message(&rc_files),
            "⚠️  Could not find ~/.zshrc or ~/.bashrc. Please add the following line manually:"
        );
    }

    #[test]
    fn test_missing_rc_message_follows_config() {
        let rc_files = vec![".profile".to_string()];
        let message = missing_rc_message(&rc_files);

        assert!(message.contains("~/.profile"));
        assert!(!message.contains(".zshrc"));
    }

    #[test]
    fn test_missing_argument_prompts() {
        let mut input = Cursor::new("hello.sh\n");
        let mut out = Vec::new();

        let file = resolve_file(None, &mut input, &mut out).unwrap();

        assert_eq!(file, "hello.sh");
        assert_eq!(String::from_utf8(out).unwrap(), format!("{FILE_PROMPT}\n"));
    }
}
