//! Internal implementation for the installer module

use anyhow::{anyhow, Context, Result};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use super::{InstallError, InstallReport, InstallerSettings, PathUpdate};
use crate::paths;

/// Comment written above an appended export line
pub const MARKER_COMMENT: &str = "# Added by toolbelt add-to-path";

/// Owner execute bit
const OWNER_EXEC: u32 = 0o100;

// =============================================================================
// Orchestration
// =============================================================================

pub(super) fn install(settings: &InstallerSettings, source: &Path) -> Result<InstallReport> {
    if !is_regular_file(source) {
        return Err(InstallError::SourceNotFound(source.to_path_buf()).into());
    }

    let source_path = absolutize(source)?;
    let scripts_dir = normalize_dir(&settings.scripts_dir)?;
    let destination_path = copy_executable(&source_path, &scripts_dir)?;

    let export_line = export_line(&scripts_dir);
    let candidates = paths::shell::rc_candidates(&settings.home_dir, &settings.rc_files);

    let mut rc_backup = None;
    let path_update = match resolve_rc_file(&candidates) {
        None => PathUpdate::NoStartupFile,
        Some(rc_file) => {
            let added = ensure_path_export(&rc_file, &scripts_dir, |rc| {
                if settings.backup_rc {
                    rc_backup = Some(backup_rc_file(rc, &settings.backups_dir)?);
                }
                Ok(())
            })?;
            if added {
                PathUpdate::Added { rc_file }
            } else {
                PathUpdate::AlreadyPresent { rc_file }
            }
        }
    };

    let self_installed = if settings.self_install {
        let exe = match &settings.self_exe {
            Some(exe) => exe.clone(),
            None => std::env::current_exe().context("Failed to locate running executable")?,
        };
        install_self(&exe, &scripts_dir)?
    } else {
        None
    };

    Ok(InstallReport {
        source_path,
        destination_path,
        scripts_dir,
        export_line,
        path_update,
        rc_backup,
        self_installed,
    })
}

// =============================================================================
// Copy + chmod
// =============================================================================

/// Copy `source` into `dest_dir` under its own file name and add the owner
/// execute bit. Creates `dest_dir` if needed and overwrites any existing
/// file. Returns the destination path.
pub fn copy_executable(source: &Path, dest_dir: &Path) -> Result<PathBuf> {
    let file_name = source
        .file_name()
        .ok_or_else(|| anyhow!("Path has no file name: {}", source.display()))?;

    fs::create_dir_all(dest_dir)
        .with_context(|| format!("Failed to create directory: {}", dest_dir.display()))?;

    let dest_path = dest_dir.join(file_name);

    // Copying a file onto itself would truncate it
    if !is_same_file(source, &dest_path) {
        fs::copy(source, &dest_path).with_context(|| {
            format!(
                "Failed to copy: {} -> {}",
                source.display(),
                dest_path.display()
            )
        })?;
    }

    add_owner_execute(&dest_path)?;
    Ok(dest_path)
}

/// OR the owner execute bit into the file's current mode. Other bits are
/// kept as they are.
#[cfg(unix)]
pub fn add_owner_execute(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;
    let mut perms = fs::metadata(path)
        .with_context(|| format!("Failed to stat {}", path.display()))?
        .permissions();
    perms.set_mode(perms.mode() | OWNER_EXEC);
    fs::set_permissions(path, perms)
        .with_context(|| format!("Failed to set permissions on {}", path.display()))?;
    Ok(())
}

/// No-op on non-Unix platforms
#[cfg(not(unix))]
pub fn add_owner_execute(_path: &Path) -> Result<()> {
    Ok(())
}

/// Copy `exe` into `dest_dir` unless a file with its name is already there.
/// Returns the new path when a copy was made.
pub fn install_self(exe: &Path, dest_dir: &Path) -> Result<Option<PathBuf>> {
    let file_name = exe
        .file_name()
        .ok_or_else(|| anyhow!("Path has no file name: {}", exe.display()))?;

    if dest_dir.join(file_name).exists() {
        return Ok(None);
    }

    copy_executable(exe, dest_dir).map(Some)
}

// =============================================================================
// Startup file
// =============================================================================

/// `export PATH="<dir>:$PATH"`
pub fn export_line(scripts_dir: &Path) -> String {
    format!("export PATH=\"{}:$PATH\"", scripts_dir.display())
}

/// First candidate that exists
pub fn resolve_rc_file(candidates: &[PathBuf]) -> Option<PathBuf> {
    candidates.iter().find(|path| path.exists()).cloned()
}

/// Append the export line to `rc_file` unless some line already contains
/// it. `before_append` runs only when the file is about to change.
/// Returns true if the file was modified.
pub fn ensure_path_export<F>(rc_file: &Path, scripts_dir: &Path, before_append: F) -> Result<bool>
where
    F: FnOnce(&Path) -> Result<()>,
{
    if has_export_line(rc_file, scripts_dir)? {
        return Ok(false);
    }
    before_append(rc_file)?;
    append_export_line(rc_file, scripts_dir)?;
    Ok(true)
}

fn has_export_line(rc_file: &Path, scripts_dir: &Path) -> Result<bool> {
    let line = export_line(scripts_dir);
    let contents = fs::read_to_string(rc_file).with_context(|| {
        format!(
            "Failed to read shell startup file {} as UTF-8 text",
            rc_file.display()
        )
    })?;
    Ok(contents.lines().any(|existing| existing.contains(&line)))
}

fn append_export_line(rc_file: &Path, scripts_dir: &Path) -> Result<()> {
    let mut file = OpenOptions::new()
        .append(true)
        .open(rc_file)
        .with_context(|| format!("Failed to open {} for append", rc_file.display()))?;

    write!(
        file,
        "\n{MARKER_COMMENT}\n{}\n",
        export_line(scripts_dir)
    )
    .with_context(|| format!("Failed to write {}", rc_file.display()))?;
    Ok(())
}

/// Copy `rc_file` to `<backups_dir>/<name>-<timestamp>`
fn backup_rc_file(rc_file: &Path, backups_dir: &Path) -> Result<PathBuf> {
    fs::create_dir_all(backups_dir)?;

    let timestamp = chrono::Local::now().format("%Y%m%d-%H%M%S");
    let filename = rc_file
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "rc".to_string());

    let backup_path = backups_dir.join(format!("{}-{}", filename, timestamp));

    fs::copy(rc_file, &backup_path).with_context(|| {
        format!(
            "Failed to backup {} to {}",
            rc_file.display(),
            backup_path.display()
        )
    })?;

    Ok(backup_path)
}

// =============================================================================
// Helpers
// =============================================================================

fn is_regular_file(path: &Path) -> bool {
    fs::metadata(path).map(|m| m.is_file()).unwrap_or(false)
}

fn absolutize(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    let cwd = std::env::current_dir().context("Failed to get current directory")?;
    Ok(cwd.join(path))
}

/// Absolute form of `dir` without a trailing separator, so the export line
/// never depends on the working directory and matches existing entries.
fn normalize_dir(dir: &Path) -> Result<PathBuf> {
    Ok(absolutize(dir)?.components().collect())
}

fn is_same_file(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}
