//! Install a script into a personal scripts directory and put that
//! directory on PATH.
//!
//! Public interface lives here; the file-system work is in `internal`.
//!
//! # Example
//!
//! ```no_run
//! use toolbelt::config::InstallerSection;
//! use toolbelt::installer::{Installer, InstallerSettings, PathUpdate};
//! use std::path::Path;
//!
//! let settings = InstallerSettings::from_config(&InstallerSection::default());
//! let report = Installer::new(settings).install(Path::new("deploy.sh"))?;
//!
//! if let PathUpdate::Added { rc_file } = &report.path_update {
//!     println!("Run: source {}", rc_file.display());
//! }
//! # Ok::<(), anyhow::Error>(())
//! ```

mod internal;

use anyhow::Result;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::config::InstallerSection;
use crate::paths;

pub use internal::{
    add_owner_execute, copy_executable, ensure_path_export, export_line, install_self,
    resolve_rc_file, MARKER_COMMENT,
};

/// Precondition failures. Nothing on disk has been touched when one of
/// these is returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallError {
    /// The requested path is missing or not a regular file
    SourceNotFound(PathBuf),
}

impl fmt::Display for InstallError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InstallError::SourceNotFound(path) => {
                write!(f, "File not found: {}", path.display())
            }
        }
    }
}

impl std::error::Error for InstallError {}

/// Where the installer reads and writes. Nothing here is global, so tests
/// can point every location into a temp directory.
#[derive(Debug, Clone)]
pub struct InstallerSettings {
    pub scripts_dir: PathBuf,
    pub home_dir: PathBuf,
    /// Startup file names relative to `home_dir`, in preference order
    pub rc_files: Vec<String>,
    pub self_install: bool,
    /// Executable to propagate; `None` means the running binary
    pub self_exe: Option<PathBuf>,
    pub backup_rc: bool,
    pub backups_dir: PathBuf,
}

impl InstallerSettings {
    pub fn from_config(section: &InstallerSection) -> Self {
        Self {
            scripts_dir: section.resolved_scripts_dir(),
            home_dir: paths::home_dir(),
            rc_files: section.rc_files.clone(),
            self_install: section.self_install,
            self_exe: None,
            backup_rc: section.backup_rc,
            backups_dir: paths::backups_dir(),
        }
    }
}

/// What happened to the shell startup file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathUpdate {
    /// Marker and export line appended
    Added { rc_file: PathBuf },
    /// An export line for the scripts directory was already there
    AlreadyPresent { rc_file: PathBuf },
    /// No candidate startup file exists; the user must add the line
    NoStartupFile,
}

impl PathUpdate {
    pub fn rc_file(&self) -> Option<&Path> {
        match self {
            PathUpdate::Added { rc_file } | PathUpdate::AlreadyPresent { rc_file } => {
                Some(rc_file)
            }
            PathUpdate::NoStartupFile => None,
        }
    }
}

/// Record of one completed installation
#[derive(Debug, Clone)]
pub struct InstallReport {
    /// Absolute path of the installed file
    pub source_path: PathBuf,
    pub destination_path: PathBuf,
    pub scripts_dir: PathBuf,
    /// The line that belongs in the startup file
    pub export_line: String,
    pub path_update: PathUpdate,
    /// Backup taken before appending, when enabled
    pub rc_backup: Option<PathBuf>,
    /// Where the installer copied itself, if it did
    pub self_installed: Option<PathBuf>,
}

pub struct Installer {
    settings: InstallerSettings,
}

impl Installer {
    pub fn new(settings: InstallerSettings) -> Self {
        Self { settings }
    }

    /// Copy `source` into the scripts directory, make it executable and
    /// make sure the scripts directory is on PATH.
    ///
    /// # Errors
    ///
    /// - [`InstallError::SourceNotFound`] (downcastable from the returned
    ///   error) if `source` is not an existing regular file
    /// - any I/O error from copying, chmod or editing the startup file
    pub fn install(&self, source: &Path) -> Result<InstallReport> {
        internal::install(&self.settings, source)
    }
}
