//! Single source of truth for every toolbelt filesystem location.
//!
//! This module defines WHERE things live. It has no I/O and no business
//! logic. Callers that need to redirect a location (tests, config
//! overrides) take the returned path and pass their own instead.
//!
//! # User-Level Paths
//!
//! ```text
//! ~/
//! ├── .toolbelt/
//! │   ├── config.toml          # Global config
//! │   └── backups/             # rc-file backups (opt-in)
//! ├── scripts/                 # add-to-path destination
//! ├── .zshrc                   # preferred startup file
//! └── .bashrc                  # fallback startup file
//! ```
//!
//! # Project-Level Paths (scaffolded C++ project)
//!
//! ```text
//! <name>/
//! ├── main.cpp  .clang-format  .gitignore  CMakeLists.txt
//! ├── build/
//! ├── src/<name>.cpp
//! ├── include/<name>.h
//! └── tests/<name>_test.cpp  tests/CMakeLists.txt
//! ```

use std::path::{Path, PathBuf};

// =============================================================================
// User Level
// =============================================================================

/// User's home directory, falling back to `.` when it cannot be determined
pub fn home_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("."))
}

/// Toolbelt home directory: `~/.toolbelt/`
pub fn toolbelt_home() -> PathBuf {
    home_dir().join(".toolbelt")
}

/// Global config file: `~/.toolbelt/config.toml`
pub fn config_path() -> PathBuf {
    toolbelt_home().join("config.toml")
}

/// Backups of modified startup files: `~/.toolbelt/backups/`
pub fn backups_dir() -> PathBuf {
    toolbelt_home().join("backups")
}

/// Shell-related locations
pub mod shell {
    use super::*;

    /// Default scripts directory, as written in config: `~/scripts`
    pub const DEFAULT_SCRIPTS_DIR: &str = "~/scripts";

    /// Startup files in preference order, relative to home
    pub const DEFAULT_RC_FILES: [&str; 2] = [".zshrc", ".bashrc"];

    /// Startup file candidates under `home`, in preference order
    pub fn rc_candidates(home: &Path, names: &[String]) -> Vec<PathBuf> {
        names.iter().map(|name| home.join(name)).collect()
    }
}

// =============================================================================
// Project Level (scaffolded C++ project)
// =============================================================================

/// Paths inside a scaffolded project, relative to the project root.
///
/// Functions that mention the project name take it as `name` so that the
/// layout stays visible here rather than spread across the templates.
///
/// # Example
///
/// ```
/// use std::path::Path;
/// use toolbelt::paths::project;
///
/// assert_eq!(project::header("demo"), Path::new("include/demo.h"));
/// ```
pub mod project {
    use super::*;

    pub const BUILD_DIR: &str = "build";
    pub const SRC_DIR: &str = "src";
    pub const INCLUDE_DIR: &str = "include";
    pub const TESTS_DIR: &str = "tests";

    /// Subdirectories created under every project root
    pub const SUBDIRECTORIES: [&str; 4] = [BUILD_DIR, SRC_DIR, INCLUDE_DIR, TESTS_DIR];

    pub fn main_cpp() -> PathBuf {
        PathBuf::from("main.cpp")
    }

    pub fn clang_format() -> PathBuf {
        PathBuf::from(".clang-format")
    }

    pub fn gitignore() -> PathBuf {
        PathBuf::from(".gitignore")
    }

    pub fn root_cmake() -> PathBuf {
        PathBuf::from("CMakeLists.txt")
    }

    /// Implementation file: `src/<name>.cpp`
    pub fn source(name: &str) -> PathBuf {
        Path::new(SRC_DIR).join(format!("{name}.cpp"))
    }

    /// Public header: `include/<name>.h`
    pub fn header(name: &str) -> PathBuf {
        Path::new(INCLUDE_DIR).join(format!("{name}.h"))
    }

    /// Test source: `tests/<name>_test.cpp`
    pub fn test_source(name: &str) -> PathBuf {
        Path::new(TESTS_DIR).join(format!("{name}_test.cpp"))
    }

    /// Test build file: `tests/CMakeLists.txt`
    pub fn tests_cmake() -> PathBuf {
        Path::new(TESTS_DIR).join("CMakeLists.txt")
    }
}
