pub mod config;
pub mod installer;
pub mod paths;
pub mod prompt;
pub mod scaffold;

// Re-export commonly used types
pub use config::ToolbeltConfig;
pub use installer::{InstallReport, Installer, InstallerSettings, PathUpdate};
pub use scaffold::{ProjectTemplate, Scaffold};
