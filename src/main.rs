use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;

#[derive(Parser)]
#[command(author, version = env!("CARGO_PKG_VERSION"), about = "Small developer utilities: project scaffolding and PATH installation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scaffold a new C++/CMake project
    New {
        /// Project name (prompted for if omitted)
        name: Option<String>,

        /// Directory to create the project in (default: scaffold.base_dir or .)
        #[arg(long)]
        dir: Option<PathBuf>,
    },

    /// Copy a script into ~/scripts, make it executable and add ~/scripts to PATH
    AddToPath {
        /// Script to install (prompted for if omitted)
        file: Option<String>,

        /// Override the destination directory (default: installer.scripts_dir)
        #[arg(long)]
        scripts_dir: Option<PathBuf>,

        /// Also copy toolbelt itself into the scripts directory
        #[arg(long)]
        self_install: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::New { name, dir } => {
            commands::new::execute(name, dir)?;
        }
        Commands::AddToPath {
            file,
            scripts_dir,
            self_install,
        } => {
            let exit_code = commands::add_to_path::execute(file, scripts_dir, self_install)?;
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}
