//! C++/CMake project scaffolding
//!
//! Rendering and writing are separate steps: [`ProjectTemplate`] is a pure
//! value built from the project name, [`Scaffold`] puts it on disk.
//!
//! # Example
//!
//! ```no_run
//! use toolbelt::scaffold::Scaffold;
//!
//! let report = Scaffold::new(".").generate("demo")?;
//! println!("Created {}", report.root.display());
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod templates;

use anyhow::{bail, Context, Result};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::paths::project;

/// Every file of a new project, rendered for one project name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectTemplate {
    pub project_name: String,
    pub main_cpp: String,
    pub header: String,
    pub source: String,
    pub gitignore: String,
    pub root_cmake: String,
    pub tests_cmake: String,
    pub test_source: String,
    pub clang_format: String,
}

impl ProjectTemplate {
    /// Render all templates for `name`.
    ///
    /// The name is used verbatim for paths; only emptiness is rejected.
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let project_name = name.into();
        if project_name.trim().is_empty() {
            bail!("Project name must not be empty");
        }

        let render = |template: &str| templates::render(template, &project_name);

        Ok(Self {
            main_cpp: render(templates::MAIN_CPP),
            header: render(templates::HEADER_H),
            source: render(templates::SOURCE_CPP),
            gitignore: render(templates::GITIGNORE),
            root_cmake: render(templates::ROOT_CMAKE),
            tests_cmake: render(templates::TESTS_CMAKE),
            test_source: render(templates::TEST_CPP),
            clang_format: render(templates::CLANG_FORMAT),
            project_name,
        })
    }

    /// Include-guard token used in the header, e.g. `DEMO_INCLUDE_DEMO_H`
    pub fn include_guard(&self) -> String {
        let upper = self.project_name.to_uppercase();
        format!("{upper}_INCLUDE_{upper}_H")
    }

    /// Relative path -> content for every templated file
    pub fn files(&self) -> BTreeMap<PathBuf, String> {
        let name = self.project_name.as_str();
        BTreeMap::from([
            (project::main_cpp(), self.main_cpp.clone()),
            (project::clang_format(), self.clang_format.clone()),
            (project::gitignore(), self.gitignore.clone()),
            (project::root_cmake(), self.root_cmake.clone()),
            (project::source(name), self.source.clone()),
            (project::header(name), self.header.clone()),
            (project::test_source(name), self.test_source.clone()),
            (project::tests_cmake(), self.tests_cmake.clone()),
        ])
    }

    /// Subdirectories created under the project root
    pub fn directories(&self) -> Vec<PathBuf> {
        project::SUBDIRECTORIES.iter().map(PathBuf::from).collect()
    }
}

/// Result of a successful [`Scaffold::generate`]
#[derive(Debug, Clone)]
pub struct ScaffoldReport {
    /// The project root (`<base_dir>/<name>`)
    pub root: PathBuf,
    /// Files written, relative to `root`
    pub files: Vec<PathBuf>,
}

/// Writes project skeletons under a base directory.
pub struct Scaffold {
    base_dir: PathBuf,
}

impl Scaffold {
    pub fn new(base_dir: impl AsRef<Path>) -> Self {
        Self {
            base_dir: base_dir.as_ref().to_path_buf(),
        }
    }

    /// Create `<base_dir>/<name>` and populate it.
    ///
    /// Existing directories are reused and templated files overwritten.
    /// Not transactional: a failure part way leaves what was written.
    pub fn generate(&self, name: &str) -> Result<ScaffoldReport> {
        let template = ProjectTemplate::new(name)?;
        let root = self.base_dir.join(&template.project_name);

        fs::create_dir_all(&root)
            .with_context(|| format!("Failed to create project directory: {}", root.display()))?;

        for dir in template.directories() {
            let path = root.join(&dir);
            fs::create_dir_all(&path)
                .with_context(|| format!("Failed to create directory: {}", path.display()))?;
        }

        let mut files = Vec::new();
        for (relative, content) in template.files() {
            let path = root.join(&relative);
            fs::write(&path, content)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            files.push(relative);
        }

        Ok(ScaffoldReport { root, files })
    }
}

/// Generate a project named `name` under `base_dir`
pub fn generate(base_dir: &Path, name: &str) -> Result<ScaffoldReport> {
    Scaffold::new(base_dir).generate(name)
}
