//! End-to-end scaffolding against a temp directory
//!
//! Run with: cargo test --test scaffold_integration

use std::fs;
use std::path::Path;

use anyhow::Result;
use tempfile::TempDir;
use toolbelt::scaffold::{self, ProjectTemplate};

const EXPECTED_FILES: [&str; 8] = [
    "main.cpp",
    ".clang-format",
    ".gitignore",
    "CMakeLists.txt",
    "src/demo.cpp",
    "include/demo.h",
    "tests/demo_test.cpp",
    "tests/CMakeLists.txt",
];

const EXPECTED_DIRS: [&str; 4] = ["build", "src", "include", "tests"];

fn collect_paths(root: &Path, dir: &Path, out: &mut Vec<String>) -> Result<()> {
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        out.push(path.strip_prefix(root)?.to_string_lossy().to_string());
        if path.is_dir() {
            collect_paths(root, &path, out)?;
        }
    }
    Ok(())
}

#[test]
fn test_generate_produces_exactly_the_layout() -> Result<()> {
    let tmp = TempDir::new()?;
    scaffold::generate(tmp.path(), "demo")?;
    let root = tmp.path().join("demo");

    let mut found = Vec::new();
    collect_paths(&root, &root, &mut found)?;
    found.sort();

    let mut expected: Vec<String> = EXPECTED_FILES
        .iter()
        .chain(EXPECTED_DIRS.iter())
        .map(|s| s.to_string())
        .collect();
    expected.sort();

    assert_eq!(found, expected);

    for file in EXPECTED_FILES {
        let content = fs::read_to_string(root.join(file))?;
        assert!(!content.is_empty(), "{file} is empty");
    }
    assert_eq!(fs::read_dir(root.join("build"))?.count(), 0);
    Ok(())
}

#[test]
fn test_header_has_include_guard_and_integer_member() -> Result<()> {
    let tmp = TempDir::new()?;
    scaffold::generate(tmp.path(), "demo")?;

    let header = fs::read_to_string(tmp.path().join("demo/include/demo.h"))?;
    assert!(header.contains("DEMO_INCLUDE_DEMO_H"));
    assert!(header.contains("#ifndef DEMO_INCLUDE_DEMO_H"));
    assert!(header.contains("#endif // DEMO_INCLUDE_DEMO_H"));
    assert!(header.contains("class A"));
    assert!(header.contains("public:"));
    assert!(header.contains("int p;"));
    Ok(())
}

#[test]
fn test_name_tokens_match_project_name() -> Result<()> {
    let tmp = TempDir::new()?;
    scaffold::generate(tmp.path(), "CamelCase")?;
    let root = tmp.path().join("CamelCase");

    let header = fs::read_to_string(root.join("include/CamelCase.h"))?;
    assert!(header.contains("CAMELCASE_INCLUDE_CAMELCASE_H"));

    let root_cmake = fs::read_to_string(root.join("CMakeLists.txt"))?;
    assert!(root_cmake.contains("project(\"CamelCase\")"));
    assert!(root_cmake.contains("target_compile_features(\"CamelCase\" PRIVATE cxx_std_20)"));
    assert!(!root_cmake.contains("CAMELCASE"));

    let tests_cmake = fs::read_to_string(root.join("tests/CMakeLists.txt"))?;
    assert!(tests_cmake.contains("project(CamelCase_test)"));
    assert!(tests_cmake.contains("find_package(GTest REQUIRED)"));
    Ok(())
}

#[test]
fn test_regenerate_is_byte_identical_and_keeps_user_files() -> Result<()> {
    let tmp = TempDir::new()?;
    scaffold::generate(tmp.path(), "demo")?;
    let root = tmp.path().join("demo");

    // User edits a generated file and adds their own
    fs::write(root.join("main.cpp"), "// edited")?;
    fs::write(root.join("src/extra.cpp"), "int extra() { return 1; }")?;
    fs::write(root.join("include/extra.h"), "int extra();")?;
    fs::write(root.join("tests/extra_test.cpp"), "// more tests")?;

    scaffold::generate(tmp.path(), "demo")?;

    let template = ProjectTemplate::new("demo")?;
    for (relative, content) in template.files() {
        assert_eq!(fs::read_to_string(root.join(&relative))?, content);
    }

    assert_eq!(
        fs::read_to_string(root.join("src/extra.cpp"))?,
        "int extra() { return 1; }"
    );
    assert_eq!(fs::read_to_string(root.join("include/extra.h"))?, "int extra();");
    assert_eq!(
        fs::read_to_string(root.join("tests/extra_test.cpp"))?,
        "// more tests"
    );
    Ok(())
}

#[test]
fn test_empty_name_writes_nothing() -> Result<()> {
    let tmp = TempDir::new()?;

    assert!(scaffold::generate(tmp.path(), "").is_err());
    assert_eq!(fs::read_dir(tmp.path())?.count(), 0);
    Ok(())
}
