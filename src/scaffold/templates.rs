//! Embedded C++/CMake project templates
//!
//! Template text lives under `resources/scaffold/` and is compiled in.
//! Two placeholders are recognized:
//! - `{{project}}` - the project name, verbatim
//! - `{{PROJECT}}` - the project name uppercased (include guards)

pub const MAIN_CPP: &str = include_str!("../../resources/scaffold/main.cpp.tmpl");
pub const HEADER_H: &str = include_str!("../../resources/scaffold/header.h.tmpl");
pub const SOURCE_CPP: &str = include_str!("../../resources/scaffold/source.cpp.tmpl");
pub const GITIGNORE: &str = include_str!("../../resources/scaffold/gitignore.tmpl");
pub const ROOT_CMAKE: &str = include_str!("../../resources/scaffold/CMakeLists.root.tmpl");
pub const TESTS_CMAKE: &str = include_str!("../../resources/scaffold/CMakeLists.tests.tmpl");
pub const TEST_CPP: &str = include_str!("../../resources/scaffold/test.cpp.tmpl");
pub const CLANG_FORMAT: &str = include_str!("../../resources/scaffold/clang-format.tmpl");

const NAME_TOKEN: &str = "{{project}}";
const UPPER_NAME_TOKEN: &str = "{{PROJECT}}";

/// Substitute the project name into a template
pub fn render(template: &str, name: &str) -> String {
    template
        .replace(UPPER_NAME_TOKEN, &name.to_uppercase())
        .replace(NAME_TOKEN, name)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [&str; 8] = [
        MAIN_CPP,
        HEADER_H,
        SOURCE_CPP,
        GITIGNORE,
        ROOT_CMAKE,
        TESTS_CMAKE,
        TEST_CPP,
        CLANG_FORMAT,
    ];

    #[test]
    fn test_templates_embedded() {
        for template in ALL {
            assert!(!template.trim().is_empty());
        }
    }

    #[test]
    fn test_render_leaves_no_placeholders() {
        for template in ALL {
            let rendered = render(template, "demo");
            assert!(!rendered.contains("{{"), "unrendered token in:\n{rendered}");
        }
    }

    #[test]
    fn test_render_uppercases_guard_only() {
        let rendered = render(HEADER_H, "MyLib");
        assert!(rendered.contains("#ifndef MYLIB_INCLUDE_MYLIB_H"));
        assert!(!rendered.contains("MyLib"));

        let main = render(MAIN_CPP, "MyLib");
        assert!(main.contains("#include <MyLib.h>"));
    }

    #[test]
    fn test_cmake_variables_survive_rendering() {
        let rendered = render(ROOT_CMAKE, "demo");
        assert!(rendered.contains("${SRC_FILES}"));
        assert!(rendered.contains("${CMAKE_CURRENT_SOURCE_DIR}/include"));
        assert!(rendered.contains("project(\"demo\")"));
    }
}
