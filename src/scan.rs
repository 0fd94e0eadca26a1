//! Extraction of `#pragma use "<path>"` directives.

use std::{path::PathBuf, sync::LazyLock};

use regex::bytes::Regex;

/// Matches one directive per line, case-insensitively. `R` lets `$` match
/// before a `\r\n` line ending as well as a bare `\n`. The path is matched
/// byte-wise so filenames that are not valid UTF-8 are still captured.
static DIRECTIVE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?imR)^#pragma[^\S\r\n]+use[^\S\r\n]+"((?-u:[^"\r\n])+)"$"#)
        .expect("Invalid regex pattern for pragma use directive")
});

#[cfg(unix)]
fn reference_path(bytes: &[u8]) -> PathBuf {
    use std::{ffi::OsStr, os::unix::ffi::OsStrExt};

    PathBuf::from(OsStr::from_bytes(bytes))
}

#[cfg(not(unix))]
fn reference_path(bytes: &[u8]) -> PathBuf {
    // Only UTF-8 paths are representable here
    PathBuf::from(String::from_utf8_lossy(bytes).into_owned())
}

/// Raw include references named by the directives in `contents`, in document
/// order. Duplicates are preserved.
pub fn directives(contents: &[u8]) -> Vec<PathBuf> {
    DIRECTIVE_REGEX
        .captures_iter(contents)
        .filter_map(|captures| captures.get(1))
        .map(|reference| reference_path(reference.as_bytes()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(contents: &str, expected: &[&str]) {
        assert_eq!(
            directives(contents.as_bytes()),
            expected.iter().map(PathBuf::from).collect::<Vec<_>>()
        );
    }

    #[test]
    fn finds_directives_in_document_order() {
        check(
            "#pragma use \"b.glsl\"\nvoid main() {}\n#pragma use \"a.glsl\"\n",
            &["b.glsl", "a.glsl"],
        );
    }

    #[test]
    fn keeps_duplicate_directives() {
        check(
            "#pragma use \"a.glsl\"\n#pragma use \"a.glsl\"",
            &["a.glsl", "a.glsl"],
        );
    }

    #[test]
    fn directive_keywords_are_case_insensitive() {
        check(
            "#PRAGMA USE \"upper.glsl\"\n#Pragma Use \"mixed.glsl\"",
            &["upper.glsl", "mixed.glsl"],
        );
    }

    #[test]
    fn allows_tabs_and_repeated_spaces_between_tokens() {
        check("#pragma\t  use \t\"spaced.glsl\"", &["spaced.glsl"]);
    }

    #[test]
    fn allows_form_feed_and_vertical_tab_between_tokens() {
        check("#pragma\x0buse\x0c\"feed.glsl\"", &["feed.glsl"]);
    }

    #[cfg(unix)]
    #[test]
    fn keeps_paths_that_are_not_utf8() {
        use std::{ffi::OsStr, os::unix::ffi::OsStrExt};

        assert_eq!(
            directives(b"#pragma use \"caf\xE9.glsl\"\n"),
            vec![PathBuf::from(OsStr::from_bytes(b"caf\xE9.glsl"))]
        );
    }

    #[test]
    fn recognizes_crlf_line_endings() {
        check(
            "#pragma use \"a.glsl\"\r\n#pragma use \"b.glsl\"\r\nfloat x;\r\n",
            &["a.glsl", "b.glsl"],
        );
    }

    #[test]
    fn directive_must_occupy_the_whole_line() {
        check(
            concat!(
                "  #pragma use \"indented.glsl\"\n",
                "#pragma use \"trailing.glsl\" // comment\n",
                "// #pragma use \"commented.glsl\"\n",
            ),
            &[],
        );
    }

    #[test]
    fn whitespace_between_tokens_never_spans_lines() {
        check("#pragma\nuse \"split.glsl\"\n#pragma use\n\"split.glsl\"", &[]);
    }

    #[test]
    fn rejects_empty_and_quoted_paths() {
        check(
            "#pragma use \"\"\n#pragma use \"a\"b.glsl\"\n#pragma use unquoted.glsl",
            &[],
        );
    }

    #[test]
    fn other_pragmas_are_ignored() {
        check("#pragma once\n#pragma optimize(on)\n#include \"x.glsl\"", &[]);
    }

    #[test]
    fn block_comments_are_not_understood() {
        // Only line structure is considered, so a directive inside a block
        // comment is still a directive.
        check("/*\n#pragma use \"hidden.glsl\"\n*/", &["hidden.glsl"]);
    }

    #[test]
    fn keeps_paths_with_spaces_and_directories() {
        check(
            "#pragma use \"../lib dir/noise 3d.glsl\"",
            &["../lib dir/noise 3d.glsl"],
        );
    }
}
