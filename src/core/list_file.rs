//! Line-delimited list file helper
//!
//! Both bot inputs (the recipient roster and the message pool) are plain
//! text files with one entry per line. This module owns the shared read
//! semantics: right-trimmed lines, blank lines skipped, order preserved.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0

use std::fs;
use std::io;
use std::path::Path;

/// Read a line-delimited list file.
///
/// Returns the non-blank lines in file order, each with trailing whitespace
/// (including the line terminator) removed. Leading whitespace is preserved;
/// callers that need fully trimmed entries trim at the point of use.
pub fn read_lines(path: &Path) -> io::Result<Vec<String>> {
    let contents = fs::read_to_string(path)?;
    Ok(contents
        .lines()
        .map(|line| line.trim_end().to_string())
        .filter(|line| !line.is_empty())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_fixture(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("create temp file");
        file.write_all(contents.as_bytes()).expect("write temp file");
        file
    }

    #[test]
    fn test_read_lines_preserves_order() {
        let file = write_fixture("first\nsecond\nthird\n");
        let lines = read_lines(file.path()).unwrap();
        assert_eq!(lines, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_read_lines_skips_blank_lines() {
        let file = write_fixture("one\n\n  \ntwo\n\n");
        let lines = read_lines(file.path()).unwrap();
        assert_eq!(lines, vec!["one", "two"]);
    }

    #[test]
    fn test_read_lines_trims_line_terminators() {
        let file = write_fixture("crlf line\r\nplain line\n");
        let lines = read_lines(file.path()).unwrap();
        assert_eq!(lines, vec!["crlf line", "plain line"]);
    }

    #[test]
    fn test_read_lines_keeps_leading_whitespace() {
        let file = write_fixture("  indented\n");
        let lines = read_lines(file.path()).unwrap();
        assert_eq!(lines, vec!["  indented"]);
    }

    #[test]
    fn test_read_lines_empty_file() {
        let file = write_fixture("");
        let lines = read_lines(file.path()).unwrap();
        assert!(lines.is_empty());
    }

    #[test]
    fn test_read_lines_missing_file_errors() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let result = read_lines(&dir.path().join("does_not_exist.txt"));
        assert!(result.is_err());
    }
}
