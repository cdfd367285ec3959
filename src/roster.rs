//! Student list files.
//!
//! A student file holds one email per line. Lines are taken as-is: no
//! trimming, de-duplication, or reordering.

use std::path::Path;

use crate::error::{Result, StrigoError};

/// Read a student file into its lines.
pub fn read_student_file(path: &Path) -> Result<Vec<String>> {
    let content = std::fs::read_to_string(path).map_err(|source| StrigoError::StudentFile {
        path: path.to_path_buf(),
        source,
    })?;

    let students = parse_students(&content);
    tracing::debug!("Read {} students from {}", students.len(), path.display());
    Ok(students)
}

/// Characters that end a line, besides `\n`.
///
/// `\r\n` counts as a single break.
const LINE_BREAKS: [char; 10] = [
    '\r', '\x0b', '\x0c', '\x1c', '\x1d', '\x1e', '\u{85}', '\u{2028}', '\u{2029}', '\n',
];

/// Split student file content into lines.
///
/// Any Unicode line boundary ends a line, including a lone `\r`. A final
/// line break does not start an extra empty line.
pub fn parse_students(content: &str) -> Vec<String> {
    let mut students = Vec::new();
    let mut rest = content;

    while !rest.is_empty() {
        match rest.find(LINE_BREAKS) {
            Some(pos) => {
                students.push(rest[..pos].to_string());
                let skip = if rest[pos..].starts_with("\r\n") {
                    2
                } else {
                    rest[pos..].chars().next().map_or(1, char::len_utf8)
                };
                rest = &rest[pos + skip..];
            }
            None => {
                students.push(rest.to_string());
                break;
            }
        }
    }

    students
}

/// Read an optional student file.
pub fn read_optional(path: Option<&Path>) -> Result<Option<Vec<String>>> {
    path.map(read_student_file).transpose()
}
