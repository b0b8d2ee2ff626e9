//! Line store
//!
//! Ordered, mutable sequence of raw document lines. This is the only source
//! of truth for the document content; everything else (object graph,
//! validation results) is derived from it.

use std::ops::Range;

use serde::{Deserialize, Serialize};

use super::syntax::{header_uid, is_attribute, is_header};

/// Header renamed on load because its UID was already used
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UidRename {
    pub original: String,
    pub renamed: String,
    pub line: usize,
}

/// Line-based document storage
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineStore {
    lines: Vec<String>,
}

impl LineStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Create a store from a decoded file content
    ///
    /// Line terminators and trailing whitespace are stripped.
    pub fn from_text(text: &str) -> Self {
        Self::from_lines(text.lines().map(str::to_string).collect())
    }

    /// Create a store from lines, stripping their trailing whitespace
    pub fn from_lines(lines: Vec<String>) -> Self {
        let lines = lines
            .into_iter()
            .map(|mut line| {
                line.truncate(line.trim_end().len());
                line
            })
            .collect();
        Self { lines }
    }

    /// All lines as a slice
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Replace a range of lines with new ones
    pub fn splice(&mut self, range: Range<usize>, new_lines: Vec<String>) {
        self.lines.splice(range, new_lines);
    }

    /// Append lines at the end of the document
    pub fn extend(&mut self, new_lines: Vec<String>) {
        self.lines.extend(new_lines);
    }

    /// Number of header lines
    pub fn header_count(&self) -> usize {
        self.lines.iter().filter(|l| is_header(l)).count()
    }

    /// Number of attribute lines
    pub fn attribute_count(&self) -> usize {
        self.lines.iter().filter(|l| is_attribute(l)).count()
    }

    /// Make header UIDs unique by appending `_` to repeated ones
    ///
    /// The first occurrence keeps its name. Returns the renames in document order.
    pub fn resolve_duplicate_uids(&mut self) -> Vec<UidRename> {
        let mut seen = std::collections::HashSet::new();
        let mut renames = Vec::new();

        for (index, line) in self.lines.iter_mut().enumerate() {
            let Some(uid) = header_uid(line) else {
                continue;
            };
            let original = uid.to_string();
            let mut unique = original.clone();
            while seen.contains(&unique) {
                unique.push('_');
            }
            if unique != original {
                *line = format!("[{}]", unique);
                renames.push(UidRename {
                    original,
                    renamed: unique.clone(),
                    line: index,
                });
            }
            seen.insert(unique);
        }

        renames
    }

    /// Serialize the lines as written to a file
    ///
    /// A blank line is inserted before any header not already preceded by
    /// one, runs of blank lines collapse to one, and blank lines at the start
    /// are dropped. The store itself is not modified.
    pub fn to_normalized_text(&self) -> String {
        let mut out = String::new();
        let mut prev_blank = true;

        for line in &self.lines {
            if is_header(line) && !prev_blank {
                out.push('\n');
            }
            if !(line.is_empty() && prev_blank) {
                out.push_str(line);
                out.push('\n');
            }
            prev_blank = line.is_empty();
        }

        out
    }
}
