//! Document facade
//!
//! [`OdfDocument`] owns the line store, the object graph derived from it and
//! the diagnostics log. Every edit goes through it and is followed by a full
//! graph rebuild, so the graph always matches the lines. Failed edits leave
//! the document untouched.

use std::ffi::OsString;
use std::fs;
use std::ops::Range;
use std::path::{Path, PathBuf};

use crate::config::CheckOptions;
use crate::defaults::{FILE_EXTENSION, HEADER_UID};
use crate::diagnostics::Diagnostics;
use crate::error::{OdfError, Result};
use crate::schema::{self, context::CheckContext};
use crate::structure::graph::ObjectGraph;
use crate::structure::sections::{self, PanelFormat};
use crate::text::buffer::LineStore;
use crate::text::encoding::Encoding;
use crate::text::syntax::{check_line, header_uid};

/// An organ definition document
#[derive(Debug, Clone, Default)]
pub struct OdfDocument {
    store: LineStore,
    graph: ObjectGraph,
    format: PanelFormat,
    file_name: Option<PathBuf>,
    /// Encoding found on load, reused on save
    encoding: Option<Encoding>,
    options: CheckOptions,
    diagnostics: Diagnostics,
}

impl OdfDocument {
    /// Create an empty document
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a document with the given check options
    pub fn with_options(options: CheckOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    /// Create a document from text already in memory
    ///
    /// Duplicate UIDs are renamed as on load; no file name nor encoding is set.
    pub fn from_text(text: &str) -> Self {
        let mut document = Self::new();
        document.install(LineStore::from_text(text));
        document
    }

    // ========================================================================
    // File I/O
    // ========================================================================

    /// Load a document file, replacing the current content
    ///
    /// On failure the document is left as it was.
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        self.diagnostics
            .add(format!("Loading the file '{}'", path.display()));

        let bytes = match fs::read(path) {
            Ok(bytes) => bytes,
            Err(err) => {
                self.diagnostics.add(format!("Cannot open the file. {}", err));
                return Err(err.into());
            }
        };
        let (text, encoding) = match Encoding::decode(&bytes) {
            Ok(decoded) => decoded,
            Err(err) => {
                self.diagnostics.add(format!("Cannot read the file. {}", err));
                return Err(err);
            }
        };

        self.install(LineStore::from_text(&text));
        self.file_name = Some(path.to_path_buf());
        self.encoding = Some(encoding);

        self.diagnostics.add(format!(
            "Loading completed : {} lines, {} objects, {} attributes, file encoding {}",
            self.store.line_count(),
            self.store.header_count(),
            self.store.attribute_count(),
            encoding
        ));
        Ok(())
    }

    /// Replace the lines, renaming duplicate UIDs, and rebuild the graph
    fn install(&mut self, mut store: LineStore) {
        for rename in store.resolve_duplicate_uids() {
            self.diagnostics.add(format!(
                "Another occurence of the object {} is present, it has been renamed in {}",
                rename.original, rename.renamed
            ));
        }
        self.store = store;
        self.rebuild();
    }

    /// Save the document
    ///
    /// An empty `path` saves to the file the document was loaded from or last
    /// saved to. The `.organ` extension is appended when missing. Returns the
    /// path actually written.
    pub fn save(&mut self, path: impl AsRef<Path>) -> Result<PathBuf> {
        let path = path.as_ref();

        if self.store.is_empty() {
            self.diagnostics
                .add(format!("None data to save in the file {}", path.display()));
            return Err(OdfError::Empty);
        }

        let target = if path.as_os_str().is_empty() {
            match &self.file_name {
                Some(file_name) => file_name.clone(),
                None => {
                    self.diagnostics.add("No file name is known to save the data");
                    return Err(OdfError::NoFileName);
                }
            }
        } else {
            path.to_path_buf()
        };
        let target = with_extension(target);
        let encoding = self.encoding.unwrap_or(Encoding::Utf8Bom);

        let written = encoding
            .encode(&self.store.to_normalized_text())
            .and_then(|bytes| fs::write(&target, bytes).map_err(OdfError::from));
        if let Err(err) = written {
            self.diagnostics
                .add(format!("Cannot write in the file. {}", err));
            return Err(err);
        }

        self.file_name = Some(target.clone());
        self.encoding = Some(encoding);
        self.diagnostics.add(format!(
            "Data saved in file '{}' with encoding {}",
            target.display(),
            encoding
        ));
        Ok(target)
    }

    /// Forget the content, file name, encoding and messages (options are kept)
    pub fn reset(&mut self) {
        *self = Self::with_options(std::mem::take(&mut self.options));
    }

    // ========================================================================
    // Section edits
    // ========================================================================

    /// Lines of a section, header line included (empty if the UID is unknown)
    pub fn get_section(&self, uid: &str) -> Vec<String> {
        self.section(uid).to_vec()
    }

    /// Replace or add a section
    ///
    /// For `Header` the lines may only be comments or blank lines. For an
    /// object, every line must pass the syntax check and a header may only
    /// appear as the first line; without one, `[uid]` is implied. When the
    /// header names another UID, that object is the one replaced or added.
    /// Returns the UID of the written section.
    pub fn set_section(&mut self, uid: &str, lines: &[String]) -> Result<String> {
        let mut lines: Vec<String> = lines.iter().map(|l| l.trim_end().to_string()).collect();

        if lines.iter().all(String::is_empty) {
            if uid == HEADER_UID {
                let range = self.line_range(HEADER_UID);
                self.store.splice(range, Vec::new());
                self.rebuild();
                self.diagnostics.add("Header is now empty");
                return Ok(HEADER_UID.to_string());
            }
            self.diagnostics
                .add("None data to apply, use the object deletion to remove an object");
            return Err(OdfError::NoData(uid.to_string()));
        }

        if uid == HEADER_UID {
            return self.set_header(lines);
        }

        let mut errors = 0;
        let mut new_uid = None;
        for (index, line) in lines.iter().enumerate() {
            if let Err(err) = check_line(line) {
                self.diagnostics
                    .add(format!("Syntax error in {} '{}' : {}", uid, line, err));
                errors += 1;
            } else if let Some(found) = header_uid(line) {
                if index == 0 {
                    new_uid = Some(found.to_string());
                } else {
                    self.diagnostics.add(format!(
                        "Syntax error : '{}' an object ID between brackets must be present only in first line of the object section",
                        line
                    ));
                    errors += 1;
                }
            }
        }

        let new_uid = match new_uid {
            Some(found) => found,
            None if uid.is_empty() => {
                self.diagnostics.add(
                    "Syntax error : the first line of the object section must contain an object ID between brackets",
                );
                errors += 1;
                String::new()
            }
            None => {
                lines.insert(0, format!("[{}]", uid));
                uid.to_string()
            }
        };

        if errors > 0 {
            return Err(OdfError::InvalidSection {
                uid: if new_uid.is_empty() { uid.to_string() } else { new_uid },
                count: errors,
            });
        }

        if new_uid != uid && !uid.is_empty() {
            self.diagnostics.add(format!("Object {} unchanged", uid));
        }

        if self.graph.contains(&new_uid) {
            let range = self.line_range(&new_uid);
            self.store.splice(range, lines);
            self.diagnostics.add(format!("Object {} updated", new_uid));
        } else {
            lines.insert(0, String::new());
            self.store.extend(lines);
            self.diagnostics.add(format!("Object {} added", new_uid));
        }

        self.rebuild();
        Ok(new_uid)
    }

    fn set_header(&mut self, lines: Vec<String>) -> Result<String> {
        let invalid: Vec<&String> = lines
            .iter()
            .filter(|line| !line.is_empty() && !line.starts_with(';'))
            .collect();
        if !invalid.is_empty() {
            let count = invalid.len();
            for line in invalid {
                self.diagnostics.add(format!(
                    "Syntax error in the header : '{}' is not a comment line",
                    line
                ));
            }
            return Err(OdfError::InvalidSection {
                uid: HEADER_UID.to_string(),
                count,
            });
        }

        let range = self.line_range(HEADER_UID);
        self.store.splice(range, lines);
        self.rebuild();
        self.diagnostics.add("Header updated");
        Ok(HEADER_UID.to_string())
    }

    /// Delete a section
    pub fn remove_section(&mut self, uid: &str) -> Result<()> {
        let range = self.line_range(uid);
        if range.is_empty() {
            self.diagnostics
                .add(format!("Object {} not deleted because not found", uid));
            return Err(OdfError::NotFound(uid.to_string()));
        }
        self.store.splice(range, Vec::new());
        self.rebuild();
        self.diagnostics.add(format!("Object {} deleted", uid));
        Ok(())
    }

    fn rebuild(&mut self) {
        self.graph = ObjectGraph::build(self.store.lines());
        self.format = sections::panel_format(self.store.lines(), &self.graph);
        log::debug!("panel format: {:?}", self.format);
    }

    // ========================================================================
    // Validation
    // ========================================================================

    /// Check the whole document, writing the results to the diagnostics log
    ///
    /// `progress` receives the UID of each object as it is checked. File
    /// attributes are resolved from the directory of the document file.
    pub fn run_full_validation(&mut self, progress: impl FnMut(&str)) {
        let mut ctx = CheckContext {
            lines: self.store.lines(),
            graph: &self.graph,
            format: self.format,
            options: &self.options,
            base_dir: self.file_name.as_deref().and_then(Path::parent),
            diagnostics: &mut self.diagnostics,
        };
        schema::validate(&mut ctx, progress);
    }

    // ========================================================================
    // Queries
    // ========================================================================

    fn section(&self, uid: &str) -> &[String] {
        sections::section_lines(self.store.lines(), &self.graph, uid)
    }

    pub fn lines(&self) -> &[String] {
        self.store.lines()
    }

    pub fn graph(&self) -> &ObjectGraph {
        &self.graph
    }

    pub fn line_range(&self, uid: &str) -> Range<usize> {
        sections::line_range(self.store.lines(), &self.graph, uid)
    }

    pub fn parents(&self, uid: &str) -> Vec<String> {
        self.graph.parents(uid)
    }

    pub fn children(&self, uid: &str) -> Vec<String> {
        self.graph.children(uid)
    }

    /// Display names of an object joined with ` | `
    pub fn object_names(&self, uid: &str) -> Option<&str> {
        self.graph.names(uid)
    }

    pub fn object_count(&self) -> usize {
        self.graph.len()
    }

    pub fn attribute_value(&self, uid: &str, name: &str) -> Option<&str> {
        sections::attribute_value(self.store.lines(), &self.graph, uid, name)
    }

    /// Lines containing `text`, as `<uid> : <line>`
    pub fn search(&self, text: &str) -> Vec<String> {
        sections::search(self.store.lines(), text)
    }

    pub fn parent_panel(&self, uid: &str) -> Option<String> {
        sections::parent_panel(uid, self.format)
    }

    pub fn parent_manual(&self, uid: &str) -> Option<String> {
        sections::parent_manual(self.store.lines(), &self.graph, uid)
    }

    /// Object graph as pretty-printed JSON
    pub fn graph_json(&self) -> Result<String> {
        Ok(self.graph.to_json_pretty()?)
    }

    pub fn panel_format(&self) -> PanelFormat {
        self.format
    }

    pub fn file_name(&self) -> Option<&Path> {
        self.file_name.as_deref()
    }

    pub fn encoding(&self) -> Option<Encoding> {
        self.encoding
    }

    pub fn options(&self) -> &CheckOptions {
        &self.options
    }

    pub fn set_options(&mut self, options: CheckOptions) {
        self.options = options;
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    /// Hand the messages over and clear the log
    pub fn drain_diagnostics(&mut self) -> Vec<String> {
        self.diagnostics.drain()
    }
}

/// Append `.organ` to a path not ending with it
fn with_extension(path: PathBuf) -> PathBuf {
    if path.to_string_lossy().ends_with(FILE_EXTENSION) {
        return path;
    }
    let mut name = OsString::from(path);
    name.push(FILE_EXTENSION);
    PathBuf::from(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
; sample organ
[Organ]
ChurchName=Test
NumberOfManuals=1
[Manual001]
Name=Great
NumberOfStops=1
Stop001=1
[Stop001]
Name=Flute
WindchestGroup=1
[WindchestGroup001]
Name=Main
";

    fn lines(text: &str) -> Vec<String> {
        text.lines().map(str::to_string).collect()
    }

    #[test]
    fn test_from_text_builds_graph() {
        let doc = OdfDocument::from_text(SAMPLE);
        assert_eq!(doc.object_count(), 4);
        assert_eq!(doc.children("Manual001"), vec!["Stop001"]);
        assert_eq!(doc.parents("Stop001"), vec!["Manual001", "WindchestGroup001"]);
        assert_eq!(doc.object_names("Stop001"), Some("Flute"));
        assert_eq!(doc.attribute_value("Organ", "ChurchName"), Some("Test"));
        assert_eq!(doc.panel_format(), PanelFormat::Old);
    }

    #[test]
    fn test_duplicate_uids_renamed() {
        let mut doc = OdfDocument::from_text("[Stop001]\nName=A\n[Stop001]\nName=B\n");
        assert_eq!(doc.object_count(), 2);
        assert_eq!(doc.attribute_value("Stop001_", "Name"), Some("B"));
        let messages = doc.drain_diagnostics();
        assert_eq!(
            messages,
            vec!["Another occurence of the object Stop001 is present, it has been renamed in Stop001_"]
        );
    }

    #[test]
    fn test_set_section_replaces() {
        let mut doc = OdfDocument::from_text(SAMPLE);
        let uid = doc
            .set_section("Stop001", &lines("[Stop001]\nName=Bourdon\nWindchestGroup=1"))
            .unwrap();
        assert_eq!(uid, "Stop001");
        assert_eq!(doc.object_names("Stop001"), Some("Bourdon"));
        assert_eq!(doc.object_count(), 4);
        assert!(doc
            .diagnostics()
            .messages()
            .contains(&"Object Stop001 updated".to_string()));
    }

    #[test]
    fn test_set_section_implies_header() {
        let mut doc = OdfDocument::from_text(SAMPLE);
        let uid = doc.set_section("Stop002", &lines("Name=Principal  ")).unwrap();
        assert_eq!(uid, "Stop002");
        assert_eq!(doc.get_section("Stop002"), vec!["[Stop002]", "Name=Principal"]);
        // appended after a blank line
        let range = doc.line_range("Stop002");
        assert_eq!(doc.lines()[range.start - 1], "");
    }

    #[test]
    fn test_set_section_with_other_header() {
        let mut doc = OdfDocument::from_text(SAMPLE);
        let uid = doc
            .set_section("Stop001", &lines("[Stop003]\nName=Trumpet"))
            .unwrap();
        assert_eq!(uid, "Stop003");
        assert_eq!(doc.object_names("Stop001"), Some("Flute"));
        assert_eq!(doc.object_names("Stop003"), Some("Trumpet"));
        assert!(doc
            .diagnostics()
            .messages()
            .contains(&"Object Stop001 unchanged".to_string()));
    }

    #[test]
    fn test_set_section_rejected_is_atomic() {
        let mut doc = OdfDocument::from_text(SAMPLE);
        let before = doc.lines().to_vec();
        let result = doc.set_section("Stop001", &lines("[Stop001]\nName=Flute\nbroken line\n[Stop002]"));
        match result {
            Err(OdfError::InvalidSection { uid, count }) => {
                assert_eq!(uid, "Stop001");
                assert_eq!(count, 2);
            }
            other => panic!("unexpected result {:?}", other),
        }
        assert_eq!(doc.lines(), before.as_slice());
    }

    #[test]
    fn test_set_section_empty() {
        let mut doc = OdfDocument::from_text(SAMPLE);
        assert!(matches!(
            doc.set_section("Stop001", &lines("\n\n")),
            Err(OdfError::NoData(_))
        ));

        assert_eq!(doc.set_section(HEADER_UID, &[]).unwrap(), HEADER_UID);
        assert!(doc.get_section(HEADER_UID).is_empty());
        assert_eq!(doc.lines()[0], "[Organ]");
    }

    #[test]
    fn test_set_header() {
        let mut doc = OdfDocument::from_text(SAMPLE);
        assert!(doc.set_section(HEADER_UID, &lines("; new\nNot=comment")).is_err());
        assert_eq!(doc.get_section(HEADER_UID), vec!["; sample organ"]);

        doc.set_section(HEADER_UID, &lines("; first\n; second\n")).unwrap();
        assert_eq!(doc.get_section(HEADER_UID), vec!["; first", "; second"]);
        assert_eq!(doc.object_count(), 4);
    }

    #[test]
    fn test_remove_section() {
        let mut doc = OdfDocument::from_text(SAMPLE);
        doc.remove_section("Stop001").unwrap();
        assert_eq!(doc.object_count(), 3);
        assert!(doc.children("Manual001").is_empty());

        assert!(matches!(
            doc.remove_section("Stop001"),
            Err(OdfError::NotFound(_))
        ));
        assert!(doc
            .diagnostics()
            .messages()
            .contains(&"Object Stop001 not deleted because not found".to_string()));
    }

    #[test]
    fn test_with_extension() {
        assert_eq!(with_extension(PathBuf::from("a/b")), PathBuf::from("a/b.organ"));
        assert_eq!(
            with_extension(PathBuf::from("a/b.organ")),
            PathBuf::from("a/b.organ")
        );
    }

    #[test]
    fn test_reset_keeps_options() {
        let mut doc = OdfDocument::with_options(CheckOptions::with_file_check());
        doc.set_section("Organ", &lines("ChurchName=X")).unwrap();
        doc.reset();
        assert!(doc.lines().is_empty());
        assert!(doc.diagnostics().is_empty());
        assert!(doc.options().check_file_names);
    }
}
