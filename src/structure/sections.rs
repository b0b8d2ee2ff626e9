//! Section lookups
//!
//! A section is the `[UID]` line of an object and every line up to the next
//! header. The pseudo UID `Header` designates the lines before the first
//! header. All lookups read the line store through the object graph and
//! never modify either of them.

use std::ops::Range;

use crate::defaults::{
    FORMAT_SENTINEL_ATTRIBUTE, HEADER_UID, MAIN_PANEL_UID, PANEL_UID_LEN, ROOT_UID,
};
use crate::text::syntax::{classify, header_uid, is_header, LineKind};
use crate::utils::ids::{char_prefix, index_str, is_digits, split_index, strip_index, zero_pad};

use super::graph::ObjectGraph;

/// Layout of the panels in a document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PanelFormat {
    /// Main panel attributes live in the `Organ` object
    #[default]
    Old,
    /// Main panel is `Panel000`, panel items are `PanelNNNElementNNN` objects
    New,
}

/// Line range of a section, empty if the UID is unknown
///
/// For `Header` the range covers the lines before the first header (empty
/// when the document starts with a header).
pub fn line_range(lines: &[String], graph: &ObjectGraph, uid: &str) -> Range<usize> {
    let start = if uid == HEADER_UID {
        0
    } else {
        match graph.get(uid) {
            Some(record) => record.header_line,
            None => return 0..0,
        }
    };
    let first = if uid == HEADER_UID { start } else { start + 1 };
    let end = lines
        .iter()
        .enumerate()
        .skip(first)
        .find(|(_, line)| is_header(line))
        .map_or(lines.len(), |(index, _)| index);
    start..end.max(start)
}

/// Lines of a section
pub fn section_lines<'a>(lines: &'a [String], graph: &ObjectGraph, uid: &str) -> &'a [String] {
    &lines[line_range(lines, graph, uid)]
}

/// Value and position of the first `name=` attribute in a list of lines
///
/// With `assume_sorted`, the scan stops at the first attribute name greater
/// than `name`.
pub fn find_attribute<'a, S: AsRef<str>>(
    lines: &'a [S],
    name: &str,
    assume_sorted: bool,
) -> Option<(&'a str, usize)> {
    for (index, line) in lines.iter().enumerate() {
        if let LineKind::Attribute { name: found, value } = classify(line.as_ref()) {
            if found == name {
                return Some((value, index));
            }
            if assume_sorted && found > name {
                break;
            }
        }
    }
    None
}

/// Value of an attribute of an object, looked up in the line store
pub fn attribute_value<'a>(
    lines: &'a [String],
    graph: &ObjectGraph,
    uid: &str,
    name: &str,
) -> Option<&'a str> {
    find_attribute(section_lines(lines, graph, uid), name, false).map(|(value, _)| value)
}

/// Panel format of a document: new iff `Panel000` declares a GUI element count
pub fn panel_format(lines: &[String], graph: &ObjectGraph) -> PanelFormat {
    match attribute_value(lines, graph, MAIN_PANEL_UID, FORMAT_SENTINEL_ATTRIBUTE) {
        Some(value) if is_digits(value) => PanelFormat::New,
        _ => PanelFormat::Old,
    }
}

/// UID of the panel displaying an object
///
/// `PanelNNN` has no parent panel; `PanelNNN...` belongs to `PanelNNN`;
/// anything else is displayed in the main panel (`Panel000` or `Organ`).
pub fn parent_panel(uid: &str, format: PanelFormat) -> Option<String> {
    if uid.starts_with("Panel") {
        if uid.chars().count() == PANEL_UID_LEN {
            None
        } else {
            char_prefix(uid, PANEL_UID_LEN).map(str::to_string)
        }
    } else {
        match format {
            PanelFormat::New => Some(MAIN_PANEL_UID.to_string()),
            PanelFormat::Old => Some(ROOT_UID.to_string()),
        }
    }
}

/// UID of the manual listing an object in its `<type>NNN=` attributes
pub fn parent_manual(lines: &[String], graph: &ObjectGraph, uid: &str) -> Option<String> {
    let (object_type, index) = split_index(uid)?;
    let wanted = index_str(index);

    graph
        .uids()
        .filter(|candidate| candidate.starts_with("Manual"))
        .find(|manual| {
            section_lines(lines, graph, manual).iter().any(|line| {
                matches!(
                    classify(line),
                    LineKind::Attribute { name, value }
                        if strip_index(name) == object_type
                            && split_index(name).is_some()
                            && zero_pad(value) == wanted
                )
            })
        })
        .map(str::to_string)
}

/// Lines containing a text, as `"<uid> : <line>"` sorted
///
/// Lines before the first header are reported under `Header`.
pub fn search(lines: &[String], text: &str) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }
    let mut uid = HEADER_UID;
    let mut results: Vec<String> = Vec::new();
    for line in lines {
        if let Some(found) = header_uid(line) {
            uid = found;
        }
        if line.contains(text) {
            results.push(format!("{} : {}", uid, line));
        }
    }
    results.sort();
    results
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(text: &str) -> (Vec<String>, ObjectGraph) {
        let lines: Vec<String> = text.lines().map(str::to_string).collect();
        let graph = ObjectGraph::build(&lines);
        (lines, graph)
    }

    const SAMPLE: &str = "; comment\n\
                          \n\
                          [Organ]\n\
                          ChurchName=Test\n\
                          \n\
                          [Manual001]\n\
                          Name=Great\n\
                          Stop001=2\n\
                          [Stop002]\n\
                          Name=Flute";

    #[test]
    fn test_line_range() {
        let (lines, graph) = doc(SAMPLE);
        assert_eq!(line_range(&lines, &graph, "Header"), 0..2);
        assert_eq!(line_range(&lines, &graph, "Organ"), 2..5);
        assert_eq!(line_range(&lines, &graph, "Manual001"), 5..8);
        assert_eq!(line_range(&lines, &graph, "Stop002"), 8..10);
        assert_eq!(line_range(&lines, &graph, "Missing"), 0..0);
    }

    #[test]
    fn test_header_range_empty_when_document_starts_with_header() {
        let (lines, graph) = doc("[Organ]\nChurchName=Test");
        assert_eq!(line_range(&lines, &graph, "Header"), 0..0);
    }

    #[test]
    fn test_find_attribute() {
        let (lines, _) = doc(SAMPLE);
        assert_eq!(find_attribute(&lines, "Name", false), Some(("Great", 6)));
        assert_eq!(find_attribute(&lines, "Missing", false), None);

        let unsorted = vec!["Aa=1", "Cc=3", "Bb=2"];
        assert_eq!(find_attribute(&unsorted, "Bb", true), None);
        assert_eq!(find_attribute(&unsorted, "Bb", false), Some(("2", 2)));
    }

    #[test]
    fn test_attribute_value() {
        let (lines, graph) = doc(SAMPLE);
        assert_eq!(attribute_value(&lines, &graph, "Stop002", "Name"), Some("Flute"));
        assert_eq!(attribute_value(&lines, &graph, "Organ", "Name"), None);
        assert_eq!(attribute_value(&lines, &graph, "Nothing", "Name"), None);
    }

    #[test]
    fn test_panel_format() {
        let (lines, graph) = doc("[Panel000]\nNumberOfGUIElements=0\n");
        assert_eq!(panel_format(&lines, &graph), PanelFormat::New);
        let (lines, graph) = doc("[Panel000]\nNumberOfGUIElements=x\n");
        assert_eq!(panel_format(&lines, &graph), PanelFormat::Old);
        let (lines, graph) = doc("[Organ]\n");
        assert_eq!(panel_format(&lines, &graph), PanelFormat::Old);
    }

    #[test]
    fn test_parent_panel() {
        assert_eq!(parent_panel("Panel001", PanelFormat::New), None);
        assert_eq!(
            parent_panel("Panel001Element004", PanelFormat::New),
            Some("Panel001".to_string())
        );
        assert_eq!(parent_panel("Manual001", PanelFormat::New), Some("Panel000".to_string()));
        assert_eq!(parent_panel("Manual001", PanelFormat::Old), Some("Organ".to_string()));
    }

    #[test]
    fn test_parent_manual() {
        let (lines, graph) = doc(SAMPLE);
        assert_eq!(parent_manual(&lines, &graph, "Stop002"), Some("Manual001".to_string()));
        assert_eq!(parent_manual(&lines, &graph, "Stop001"), None);
        assert_eq!(parent_manual(&lines, &graph, "Organ"), None);
    }

    #[test]
    fn test_search() {
        let (lines, _) = doc(SAMPLE);
        assert_eq!(
            search(&lines, "Name"),
            vec!["Manual001 : Name=Great", "Organ : ChurchName=Test", "Stop002 : Name=Flute"]
        );
        assert_eq!(search(&lines, "comment"), vec!["Header : ; comment"]);
        assert!(search(&lines, "").is_empty());
    }
}
