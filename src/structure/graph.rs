//! Object graph
//!
//! Derived view of the line store: one record per header UID with its
//! display names, parent/child links and header line. The graph is never
//! edited in place; it is rebuilt from the lines after every change.
//!
//! ## Edge rules
//!
//! 1. Naming containment: `General*`, `Manual*`, `WindchestGroup*`,
//!    `Image*`, `Label*`, `ReversiblePiston*`, `SetterElement*` and
//!    `PanelNNN` are children of `Organ`; longer `PanelNNN...` UIDs are
//!    children of their `PanelNNN` prefix.
//! 2. Numeric-suffix reference: `Coupler003=12` makes `Coupler012` a child.
//! 3. Cross reference: `WindchestGroup=2` makes `WindchestGroup002` the
//!    parent; panel elements referencing `Stop=4` (and the like) get the
//!    referenced object as a child.
//!
//! Links are only made between UIDs that exist and are deduplicated.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::defaults::{INDEX_WIDTH, NAME_SEPARATOR, PANEL_UID_LEN, ROOT_UID};
use crate::text::syntax::{classify, LineKind};
use crate::utils::ids::{basename, char_slice, is_digits, split_index, zero_pad};

/// UID prefixes whose objects hang directly under the root record
const ROOT_CHILD_PREFIXES: [&str; 7] = [
    "General",
    "Manual",
    "WindchestGroup",
    "Image",
    "Label",
    "ReversiblePiston",
    "SetterElement",
];

/// Attributes of a `PanelNNNElementNNN` object referencing a main panel object
const ELEMENT_REFERENCES: [&str; 7] = [
    "Coupler",
    "Divisional",
    "DivisionalCoupler",
    "Enclosure",
    "Stop",
    "Switch",
    "Tremulant",
];

/// Attribute names whose values are collected as display names
const NAME_ATTRIBUTES: [&str; 4] = ["Name", "ChurchName", "Type", "Image"];

/// Graph entry of one object
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct ObjectRecord {
    /// Display names joined with ` | `, empty if none
    pub names: String,
    pub parents: BTreeSet<String>,
    pub children: BTreeSet<String>,
    /// Index of the `[UID]` line in the line store
    pub header_line: usize,
}

/// All objects of a document, keyed and iterated by UID
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct ObjectGraph {
    objects: BTreeMap<String, ObjectRecord>,
}

impl ObjectGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the graph of a list of lines
    pub fn build(lines: &[String]) -> Self {
        let mut graph = Self::new();

        // Pass 1: every UID must be known before links are made
        for (index, line) in lines.iter().enumerate() {
            if let LineKind::Header(uid) = classify(line) {
                graph.objects.entry(uid.to_string()).or_insert(ObjectRecord {
                    header_line: index,
                    ..ObjectRecord::default()
                });
            }
        }

        // Pass 2: links and names
        let mut current = String::new();
        for (index, line) in lines.iter().enumerate() {
            match classify(line) {
                LineKind::Header(uid) => {
                    current = uid.to_string();
                    if let Some(record) = graph.objects.get_mut(uid) {
                        record.header_line = index;
                    }
                    graph.link_by_name(uid);
                }
                LineKind::Attribute { name, value } => {
                    graph.link_by_attribute(&current, name, value);
                    graph.collect_name(&current, name, value);
                }
                _ => {}
            }
        }

        log::debug!("object graph rebuilt with {} objects", graph.len());
        graph
    }

    fn link_by_name(&mut self, uid: &str) {
        if ROOT_CHILD_PREFIXES.iter().any(|p| uid.starts_with(p)) {
            self.link(ROOT_UID, uid);
        } else if uid.starts_with("Panel") {
            let len = uid.chars().count();
            if len == PANEL_UID_LEN {
                self.link(ROOT_UID, uid);
            } else if len > PANEL_UID_LEN {
                let panel = char_slice(uid, 0, PANEL_UID_LEN).to_string();
                self.link(&panel, uid);
            }
        }
    }

    fn link_by_attribute(&mut self, owner: &str, name: &str, value: &str) {
        if !is_digits(value) {
            return;
        }
        let suffix_start = name.len().saturating_sub(INDEX_WIDTH);
        let has_index = name.len() >= INDEX_WIDTH
            && name.is_char_boundary(suffix_start)
            && is_digits(&name[suffix_start..]);

        if has_index {
            let target = format!("{}{}", &name[..suffix_start], zero_pad(value));
            self.link(owner, &target);
        } else if name == "WindchestGroup" {
            let group = format!("{}{}", name, zero_pad(value));
            self.link(&group, owner);
        } else if char_slice(owner, PANEL_UID_LEN, PANEL_UID_LEN + 7) == "Element"
            && ELEMENT_REFERENCES.contains(&name)
        {
            let target = format!("{}{}", name, zero_pad(value));
            self.link(owner, &target);
        }
    }

    fn collect_name(&mut self, owner: &str, name: &str, value: &str) {
        if value.is_empty() || !(NAME_ATTRIBUTES.contains(&name) || name.ends_with("Text")) {
            return;
        }
        let shown = if name == "Image" { basename(value) } else { value };
        if let Some(record) = self.objects.get_mut(owner) {
            if !record.names.is_empty() {
                record.names.push_str(NAME_SEPARATOR);
            }
            record.names.push_str(shown);
        }
    }

    /// Add a parent/child link if both objects exist
    fn link(&mut self, parent: &str, child: &str) {
        if !self.objects.contains_key(parent) || !self.objects.contains_key(child) {
            return;
        }
        if let Some(record) = self.objects.get_mut(parent) {
            record.children.insert(child.to_string());
        }
        if let Some(record) = self.objects.get_mut(child) {
            record.parents.insert(parent.to_string());
        }
    }

    pub fn get(&self, uid: &str) -> Option<&ObjectRecord> {
        self.objects.get(uid)
    }

    pub fn contains(&self, uid: &str) -> bool {
        self.objects.contains_key(uid)
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// UIDs in sorted order
    pub fn uids(&self) -> impl Iterator<Item = &str> {
        self.objects.keys().map(String::as_str)
    }

    /// Records in UID order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ObjectRecord)> {
        self.objects.iter().map(|(uid, record)| (uid.as_str(), record))
    }

    pub fn parents(&self, uid: &str) -> Vec<String> {
        self.get(uid)
            .map(|r| r.parents.iter().cloned().collect())
            .unwrap_or_default()
    }

    pub fn children(&self, uid: &str) -> Vec<String> {
        self.get(uid)
            .map(|r| r.children.iter().cloned().collect())
            .unwrap_or_default()
    }

    pub fn names(&self, uid: &str) -> Option<&str> {
        self.get(uid).map(|r| r.names.as_str())
    }

    /// Number of objects `<type>NNN` with an index above 000
    ///
    /// Index 000 objects are counted too when `count_zero` is set.
    pub fn count_of_type(&self, object_type: &str, count_zero: bool) -> usize {
        self.indexed_of_type(object_type)
            .filter(|&(_, index)| index > 0 || count_zero)
            .count()
    }

    /// Objects `<type>NNN` with their index
    pub fn indexed_of_type<'a>(
        &'a self,
        object_type: &'a str,
    ) -> impl Iterator<Item = (&'a str, i64)> + 'a {
        self.uids().filter_map(move |uid| match split_index(uid) {
            Some((prefix, index)) if prefix == object_type => Some((uid, index)),
            _ => None,
        })
    }

    /// Pretty JSON dump of the whole graph
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.objects)
    }
}
