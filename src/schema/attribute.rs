//! Attribute accessor
//!
//! Each object under check gets a scratch copy of its attribute lines,
//! sorted by name. Rules look attributes up by name; a found attribute is
//! validated against its [`AttrType`] and removed from the scratch copy.
//! Whatever is left at the end was not expected by any rule.

use crate::text::syntax::{classify, LineKind};

/// Semantic type of an attribute value
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AttrType {
    /// Signed integer within `min..=max`
    Integer { min: i64, max: i64 },
    /// Integer or decimal within `min..=max`
    Float { min: i64, max: i64 },
    /// `Y` or `N`
    Boolean,
    /// Free text, never invalid
    Text,
    Colour,
    FontSize,
    PanelSize,
    CouplerType,
    ElementType,
    TremulantType,
    PistonType,
    DrawstopFunction,
    /// Path relative to the document directory
    FileName,
    /// Number of another object, the type coming from the attribute name
    ObjectRef,
    /// `.wav` file, `REF:999:999:999` or `EMPTY`
    PipeWave,
}

impl AttrType {
    /// Numeric bounds of the type, if any
    pub fn bounds(&self) -> Option<(i64, i64)> {
        match *self {
            AttrType::Integer { min, max } | AttrType::Float { min, max } => Some((min, max)),
            _ => None,
        }
    }
}

/// One attribute line waiting to be checked
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingAttribute {
    pub name: String,
    pub value: String,
    /// Full line, quoted in messages
    pub line: String,
}

/// Attributes of an object not yet checked, sorted by name
#[derive(Debug, Clone, Default)]
pub struct PendingAttributes {
    entries: Vec<PendingAttribute>,
}

impl PendingAttributes {
    /// Collect the attribute lines of a section (header, comments and blanks are skipped)
    pub fn from_lines(lines: &[String]) -> Self {
        let mut entries: Vec<PendingAttribute> = lines
            .iter()
            .filter_map(|line| match classify(line) {
                LineKind::Attribute { name, value } => Some(PendingAttribute {
                    name: name.to_string(),
                    value: value.to_string(),
                    line: line.clone(),
                }),
                _ => None,
            })
            .collect();
        // stable: repeated names keep their document order
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Self { entries }
    }

    /// Remove and return the first attribute with the given name
    pub fn take(&mut self, name: &str) -> Option<PendingAttribute> {
        let index = self.entries.partition_point(|e| e.name.as_str() < name);
        match self.entries.get(index) {
            Some(entry) if entry.name == name => Some(self.entries.remove(index)),
            _ => None,
        }
    }

    /// Value of an attribute without consuming it
    pub fn peek(&self, name: &str) -> Option<&str> {
        let index = self.entries.partition_point(|e| e.name.as_str() < name);
        self.entries
            .get(index)
            .filter(|e| e.name == name)
            .map(|e| e.value.as_str())
    }

    /// Names appearing more than once, one item per extra occurrence
    pub fn repeated_names(&self) -> Vec<&str> {
        self.entries
            .windows(2)
            .filter(|pair| pair[0].name == pair[1].name)
            .map(|pair| pair[0].name.as_str())
            .collect()
    }

    /// Attributes left unchecked
    pub fn remaining(&self) -> &[PendingAttribute] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pending(text: &str) -> PendingAttributes {
        let lines: Vec<String> = text.lines().map(str::to_string).collect();
        PendingAttributes::from_lines(&lines)
    }

    #[test]
    fn test_from_lines_keeps_attributes_sorted() {
        let p = pending("[Stop001]\n; comment\nName=Flute\n\nGain=2\nAmplitudeLevel=100\n");
        let names: Vec<&str> = p.remaining().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["AmplitudeLevel", "Gain", "Name"]);
    }

    #[test]
    fn test_take_consumes() {
        let mut p = pending("Name=Flute\nGain=2\n");
        let entry = p.take("Gain").unwrap();
        assert_eq!(entry.value, "2");
        assert_eq!(entry.line, "Gain=2");
        assert!(p.take("Gain").is_none());
        assert_eq!(p.len(), 1);
    }

    #[test]
    fn test_sort_is_by_name_not_line() {
        // "Key001=1" sorts before "Key001Width=5" as a line but not as a name prefix
        let mut p = pending("Key001Width=5\nKey001=1\n");
        assert_eq!(p.take("Key001").unwrap().value, "1");
        assert_eq!(p.take("Key001Width").unwrap().value, "5");
    }

    #[test]
    fn test_repeated_names() {
        let p = pending("Name=A\nGain=1\nName=B\nName=C\n");
        assert_eq!(p.repeated_names(), vec!["Name", "Name"]);
    }

    #[test]
    fn test_repeated_names_take_in_document_order() {
        let mut p = pending("Name=A\nName=B\n");
        assert_eq!(p.take("Name").unwrap().value, "A");
        assert_eq!(p.peek("Name"), Some("B"));
    }

    #[test]
    fn test_bounds() {
        assert_eq!(AttrType::Integer { min: 0, max: 5 }.bounds(), Some((0, 5)));
        assert_eq!(AttrType::Boolean.bounds(), None);
    }
}
