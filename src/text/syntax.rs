//! Line roles and line syntax
//!
//! A line's role is decided structurally, nothing is tagged:
//! - header: `[UID]`, at least one character between the brackets
//! - attribute: `name=value`, at least 4 characters, not starting with `;` or `=`
//! - comment: starts with `;`
//! - blank: empty
//!
//! Anything else is a syntax error reported by [`check_line`].

use thiserror::Error;

/// Structural role of a document line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    Blank,
    Comment,
    Header(&'a str),
    Attribute { name: &'a str, value: &'a str },
    /// Not a recognized role (too short or malformed)
    Other,
}

/// Syntax problems of a single line
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyntaxError {
    #[error("the character ']' is missing at the end to define an object ID")]
    MissingClosingBracket,

    #[error("an object ID must be defined between the brackets")]
    EmptyUid,

    #[error("the object ID must contain only alphanumeric characters")]
    InvalidUid,

    #[error("the character '=' is missing to define an attribute=value pair or it may be a comment line")]
    MissingEquals,

    #[error("the character '=' must not start a line")]
    LeadingEquals,

    #[error("the attribute '{0}' must contain only alphanumeric or '_' characters")]
    InvalidAttributeName(String),
}

/// Classify a line (trailing whitespace is expected to be already stripped)
pub fn classify(line: &str) -> LineKind<'_> {
    if line.is_empty() {
        LineKind::Blank
    } else if let Some(uid) = header_uid(line) {
        LineKind::Header(uid)
    } else if let Some((name, value)) = split_attribute(line) {
        LineKind::Attribute { name, value }
    } else if line.starts_with(';') {
        LineKind::Comment
    } else {
        LineKind::Other
    }
}

/// UID of a header line, `None` if the line is not a header
pub fn header_uid(line: &str) -> Option<&str> {
    let uid = line.strip_prefix('[')?.strip_suffix(']')?;
    if uid.is_empty() {
        None
    } else {
        Some(uid)
    }
}

pub fn is_header(line: &str) -> bool {
    header_uid(line).is_some()
}

/// Name and value of an attribute line, split at the first `=`
pub fn split_attribute(line: &str) -> Option<(&str, &str)> {
    if line.chars().nth(3).is_none() || line.starts_with(';') || line.starts_with('=') {
        return None;
    }
    line.split_once('=')
}

pub fn is_attribute(line: &str) -> bool {
    split_attribute(line).is_some()
}

/// UIDs are made of alphanumeric characters only
pub fn is_valid_uid(uid: &str) -> bool {
    !uid.is_empty() && uid.chars().all(char::is_alphanumeric)
}

/// Attribute names are made of ASCII alphanumeric characters and `_`
pub fn is_valid_attribute_name(name: &str) -> bool {
    name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Check that a line respects the document syntax
pub fn check_line(line: &str) -> Result<(), SyntaxError> {
    if let Some(rest) = line.strip_prefix('[') {
        let uid = rest.strip_suffix(']').ok_or(SyntaxError::MissingClosingBracket)?;
        if uid.is_empty() {
            return Err(SyntaxError::EmptyUid);
        }
        if !is_valid_uid(uid) {
            return Err(SyntaxError::InvalidUid);
        }
    } else if !line.is_empty() && !line.starts_with(';') {
        let (name, _) = line.split_once('=').ok_or(SyntaxError::MissingEquals)?;
        if name.is_empty() {
            return Err(SyntaxError::LeadingEquals);
        }
        if !is_valid_attribute_name(name) {
            return Err(SyntaxError::InvalidAttributeName(name.to_string()));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify() {
        assert_eq!(classify(""), LineKind::Blank);
        assert_eq!(classify("; a comment"), LineKind::Comment);
        assert_eq!(classify("[Organ]"), LineKind::Header("Organ"));
        assert_eq!(
            classify("Name=Great"),
            LineKind::Attribute {
                name: "Name",
                value: "Great"
            }
        );
        assert_eq!(classify("[]"), LineKind::Other);
        assert_eq!(classify("a=1"), LineKind::Other);
    }

    #[test]
    fn test_attribute_value_may_be_empty_or_contain_equals() {
        assert_eq!(split_attribute("Name="), Some(("Name", "")));
        assert_eq!(split_attribute("Text=a=b"), Some(("Text", "a=b")));
        assert_eq!(split_attribute("=abc"), None);
        assert_eq!(split_attribute(";a=b"), None);
    }

    #[test]
    fn test_check_header_lines() {
        assert_eq!(check_line("[Manual001]"), Ok(()));
        assert_eq!(check_line("[Manual001"), Err(SyntaxError::MissingClosingBracket));
        assert_eq!(check_line("[]"), Err(SyntaxError::EmptyUid));
        assert_eq!(check_line("[Manual_1]"), Err(SyntaxError::InvalidUid));
    }

    #[test]
    fn test_check_attribute_lines() {
        assert_eq!(check_line("Pipe001=EMPTY"), Ok(()));
        assert_eq!(check_line("Key_C=1"), Ok(()));
        assert_eq!(check_line(""), Ok(()));
        assert_eq!(check_line(";; comment"), Ok(()));
        assert_eq!(check_line("Name Great"), Err(SyntaxError::MissingEquals));
        assert_eq!(check_line("=Great"), Err(SyntaxError::LeadingEquals));
        assert_eq!(
            check_line("Na me=Great"),
            Err(SyntaxError::InvalidAttributeName("Na me".to_string()))
        );
    }

    #[test]
    fn test_is_valid_uid() {
        assert!(is_valid_uid("Panel001Element002"));
        assert!(!is_valid_uid("Organ_"));
        assert!(!is_valid_uid(""));
    }
}
