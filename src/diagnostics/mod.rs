//! Diagnostics log
//!
//! Append-only list of human-readable messages produced by file operations,
//! section edits and validation passes. The severity is part of the text
//! (`Error ...`, `Warning ...`, `INTERNAL ERROR ...`) so hosts can show the
//! log as is. Every message is mirrored to the `log` facade.

use serde::{Deserialize, Serialize};

/// Severity level of a message, read from its prefix
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticSeverity {
    Error,
    Warning,
    Info,
}

impl DiagnosticSeverity {
    /// Severity of a message from its leading words
    pub fn of(message: &str) -> Self {
        if message.starts_with("Error")
            || message.starts_with("Syntax error")
            || message.starts_with("INTERNAL ERROR")
        {
            DiagnosticSeverity::Error
        } else if message.starts_with("Warning") {
            DiagnosticSeverity::Warning
        } else {
            DiagnosticSeverity::Info
        }
    }
}

/// Messages of a document
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Diagnostics {
    messages: Vec<String>,
    /// Attributes visited by the current validation pass
    checked_attributes: usize,
}

impl Diagnostics {
    /// Create an empty log
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message
    pub fn add(&mut self, message: impl Into<String>) {
        let message = message.into();
        match DiagnosticSeverity::of(&message) {
            DiagnosticSeverity::Error => log::error!("{}", message),
            DiagnosticSeverity::Warning => log::warn!("{}", message),
            DiagnosticSeverity::Info => log::info!("{}", message),
        }
        self.messages.push(message);
    }

    /// `Error in <uid> : <text>`
    pub fn error_in(&mut self, uid: &str, text: impl std::fmt::Display) {
        self.add(format!("Error in {} : {}", uid, text));
    }

    /// `Error in <uid> / <line> : <text>`, for a faulty attribute line
    pub fn error_at(&mut self, uid: &str, line: &str, text: impl std::fmt::Display) {
        self.add(format!("Error in {} / {} : {}", uid, line, text));
    }

    /// `Warning in <uid> : <text>`
    pub fn warning_in(&mut self, uid: &str, text: impl std::fmt::Display) {
        self.add(format!("Warning in {} : {}", uid, text));
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Check if any message is an error
    pub fn has_errors(&self) -> bool {
        self.messages
            .iter()
            .any(|m| DiagnosticSeverity::of(m) == DiagnosticSeverity::Error)
    }

    /// Hand the messages over to the caller and clear the log
    pub fn drain(&mut self) -> Vec<String> {
        std::mem::take(&mut self.messages)
    }

    pub fn clear(&mut self) {
        self.messages.clear();
        self.checked_attributes = 0;
    }

    pub fn count_checked(&mut self) {
        self.checked_attributes += 1;
    }

    pub fn checked_attributes(&self) -> usize {
        self.checked_attributes
    }

    pub fn reset_checked(&mut self) {
        self.checked_attributes = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_from_prefix() {
        assert_eq!(
            DiagnosticSeverity::of("Error in Organ : the attribute X is expected"),
            DiagnosticSeverity::Error
        );
        assert_eq!(
            DiagnosticSeverity::of("Syntax error in Organ 'x' : ..."),
            DiagnosticSeverity::Error
        );
        assert_eq!(
            DiagnosticSeverity::of("INTERNAL ERROR : max < min"),
            DiagnosticSeverity::Error
        );
        assert_eq!(
            DiagnosticSeverity::of("Warning : the object Stop001 is not used"),
            DiagnosticSeverity::Warning
        );
        assert_eq!(DiagnosticSeverity::of("12 attributes checked"), DiagnosticSeverity::Info);
    }

    #[test]
    fn test_formatted_messages() {
        let mut diags = Diagnostics::new();
        diags.error_in("Organ", "HasPedals=Y but no Manual000 object is defined");
        diags.error_at("Stop001", "Gain=x", "bad value");
        diags.warning_in("Manual001", "the attribute Foo is not expected");
        assert_eq!(
            diags.messages(),
            &[
                "Error in Organ : HasPedals=Y but no Manual000 object is defined",
                "Error in Stop001 / Gain=x : bad value",
                "Warning in Manual001 : the attribute Foo is not expected",
            ]
        );
        assert!(diags.has_errors());
    }

    #[test]
    fn test_drain_clears() {
        let mut diags = Diagnostics::new();
        diags.add("Loading the file 'a.organ'");
        assert!(!diags.has_errors());
        assert_eq!(diags.drain(), vec!["Loading the file 'a.organ'"]);
        assert!(diags.is_empty());
    }

    #[test]
    fn test_checked_counter() {
        let mut diags = Diagnostics::new();
        diags.count_checked();
        diags.count_checked();
        assert_eq!(diags.checked_attributes(), 2);
        diags.reset_checked();
        assert_eq!(diags.checked_attributes(), 0);
    }
}
