//! Checker configuration
//!
//! Options are chosen by the host (typically once per opened document) and
//! handed to the document; they are never read from global state.

use serde::{Deserialize, Serialize};

/// Options of a validation pass
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(default, rename_all = "snake_case")]
pub struct CheckOptions {
    /// Verify that files referenced by the document exist (relative to the
    /// document directory) and read image sizes to derive bounds
    pub check_file_names: bool,
}

impl CheckOptions {
    /// Options with file checking enabled
    pub fn with_file_check() -> Self {
        Self {
            check_file_names: true,
        }
    }

    /// Parse options from a YAML document; missing keys keep their default
    pub fn from_yaml_str(yaml: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(yaml)
    }
}
