//! Byte-level encodings of a document file
//!
//! A document is Latin-1 unless it starts with a UTF-8 byte-order mark.
//! The encoding found on load is reused on save.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{OdfError, Result};

/// UTF-8 byte-order mark
pub const UTF8_BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];

/// Supported file encodings
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Encoding {
    /// ISO-8859-1, one byte per character
    Latin1,
    /// UTF-8 preceded by a byte-order mark
    Utf8Bom,
}

impl Encoding {
    /// Encoding of a file from its first bytes
    pub fn detect(bytes: &[u8]) -> Self {
        if bytes.starts_with(&UTF8_BOM) {
            Encoding::Utf8Bom
        } else {
            Encoding::Latin1
        }
    }

    /// Decode a whole file content, returning the text and the detected encoding
    pub fn decode(bytes: &[u8]) -> Result<(String, Encoding)> {
        match Self::detect(bytes) {
            Encoding::Utf8Bom => {
                let text = std::str::from_utf8(&bytes[UTF8_BOM.len()..])
                    .map_err(|_| OdfError::Decode)?;
                Ok((text.to_string(), Encoding::Utf8Bom))
            }
            Encoding::Latin1 => {
                let text = bytes.iter().map(|&b| char::from(b)).collect();
                Ok((text, Encoding::Latin1))
            }
        }
    }

    /// Encode a text for writing, with the BOM if the encoding carries one
    pub fn encode(self, text: &str) -> Result<Vec<u8>> {
        match self {
            Encoding::Utf8Bom => {
                let mut out = Vec::with_capacity(UTF8_BOM.len() + text.len());
                out.extend_from_slice(&UTF8_BOM);
                out.extend_from_slice(text.as_bytes());
                Ok(out)
            }
            Encoding::Latin1 => text
                .chars()
                .map(|ch| u8::try_from(u32::from(ch)).map_err(|_| OdfError::Encode(ch, self)))
                .collect(),
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Encoding::Latin1 => write!(f, "ISO-8859-1"),
            Encoding::Utf8Bom => write!(f, "UTF-8-BOM"),
        }
    }
}
