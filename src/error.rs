//! Error types for document I/O and section edits
//!
//! Schema problems are never errors: they are reported through the
//! diagnostics log and never block a save. Only operations that cannot be
//! carried out (unreadable file, rejected edit, ...) return an `OdfError`.

use thiserror::Error;

use crate::text::encoding::Encoding;

#[derive(Debug, Error)]
pub enum OdfError {
    #[error("cannot access the file: {0}")]
    Io(#[from] std::io::Error),

    #[error("the file content is not valid UTF-8 after its byte-order mark")]
    Decode,

    #[error("the character {0:?} cannot be written with the encoding {1}")]
    Encode(char, Encoding),

    #[error("there is no data to save")]
    Empty,

    #[error("no file name is known to save the document")]
    NoFileName,

    #[error("no data to apply to the object {0}")]
    NoData(String),

    #[error("the lines proposed for {uid} contain {count} syntax error(s)")]
    InvalidSection { uid: String, count: usize },

    #[error("the object {0} does not exist")]
    NotFound(String),

    #[error("cannot serialize the object graph: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, OdfError>;
