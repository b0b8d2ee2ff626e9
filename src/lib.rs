//! Organ definition file (ODF) editor core
//!
//! Document model and schema validator for organ definition files: plain
//! text documents made of `[UID]` sections of `name=value` attributes that
//! describe a virtual pipe organ (manuals, stops, ranks, panels, ...).
//!
//! ## Layers
//!
//! - `text`: raw lines, encodings and line syntax
//! - `structure`: object graph and section lookups derived from the lines
//! - `schema`: per-object-type rules and the validation pass
//! - `document`: [`OdfDocument`], the facade a host application drives
//!
//! Results of file operations, edits and validation passes are collected as
//! plain messages in the document [`Diagnostics`] log.

pub mod config;
pub mod defaults;
pub mod diagnostics;
pub mod document;
pub mod error;
pub mod schema;
pub mod structure;
pub mod text;
pub mod utils;

// Re-export commonly used types
pub use config::CheckOptions;
pub use diagnostics::{DiagnosticSeverity, Diagnostics};
pub use document::OdfDocument;
pub use error::{OdfError, Result};
pub use structure::{ObjectGraph, ObjectRecord, PanelFormat};
pub use text::Encoding;
