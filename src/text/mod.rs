//! Layer 0: document text
//!
//! Raw lines of a document and their structural roles. No schema knowledge
//! lives here.
//!
//! ## Modules
//!
//! - `buffer`: line storage, duplicate UID resolution, save-time normalization
//! - `encoding`: Latin-1 / UTF-8-with-BOM detection and conversion
//! - `syntax`: line roles and line syntax checks

pub mod buffer;
pub mod encoding;
pub mod syntax;

// Re-exports for convenience
pub use buffer::{LineStore, UidRename};
pub use encoding::Encoding;
pub use syntax::{check_line, classify, LineKind, SyntaxError};
