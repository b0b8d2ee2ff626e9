//! Layer 1: document structure
//!
//! Objects and their relations, derived from the Layer 0 lines.
//!
//! ## Architecture
//!
//! Layer 1 is stateless: the graph is rebuilt from the lines on demand and
//! lookups read both without modifying them. No schema knowledge lives here.
//!
//! ## Modules
//!
//! - `graph`: object records and parent/child links
//! - `sections`: section ranges, attribute lookup, panel/manual ownership, search

pub mod graph;
pub mod sections;

// Re-exports for convenience
pub use graph::{ObjectGraph, ObjectRecord};
pub use sections::{
    attribute_value, find_attribute, line_range, panel_format, parent_manual, parent_panel,
    search, section_lines, PanelFormat,
};
