//! Utility modules
//!
//! Helpers with no document state: UID arithmetic and image header probing.

pub mod bitmap;
pub mod ids;

// Re-export commonly used helpers
pub use bitmap::image_size;
pub use ids::*;
