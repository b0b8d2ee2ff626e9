//! Fixed values of the document format and of the checker
//!
//! Fallback dimensions are used when a bound cannot be derived from the
//! document itself (undeclared panel size, image file not checked, ...).

/// Extension appended on save when the target path lacks it
pub const FILE_EXTENSION: &str = ".organ";

/// Pseudo UID designating the comment block before the first header
pub const HEADER_UID: &str = "Header";

/// UID of the root record
pub const ROOT_UID: &str = "Organ";

/// UID of the main panel in the new panel format
pub const MAIN_PANEL_UID: &str = "Panel000";

/// Attribute of the main panel whose presence selects the new panel format
pub const FORMAT_SENTINEL_ATTRIBUTE: &str = "NumberOfGUIElements";

/// Width of the numeric index suffix in UIDs (Manual001, Stop012, ...)
pub const INDEX_WIDTH: usize = 3;

/// Length of a `PanelNNN` UID, prefix of every panel child UID
pub const PANEL_UID_LEN: usize = 8;

/// Separator between the display names collected for one object
pub const NAME_SEPARATOR: &str = " | ";

/// Panel screen size used when the parent panel declares none
pub const DEFAULT_PANEL_WIDTH: i64 = 3000;
pub const DEFAULT_PANEL_HEIGHT: i64 = 2000;

/// Built-in drawstop / piston bitmap sizes (square)
pub const DRAWSTOP_BITMAP_SIZE: i64 = 62;
pub const PISTON_BITMAP_SIZE: i64 = 32;

/// Button bitmap size assumed when an image is set but not inspected
pub const BUTTON_IMAGE_WIDTH: i64 = 500;
pub const BUTTON_IMAGE_HEIGHT: i64 = 200;

/// Built-in enclosure bitmap size
pub const ENCLOSURE_BITMAP_WIDTH: i64 = 46;
pub const ENCLOSURE_BITMAP_HEIGHT: i64 = 61;

/// Enclosure bitmap size assumed when bitmaps are set but not inspected
pub const ENCLOSURE_IMAGE_WIDTH: i64 = 100;
pub const ENCLOSURE_IMAGE_HEIGHT: i64 = 200;

/// Default enclosure mouse axis bound
pub const ENCLOSURE_MOUSE_AXIS: i64 = 200;

/// Label bitmap size assumed when an image is set but not inspected
pub const LABEL_IMAGE_WIDTH: i64 = 400;
pub const LABEL_IMAGE_HEIGHT: i64 = 100;

/// Manual key bitmap size assumed when an image is set but not inspected
pub const KEY_IMAGE_WIDTH: i64 = 100;
pub const KEY_IMAGE_HEIGHT: i64 = 300;

/// Largest sample offset accepted in pipe attributes
pub const MAX_SAMPLE_OFFSET: i64 = 158_760_000;

/// Built-in label bitmap size for a `DispImageNum` value
///
/// Values outside 1..=11 (or no value) use the largest built-in label.
pub fn label_bitmap_size(image_num: Option<i64>) -> (i64, i64) {
    match image_num {
        Some(1) | Some(3) | Some(7) | Some(10) => (80, 25),
        Some(2) | Some(6) | Some(9) => (80, 50),
        Some(4) | Some(8) | Some(11) => (160, 25),
        _ => (200, 50),
    }
}
