//! Value grammars of typed attributes
//!
//! Enumerations are compared case-insensitively except panel element types,
//! which are case-sensitive identifiers.

use once_cell::sync::Lazy;
use regex::Regex;

static INTEGER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[+-]?\d+$").expect("valid regex"));

static DECIMAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[+-]?(\d+\.?\d*|\.\d+)$").expect("valid regex"));

static HTML_COLOUR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^#[0-9A-Fa-f]{6}$").expect("valid regex"));

static PIPE_REFERENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^REF:\d{3}:\d{3}:\d{3}$").expect("valid regex"));

pub const COLOUR_NAMES: [&str; 17] = [
    "BLACK",
    "BLUE",
    "DARK BLUE",
    "GREEN",
    "DARK GREEN",
    "CYAN",
    "DARK CYAN",
    "RED",
    "DARK RED",
    "MAGENTA",
    "DARK MAGENTA",
    "YELLOW",
    "DARK YELLOW",
    "LIGHT GREY",
    "DARK GREY",
    "WHITE",
    "BROWN",
];

pub const FONT_SIZE_NAMES: [&str; 3] = ["SMALL", "NORMAL", "LARGE"];
pub const PANEL_SIZE_NAMES: [&str; 4] = ["SMALL", "MEDIUM", "MEDIUM LARGE", "LARGE"];
pub const COUPLER_TYPES: [&str; 3] = ["NORMAL", "BASS", "MELODY"];
pub const TREMULANT_TYPES: [&str; 2] = ["SYNTH", "WAVE"];
pub const PISTON_TYPES: [&str; 4] = ["STOP", "COUPLER", "SWITCH", "TREMULANT"];
pub const DRAWSTOP_FUNCTIONS: [&str; 7] = ["INPUT", "NOT", "AND", "XOR", "NAND", "NOR", "OR"];

/// Fixed panel element types; `L0`..`L9`, `CrescendoLabel1`..`32` and
/// `General1`..`50` are accepted on top of these
pub const ELEMENT_TYPES: [&str; 55] = [
    "Coupler",
    "Divisional",
    "DivisionalCoupler",
    "Enclosure",
    "General",
    "Label",
    "Manual",
    "ReversiblePiston",
    "Stop",
    "Swell",
    "Switch",
    "Tremulant",
    "CrescendoA",
    "CrescendoB",
    "CrescendoC",
    "CrescendoD",
    "CrescendoPrev",
    "CrescendoNext",
    "CrescendoCurrent",
    "Current",
    "Full",
    "GC",
    "GeneralLabel",
    "GeneralPrev",
    "GeneralNext",
    "Home",
    "Insert",
    "Delete",
    "M100",
    "M10",
    "M1",
    "P1",
    "P10",
    "P100",
    "PitchLabel",
    "PitchP1",
    "PitchP10",
    "PitchP100",
    "PitchM1",
    "PitchM10",
    "PitchM100",
    "Prev",
    "Next",
    "Set",
    "Regular",
    "Scope",
    "Scoped",
    "Save",
    "SequencerLabel",
    "TemperamentLabel",
    "TemperamentPrev",
    "TemperamentNext",
    "TransposeDown",
    "TransposeUp",
    "TransposeLabel",
];

fn is_one_of(value: &str, names: &[&str]) -> bool {
    let upper = value.to_uppercase();
    names.contains(&upper.as_str())
}

/// Signed integer value, `None` if the text is not an integer
pub fn parse_integer(value: &str) -> Option<i64> {
    if INTEGER.is_match(value) {
        value.parse().ok()
    } else {
        None
    }
}

/// Decimal value, `None` if the text is not a plain decimal number
pub fn parse_decimal(value: &str) -> Option<f64> {
    if DECIMAL.is_match(value) {
        value.parse().ok()
    } else {
        None
    }
}

pub fn is_boolean(value: &str) -> bool {
    is_one_of(value, &["Y", "N"])
}

/// Named colour or `#RRGGBB`
pub fn is_colour(value: &str) -> bool {
    is_one_of(value, &COLOUR_NAMES) || HTML_COLOUR.is_match(value)
}

/// Named font size or a point size in 1..=50
pub fn is_font_size(value: &str) -> bool {
    is_one_of(value, &FONT_SIZE_NAMES) || in_digit_range(value, 1, 50)
}

/// Named panel size or a pixel size in 100..=4000
pub fn is_panel_size(value: &str) -> bool {
    is_one_of(value, &PANEL_SIZE_NAMES) || in_digit_range(value, 100, 4000)
}

pub fn is_coupler_type(value: &str) -> bool {
    is_one_of(value, &COUPLER_TYPES)
}

pub fn is_tremulant_type(value: &str) -> bool {
    is_one_of(value, &TREMULANT_TYPES)
}

pub fn is_piston_type(value: &str) -> bool {
    is_one_of(value, &PISTON_TYPES)
}

pub fn is_drawstop_function(value: &str) -> bool {
    is_one_of(value, &DRAWSTOP_FUNCTIONS)
}

/// Panel element type, exact spelling
pub fn is_element_type(value: &str) -> bool {
    ELEMENT_TYPES.contains(&value)
        || numbered(value, "L", 0, 9).is_some_and(|digits| digits == 1)
        || numbered(value, "CrescendoLabel", 1, 32).is_some()
        || numbered(value, "General", 1, 50).is_some()
}

/// Number of digits after `prefix` when the rest of `value` is a number in `min..=max`
pub fn numbered(value: &str, prefix: &str, min: i64, max: i64) -> Option<usize> {
    let digits = value.strip_prefix(prefix)?;
    if in_digit_range(digits, min, max) {
        Some(digits.len())
    } else {
        None
    }
}

/// `.wav` sample file reference
pub fn is_wave_file(value: &str) -> bool {
    value.to_uppercase().ends_with(".WAV")
}

/// `REF:mmm:sss:ppp` reference to a pipe of another rank
pub fn is_pipe_reference(value: &str) -> bool {
    PIPE_REFERENCE.is_match(value)
}

fn in_digit_range(value: &str, min: i64, max: i64) -> bool {
    crate::utils::ids::parse_digits(value).is_some_and(|n| (min..=max).contains(&n))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_integer() {
        assert_eq!(parse_integer("12"), Some(12));
        assert_eq!(parse_integer("-1"), Some(-1));
        assert_eq!(parse_integer("+5"), Some(5));
        assert_eq!(parse_integer("1.5"), None);
        assert_eq!(parse_integer("+-5"), None);
        assert_eq!(parse_integer(""), None);
    }

    #[test]
    fn test_parse_decimal() {
        assert_eq!(parse_decimal("1.5"), Some(1.5));
        assert_eq!(parse_decimal("-.5"), Some(-0.5));
        assert_eq!(parse_decimal("100"), Some(100.0));
        assert_eq!(parse_decimal("3."), Some(3.0));
        assert_eq!(parse_decimal("1.2.3"), None);
        assert_eq!(parse_decimal("1e5"), None);
    }

    #[test]
    fn test_colour() {
        assert!(is_colour("Dark Blue"));
        assert!(is_colour("#A0b0C0"));
        assert!(is_colour("#000000"));
        assert!(!is_colour("#12345"));
        assert!(!is_colour("PURPLE"));
    }

    #[test]
    fn test_sizes() {
        assert!(is_font_size("normal"));
        assert!(is_font_size("50"));
        assert!(!is_font_size("51"));
        assert!(is_panel_size("Medium Large"));
        assert!(is_panel_size("1024"));
        assert!(!is_panel_size("99"));
    }

    #[test]
    fn test_enumerations() {
        assert!(is_coupler_type("melody"));
        assert!(!is_coupler_type("TREBLE"));
        assert!(is_tremulant_type("Synth"));
        assert!(is_piston_type("switch"));
        assert!(is_drawstop_function("Xor"));
        assert!(!is_drawstop_function("IF"));
    }

    #[test]
    fn test_element_types() {
        assert!(is_element_type("Stop"));
        assert!(is_element_type("L0"));
        assert!(!is_element_type("L10"));
        assert!(is_element_type("CrescendoLabel32"));
        assert!(!is_element_type("CrescendoLabel33"));
        assert!(!is_element_type("CrescendoLabel"));
        assert!(is_element_type("General50"));
        assert!(!is_element_type("General51"));
        assert!(!is_element_type("stop"));
    }

    #[test]
    fn test_pipe_values() {
        assert!(is_wave_file("pipes\\C1.WAV"));
        assert!(is_pipe_reference("REF:001:005:007"));
        assert!(!is_pipe_reference("REF:1:5:7"));
        assert!(!is_pipe_reference("REF:001:005:0071"));
    }
}
