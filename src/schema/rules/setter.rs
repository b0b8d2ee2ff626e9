//! Setter element rules
//!
//! A setter element is displayed either as a label or as a button,
//! depending on its type.

use crate::schema::attribute::AttrType;
use crate::schema::context::RecordCheck;
use crate::schema::values::numbered;

use super::button::check_button;
use super::label::check_label;

const LABEL_TYPES: [&str; 6] = [
    "CrescendoLabel",
    "GeneralLabel",
    "PitchLabel",
    "SequencerLabel",
    "TemperamentLabel",
    "TransposeLabel",
];

const BUTTON_TYPES: [&str; 38] = [
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
    "PitchM100",
    "PitchM10",
    "PitchM1",
    "PitchP1",
    "PitchP10",
    "PitchP100",
    "Prev",
    "Next",
    "Set",
    "Regular",
    "Scope",
    "Scoped",
    "Save",
    "TemperamentPrev",
    "TemperamentNext",
    "TransposeDown",
    "TransposeUp",
];

/// Setter displayed as a label
fn is_label_type(setter_type: &str) -> bool {
    LABEL_TYPES.contains(&setter_type) || numbered(setter_type, "CrescendoLabel", 1, 32).is_some()
}

/// Setter displayed as a button
fn is_button_type(setter_type: &str) -> bool {
    BUTTON_TYPES.contains(&setter_type)
        || numbered(setter_type, "General", 1, 50).is_some()
        || numbered(setter_type, "L", 0, 9).is_some_and(|digits| digits == 1)
}

/// `SetterElementNNN` objects, whose type is one of their attributes
pub fn check_setter_element(r: &mut RecordCheck<'_, '_>) {
    if let Some(setter_type) = r.check("Type", AttrType::ElementType, true) {
        check_setter_type(r, &setter_type);
    }
}

/// Rules of a setter whose type is already known
pub fn check_setter_type(r: &mut RecordCheck<'_, '_>, setter_type: &str) {
    if is_label_type(setter_type) {
        check_label(r);
    } else if is_button_type(setter_type) {
        check_button(r);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setter_display() {
        assert!(is_label_type("CrescendoLabel"));
        assert!(is_label_type("CrescendoLabel12"));
        assert!(is_label_type("TransposeLabel"));
        assert!(!is_label_type("GC"));

        assert!(is_button_type("GC"));
        assert!(is_button_type("General12"));
        assert!(is_button_type("L7"));
        assert!(is_button_type("TransposeUp"));
        assert!(!is_button_type("General"));
        assert!(!is_button_type("L10"));
        assert!(!is_button_type("PitchLabel"));
    }
}
