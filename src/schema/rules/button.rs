//! Button family rules
//!
//! Every control displayed on a panel is a button: drawstops (stops,
//! couplers, switches, tremulants) and push buttons (divisionals, generals,
//! pistons) add their own attributes on top of the button ones.

use crate::defaults::{
    BUTTON_IMAGE_HEIGHT, BUTTON_IMAGE_WIDTH, DRAWSTOP_BITMAP_SIZE, PISTON_BITMAP_SIZE, ROOT_UID,
};
use crate::schema::attribute::AttrType;
use crate::schema::context::RecordCheck;

/// Piston look is the default for divisional and general controls
fn displayed_as_piston_by_default(r: &RecordCheck<'_, '_>) -> bool {
    let uid = r.uid();
    let combination = |s: &str| s.contains("Divisional") || s.contains("General");
    combination(uid)
        || (uid.contains("Element") && r.lookup(uid, "Type").is_some_and(combination))
}

pub fn check_button(r: &mut RecordCheck<'_, '_>) {
    r.text("Name", false);
    r.integer("ShortcutKey", 0, 255, false);
    r.integer("StopControlMIDIKeyNumber", 0, 127, false);
    r.integer("MIDIProgramChangeNumber", 1, 128, false);
    r.boolean("Displayed", false);
    r.boolean("DisplayInInvertedState", false);

    let as_piston = r
        .boolean("DisplayAsPiston", false)
        .unwrap_or_else(|| displayed_as_piston_by_default(r));

    r.label_text();
    r.text("DispLabelText", false);
    r.boolean("DispKeyLabelOnLeft", false);
    r.integer("DispImageNum", 1, if as_piston { 5 } else { 6 }, false);
    r.integer("DispButtonRow", 0, 199, false);
    r.integer("DispButtonCol", 1, 32, false);
    r.integer("DispDrawstopRow", 1, 199, false);
    r.integer("DispDrawstopCol", 1, 12, false);
    let image_on = r.file("ImageOn", false);
    r.file("ImageOff", false);
    r.file("MaskOn", false);
    r.file("MaskOff", false);

    let max = r.placement();

    let bitmap = match &image_on {
        Some(image) => r.image_size(image, (BUTTON_IMAGE_WIDTH, BUTTON_IMAGE_HEIGHT)),
        None if as_piston => (PISTON_BITMAP_SIZE, PISTON_BITMAP_SIZE),
        None => (DRAWSTOP_BITMAP_SIZE, DRAWSTOP_BITMAP_SIZE),
    };
    r.tile_offset(bitmap);

    let radius = match r.rectangle("MouseRect", max) {
        (Some(width), Some(height)) => width.max(height),
        _ => bitmap.0.max(bitmap.1),
    };
    r.integer("MouseRadius", 0, radius, false);

    r.text_area(max, bitmap.0);
}

pub fn check_push_button(r: &mut RecordCheck<'_, '_>) {
    check_button(r);
}

pub fn check_drawstop(r: &mut RecordCheck<'_, '_>) {
    r.check("Function", AttrType::DrawstopFunction, false);

    let switches = r.lookup_digits(ROOT_UID, "NumberOfSwitches").unwrap_or(999);
    if let Some(count) = r.natural("SwitchCount", 1, switches.max(1), false) {
        r.references("Switch", count);
    }

    r.boolean("DefaultToEngaged", false);
    r.integer("GCState", -1, 1, false);
    r.boolean("StoreInDivisional", false);
    r.boolean("StoreInGeneral", false);

    check_button(r);
}

/// Reversible piston toggling a stop, coupler, switch or tremulant
pub fn check_piston(r: &mut RecordCheck<'_, '_>) {
    let object_type = r.check("ObjectType", AttrType::PistonType, true);
    let needs_manual = object_type
        .as_deref()
        .is_some_and(|t| t.eq_ignore_ascii_case("STOP") || t.eq_ignore_ascii_case("COUPLER"));
    r.object_ref("ManualNumber", needs_manual);
    r.integer("ObjectNumber", 1, 200, false);

    check_push_button(r);
}
