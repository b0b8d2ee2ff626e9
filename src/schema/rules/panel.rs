//! Panel rules
//!
//! A panel is checked in two parts: its content (format dependent) and its
//! display metrics (shared by both formats). Panel elements and the
//! `PanelNNN<Type>NNN` objects of the old format reuse the rules of the
//! object type they display.

use crate::defaults::{MAIN_PANEL_UID, PANEL_UID_LEN, ROOT_UID};
use crate::schema::attribute::AttrType;
use crate::schema::context::RecordCheck;
use crate::utils::ids::{char_slice, index_str};

use super::button::check_piston;
use super::combination::{check_divisional, check_general};
use super::coupler::{check_coupler, check_divisional_coupler};
use super::enclosure::check_enclosure;
use super::image::check_image;
use super::label::check_label;
use super::manual::check_manual;
use super::setter::{check_setter_element, check_setter_type};
use super::stop::{check_stop, check_switch, check_tremulant};

/// Object list of an additional panel in the old format
struct PanelList {
    count: &'static str,
    object_type: &'static str,
    max: i64,
    /// `<Type>NNN` references follow the count
    listed: bool,
    /// each reference has a `<Type>NNNManual` companion
    with_manual: bool,
    /// the count must match the `PanelNNN<Type>NNN` objects
    reconciled: bool,
}

const fn list(
    count: &'static str,
    object_type: &'static str,
    max: i64,
    listed: bool,
    with_manual: bool,
    reconciled: bool,
) -> PanelList {
    PanelList {
        count,
        object_type,
        max,
        listed,
        with_manual,
        reconciled,
    }
}

const OLD_PANEL_LISTS: [PanelList; 11] = [
    list("NumberOfCouplers", "Coupler", 999, true, true, true),
    list("NumberOfDivisionals", "Divisional", 999, true, true, true),
    list("NumberOfDivisionalCouplers", "DivisionalCoupler", 8, true, false, true),
    list("NumberOfEnclosures", "Enclosure", 50, true, false, true),
    list("NumberOfGenerals", "General", 99, true, false, true),
    list("NumberOfImages", "Image", 999, false, false, true),
    list("NumberOfLabels", "Label", 999, false, false, true),
    list("NumberOfManuals", "Manual", 16, true, false, false),
    list("NumberOfReversiblePistons", "ReversiblePiston", 32, true, false, true),
    list("NumberOfStops", "Stop", 999, true, true, true),
    list("NumberOfTremulants", "Tremulant", 10, true, false, true),
];

pub fn check_panel(r: &mut RecordCheck<'_, '_>) {
    let uid = r.uid().to_string();
    let is_additional = uid != MAIN_PANEL_UID && uid != ROOT_UID;

    if r.is_new_format() {
        r.text("Name", is_additional);
        r.boolean("HasPedals", true);
        r.count("NumberOfGUIElements", &format!("{}Element", uid), 0, 999, true);
        r.text("Group", false);
        r.count("NumberOfImages", &format!("{}Image", uid), 0, 999, false);
    } else if is_additional {
        check_old_panel_content(r, &uid);
    }

    check_display_metrics(r);
}

/// Content of an additional panel in the old format
///
/// The main panel content of the old format is described by the root object.
fn check_old_panel_content(r: &mut RecordCheck<'_, '_>, uid: &str) {
    r.text("Name", true);
    r.boolean("HasPedals", true);

    for entry in &OLD_PANEL_LISTS {
        let Some(count) = r.natural(entry.count, 0, entry.max, true) else {
            continue;
        };
        if entry.listed {
            list_references(r, entry.object_type, count, entry.with_manual);
        }
        if entry.reconciled {
            r.reconcile(entry.count, count, &format!("{}{}", uid, entry.object_type));
        }
    }

    r.text("Group", false);
    r.count("NumberOfSetterElements", &format!("{}SetterElement", uid), 0, 8, false);

    if let Some(count) = r.natural("NumberOfSwitches", 0, 999, false) {
        r.references("Switch", count);
        r.reconcile("NumberOfSwitches", count, &format!("{}Switch", uid));
    }
}

fn list_references(r: &mut RecordCheck<'_, '_>, object_type: &str, count: i64, with_manual: bool) {
    for index in 1..=count {
        let name = format!("{}{}", object_type, index_str(index));
        r.object_ref(&name, true);
        if with_manual {
            r.object_ref(&format!("{}Manual", name), true);
        }
    }
}

fn check_display_metrics(r: &mut RecordCheck<'_, '_>) {
    r.check("DispScreenSizeHoriz", AttrType::PanelSize, true);
    r.check("DispScreenSizeVert", AttrType::PanelSize, true);
    for name in [
        "DispDrawstopBackgroundImageNum",
        "DispConsoleBackgroundImageNum",
        "DispKeyHorizBackgroundImageNum",
        "DispKeyVertBackgroundImageNum",
        "DispDrawstopInsetBackgroundImageNum",
    ] {
        r.integer(name, 1, 64, true);
    }
    r.text("DispControlLabelFont", true);
    r.text("DispShortcutKeyLabelFont", true);
    r.check("DispShortcutKeyLabelColour", AttrType::Colour, true);
    r.text("DispGroupLabelFont", true);
    r.integer("DispDrawstopCols", 2, 12, true);
    r.integer("DispDrawstopRows", 1, 20, true);
    let cols_offset = r.boolean("DispDrawstopColsOffset", true);
    r.boolean("DispPairDrawstopCols", true);
    r.integer("DispExtraDrawstopRows", 0, 99, true);
    r.integer("DispExtraDrawstopCols", 0, 40, true);
    r.integer("DispButtonCols", 1, 32, true);
    r.integer("DispExtraButtonRows", 0, 99, true);
    let extra_pedal_row = r.boolean("DispExtraPedalButtonRow", true);
    for name in [
        "DispButtonsAboveManuals",
        "DispExtraDrawstopRowsAboveExtraButtonRows",
        "DispTrimAboveManuals",
        "DispTrimBelowManuals",
        "DispTrimAboveExtraRows",
    ] {
        r.boolean(name, true);
    }

    r.integer("DispDrawstopWidth", 1, 150, false);
    r.integer("DispDrawstopHeight", 1, 150, false);
    r.boolean("DispDrawstopOuterColOffsetUp", cols_offset == Some(true));
    r.boolean("DispExtraPedalButtonRowOffset", extra_pedal_row == Some(true));
    r.boolean("DispExtraPedalButtonRowOffsetRight", false);
    for name in [
        "DispPistonWidth",
        "DispPistonHeight",
        "DispEnclosureWidth",
        "DispEnclosureHeight",
    ] {
        r.integer(name, 1, 150, false);
    }
    for name in [
        "DispPedalHeight",
        "DispPedalKeyWidth",
        "DispManualHeight",
        "DispManualKeyWidth",
    ] {
        r.integer(name, 1, 500, false);
    }
}

/// `PanelNNNElementNNN`: rules of the displayed object type
///
/// Nothing more is checked when the type is missing or invalid.
pub fn check_panel_element(r: &mut RecordCheck<'_, '_>) {
    let Some(element_type) = r.check("Type", AttrType::ElementType, true) else {
        return;
    };

    match element_type.as_str() {
        "Coupler" => {
            r.object_ref("Manual", true);
            r.object_ref("Coupler", true);
            check_coupler(r);
        }
        "Divisional" => {
            r.object_ref("Manual", true);
            r.object_ref("Divisional", true);
            check_divisional(r);
        }
        "DivisionalCoupler" => {
            r.object_ref("DivisionalCoupler", true);
            check_divisional_coupler(r);
        }
        "Enclosure" => {
            r.object_ref("Enclosure", true);
            check_enclosure(r);
        }
        "General" => {
            r.object_ref("General", true);
            check_general(r);
        }
        "Label" => check_label(r),
        "Manual" => {
            r.object_ref("Manual", true);
            check_manual(r);
        }
        "ReversiblePiston" => {
            r.object_ref("ReversiblePiston", true);
            check_piston(r);
        }
        "Stop" => {
            r.object_ref("Manual", true);
            r.object_ref("Stop", true);
            check_stop(r);
        }
        "Swell" => check_enclosure(r),
        "Switch" => {
            r.object_ref("Switch", true);
            check_switch(r);
        }
        "Tremulant" => {
            r.object_ref("Tremulant", true);
            check_tremulant(r);
        }
        setter => check_setter_type(r, setter),
    }
}

/// `PanelNNN<Type>NNN` objects of the old panel format
pub fn check_panel_other(r: &mut RecordCheck<'_, '_>) {
    let uid = r.uid().to_string();
    let len = uid.chars().count();
    let object_type = char_slice(&uid, PANEL_UID_LEN, len.saturating_sub(3));

    match object_type {
        "Coupler" => check_coupler(r),
        "Divisional" => check_divisional(r),
        "DivisionalCoupler" => check_divisional_coupler(r),
        "Enclosure" => check_enclosure(r),
        "General" => check_general(r),
        "Image" => check_image(r),
        "Label" => check_label(r),
        "ReversiblePiston" => check_piston(r),
        "SetterElement" => check_setter_element(r),
        "Stop" => check_stop(r),
        "Switch" => check_switch(r),
        "Tremulant" => check_tremulant(r),
        _ => {}
    }
}
