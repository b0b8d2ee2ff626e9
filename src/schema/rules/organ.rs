//! Root object rules

use crate::defaults::MAIN_PANEL_UID;
use crate::schema::context::RecordCheck;

use super::panel::check_panel;

pub fn check_organ(r: &mut RecordCheck<'_, '_>) {
    r.text("ChurchName", true);
    r.text("ChurchAddress", true);

    let has_pedal_manual = r.exists("Manual000");
    match r.boolean("HasPedals", true) {
        Some(true) if !has_pedal_manual => {
            r.error("HasPedals=Y but no Manual000 object is defined")
        }
        Some(false) if has_pedal_manual => {
            r.error("HasPedals=N whereas a Manual000 object is defined")
        }
        _ => {}
    }

    r.count("NumberOfDivisionalCouplers", "DivisionalCoupler", 0, 8, true);
    r.count("NumberOfEnclosures", "Enclosure", 0, 50, true);
    r.count("NumberOfGenerals", "General", 0, 99, true);
    r.count("NumberOfManuals", "Manual", 1, 16, true);

    let new_format = r.is_new_format();
    r.count("NumberOfPanels", "Panel", 0, 100, new_format);
    let has_main_panel = r.exists(MAIN_PANEL_UID);
    if new_format && !has_main_panel {
        r.report("Error : new panel format used but no Panel000 object is defined");
    } else if !new_format && has_main_panel {
        r.error("old panel format used whereas a Panel000 is defined");
    }

    r.count("NumberOfReversiblePistons", "ReversiblePiston", 0, 32, true);
    r.count("NumberOfTremulants", "Tremulant", 0, 10, true);
    r.count("NumberOfWindchestGroups", "WindchestGroup", 1, 50, true);

    for name in [
        "DivisionalsStoreIntermanualCouplers",
        "DivisionalsStoreIntramanualCouplers",
        "DivisionalsStoreTremulants",
        "GeneralsStoreDivisionalCouplers",
    ] {
        r.boolean(name, true);
    }

    for name in [
        "OrganBuilder",
        "OrganBuildDate",
        "OrganComments",
        "RecordingDetails",
        "InfoFilename",
    ] {
        r.text(name, false);
    }

    // Image, Label and SetterElement counts belong to the old panel format
    r.count("NumberOfImages", "Image", 0, 999, false);
    r.count("NumberOfLabels", "Label", 0, 999, false);
    r.count("NumberOfRanks", "Rank", 0, 999, false);
    r.count("NumberOfSetterElements", "SetterElement", 0, 999, false);
    r.count("NumberOfSwitches", "Switch", 0, 999, false);

    r.boolean("CombinationsStoreNonDisplayedDrawstops", false);
    r.float("AmplitudeLevel", 0, 1000, false);
    r.float("Gain", -120, 40, false);
    r.float("PitchTuning", -1200, 1200, false);
    r.float("TrackerDelay", 0, 10000, false);

    if !new_format {
        // the root object also describes the main panel
        check_panel(r);
    }
}
