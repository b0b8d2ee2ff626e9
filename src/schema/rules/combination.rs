//! Combination rules: divisionals and generals

use crate::schema::context::RecordCheck;
use crate::utils::ids::index_str;

use super::button::check_push_button;

fn manual_bound(r: &RecordCheck<'_, '_>, manual: Option<&str>, name: &str, fallback: i64) -> i64 {
    manual
        .and_then(|m| r.lookup_digits(m, name))
        .unwrap_or(fallback)
}

/// Divisional of a manual: its counts are bounded by the manual's own
pub fn check_divisional(r: &mut RecordCheck<'_, '_>) {
    let parent = r.parent_manual();
    let manual = parent.as_deref();

    let max = manual_bound(r, manual, "NumberOfCouplers", 999);
    if let Some(count) = r.natural("NumberOfCouplers", 0, max, true) {
        r.references("Coupler", count);
    }
    let max = manual_bound(r, manual, "NumberOfStops", 999);
    if let Some(count) = r.natural("NumberOfStops", 0, max, true) {
        r.references("Stop", count);
    }
    let max = manual_bound(r, manual, "NumberOfTremulants", 10);
    if let Some(count) = r.natural("NumberOfTremulants", 0, max, true) {
        r.references("Tremulant", count);
    }

    r.boolean("Protected", false);

    let max = manual_bound(r, manual, "NumberOfSwitches", 999);
    if let Some(count) = r.natural("NumberOfSwitches", 0, max, false) {
        r.references("Switch", count);
    }

    check_push_button(r);
}

/// General combination, also the base of general panel elements
pub fn check_general(r: &mut RecordCheck<'_, '_>) {
    let is_general = r.uid().starts_with("General");

    let max = r.objects_of_type("Coupler");
    if let Some(count) = r.natural("NumberOfCouplers", 0, max, is_general) {
        for index in 1..=count {
            let index = index_str(index);
            r.object_ref(&format!("CouplerNumber{}", index), true);
            r.object_ref(&format!("CouplerManual{}", index), true);
        }
    }

    let max = r.objects_of_type("DivisionalCoupler");
    if let Some(count) = r.natural("NumberOfDivisionalCouplers", 0, max, false) {
        r.references("DivisionalCouplerNumber", count);
    }

    let max = r.objects_of_type("Stop");
    if let Some(count) = r.natural("NumberOfStops", 0, max, is_general) {
        for index in 1..=count {
            let index = index_str(index);
            r.object_ref(&format!("StopNumber{}", index), true);
            r.object_ref(&format!("StopManual{}", index), true);
        }
    }

    let max = r.objects_of_type("Tremulant");
    if let Some(count) = r.natural("NumberOfTremulants", 0, max, is_general) {
        r.references("TremulantNumber", count);
    }

    let max = r.objects_of_type("Switch");
    if let Some(count) = r.natural("NumberOfSwitches", 0, max, false) {
        r.references("SwitchNumber", count);
    }

    r.boolean("Protected", false);

    check_push_button(r);
}
