//! Coupler rules

use crate::defaults::ROOT_UID;
use crate::schema::attribute::AttrType;
use crate::schema::context::RecordCheck;

use super::button::check_drawstop;

pub fn check_coupler(r: &mut RecordCheck<'_, '_>) {
    let unison_off = r.boolean("UnisonOff", true);
    let coupler_type = r.check("CouplerType", AttrType::CouplerType, false);

    let coupling = unison_off == Some(false);
    r.integer("DestinationManual", 0, 16, coupling);
    r.integer("DestinationKeyshift", -24, 24, coupling);

    let keyboard_wide = !coupler_type
        .as_deref()
        .is_some_and(|t| t.eq_ignore_ascii_case("MELODY") || t.eq_ignore_ascii_case("BASS"));
    let required = coupling && keyboard_wide;
    for name in [
        "CoupleToSubsequentUnisonIntermanualCouplers",
        "CoupleToSubsequentUpwardIntermanualCouplers",
        "CoupleToSubsequentDownwardIntermanualCouplers",
        "CoupleToSubsequentUpwardIntramanualCouplers",
        "CoupleToSubsequentDownwardIntramanualCouplers",
    ] {
        r.boolean(name, required);
    }

    r.integer("FirstMIDINoteNumber", 0, 127, false);
    r.integer("NumberOfKeys", 0, 127, false);

    check_drawstop(r);
}

pub fn check_divisional_coupler(r: &mut RecordCheck<'_, '_>) {
    r.boolean("BiDirectionalCoupling", true);

    let manuals = r.lookup_digits(ROOT_UID, "NumberOfManuals").unwrap_or(16);
    if let Some(count) = r.natural("NumberOfManuals", 1, manuals.max(1), true) {
        r.references("Manual", count);
    }

    check_drawstop(r);
}
