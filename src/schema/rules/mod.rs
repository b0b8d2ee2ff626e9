//! Per-type rule sets
//!
//! Every rule function consumes the attributes it knows from the
//! [`RecordCheck`] it is given. Object types sharing attributes call each
//! other (a stop is a drawstop, a drawstop is a button, ...), so the
//! attributes left over after [`dispatch`] are the unexpected ones.

mod button;
mod combination;
mod coupler;
mod enclosure;
mod image;
mod label;
mod manual;
mod organ;
mod panel;
mod rank;
mod setter;
mod stop;
mod windchest;

use super::context::RecordCheck;
use super::kind::RecordKind;

/// Run the rules of an object kind
pub fn dispatch(kind: RecordKind, r: &mut RecordCheck<'_, '_>) {
    match kind {
        RecordKind::Organ => organ::check_organ(r),
        RecordKind::Coupler => coupler::check_coupler(r),
        RecordKind::Divisional => combination::check_divisional(r),
        RecordKind::DivisionalCoupler => coupler::check_divisional_coupler(r),
        RecordKind::Enclosure => enclosure::check_enclosure(r),
        RecordKind::General => combination::check_general(r),
        RecordKind::Image => image::check_image(r),
        RecordKind::Label => label::check_label(r),
        RecordKind::Manual => manual::check_manual(r),
        RecordKind::Panel => panel::check_panel(r),
        RecordKind::PanelElement => panel::check_panel_element(r),
        RecordKind::PanelOther => panel::check_panel_other(r),
        RecordKind::Rank => rank::check_rank(r),
        RecordKind::ReversiblePiston => button::check_piston(r),
        RecordKind::SetterElement => setter::check_setter_element(r),
        RecordKind::Stop => stop::check_stop(r),
        RecordKind::Switch => stop::check_switch(r),
        RecordKind::Tremulant => stop::check_tremulant(r),
        RecordKind::WindchestGroup => windchest::check_windchest_group(r),
    }
}
