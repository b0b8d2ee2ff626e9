//! Object kinds
//!
//! The kind of an object is read from its generic UID, the UID with every
//! digit replaced by `9`.

use crate::utils::ids::generic_uid;

/// Rule set an object is checked with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Organ,
    Coupler,
    Divisional,
    DivisionalCoupler,
    Enclosure,
    General,
    Image,
    Label,
    Manual,
    Panel,
    PanelElement,
    /// `PanelNNN<Type>NNN` objects of the old panel format
    PanelOther,
    Rank,
    ReversiblePiston,
    SetterElement,
    Stop,
    Switch,
    Tremulant,
    WindchestGroup,
}

impl RecordKind {
    /// Kind of a UID, `None` if the UID is not a known object identifier
    pub fn from_uid(uid: &str) -> Option<Self> {
        let generic = generic_uid(uid);
        let kind = match generic.as_str() {
            "Organ" => RecordKind::Organ,
            "Coupler999" => RecordKind::Coupler,
            "Divisional999" => RecordKind::Divisional,
            "DivisionalCoupler999" => RecordKind::DivisionalCoupler,
            "Enclosure999" => RecordKind::Enclosure,
            "General999" => RecordKind::General,
            "Image999" => RecordKind::Image,
            "Label999" => RecordKind::Label,
            "Manual999" => RecordKind::Manual,
            "Panel999" => RecordKind::Panel,
            "Panel999Element999" => RecordKind::PanelElement,
            "Rank999" => RecordKind::Rank,
            "ReversiblePiston999" => RecordKind::ReversiblePiston,
            "SetterElement999" => RecordKind::SetterElement,
            "Stop999" => RecordKind::Stop,
            "Switch999" => RecordKind::Switch,
            "Tremulant999" => RecordKind::Tremulant,
            "WindchestGroup999" => RecordKind::WindchestGroup,
            other if other.starts_with("Panel") => RecordKind::PanelOther,
            _ => return None,
        };
        Some(kind)
    }
}
