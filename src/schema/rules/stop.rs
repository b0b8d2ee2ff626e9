//! Drawstop objects: stops, switches and tremulants

use crate::schema::attribute::AttrType;
use crate::schema::context::RecordCheck;
use crate::utils::ids::index_str;

use super::button::check_drawstop;
use super::rank::check_rank;

const MAX_PIPES: i64 = 192;

/// A stop either lists ranks or carries the attributes of its single rank
pub fn check_stop(r: &mut RecordCheck<'_, '_>) {
    let is_stop = r.uid().starts_with("Stop");

    let ranks = r.natural("NumberOfRanks", 0, 999, false).unwrap_or(0);

    r.integer("FirstAccessiblePipeLogicalKeyNumber", 1, 128, is_stop);
    r.integer("FirstAccessiblePipeLogicalPipeNumber", 1, MAX_PIPES, ranks == 0);
    let pipes = r
        .natural("NumberOfAccessiblePipes", 1, MAX_PIPES, true)
        .unwrap_or(MAX_PIPES);

    if ranks > 0 {
        for index in 1..=ranks {
            let rank = format!("Rank{}", index_str(index));
            r.object_ref(&rank, true);
            r.integer(&format!("{}FirstPipeNumber", rank), 1, pipes.max(1), false);
            r.integer(&format!("{}PipeCount", rank), 0, pipes, false);
            r.integer(&format!("{}FirstAccessibleKeyNumber", rank), 1, pipes.max(1), false);
        }
    } else {
        check_rank(r);
    }

    check_drawstop(r);
}

pub fn check_switch(r: &mut RecordCheck<'_, '_>) {
    check_drawstop(r);
}

pub fn check_tremulant(r: &mut RecordCheck<'_, '_>) {
    let is_synth = r
        .check("TremulantType", AttrType::TremulantType, false)
        .is_some_and(|t| t.eq_ignore_ascii_case("SYNTH"));
    r.integer("Period", 32, 44100, is_synth);
    r.integer("StartRate", 1, 100, is_synth);
    r.integer("StopRate", 1, 100, is_synth);
    r.integer("AmpModDepth", 1, 100, is_synth);

    check_drawstop(r);
}
