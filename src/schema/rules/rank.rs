//! Rank and pipe rules
//!
//! Pipe attributes are prefixed with `PipeNNN`; attack, release and loop
//! attributes nest further (`PipeNNNAttackNNNLoopNNNStart`).

use crate::defaults::MAX_SAMPLE_OFFSET;
use crate::schema::attribute::AttrType;
use crate::schema::context::RecordCheck;
use crate::utils::ids::index_str;

const MAX_TIME: i64 = 100_000;

pub fn check_rank(r: &mut RecordCheck<'_, '_>) {
    let is_rank = r.uid().starts_with("Rank");

    r.text("Name", true);
    r.integer("FirstMidiNoteNumber", 0, 256, is_rank);
    r.object_ref("WindchestGroup", true);
    r.boolean("Percussive", true);

    r.float("AmplitudeLevel", 0, 1000, false);
    r.float("Gain", -120, 40, false);
    r.float("PitchTuning", -1200, 1200, false);
    r.integer("TrackerDelay", 0, 10000, false);
    r.float("HarmonicNumber", 1, 1024, false);
    r.float("PitchCorrection", -1200, 1200, false);
    r.float("MinVelocityVolume", 0, 1000, false);
    r.float("MaxVelocityVolume", 0, 1000, false);
    r.boolean("AcceptsRetuning", false);

    if let Some(pipes) = r.natural("NumberOfLogicalPipes", 1, 192, is_rank) {
        for index in 1..=pipes {
            check_pipe(r, &format!("Pipe{}", index_str(index)));
        }
    }
}

fn check_pipe(r: &mut RecordCheck<'_, '_>, pipe: &str) {
    let name = |suffix: &str| format!("{}{}", pipe, suffix);

    r.check(pipe, AttrType::PipeWave, true);
    r.boolean(&name("Percussive"), false);
    r.float(&name("AmplitudeLevel"), 0, 1000, false);
    r.float(&name("Gain"), -120, 40, false);
    r.float(&name("PitchTuning"), -1200, 1200, false);
    r.float(&name("TrackerDelay"), 0, 10000, false);
    r.boolean(&name("LoadRelease"), false);
    r.integer(&name("AttackVelocity"), 0, 127, false);
    r.integer(&name("MaxTimeSinceLastRelease"), -1, MAX_TIME, false);
    r.integer(&name("IsTremulant"), -1, 1, false);
    r.integer(&name("MaxKeyPressTime"), -1, MAX_TIME, false);
    r.integer(&name("AttackStart"), 0, MAX_SAMPLE_OFFSET, false);
    r.integer(&name("CuePoint"), -1, MAX_SAMPLE_OFFSET, false);
    r.integer(&name("ReleaseEnd"), -1, MAX_SAMPLE_OFFSET, false);
    r.float(&name("HarmonicNumber"), 1, 1024, false);
    r.integer(&name("MIDIKeyNumber"), -1, 127, false);
    r.float(&name("PitchCorrection"), -1200, 1200, false);
    r.boolean(&name("AcceptsRetuning"), false);
    r.object_ref(&name("WindchestGroup"), false);
    r.float(&name("MinVelocityVolume"), 0, 1000, false);
    r.float(&name("MaxVelocityVolume"), 0, 1000, false);

    check_loops(r, pipe, false);

    if let Some(attacks) = r.natural(&name("AttackCount"), 1, 100, false) {
        for index in 1..=attacks {
            let attack = name(&format!("Attack{}", index_str(index)));
            let name = |suffix: &str| format!("{}{}", attack, suffix);
            r.file(&attack, true);
            r.boolean(&name("LoadRelease"), false);
            r.integer(&name("AttackVelocity"), 0, 127, false);
            r.integer(&name("MaxTimeSinceLastRelease"), -1, MAX_TIME, false);
            r.integer(&name("IsTremulant"), -1, 1, false);
            r.integer(&name("MaxKeyPressTime"), -1, MAX_TIME, false);
            r.integer(&name("AttackStart"), 0, MAX_SAMPLE_OFFSET, false);
            r.integer(&name("CuePoint"), -1, MAX_SAMPLE_OFFSET, false);
            r.integer(&name("ReleaseEnd"), -1, MAX_SAMPLE_OFFSET, false);
            check_loops(r, &attack, true);
        }
    }

    if let Some(releases) = r.natural(&name("ReleaseCount"), 1, 100, false) {
        for index in 1..=releases {
            let release = name(&format!("Release{}", index_str(index)));
            let name = |suffix: &str| format!("{}{}", release, suffix);
            r.file(&release, true);
            r.integer(&name("IsTremulant"), -1, 1, false);
            r.integer(&name("MaxKeyPressTime"), -1, MAX_TIME, false);
            r.integer(&name("CuePoint"), -1, MAX_SAMPLE_OFFSET, false);
            r.integer(&name("ReleaseEnd"), -1, MAX_SAMPLE_OFFSET, false);
        }
    }

    r.integer(&name("LoopCrossfadeLength"), 0, 120, false);
    r.integer(&name("ReleaseCrossfadeLength"), 0, 120, false);
}

/// `<sample>LoopCount` and its `<sample>LoopNNNStart/End` pairs
///
/// A loop end must lie after its start.
fn check_loops(r: &mut RecordCheck<'_, '_>, sample: &str, required: bool) {
    let Some(loops) = r.natural(&format!("{}LoopCount", sample), 1, 100, false) else {
        return;
    };
    for index in 1..=loops {
        let lp = format!("{}Loop{}", sample, index_str(index));
        let start = r
            .natural(&format!("{}Start", lp), 0, MAX_SAMPLE_OFFSET, required)
            .unwrap_or(1);
        let min_end = (start + 1).min(MAX_SAMPLE_OFFSET);
        r.integer(&format!("{}End", lp), min_end, MAX_SAMPLE_OFFSET, required);
    }
}
