pub mod stage1_identity;
pub mod stage2_features;
pub mod stage3_classify;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::input::RawScores;
use crate::model::record::StudentRecord;
use crate::model::thresholds::RiskProfile;
use stage1_identity::{Stage1Output, run_stage1};
use stage2_features::{Stage2Output, run_stage2};
use stage3_classify::{Stage3Inputs, Stage3Output, run_stage3};

/// Generator for one pipeline invocation. Seeded once, never reseeded.
pub fn seeded_rng(profile: &RiskProfile) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(profile.seed)
}

pub fn run_pipeline(raw: &[RawScores], profile: &RiskProfile) -> Vec<StudentRecord> {
    let mut rng = seeded_rng(profile);

    let stage1 = run_stage1(raw);
    let stage2 = run_stage2(&stage1.average_score, profile, &mut rng);
    let stage3 = run_stage3(&Stage3Inputs {
        attendance_pct: &stage2.attendance_pct,
        average_score: &stage1.average_score,
        profile,
    });

    let records = assemble_records(raw, stage1, stage2, stage3);
    tracing::debug!(
        students = records.len(),
        seed = profile.seed,
        "risk features derived"
    );
    records
}

pub fn assemble_records(
    raw: &[RawScores],
    stage1: Stage1Output,
    stage2: Stage2Output,
    stage3: Stage3Output,
) -> Vec<StudentRecord> {
    let mut out = Vec::with_capacity(raw.len());
    for (i, student_id) in stage1.student_id.into_iter().enumerate() {
        let scores = &raw[i];
        let record = StudentRecord {
            student_id,
            math_score: scores.math_score,
            reading_score: scores.reading_score,
            writing_score: scores.writing_score,
            average_score: stage1.average_score[i],
            attendance_pct: stage2.attendance_pct[i],
            sem1_score: stage2.sem1_score[i],
            sem2_score: stage2.sem2_score[i],
            consistency_score: stage2.consistency_score[i],
            risk_status: stage3.risk_status[i],
            risk_score: stage3.risk_score[i],
        };
        tracing::debug!(
            student = %record.student_id,
            average = record.average_score,
            attendance = record.attendance_pct,
            sem1 = record.sem1_score,
            status = %record.risk_status,
            risk_score = record.risk_score,
            "student enriched"
        );
        out.push(record);
    }
    out
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/mod.rs"]
mod tests;
