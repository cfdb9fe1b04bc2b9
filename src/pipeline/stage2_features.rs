use rand::Rng;

use crate::model::stats::{round2, sample_std, truncate_clamp};
use crate::model::thresholds::RiskProfile;

#[derive(Debug, Clone)]
pub struct Stage2Output {
    pub attendance_pct: Vec<i64>,
    pub sem1_score: Vec<i64>,
    pub sem2_score: Vec<f64>,
    pub consistency_score: Vec<f64>,
}

/// Draw order per row is attendance first, then semester 1. Changing it
/// changes every simulated value for a given seed.
pub fn run_stage2<R: Rng + ?Sized>(
    average_score: &[f64],
    profile: &RiskProfile,
    rng: &mut R,
) -> Stage2Output {
    let n = average_score.len();
    let mut out = Stage2Output {
        attendance_pct: Vec::with_capacity(n),
        sem1_score: Vec::with_capacity(n),
        sem2_score: Vec::with_capacity(n),
        consistency_score: Vec::with_capacity(n),
    };

    for &average in average_score {
        let a = rng.gen_range(profile.attendance_offset.clone());
        let attendance = attendance_from_offset(average, a, profile);

        let b = rng.gen_range(profile.sem1_offset.clone());
        let sem1 = sem1_from_offset(average, b, profile);

        let sem2 = average;
        let consistency = consistency_score(sem1, sem2);

        out.attendance_pct.push(attendance);
        out.sem1_score.push(sem1);
        out.sem2_score.push(sem2);
        out.consistency_score.push(consistency);
    }

    out
}

pub fn attendance_from_offset(average: f64, offset: i64, profile: &RiskProfile) -> i64 {
    truncate_clamp(
        average + offset as f64,
        profile.attendance_min,
        profile.attendance_max,
    )
}

pub fn sem1_from_offset(average: f64, offset: i64, profile: &RiskProfile) -> i64 {
    truncate_clamp(average + offset as f64, profile.sem1_min, profile.sem1_max)
}

pub fn consistency_score(sem1: i64, sem2: f64) -> f64 {
    round2(sample_std(&[sem1 as f64, sem2]))
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_features.rs"]
mod tests;
