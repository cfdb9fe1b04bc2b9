use crate::model::record::RiskStatus;
use crate::model::stats::round2;
use crate::model::thresholds::RiskProfile;

#[derive(Debug, Clone)]
pub struct Stage3Inputs<'a> {
    pub attendance_pct: &'a [i64],
    pub average_score: &'a [f64],
    pub profile: &'a RiskProfile,
}

#[derive(Debug, Clone)]
pub struct Stage3Output {
    pub risk_status: Vec<RiskStatus>,
    pub risk_score: Vec<f64>,
}

pub fn run_stage3(inputs: &Stage3Inputs<'_>) -> Stage3Output {
    let n = inputs.attendance_pct.len();
    let mut out = Stage3Output {
        risk_status: Vec::with_capacity(n),
        risk_score: Vec::with_capacity(n),
    };

    for (&attendance, &average) in inputs.attendance_pct.iter().zip(inputs.average_score) {
        out.risk_status.push(classify(attendance, average, inputs.profile));
        out.risk_score.push(risk_score(attendance, average, inputs.profile));
    }

    out
}

/// Either condition alone marks the student; both cutoffs are strict.
pub fn classify(attendance_pct: i64, average_score: f64, profile: &RiskProfile) -> RiskStatus {
    if attendance_pct < profile.attendance_cutoff || average_score < profile.average_cutoff {
        RiskStatus::HighRisk
    } else {
        RiskStatus::Safe
    }
}

pub fn risk_score(attendance_pct: i64, average_score: f64, profile: &RiskProfile) -> f64 {
    let attendance_deficit = 100.0 - attendance_pct as f64;
    let score_deficit = 100.0 - average_score;
    round2(profile.attendance_weight * attendance_deficit + profile.score_weight * score_deficit)
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_classify.rs"]
mod tests;
