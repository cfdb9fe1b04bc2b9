use std::ops::Range;

#[derive(Debug, Clone)]
pub struct RiskProfile {
    pub seed: u64,
    pub attendance_offset: Range<i64>,
    pub attendance_min: i64,
    pub attendance_max: i64,
    pub sem1_offset: Range<i64>,
    pub sem1_min: i64,
    pub sem1_max: i64,
    pub attendance_cutoff: i64,
    pub average_cutoff: f64,
    pub attendance_weight: f64,
    pub score_weight: f64,
    pub passing_mark: f64,
}

impl RiskProfile {
    pub fn default_v1() -> Self {
        Self {
            seed: 42,
            attendance_offset: -15..10,
            attendance_min: 45,
            attendance_max: 100,
            sem1_offset: -12..12,
            sem1_min: 0,
            sem1_max: 100,
            attendance_cutoff: 75,
            average_cutoff: 40.0,
            attendance_weight: 0.4,
            score_weight: 0.6,
            passing_mark: 40.0,
        }
    }
}
