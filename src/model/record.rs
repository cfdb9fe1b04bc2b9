use std::fmt;

use crate::model::subjects::Subject;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskStatus {
    HighRisk,
    Safe,
}

impl RiskStatus {
    pub fn label(self) -> &'static str {
        match self {
            RiskStatus::HighRisk => "High Risk",
            RiskStatus::Safe => "Safe",
        }
    }
}

impl fmt::Display for RiskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One enriched row. Built once by the pipeline and never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct StudentRecord {
    pub student_id: String,
    pub math_score: f64,
    pub reading_score: f64,
    pub writing_score: f64,
    pub average_score: f64,
    pub attendance_pct: i64,
    pub sem1_score: i64,
    pub sem2_score: f64,
    pub consistency_score: f64,
    pub risk_status: RiskStatus,
    pub risk_score: f64,
}

impl StudentRecord {
    pub fn score(&self, subject: Subject) -> f64 {
        match subject {
            Subject::Math => self.math_score,
            Subject::Reading => self.reading_score,
            Subject::Writing => self.writing_score,
        }
    }

    pub fn is_high_risk(&self) -> bool {
        self.risk_status == RiskStatus::HighRisk
    }
}
