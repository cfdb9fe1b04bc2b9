pub mod text;

use std::cmp::Ordering;

use crate::model::record::{RiskStatus, StudentRecord};
use crate::model::subjects::{Subject, subject_order};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SubjectMean {
    pub subject: Subject,
    pub mean: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RiskStatusCounts {
    pub high_risk: usize,
    pub safe: usize,
}

impl RiskStatusCounts {
    pub fn total(&self) -> usize {
        self.high_risk + self.safe
    }

    pub fn count(&self, status: RiskStatus) -> usize {
        match status {
            RiskStatus::HighRisk => self.high_risk,
            RiskStatus::Safe => self.safe,
        }
    }

    pub fn fraction(&self, status: RiskStatus) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        self.count(status) as f64 / total as f64
    }

    /// Statuses by count, largest first; High Risk wins a tie.
    pub fn ordered(&self) -> Vec<(RiskStatus, usize)> {
        let mut out = vec![
            (RiskStatus::HighRisk, self.high_risk),
            (RiskStatus::Safe, self.safe),
        ];
        out.sort_by(|a, b| b.1.cmp(&a.1));
        out
    }
}

#[derive(Debug, Clone)]
pub struct SummaryData {
    pub n_students: usize,
    pub status_counts: RiskStatusCounts,
    pub subject_means: Vec<SubjectMean>,
    pub toughest: Option<SubjectMean>,
}

pub fn build_summary(records: &[StudentRecord]) -> SummaryData {
    let mut status_counts = RiskStatusCounts::default();
    for rec in records {
        match rec.risk_status {
            RiskStatus::HighRisk => status_counts.high_risk += 1,
            RiskStatus::Safe => status_counts.safe += 1,
        }
    }

    let subject_means: Vec<SubjectMean> = subject_order()
        .iter()
        .map(|&subject| {
            let values: Vec<f64> = records.iter().map(|r| r.score(subject)).collect();
            SubjectMean {
                subject,
                mean: mean(&values),
            }
        })
        .collect();

    SummaryData {
        n_students: records.len(),
        status_counts,
        toughest: toughest_subject(&subject_means),
        subject_means,
    }
}

/// Lowest mean; the first subject in column order wins a tie.
pub fn toughest_subject(means: &[SubjectMean]) -> Option<SubjectMean> {
    let mut best: Option<SubjectMean> = None;
    for m in means {
        if m.mean.is_nan() {
            continue;
        }
        match best {
            Some(b) if b.mean <= m.mean => {}
            _ => best = Some(*m),
        }
    }
    best
}

/// Top `n` by risk score, descending. The sort is stable, so equal scores
/// keep their input order.
pub fn top_risk(records: &[StudentRecord], n: usize) -> Vec<&StudentRecord> {
    let mut sorted: Vec<&StudentRecord> = records.iter().collect();
    sorted.sort_by(|a, b| {
        b.risk_score
            .partial_cmp(&a.risk_score)
            .unwrap_or(Ordering::Equal)
    });
    sorted.truncate(n);
    sorted
}

pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Linear interpolation between closest ranks of already sorted values.
pub fn quantile_sorted(sorted: &[f64], p: f64) -> f64 {
    if sorted.is_empty() {
        return f64::NAN;
    }
    let pos = (sorted.len() - 1) as f64 * p.clamp(0.0, 1.0);
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    let frac = pos - lo as f64;
    sorted[lo] + (sorted[hi] - sorted[lo]) * frac
}

/// Pearson correlation; NaN when either side has no variance.
pub fn pearson(x: &[f64], y: &[f64]) -> f64 {
    let n = x.len().min(y.len());
    if n < 2 {
        return f64::NAN;
    }
    let mx = mean(&x[..n]);
    let my = mean(&y[..n]);
    let mut sxy = 0.0;
    let mut sxx = 0.0;
    let mut syy = 0.0;
    for i in 0..n {
        let dx = x[i] - mx;
        let dy = y[i] - my;
        sxy += dx * dy;
        sxx += dx * dx;
        syy += dy * dy;
    }
    if sxx == 0.0 || syy == 0.0 {
        return f64::NAN;
    }
    (sxy / (sxx.sqrt() * syy.sqrt())).clamp(-1.0, 1.0)
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
