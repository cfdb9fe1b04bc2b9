use super::*;
use crate::model::record::RiskStatus;

fn record(id: &str, status: RiskStatus, sem1: i64, average: f64) -> StudentRecord {
    StudentRecord {
        student_id: id.to_string(),
        math_score: average,
        reading_score: average,
        writing_score: average,
        average_score: average,
        attendance_pct: 80,
        sem1_score: sem1,
        sem2_score: average,
        consistency_score: 0.0,
        risk_status: status,
        risk_score: 0.0,
    }
}

#[test]
fn test_sample_takes_first_high_risk_rows() {
    let mut records = Vec::new();
    for i in 0..10 {
        let status = if i % 2 == 0 {
            RiskStatus::HighRisk
        } else {
            RiskStatus::Safe
        };
        records.push(record(&format!("STD_{}", 1001 + i), status, 30 + i as i64, 35.5));
    }
    let sample = trend_sample(&records, 3);
    let ids: Vec<&str> = sample.iter().map(|l| l.student_id.as_str()).collect();
    assert_eq!(ids, vec!["STD_1001", "STD_1003", "STD_1005"]);
    assert_eq!(sample[1].sem1, 32.0);
    assert_eq!(sample[1].sem2, 35.5);
}

#[test]
fn test_sample_shorter_than_limit() {
    let records = vec![record("STD_1001", RiskStatus::Safe, 80, 85.0)];
    assert!(trend_sample(&records, 5).is_empty());
}

#[test]
fn test_dash_segments_cover_line_with_gaps() {
    let dashes = dash_segments((0.0, 0.0), (1.0, 10.0), 3);
    assert_eq!(dashes.len(), 3);
    assert_eq!(dashes[0][0], (0.0, 0.0));
    assert!((dashes[0][1].0 - 0.2).abs() < 1e-12);
    assert!((dashes[1][0].0 - 0.4).abs() < 1e-12);
    assert_eq!(dashes[2][1], (1.0, 10.0));
    assert!(dash_segments((0.0, 0.0), (1.0, 1.0), 0).is_empty());
}
