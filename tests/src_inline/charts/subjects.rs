use super::*;
use crate::model::record::RiskStatus;

#[test]
fn test_box_stats_with_outlier() {
    let values = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0, 100.0];
    let stats = BoxStats::from_values(&values).unwrap();
    assert_eq!(stats.q1, 3.5);
    assert_eq!(stats.median, 6.0);
    assert_eq!(stats.q3, 8.5);
    assert_eq!(stats.whisker_low, 1.0);
    assert_eq!(stats.whisker_high, 10.0);
    assert_eq!(stats.outliers, vec![100.0]);
}

#[test]
fn test_box_stats_single_value() {
    let stats = BoxStats::from_values(&[42.0]).unwrap();
    assert_eq!(stats.q1, 42.0);
    assert_eq!(stats.q3, 42.0);
    assert_eq!(stats.whisker_low, 42.0);
    assert_eq!(stats.whisker_high, 42.0);
    assert!(stats.outliers.is_empty());
}

#[test]
fn test_box_stats_empty() {
    assert!(BoxStats::from_values(&[]).is_none());
}

#[test]
fn test_subject_boxes_follow_column_order() {
    let rec = StudentRecord {
        student_id: "STD_1001".to_string(),
        math_score: 10.0,
        reading_score: 20.0,
        writing_score: 30.0,
        average_score: 20.0,
        attendance_pct: 80,
        sem1_score: 20,
        sem2_score: 20.0,
        consistency_score: 0.0,
        risk_status: RiskStatus::HighRisk,
        risk_score: 56.0,
    };
    let boxes = subject_boxes(&[rec]);
    assert_eq!(boxes.len(), 3);
    assert_eq!(boxes[0].0, Subject::Math);
    assert_eq!(boxes[2].1.as_ref().unwrap().median, 30.0);
    assert!(subject_boxes(&[]).iter().all(|(_, b)| b.is_none()));
}
