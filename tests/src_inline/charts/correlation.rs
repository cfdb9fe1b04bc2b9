use super::*;
use crate::model::record::RiskStatus;

fn record(attendance: i64, sem1: i64, average: f64, math: f64) -> StudentRecord {
    StudentRecord {
        student_id: "STD_1001".to_string(),
        math_score: math,
        reading_score: average,
        writing_score: average,
        average_score: average,
        attendance_pct: attendance,
        sem1_score: sem1,
        sem2_score: average,
        consistency_score: 0.0,
        risk_status: RiskStatus::Safe,
        risk_score: 0.0,
    }
}

#[test]
fn test_matrix_is_symmetric_with_unit_diagonal() {
    let records = vec![
        record(60, 50, 55.0, 40.0),
        record(70, 65, 62.0, 70.0),
        record(90, 80, 81.0, 75.0),
        record(85, 90, 88.0, 95.0),
    ];
    let m = correlation_matrix(&records);
    for i in 0..4 {
        assert!((m.values[i][i] - 1.0).abs() < 1e-9);
        for j in 0..4 {
            assert!((m.values[i][j] - m.values[j][i]).abs() < 1e-12);
        }
    }
    assert_eq!(m.labels[3], "math score");
}

#[test]
fn test_constant_column_is_nan() {
    let records = vec![record(100, 50, 55.0, 40.0), record(100, 65, 62.0, 70.0)];
    let m = correlation_matrix(&records);
    assert!(m.values[0][0].is_nan());
    assert!(m.values[0][1].is_nan());
    assert!((m.values[1][2] - 1.0).abs() < 1e-9);
    assert_eq!(annotation(m.values[0][1]), "nan");
}

#[test]
fn test_coolwarm_ramp() {
    assert_eq!(coolwarm(-1.0), COOL);
    assert_eq!(coolwarm(0.0), NEUTRAL);
    assert_eq!(coolwarm(1.0), WARM);
    assert_eq!(coolwarm(3.0), WARM);
    assert_eq!(coolwarm(f64::NAN), NAN_COLOR);
}

#[test]
fn test_annotation_two_decimals() {
    assert_eq!(annotation(0.456), "0.46");
    assert_eq!(annotation(-1.0), "-1.00");
}
