use super::*;

fn raw(math: f64, reading: f64, writing: f64) -> RawScores {
    RawScores {
        math_score: math,
        reading_score: reading,
        writing_score: writing,
    }
}

#[test]
fn test_ids_are_sequential_from_1001() {
    let rows = vec![raw(1.0, 2.0, 3.0); 3];
    let out = run_stage1(&rows);
    assert_eq!(out.student_id, vec!["STD_1001", "STD_1002", "STD_1003"]);
}

#[test]
fn test_empty_table_has_no_ids() {
    let out = run_stage1(&[]);
    assert!(out.student_id.is_empty());
    assert!(out.average_score.is_empty());
}

#[test]
fn test_large_row_index_keeps_format() {
    assert_eq!(student_id_for_row(0), "STD_1001");
    assert_eq!(student_id_for_row(999), "STD_2000");
    assert_eq!(student_id_for_row(9_000), "STD_10001");
}

#[test]
fn test_average_is_mean_of_three_subjects() {
    assert_eq!(average_score(&raw(40.0, 42.0, 38.0)), 40.0);
    assert!((average_score(&raw(72.0, 72.0, 74.0)) - 218.0 / 3.0).abs() < 1e-12);
    assert_eq!(average_score(&raw(-30.0, 0.0, 330.0)), 100.0);
}
