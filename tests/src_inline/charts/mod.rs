use std::fs::{self, File};
use std::sync::atomic::{AtomicUsize, Ordering};

use std::error::Error;

use super::*;
use crate::input::RawScores;
use crate::pipeline::run_pipeline;
use crate::report::build_summary;

static DIR_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn make_temp_dir() -> PathBuf {
    let mut dir = std::env::temp_dir();
    let id = DIR_COUNTER.fetch_add(1, Ordering::SeqCst);
    dir.push(format!("student_risk_charts_test_{}_{}", std::process::id(), id));
    fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn test_file_names_are_fixed() {
    let layout = ChartLayout::default_v1();
    assert_eq!(
        layout.file_names(),
        vec![
            "MAJOR_Graph_1_Correlation.png",
            "MAJOR_Graph_2_Risk_Chart.png",
            "MAJOR_Graph_3_Trend_Analysis.png",
            "MAJOR_Graph_4_Subject_Difficulty.png",
            "MAJOR_Graph_5_Risk_Score_Distribution.png",
        ]
    );
    assert_eq!(
        layout.path_for(ChartKind::Correlation),
        PathBuf::from("./MAJOR_Graph_1_Correlation.png")
    );
}

#[test]
fn test_category_label_only_on_integer_ticks() {
    let names = ["a", "b", "c"];
    assert_eq!(category_label(&names, 0.0), "a");
    assert_eq!(category_label(&names, 2.0), "c");
    assert_eq!(category_label(&names, 0.5), "");
    assert_eq!(category_label(&names, -1.0), "");
    assert_eq!(category_label(&names, 3.0), "");
}

#[test]
fn test_padded_range_never_collapses() {
    assert_eq!(padded_range(10.0, 20.0, 1.0), (9.0, 21.0));
    assert_eq!(padded_range(5.0, 5.0, 0.0), (4.5, 5.5));
    assert_eq!(padded_range(f64::NAN, 1.0, 1.0), (0.0, 1.0));
}

#[test]
fn test_render_all_fails_when_output_dir_is_a_file() {
    let dir = make_temp_dir();
    let blocker = dir.join("not_a_dir");
    File::create(&blocker).unwrap();
    let mut layout = ChartLayout::default_v1();
    layout.out_dir = blocker.join("charts");

    let err = render_all(
        &[],
        &RiskStatusCounts::default(),
        &layout,
        &RiskProfile::default_v1(),
    )
    .unwrap_err();
    assert!(matches!(err, RenderError::Io(_)));
}

fn assert_non_empty(path: &std::path::Path) {
    let len = fs::metadata(path).unwrap().len();
    assert!(len > 0, "{} is empty", path.display());
}

fn layout_in(dir: &std::path::Path) -> ChartLayout {
    let mut layout = ChartLayout::default_v1();
    layout.out_dir = dir.to_path_buf();
    layout
}

#[test]
fn test_render_all_writes_every_chart_for_empty_dataset() {
    let dir = make_temp_dir();
    let layout = layout_in(&dir);
    let written = render_all(
        &[],
        &RiskStatusCounts::default(),
        &layout,
        &RiskProfile::default_v1(),
    )
    .unwrap();
    assert_eq!(written.len(), chart_order().len());
    for (path, &kind) in written.iter().zip(chart_order()) {
        assert_eq!(path, &layout.path_for(kind));
        assert_non_empty(path);
    }
}

#[test]
fn test_each_renderer_accepts_a_single_student() {
    let dir = make_temp_dir();
    let profile = RiskProfile::default_v1();
    let raw = [RawScores {
        math_score: 40.0,
        reading_score: 42.0,
        writing_score: 38.0,
    }];
    let records = run_pipeline(&raw, &profile);
    let summary = build_summary(&records);
    let path = |kind: ChartKind| dir.join(format!("{}.png", kind.stem()));

    let kind = ChartKind::Correlation;
    correlation::render(
        &path(kind),
        kind.size(),
        &correlation::correlation_matrix(&records),
    )
    .unwrap();
    let kind = ChartKind::RiskShare;
    risk_share::render(&path(kind), kind.size(), &summary.status_counts).unwrap();
    let kind = ChartKind::TrendAnalysis;
    let lines = trend::trend_sample(&records, 5);
    assert_eq!(lines.len(), 1);
    trend::render(&path(kind), kind.size(), &lines, profile.passing_mark).unwrap();
    let kind = ChartKind::SubjectDifficulty;
    subjects::render(&path(kind), kind.size(), &subjects::subject_boxes(&records)).unwrap();
    let kind = ChartKind::RiskScoreDistribution;
    distribution::render(&path(kind), kind.size(), &[records[0].risk_score], 20).unwrap();

    for &kind in chart_order() {
        assert_non_empty(&path(kind));
    }
}

#[test]
fn test_draw_failure_keeps_backend_error() {
    let dir = make_temp_dir();
    let kind = ChartKind::RiskShare;
    let path = dir.join("missing").join(format!("{}.png", kind.stem()));
    let source = risk_share::render(&path, kind.size(), &RiskStatusCounts::default()).unwrap_err();
    assert!(matches!(source, DrawingAreaErrorKind::BackendError(_)));
    assert!(!path.exists());

    let err = RenderError::Draw { chart: kind, source };
    assert!(err.to_string().starts_with("failed to render Graph_2_Risk_Chart: "));
    assert!(err.source().is_some());
}
