mod charts;
mod error;
mod input;
mod logging;
mod model;
mod pipeline;
mod report;

use std::path::PathBuf;

use crate::charts::{ChartLayout, render_all};
use crate::error::AnalyzerError;
use crate::input::load_students;
use crate::model::record::StudentRecord;
use crate::model::thresholds::RiskProfile;
use crate::pipeline::run_pipeline;
use crate::report::text::render_report_text;
use crate::report::{SummaryData, build_summary, top_risk};

fn main() {
    logging::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), AnalyzerError> {
    let stray = std::env::args().skip(1).count();
    if stray > 0 {
        tracing::warn!(
            arguments = stray,
            "command-line arguments are ignored; all parameters are fixed"
        );
    }

    let config = RunConfig::fixed();
    let outcome = run_analysis(&config)?;
    print!("{}", outcome.report);
    tracing::debug!(
        students = outcome.records.len(),
        high_risk = outcome.summary.status_counts.high_risk,
        charts = outcome.chart_paths.len(),
        "run finished"
    );
    Ok(())
}

#[derive(Debug, Clone)]
struct OutputLayout {
    input_path: PathBuf,
    top_n: usize,
    charts: ChartLayout,
}

impl OutputLayout {
    fn default_v1() -> Self {
        Self {
            input_path: PathBuf::from("StudentsPerformance.csv"),
            top_n: 10,
            charts: ChartLayout::default_v1(),
        }
    }
}

#[derive(Debug, Clone)]
struct RunConfig {
    profile: RiskProfile,
    layout: OutputLayout,
}

impl RunConfig {
    fn fixed() -> Self {
        Self {
            profile: RiskProfile::default_v1(),
            layout: OutputLayout::default_v1(),
        }
    }
}

#[derive(Debug)]
struct AnalysisOutcome {
    records: Vec<StudentRecord>,
    summary: SummaryData,
    chart_paths: Vec<PathBuf>,
    report: String,
}

fn run_analysis(config: &RunConfig) -> Result<AnalysisOutcome, AnalyzerError> {
    tracing::info!(path = %config.layout.input_path.display(), "step 1: loading dataset");
    let raw = load_students(&config.layout.input_path)?;

    tracing::info!("step 2: processing logic and risk analysis");
    let records = run_pipeline(&raw, &config.profile);
    let summary = build_summary(&records);
    tracing::info!(
        students = summary.n_students,
        high_risk = summary.status_counts.high_risk,
        "risk analysis complete"
    );

    tracing::info!("step 3: generating analytical graphs");
    let chart_paths = render_all(
        &records,
        &summary.status_counts,
        &config.layout.charts,
        &config.profile,
    )?;

    let top = top_risk(&records, config.layout.top_n);
    let report = render_report_text(&summary, &top, &config.layout.charts.file_names());

    Ok(AnalysisOutcome {
        records,
        summary,
        chart_paths,
        report,
    })
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
