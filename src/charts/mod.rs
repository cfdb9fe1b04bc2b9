pub mod correlation;
pub mod distribution;
pub mod risk_share;
pub mod subjects;
pub mod trend;

use std::fmt;
use std::fs;
use std::path::PathBuf;

use plotters::drawing::DrawingAreaErrorKind;
use plotters::prelude::{BitMapBackend, DrawingBackend};
use plotters::style::RGBColor;

use crate::model::record::StudentRecord;
use crate::model::thresholds::RiskProfile;
use crate::report::RiskStatusCounts;

pub type DrawError = DrawingAreaErrorKind<<BitMapBackend<'static> as DrawingBackend>::ErrorType>;
pub type DrawResult = Result<(), DrawError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Correlation,
    RiskShare,
    TrendAnalysis,
    SubjectDifficulty,
    RiskScoreDistribution,
}

impl ChartKind {
    pub fn stem(self) -> &'static str {
        match self {
            ChartKind::Correlation => "Graph_1_Correlation",
            ChartKind::RiskShare => "Graph_2_Risk_Chart",
            ChartKind::TrendAnalysis => "Graph_3_Trend_Analysis",
            ChartKind::SubjectDifficulty => "Graph_4_Subject_Difficulty",
            ChartKind::RiskScoreDistribution => "Graph_5_Risk_Score_Distribution",
        }
    }

    /// Pixel size: the reference figure size in inches at 200 dpi.
    pub fn size(self) -> (u32, u32) {
        match self {
            ChartKind::Correlation => (2000, 1200),
            ChartKind::RiskShare => (1200, 1200),
            ChartKind::TrendAnalysis => (2000, 1000),
            ChartKind::SubjectDifficulty => (1600, 1000),
            ChartKind::RiskScoreDistribution => (1600, 1000),
        }
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.stem())
    }
}

pub fn chart_order() -> &'static [ChartKind] {
    &[
        ChartKind::Correlation,
        ChartKind::RiskShare,
        ChartKind::TrendAnalysis,
        ChartKind::SubjectDifficulty,
        ChartKind::RiskScoreDistribution,
    ]
}

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("failed to render {chart}: {source}")]
    Draw {
        chart: ChartKind,
        #[source]
        source: DrawError,
    },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone)]
pub struct ChartLayout {
    pub out_dir: PathBuf,
    pub prefix: String,
    pub trend_sample: usize,
    pub histogram_bins: usize,
}

impl ChartLayout {
    pub fn default_v1() -> Self {
        Self {
            out_dir: PathBuf::from("."),
            prefix: "MAJOR".to_string(),
            trend_sample: 5,
            histogram_bins: 20,
        }
    }

    pub fn file_name(&self, kind: ChartKind) -> String {
        format!("{}_{}.png", self.prefix, kind.stem())
    }

    pub fn path_for(&self, kind: ChartKind) -> PathBuf {
        self.out_dir.join(self.file_name(kind))
    }

    pub fn file_names(&self) -> Vec<String> {
        chart_order().iter().map(|&k| self.file_name(k)).collect()
    }
}

/// Writes every chart in order, overwriting existing files. Stops at the
/// first failure.
pub fn render_all(
    records: &[StudentRecord],
    counts: &RiskStatusCounts,
    layout: &ChartLayout,
    profile: &RiskProfile,
) -> Result<Vec<PathBuf>, RenderError> {
    fs::create_dir_all(&layout.out_dir)?;

    let mut written = Vec::with_capacity(chart_order().len());
    for &kind in chart_order() {
        let path = layout.path_for(kind);
        let result = match kind {
            ChartKind::Correlation => {
                correlation::render(&path, kind.size(), &correlation::correlation_matrix(records))
            }
            ChartKind::RiskShare => risk_share::render(&path, kind.size(), counts),
            ChartKind::TrendAnalysis => trend::render(
                &path,
                kind.size(),
                &trend::trend_sample(records, layout.trend_sample),
                profile.passing_mark,
            ),
            ChartKind::SubjectDifficulty => {
                subjects::render(&path, kind.size(), &subjects::subject_boxes(records))
            }
            ChartKind::RiskScoreDistribution => {
                let scores: Vec<f64> = records.iter().map(|r| r.risk_score).collect();
                distribution::render(&path, kind.size(), &scores, layout.histogram_bins)
            }
        };
        result.map_err(|source| RenderError::Draw { chart: kind, source })?;
        tracing::info!(chart = %path.display(), "chart written");
        written.push(path);
    }
    Ok(written)
}

/// Tick label for a category axis where category `i` sits at `x = i`.
/// Non-integer ticks get an empty label.
pub fn category_label(names: &[&str], x: f64) -> String {
    let idx = x.round();
    if (x - idx).abs() > 1e-6 || idx < 0.0 {
        return String::new();
    }
    names
        .get(idx as usize)
        .map(|s| s.to_string())
        .unwrap_or_default()
}

/// Axis bounds that always have positive width.
pub fn padded_range(min: f64, max: f64, pad: f64) -> (f64, f64) {
    if !min.is_finite() || !max.is_finite() {
        return (0.0, 1.0);
    }
    if max - min <= f64::EPSILON {
        return (min - pad.max(0.5), max + pad.max(0.5));
    }
    (min - pad, max + pad)
}

/// Matplotlib's tab10 cycle.
pub const TAB10: [RGBColor; 10] = [
    RGBColor(31, 119, 180),
    RGBColor(255, 127, 14),
    RGBColor(44, 160, 44),
    RGBColor(214, 39, 40),
    RGBColor(148, 103, 189),
    RGBColor(140, 86, 75),
    RGBColor(227, 119, 194),
    RGBColor(127, 127, 127),
    RGBColor(188, 189, 34),
    RGBColor(23, 190, 207),
];

#[cfg(test)]
#[path = "../../tests/src_inline/charts/mod.rs"]
mod tests;
