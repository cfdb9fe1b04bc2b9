use std::cmp::Ordering;
use std::path::Path;

use plotters::prelude::*;

use crate::charts::{DrawResult, category_label, padded_range};
use crate::model::record::StudentRecord;
use crate::model::subjects::{Subject, subject_order};
use crate::report::quantile_sorted;

const WHISKER_IQR: f64 = 1.5;
const BOX_HALF_WIDTH: f64 = 0.3;
const SET2: [RGBColor; 3] = [
    RGBColor(102, 194, 165),
    RGBColor(252, 141, 98),
    RGBColor(141, 160, 203),
];

#[derive(Debug, Clone, PartialEq)]
pub struct BoxStats {
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub whisker_low: f64,
    pub whisker_high: f64,
    pub outliers: Vec<f64>,
}

impl BoxStats {
    /// Whiskers reach the most extreme values inside 1.5 IQR of the box;
    /// everything beyond is an outlier.
    pub fn from_values(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }
        let mut sorted = values.to_vec();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));

        let q1 = quantile_sorted(&sorted, 0.25);
        let median = quantile_sorted(&sorted, 0.5);
        let q3 = quantile_sorted(&sorted, 0.75);
        let iqr = q3 - q1;
        let lo_fence = q1 - WHISKER_IQR * iqr;
        let hi_fence = q3 + WHISKER_IQR * iqr;

        let mut whisker_low = q1;
        let mut whisker_high = q3;
        let mut outliers = Vec::new();
        for &v in &sorted {
            if v < lo_fence || v > hi_fence {
                outliers.push(v);
            } else {
                whisker_low = whisker_low.min(v);
                whisker_high = whisker_high.max(v);
            }
        }

        Some(Self {
            q1,
            median,
            q3,
            whisker_low,
            whisker_high,
            outliers,
        })
    }

    fn extent(&self) -> (f64, f64) {
        let mut lo = self.whisker_low;
        let mut hi = self.whisker_high;
        for &v in &self.outliers {
            lo = lo.min(v);
            hi = hi.max(v);
        }
        (lo, hi)
    }
}

pub fn subject_boxes(records: &[StudentRecord]) -> Vec<(Subject, Option<BoxStats>)> {
    subject_order()
        .iter()
        .map(|&subject| {
            let values: Vec<f64> = records.iter().map(|r| r.score(subject)).collect();
            (subject, BoxStats::from_values(&values))
        })
        .collect()
}

pub fn render(
    path: &Path,
    size: (u32, u32),
    boxes: &[(Subject, Option<BoxStats>)],
) -> DrawResult {
    let root = BitMapBackend::new(path, size).into_drawing_area();
    root.fill(&WHITE)?;

    let names: Vec<&str> = boxes.iter().map(|(s, _)| s.column()).collect();
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    for stats in boxes.iter().filter_map(|(_, s)| s.as_ref()) {
        let (a, b) = stats.extent();
        lo = lo.min(a);
        hi = hi.max(b);
    }
    let (y_lo, y_hi) = if lo.is_finite() {
        padded_range(lo, hi, 5.0)
    } else {
        (0.0, 100.0)
    };

    let mut chart = ChartBuilder::on(&root)
        .caption(
            "Subject Difficulty Analysis (Score Distribution)",
            ("sans-serif", 40),
        )
        .margin(20)
        .x_label_area_size(60)
        .y_label_area_size(80)
        .build_cartesian_2d(-0.5f64..(names.len() as f64 - 0.5), y_lo..y_hi)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(names.len() + 1)
        .x_label_formatter(&|x: &f64| category_label(&names, *x))
        .label_style(("sans-serif", 24))
        .draw()?;

    for (idx, (_, stats)) in boxes.iter().enumerate() {
        let Some(stats) = stats else {
            continue;
        };
        let x = idx as f64;
        let color = SET2[idx % SET2.len()];
        let left = x - BOX_HALF_WIDTH;
        let right = x + BOX_HALF_WIDTH;
        let cap = BOX_HALF_WIDTH / 2.0;

        chart.draw_series(std::iter::once(Rectangle::new(
            [(left, stats.q1), (right, stats.q3)],
            color.filled(),
        )))?;
        chart.draw_series(std::iter::once(Rectangle::new(
            [(left, stats.q1), (right, stats.q3)],
            BLACK.stroke_width(2),
        )))?;

        let segments = [
            [(left, stats.median), (right, stats.median)],
            [(x, stats.q3), (x, stats.whisker_high)],
            [(x, stats.q1), (x, stats.whisker_low)],
            [(x - cap, stats.whisker_high), (x + cap, stats.whisker_high)],
            [(x - cap, stats.whisker_low), (x + cap, stats.whisker_low)],
        ];
        chart.draw_series(
            segments
                .iter()
                .map(|seg| PathElement::new(seg.to_vec(), BLACK.stroke_width(2))),
        )?;

        chart.draw_series(
            stats
                .outliers
                .iter()
                .map(|&v| Circle::new((x, v), 5, BLACK.stroke_width(1))),
        )?;
    }

    root.present()?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/src_inline/charts/subjects.rs"]
mod tests;
