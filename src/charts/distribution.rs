use std::f64::consts::PI;
use std::path::Path;

use plotters::prelude::*;

use crate::charts::{DrawResult, padded_range};
use crate::model::stats::sample_std;

const BAR_COLOR: RGBColor = RGBColor(31, 119, 180);
const KDE_POINTS: usize = 200;

#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    pub edges: Vec<f64>,
    pub counts: Vec<usize>,
}

impl Histogram {
    pub fn bin_width(&self) -> f64 {
        match (self.edges.first(), self.edges.last()) {
            (Some(lo), Some(hi)) if !self.counts.is_empty() => {
                (hi - lo) / self.counts.len() as f64
            }
            _ => 0.0,
        }
    }
}

/// Equal-width bins spanning [min, max]; the last bin is closed on the right.
/// Empty input spans [0, 1]; a single distinct value spans value ± 0.5.
pub fn histogram(values: &[f64], bins: usize) -> Histogram {
    let bins = bins.max(1);
    let (lo, hi) = if values.is_empty() {
        (0.0, 1.0)
    } else {
        let lo = values.iter().copied().fold(f64::INFINITY, f64::min);
        let hi = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        if hi > lo { (lo, hi) } else { (lo - 0.5, hi + 0.5) }
    };

    let width = (hi - lo) / bins as f64;
    let edges: Vec<f64> = (0..=bins).map(|k| lo + width * k as f64).collect();
    let mut counts = vec![0usize; bins];
    for &v in values {
        let idx = (((v - lo) / width).floor() as usize).min(bins - 1);
        counts[idx] += 1;
    }
    Histogram { edges, counts }
}

/// Gaussian kernel density with Scott's bandwidth, scaled so the curve sits
/// on the histogram's count axis. Empty when fewer than two values or no
/// spread.
pub fn kde_curve(values: &[f64], bin_width: f64, points: usize) -> Vec<(f64, f64)> {
    let n = values.len();
    if n < 2 || points < 2 || bin_width <= 0.0 {
        return Vec::new();
    }
    let sd = sample_std(values);
    if sd.is_nan() || sd <= 0.0 {
        return Vec::new();
    }
    let bw = sd * (n as f64).powf(-0.2);
    let lo = values.iter().copied().fold(f64::INFINITY, f64::min);
    let hi = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let norm = 1.0 / (n as f64 * bw * (2.0 * PI).sqrt());
    let scale = n as f64 * bin_width;

    (0..points)
        .map(|k| {
            let x = lo + (hi - lo) * k as f64 / (points - 1) as f64;
            let density: f64 = values
                .iter()
                .map(|&v| {
                    let z = (x - v) / bw;
                    (-0.5 * z * z).exp()
                })
                .sum::<f64>()
                * norm;
            (x, density * scale)
        })
        .collect()
}

pub fn render(path: &Path, size: (u32, u32), scores: &[f64], bins: usize) -> DrawResult {
    let root = BitMapBackend::new(path, size).into_drawing_area();
    root.fill(&WHITE)?;

    let hist = histogram(scores, bins);
    let curve = kde_curve(scores, hist.bin_width(), KDE_POINTS);
    if scores.len() >= 2 && curve.is_empty() {
        tracing::warn!("risk scores have no spread; density overlay skipped");
    }

    let x_lo = hist.edges.first().copied().unwrap_or(0.0);
    let x_hi = hist.edges.last().copied().unwrap_or(1.0);
    let (x_lo, x_hi) = padded_range(x_lo, x_hi, (x_hi - x_lo) * 0.02);
    let mut y_max = hist.counts.iter().copied().max().unwrap_or(0) as f64;
    for &(_, y) in &curve {
        y_max = y_max.max(y);
    }
    let y_max = (y_max * 1.1).max(1.0);

    let mut chart = ChartBuilder::on(&root)
        .caption("Risk Score Distribution of Students", ("sans-serif", 40))
        .margin(20)
        .x_label_area_size(70)
        .y_label_area_size(80)
        .build_cartesian_2d(x_lo..x_hi, 0f64..y_max)?;

    chart
        .configure_mesh()
        .x_desc("Risk Score (0 = Safe, 100 = Extreme Risk)")
        .y_desc("Count")
        .label_style(("sans-serif", 24))
        .draw()?;

    let bars = hist.counts.iter().enumerate().map(|(k, &count)| {
        [(hist.edges[k], 0.0), (hist.edges[k + 1], count as f64)]
    });
    chart.draw_series(bars.clone().map(|b| Rectangle::new(b, BAR_COLOR.mix(0.55).filled())))?;
    chart.draw_series(bars.map(|b| Rectangle::new(b, BAR_COLOR.stroke_width(1))))?;

    if !curve.is_empty() {
        chart.draw_series(LineSeries::new(curve, BAR_COLOR.stroke_width(3)))?;
    }

    root.present()?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/src_inline/charts/distribution.rs"]
mod tests;
