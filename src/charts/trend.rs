use std::path::Path;

use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use crate::charts::{DrawResult, TAB10, category_label, padded_range};
use crate::model::record::StudentRecord;

const SEMESTERS: [&str; 2] = ["Sem 1", "Sem 2"];
const DASHES_PER_LINE: usize = 12;

#[derive(Debug, Clone, PartialEq)]
pub struct TrendLine {
    pub student_id: String,
    pub sem1: f64,
    pub sem2: f64,
}

/// First `limit` high-risk rows, in input order.
pub fn trend_sample(records: &[StudentRecord], limit: usize) -> Vec<TrendLine> {
    records
        .iter()
        .filter(|r| r.is_high_risk())
        .take(limit)
        .map(|r| TrendLine {
            student_id: r.student_id.clone(),
            sem1: r.sem1_score as f64,
            sem2: r.sem2_score,
        })
        .collect()
}

/// Splits a segment into `n` dashes separated by gaps of equal length.
pub fn dash_segments(from: (f64, f64), to: (f64, f64), n: usize) -> Vec<[(f64, f64); 2]> {
    if n == 0 {
        return Vec::new();
    }
    let pieces = 2 * n - 1;
    let at = |k: usize| {
        let t = k as f64 / pieces as f64;
        (from.0 + (to.0 - from.0) * t, from.1 + (to.1 - from.1) * t)
    };
    (0..n).map(|d| [at(2 * d), at(2 * d + 1)]).collect()
}

pub fn render(
    path: &Path,
    size: (u32, u32),
    lines: &[TrendLine],
    passing_mark: f64,
) -> DrawResult {
    let root = BitMapBackend::new(path, size).into_drawing_area();
    root.fill(&WHITE)?;

    let mut lo = 0.0f64;
    let mut hi = 100.0f64;
    for line in lines {
        lo = lo.min(line.sem1.min(line.sem2));
        hi = hi.max(line.sem1.max(line.sem2));
    }
    let (y_lo, y_hi) = padded_range(lo, hi, 5.0);

    let mut chart = ChartBuilder::on(&root)
        .caption("Performance Progression of At-Risk Students", ("sans-serif", 40))
        .margin(20)
        .x_label_area_size(60)
        .y_label_area_size(90)
        .build_cartesian_2d(-0.5f64..1.5f64, y_lo..y_hi)?;

    chart
        .configure_mesh()
        .x_labels(SEMESTERS.len() + 1)
        .x_label_formatter(&|x: &f64| category_label(&SEMESTERS, *x))
        .y_desc("Score (0-100)")
        .label_style(("sans-serif", 24))
        .draw()?;

    for (idx, line) in lines.iter().enumerate() {
        let color = TAB10[idx % TAB10.len()];
        let from = (0.0, line.sem1);
        let to = (1.0, line.sem2);
        chart.draw_series(
            dash_segments(from, to, DASHES_PER_LINE)
                .into_iter()
                .map(|seg| PathElement::new(seg.to_vec(), color.stroke_width(3))),
        )?;
        chart
            .draw_series([from, to].into_iter().map(|p| Circle::new(p, 8, color.filled())))?
            .label(line.student_id.clone())
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 24, y)], color.stroke_width(3))
            });
    }

    chart.draw_series(LineSeries::new(
        vec![(-0.5, passing_mark), (1.5, passing_mark)],
        RED.mix(0.5).stroke_width(3),
    ))?;
    chart.draw_series(std::iter::once(Text::new(
        format!("Passing Threshold ({passing_mark:.0} Marks)"),
        (0.5, passing_mark + 2.0),
        TextStyle::from(("sans-serif", 26).into_font())
            .color(&RED)
            .pos(Pos::new(HPos::Center, VPos::Bottom)),
    )))?;

    if !lines.is_empty() {
        chart
            .configure_series_labels()
            .background_style(&WHITE.mix(0.8))
            .border_style(&BLACK)
            .label_font(("sans-serif", 22))
            .draw()?;
    }

    root.present()?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/src_inline/charts/trend.rs"]
mod tests;
