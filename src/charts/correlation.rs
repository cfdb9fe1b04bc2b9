use std::path::Path;

use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use crate::charts::{DrawResult, category_label};
use crate::model::record::StudentRecord;
use crate::report::pearson;

pub const LABELS: [&str; 4] = ["Attendance_Pct", "Sem1_Score", "Sem2_Score", "math score"];

const NAN_COLOR: RGBColor = RGBColor(200, 200, 200);
const COOL: RGBColor = RGBColor(59, 76, 192);
const NEUTRAL: RGBColor = RGBColor(221, 221, 221);
const WARM: RGBColor = RGBColor(180, 4, 38);

#[derive(Debug, Clone)]
pub struct CorrelationMatrix {
    pub labels: [&'static str; 4],
    pub values: [[f64; 4]; 4],
}

pub fn correlation_matrix(records: &[StudentRecord]) -> CorrelationMatrix {
    let columns: [Vec<f64>; 4] = [
        records.iter().map(|r| r.attendance_pct as f64).collect(),
        records.iter().map(|r| r.sem1_score as f64).collect(),
        records.iter().map(|r| r.sem2_score).collect(),
        records.iter().map(|r| r.math_score).collect(),
    ];
    let mut values = [[f64::NAN; 4]; 4];
    for i in 0..4 {
        for j in 0..4 {
            values[i][j] = pearson(&columns[i], &columns[j]);
        }
    }
    CorrelationMatrix {
        labels: LABELS,
        values,
    }
}

/// Diverging blue-grey-red ramp over [-1, 1].
pub fn coolwarm(v: f64) -> RGBColor {
    if v.is_nan() {
        return NAN_COLOR;
    }
    let t = (v.clamp(-1.0, 1.0) + 1.0) / 2.0;
    if t < 0.5 {
        lerp(COOL, NEUTRAL, t * 2.0)
    } else {
        lerp(NEUTRAL, WARM, (t - 0.5) * 2.0)
    }
}

fn lerp(a: RGBColor, b: RGBColor, t: f64) -> RGBColor {
    let mix = |x: u8, y: u8| (x as f64 + (y as f64 - x as f64) * t).round() as u8;
    RGBColor(mix(a.0, b.0), mix(a.1, b.1), mix(a.2, b.2))
}

pub fn annotation(v: f64) -> String {
    if v.is_nan() {
        "nan".to_string()
    } else {
        format!("{v:.2}")
    }
}

pub fn render(path: &Path, size: (u32, u32), matrix: &CorrelationMatrix) -> DrawResult {
    let root = BitMapBackend::new(path, size).into_drawing_area();
    root.fill(&WHITE)?;
    let (heat_area, bar_area) = root.split_horizontally(size.0 as i32 - 220);

    let n = matrix.labels.len();
    let labels = matrix.labels;
    let top = (n - 1) as f64;
    let mut chart = ChartBuilder::on(&heat_area)
        .caption(
            "Correlation Analysis: Impact of Attendance on Marks",
            ("sans-serif", 40),
        )
        .margin(20)
        .x_label_area_size(70)
        .y_label_area_size(220)
        .build_cartesian_2d(-0.5f64..(n as f64 - 0.5), -0.5f64..(n as f64 - 0.5))?;

    // Row 0 is drawn at the top.
    chart
        .configure_mesh()
        .disable_mesh()
        .x_labels(n + 1)
        .y_labels(n + 1)
        .x_label_formatter(&|x: &f64| category_label(&labels, *x))
        .y_label_formatter(&|y: &f64| category_label(&labels, top - *y))
        .label_style(("sans-serif", 26))
        .draw()?;

    let text_style = TextStyle::from(("sans-serif", 32).into_font())
        .color(&BLACK)
        .pos(Pos::new(HPos::Center, VPos::Center));

    for (i, row) in matrix.values.iter().enumerate() {
        for (j, &v) in row.iter().enumerate() {
            let x = j as f64;
            let y = top - i as f64;
            chart.draw_series(std::iter::once(Rectangle::new(
                [(x - 0.5, y - 0.5), (x + 0.5, y + 0.5)],
                coolwarm(v).filled(),
            )))?;
            chart.draw_series(std::iter::once(Text::new(
                annotation(v),
                (x, y),
                text_style.clone(),
            )))?;
        }
    }

    let mut bar = ChartBuilder::on(&bar_area)
        .margin_top(80)
        .margin_bottom(90)
        .margin_right(40)
        .y_label_area_size(80)
        .build_cartesian_2d(0f64..1f64, -1f64..1f64)?;
    bar.configure_mesh()
        .disable_mesh()
        .disable_x_axis()
        .y_labels(5)
        .y_label_formatter(&|y: &f64| format!("{y:.1}"))
        .label_style(("sans-serif", 22))
        .draw()?;
    let steps = 100;
    bar.draw_series((0..steps).map(|k| {
        let lo = -1.0 + 2.0 * k as f64 / steps as f64;
        let hi = -1.0 + 2.0 * (k + 1) as f64 / steps as f64;
        Rectangle::new([(0.0, lo), (1.0, hi)], coolwarm((lo + hi) / 2.0).filled())
    }))?;

    root.present()?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/src_inline/charts/correlation.rs"]
mod tests;
