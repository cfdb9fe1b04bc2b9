use std::path::Path;

use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use crate::charts::DrawResult;
use crate::model::record::RiskStatus;
use crate::report::RiskStatusCounts;

const START_ANGLE_DEG: f64 = 90.0;
const HOLE_RATIO: f64 = 0.6;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Wedge {
    pub status: RiskStatus,
    pub fraction: f64,
    pub start_deg: f64,
    pub sweep_deg: f64,
}

pub fn status_color(status: RiskStatus) -> RGBColor {
    match status {
        RiskStatus::Safe => RGBColor(0x2e, 0xcc, 0x71),
        RiskStatus::HighRisk => RGBColor(0xe7, 0x4c, 0x3c),
    }
}

/// Wedges laid counter-clockwise from 12 o'clock, largest share first.
/// Empty statuses produce no wedge.
pub fn donut_wedges(counts: &RiskStatusCounts) -> Vec<Wedge> {
    let mut out = Vec::new();
    if counts.total() == 0 {
        return out;
    }
    let mut angle = START_ANGLE_DEG;
    for (status, count) in counts.ordered() {
        if count == 0 {
            continue;
        }
        let fraction = counts.fraction(status);
        let sweep = fraction * 360.0;
        out.push(Wedge {
            status,
            fraction,
            start_deg: angle,
            sweep_deg: sweep,
        });
        angle += sweep;
    }
    out
}

/// Pixel polygon for a ring segment. Angles follow the maths convention
/// (counter-clockwise, y up) and are flipped onto screen space here.
pub fn ring_polygon(
    center: (i32, i32),
    outer: f64,
    inner: f64,
    start_deg: f64,
    sweep_deg: f64,
) -> Vec<(i32, i32)> {
    let steps = ((sweep_deg.abs() / 2.0).ceil() as usize).max(2);
    let point = |r: f64, deg: f64| {
        let rad = deg.to_radians();
        (
            center.0 + (r * rad.cos()).round() as i32,
            center.1 - (r * rad.sin()).round() as i32,
        )
    };
    let mut pts = Vec::with_capacity(2 * (steps + 1));
    for k in 0..=steps {
        let deg = start_deg + sweep_deg * k as f64 / steps as f64;
        pts.push(point(outer, deg));
    }
    for k in (0..=steps).rev() {
        let deg = start_deg + sweep_deg * k as f64 / steps as f64;
        pts.push(point(inner, deg));
    }
    pts
}

pub fn render(path: &Path, size: (u32, u32), counts: &RiskStatusCounts) -> DrawResult {
    let root = BitMapBackend::new(path, size).into_drawing_area();
    root.fill(&WHITE)?;
    let root = root.titled(
        "Student Dropout Risk Analysis (Safe vs High Risk)",
        ("sans-serif", 40),
    )?;

    let (w, h) = root.dim_in_pixel();
    let center = (w as i32 / 2, h as i32 / 2);
    let outer = w.min(h) as f64 * 0.36;
    let inner = outer * HOLE_RATIO;

    let wedges = donut_wedges(counts);
    if wedges.is_empty() {
        root.draw(&Text::new(
            "no records",
            center,
            TextStyle::from(("sans-serif", 36).into_font())
                .color(&BLACK)
                .pos(Pos::new(HPos::Center, VPos::Center)),
        ))?;
        root.present()?;
        return Ok(());
    }

    for wedge in &wedges {
        let color = status_color(wedge.status);
        root.draw(&Polygon::new(
            ring_polygon(center, outer, inner, wedge.start_deg, wedge.sweep_deg),
            color.filled(),
        ))?;

        let mid = (wedge.start_deg + wedge.sweep_deg / 2.0).to_radians();
        let at = |r: f64| {
            (
                center.0 + (r * mid.cos()).round() as i32,
                center.1 - (r * mid.sin()).round() as i32,
            )
        };
        root.draw(&Text::new(
            format!("{:.1}%", wedge.fraction * 100.0),
            at((outer + inner) / 2.0),
            TextStyle::from(("sans-serif", 34).into_font())
                .color(&WHITE)
                .pos(Pos::new(HPos::Center, VPos::Center)),
        ))?;
        root.draw(&Text::new(
            wedge.status.label(),
            at(outer * 1.18),
            TextStyle::from(("sans-serif", 36).into_font())
                .color(&BLACK)
                .pos(Pos::new(HPos::Center, VPos::Center)),
        ))?;
    }

    root.present()?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/src_inline/charts/risk_share.rs"]
mod tests;
