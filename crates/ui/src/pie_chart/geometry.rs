//! Pie layout: slice angles, arc points and pointer hit-testing.
//!
//! Angles are radians measured clockwise from 12 o'clock, in `[0, TAU)`.

use std::f32::consts::TAU;

use bevy_egui::egui;
use emissions::category::EmissionCategory;
use emissions::report::EmissionReport;

use crate::config::PALETTE;

/// Maximum angle covered by one triangle of a slice fan.
const ARC_STEP: f32 = TAU / 96.0;

/// One category's wedge of the pie.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PieSlice {
    pub category: EmissionCategory,
    pub value: f64,
    /// Fraction of the whole pie, in `(0, 1]`.
    pub share: f64,
    pub start: f32,
    pub sweep: f32,
}

impl PieSlice {
    pub fn end(&self) -> f32 {
        self.start + self.sweep
    }

    pub fn color(&self) -> egui::Color32 {
        slice_color(self.category.index())
    }

    fn contains_angle(&self, angle: f32) -> bool {
        angle >= self.start && angle < self.end()
    }
}

/// Palette colour for the item at `index`, cycling through [`PALETTE`].
pub fn slice_color(index: usize) -> egui::Color32 {
    PALETTE[index % PALETTE.len()]
}

/// Lays out one slice per non-zero category, in declared category order.
/// Returns no slices when the report total is zero.
///
/// Shares are renormalised to sum to one, so the pie stays closed even when
/// the report total has saturated and every share reads as 1.
pub fn pie_slices(report: &EmissionReport) -> Vec<PieSlice> {
    if report.is_empty() {
        return Vec::new();
    }

    let share_sum: f64 = report.iter().map(|(category, _)| report.share(category)).sum();
    if !share_sum.is_finite() || share_sum <= 0.0 {
        return Vec::new();
    }

    let mut slices = Vec::with_capacity(EmissionCategory::COUNT);
    let mut start = 0.0_f32;
    for (category, value) in report.iter() {
        if value <= 0.0 {
            continue;
        }
        let share = report.share(category) / share_sum;
        let sweep = share as f32 * TAU;
        slices.push(PieSlice {
            category,
            value,
            share,
            start,
            sweep,
        });
        start += sweep;
    }
    slices
}

/// Point on a circle of `radius` around `center` at `angle`.
pub fn point_on_circle(center: egui::Pos2, radius: f32, angle: f32) -> egui::Pos2 {
    egui::pos2(
        center.x + radius * angle.sin(),
        center.y - radius * angle.cos(),
    )
}

/// Points along a slice's outer arc, first and last included.
pub fn arc_points(center: egui::Pos2, radius: f32, slice: &PieSlice) -> Vec<egui::Pos2> {
    let steps = ((slice.sweep / ARC_STEP).ceil() as usize).max(1);
    (0..=steps)
        .map(|i| {
            let angle = slice.start + slice.sweep * (i as f32 / steps as f32);
            point_on_circle(center, radius, angle)
        })
        .collect()
}

/// Angle of an offset from the pie centre (screen coordinates, y down).
pub fn offset_angle(offset: egui::Vec2) -> f32 {
    let angle = offset.x.atan2(-offset.y);
    if angle < 0.0 {
        angle + TAU
    } else {
        angle
    }
}

/// Slice under `offset` (pointer position minus pie centre), if the offset
/// lies inside the pie.
pub fn slice_at(slices: &[PieSlice], offset: egui::Vec2, radius: f32) -> Option<&PieSlice> {
    if offset.length() > radius {
        return None;
    }
    let angle = offset_angle(offset);
    slices
        .iter()
        .find(|slice| slice.contains_angle(angle))
        // Float drift can leave a sliver just below TAU uncovered.
        .or_else(|| slices.last())
}
