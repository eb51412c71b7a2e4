// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Colors, sizes and labels of the path canvas.
//!
//! Point appearance depends only on the point's position in the path and
//! its metadata, never on view state.

use crate::models::path::PointMetadata;
use egui::{Color32, Stroke};

pub const START_COLOR: Color32 = Color32::from_rgb(0x00, 0xff, 0x00);
pub const END_COLOR: Color32 = Color32::from_rgb(0xff, 0x00, 0x00);
pub const FEASIBLE_COLOR: Color32 = Color32::from_rgb(0x00, 0xff, 0xff);
pub const INFEASIBLE_COLOR: Color32 = Color32::from_rgb(0xff, 0xaa, 0x00);

pub const MARKER_RADIUS: f32 = 8.0;
pub const DEFAULT_RADIUS: f32 = 6.0;
pub const MIN_RADIUS: f32 = 4.0;
pub const MAX_RADIUS: f32 = 12.0;

// Translucent colors below are premultiplied.

/// Rounded panel behind the whole canvas, rgba(0, 0, 0, 0.3).
pub const CANVAS_BACKDROP: Color32 = Color32::from_rgba_premultiplied(0, 0, 0, 77);
pub const CANVAS_ROUNDING: f32 = 10.0;

/// Canvas fill behind the abstract 3D scene, rgba(0, 0, 20, 0.3).
pub const SPACE_FILL: Color32 = Color32::from_rgba_premultiplied(0, 0, 6, 77);
/// Canvas fill for the flat view and behind images, rgba(0, 0, 0, 0.1).
pub const FLAT_FILL: Color32 = Color32::from_rgba_premultiplied(0, 0, 0, 26);

/// rgba(0, 255, 255, 0.6)
pub const CONNECTION_COLOR: Color32 = Color32::from_rgba_premultiplied(0, 153, 153, 153);
pub const CONNECTION_WIDTH: f32 = 2.0;
pub const CONNECTION_DASH: Dash = Dash { length: 5.0, gap: 5.0 };

/// rgba(255, 255, 255, 0.8)
pub const OUTLINE: Stroke = Stroke {
    width: 1.0,
    color: Color32::from_rgba_premultiplied(204, 204, 204, 204),
};

pub const LABEL_COLOR: Color32 = Color32::WHITE;
pub const LABEL_SIZE: f32 = 10.0;
/// Gap between the top of a marker and the label baseline.
pub const LABEL_OFFSET: f32 = 10.0;

pub const AXIS_HALF_LENGTH: f32 = 50.0;
/// rgba(255, 255, 255, 0.3)
pub const AXIS_STROKE: Stroke = Stroke {
    width: 1.0,
    color: Color32::from_rgba_premultiplied(77, 77, 77, 77),
};
/// rgba(255, 255, 255, 0.6)
pub const AXIS_LABEL_COLOR: Color32 = Color32::from_rgba_premultiplied(153, 153, 153, 153);
pub const AXIS_LABEL_SIZE: f32 = 8.0;

/// Dash pattern for stroked lines, in surface pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dash {
    pub length: f32,
    pub gap: f32,
}

/// What a point stands for in the path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointRole {
    Start,
    End,
    /// A debris target with metadata.
    Target,
    /// An intermediate point without metadata.
    Waypoint,
}

impl PointRole {
    /// Classify the point at `index` of a path with `count` points. The last
    /// point only counts as the end when the path has more than two points.
    pub fn classify(index: usize, count: usize, metadata: Option<&PointMetadata>) -> Self {
        if index == 0 {
            PointRole::Start
        } else if count > 2 && index == count - 1 {
            PointRole::End
        } else if metadata.is_some() {
            PointRole::Target
        } else {
            PointRole::Waypoint
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PointStyle {
    pub role: PointRole,
    pub color: Color32,
    pub radius: f32,
    pub label: String,
}

pub fn point_style(index: usize, count: usize, metadata: Option<&PointMetadata>) -> PointStyle {
    let role = PointRole::classify(index, count, metadata);
    let (color, radius) = match (role, metadata) {
        (PointRole::Start, _) => (START_COLOR, MARKER_RADIUS),
        (PointRole::End, _) => (END_COLOR, MARKER_RADIUS),
        (PointRole::Target, Some(meta)) => {
            let color = if meta.feasible { FEASIBLE_COLOR } else { INFEASIBLE_COLOR };
            // max/min rather than clamp so a NaN size lands on MIN_RADIUS
            let radius = (meta.size as f32 * 2.0).max(MIN_RADIUS).min(MAX_RADIUS);
            (color, radius)
        }
        _ => (FEASIBLE_COLOR, DEFAULT_RADIUS),
    };

    PointStyle {
        role,
        color,
        radius,
        label: point_label(role, index, metadata),
    }
}

fn point_label(role: PointRole, index: usize, metadata: Option<&PointMetadata>) -> String {
    match role {
        PointRole::Start => "START".to_string(),
        PointRole::End => "END".to_string(),
        _ => {
            // Id 0 is what the planner sends for an unknown debris object
            let id = metadata
                .and_then(|m| m.debris_id)
                .filter(|&id| id != 0)
                .unwrap_or(index as u64);
            format!("D{}", id)
        }
    }
}
