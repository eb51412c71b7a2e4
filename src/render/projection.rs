// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Projection of path points onto the canvas.
//!
//! Three policies, picked in this order:
//! 1. image space: points are original image pixels, mapped onto the image
//!    as it is currently placed;
//! 2. flat: x/y fitted to the canvas, z dropped;
//! 3. perspective: rotate by (pitch, yaw), then divide by depth.
//!
//! Everything here is pure and is recomputed for every frame.

use crate::models::path::PathPoint;
use crate::models::view::{Rotation, ViewMode, ViewState};
use crate::util::geometry::{image_to_surface, Bounds, ImagePlacement, DEFAULT_SCALE};
use egui::{Pos2, Vec2};

/// Distance from the eye to the scene origin.
const PERSPECTIVE_DISTANCE: f32 = 1000.0;
/// Screen gain applied after the perspective divide.
const PERSPECTIVE_GAIN: f32 = 200.0;
/// Stored rotation angles are applied at half strength.
const ROTATION_DAMPING: f32 = 0.5;

/// A projected point. `z` is the depth after rotation, 0 for flat policies.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenPoint {
    pub pos: Pos2,
    pub z: f32,
}

impl ScreenPoint {
    pub fn is_finite(&self) -> bool {
        self.pos.x.is_finite() && self.pos.y.is_finite()
    }
}

/// The displayed image and the pixel size the path coordinates refer to.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ImageMapping {
    pub placement: ImagePlacement,
    pub original_size: Vec2,
}

/// Project `points` for the current view. With `image` set, points are
/// mapped onto the image regardless of the view mode.
pub fn project(
    points: &[PathPoint],
    view: &ViewState,
    surface: Vec2,
    image: Option<&ImageMapping>,
) -> Vec<ScreenPoint> {
    if points.is_empty() {
        return Vec::new();
    }

    if let Some(mapping) = image {
        return points
            .iter()
            .map(|p| ScreenPoint {
                pos: image_to_surface(p.x as f32, p.y as f32, &mapping.placement, mapping.original_size),
                z: 0.0,
            })
            .collect();
    }

    let (bounds_center, scale) = match Bounds::of_points(points) {
        Some(bounds) => (bounds.center(), bounds.fit_scale(surface)),
        None => (Pos2::ZERO, DEFAULT_SCALE),
    };
    let center = (surface / 2.0).to_pos2();

    match view.mode {
        ViewMode::Projection2D => points
            .iter()
            .map(|p| {
                let offset = Vec2::new(p.x as f32 - bounds_center.x, p.y as f32 - bounds_center.y);
                ScreenPoint {
                    pos: center + offset * scale * view.zoom + view.pan,
                    z: 0.0,
                }
            })
            .collect(),
        ViewMode::Projection3D => points
            .iter()
            .map(|p| {
                let [rx, ry, rz] = rotate(p, view.rotation);
                let depth = (rz + PERSPECTIVE_DISTANCE).max(1.0);
                let gain = scale * PERSPECTIVE_GAIN * view.zoom;
                ScreenPoint {
                    pos: center + Vec2::new(rx / depth, ry / depth) * gain + view.pan,
                    z: rz,
                }
            })
            .collect(),
    }
}

/// Yaw about the vertical axis, then pitch about the horizontal axis.
fn rotate(p: &PathPoint, rotation: Rotation) -> [f32; 3] {
    let (x, y, z) = (p.x as f32, p.y as f32, p.z as f32);
    let (sin_p, cos_p) = (rotation.pitch * ROTATION_DAMPING).sin_cos();
    let (sin_y, cos_y) = (rotation.yaw * ROTATION_DAMPING).sin_cos();

    let rx = x * cos_y - z * sin_y;
    let z1 = x * sin_y + z * cos_y;
    let ry = y * cos_p + z1 * sin_p;
    let rz = z1 * cos_p - y * sin_p;
    [rx, ry, rz]
}
