// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Geometric utility functions.
//!
//! This module provides the bounding box used to fit a path onto the
//! canvas, and the transformations between original image pixels and the
//! image as currently displayed.

use crate::models::path::PathPoint;
use egui::{Pos2, Rect, Vec2};

/// Share of the canvas a fitted path occupies.
const FIT_MARGIN: f32 = 0.8;

/// Scale used when the path has no extent (a single point, or all equal).
pub const DEFAULT_SCALE: f32 = 1.0;

/// Axis-aligned bounds of the x/y components of a path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min_x: f32,
    pub max_x: f32,
    pub min_y: f32,
    pub max_y: f32,
}

impl Bounds {
    /// Bounds over all finite points, or `None` if there are none.
    pub fn of_points(points: &[PathPoint]) -> Option<Self> {
        points
            .iter()
            .map(|p| (p.x as f32, p.y as f32))
            .filter(|(x, y)| x.is_finite() && y.is_finite())
            .fold(None, |acc: Option<Bounds>, (x, y)| {
                Some(match acc {
                    None => Bounds { min_x: x, max_x: x, min_y: y, max_y: y },
                    Some(b) => Bounds {
                        min_x: b.min_x.min(x),
                        max_x: b.max_x.max(x),
                        min_y: b.min_y.min(y),
                        max_y: b.max_y.max(y),
                    },
                })
            })
    }

    pub fn width(&self) -> f32 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f32 {
        self.max_y - self.min_y
    }

    pub fn center(&self) -> Pos2 {
        Pos2::new(
            (self.min_x + self.max_x) / 2.0,
            (self.min_y + self.max_y) / 2.0,
        )
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width(), self.height())
    }

    /// Scale that fits these bounds into `surface` with some margin.
    pub fn fit_scale(&self, surface: Vec2) -> f32 {
        let extent = self.width().max(self.height());
        if extent <= 0.0 {
            return DEFAULT_SCALE;
        }
        let scale = surface.x.min(surface.y) / extent * FIT_MARGIN;
        if scale.is_finite() {
            scale
        } else {
            DEFAULT_SCALE
        }
    }
}

/// Where the background image is drawn on the surface.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ImagePlacement {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl ImagePlacement {
    pub fn rect(&self) -> Rect {
        Rect::from_min_size(Pos2::new(self.x, self.y), Vec2::new(self.width, self.height))
    }
}

/// Center an image of `natural` size on the surface, scaled by `zoom` and
/// shifted by `pan`.
pub fn place_image(natural: Vec2, surface: Vec2, zoom: f32, pan: Vec2) -> ImagePlacement {
    let width = natural.x * zoom;
    let height = natural.y * zoom;
    ImagePlacement {
        x: (surface.x - width) / 2.0 + pan.x,
        y: (surface.y - height) / 2.0 + pan.y,
        width,
        height,
    }
}

/// Convert a point in original image pixels to surface coordinates of the
/// displayed image. A zero-sized original collapses onto the image origin.
pub fn image_to_surface(x: f32, y: f32, placement: &ImagePlacement, original: Vec2) -> Pos2 {
    let ratio = |shown: f32, orig: f32| if orig > 0.0 { shown / orig } else { 0.0 };
    Pos2::new(
        placement.x + x * ratio(placement.width, original.x),
        placement.y + y * ratio(placement.height, original.y),
    )
}

/// Convert a surface position back to original image pixels.
pub fn surface_to_image(pos: Pos2, placement: &ImagePlacement, original: Vec2) -> Option<Pos2> {
    if placement.width <= 0.0 || placement.height <= 0.0 {
        return None;
    }
    Some(Pos2::new(
        (pos.x - placement.x) / placement.width * original.x,
        (pos.y - placement.y) / placement.height * original.y,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pts(coords: &[(f64, f64)]) -> Vec<PathPoint> {
        coords.iter().map(|&(x, y)| PathPoint::new(x, y, 0.0)).collect()
    }

    #[test]
    fn test_bounds_and_center() {
        let b = Bounds::of_points(&pts(&[(0.0, 0.0), (10.0, 0.0), (0.0, 20.0)])).unwrap();
        assert_eq!(b.width(), 10.0);
        assert_eq!(b.height(), 20.0);
        assert_eq!(b.center(), Pos2::new(5.0, 10.0));
    }

    #[test]
    fn test_bounds_skip_non_finite() {
        let b = Bounds::of_points(&pts(&[(f64::NAN, 0.0), (1.0, 1.0), (3.0, f64::INFINITY)])).unwrap();
        assert_eq!(b.center(), Pos2::new(1.0, 1.0));
        assert!(Bounds::of_points(&pts(&[(f64::NAN, 1.0)])).is_none());
        assert!(Bounds::of_points(&[]).is_none());
    }

    #[test]
    fn test_fit_scale() {
        let b = Bounds::of_points(&pts(&[(0.0, 0.0), (100.0, 50.0)])).unwrap();
        let scale = b.fit_scale(Vec2::new(800.0, 400.0));
        assert!((scale - 400.0 / 100.0 * 0.8).abs() < 1e-5);
    }

    #[test]
    fn test_fit_scale_single_point_falls_back() {
        let b = Bounds::of_points(&pts(&[(7.0, 7.0)])).unwrap();
        assert_eq!(b.fit_scale(Vec2::new(800.0, 400.0)), DEFAULT_SCALE);
    }

    #[test]
    fn test_place_image_centered() {
        let p = place_image(Vec2::new(400.0, 200.0), Vec2::new(800.0, 400.0), 1.0, Vec2::ZERO);
        assert_eq!(p, ImagePlacement { x: 200.0, y: 100.0, width: 400.0, height: 200.0 });

        let p = place_image(Vec2::new(400.0, 200.0), Vec2::new(800.0, 400.0), 2.0, Vec2::new(10.0, -5.0));
        assert_eq!(p, ImagePlacement { x: 10.0, y: -5.0, width: 800.0, height: 400.0 });
    }

    #[test]
    fn test_image_surface_roundtrip() {
        let placement = ImagePlacement { x: 50.0, y: 20.0, width: 400.0, height: 300.0 };
        let original = Vec2::new(800.0, 600.0);

        let on_surface = image_to_surface(400.0, 300.0, &placement, original);
        assert_eq!(on_surface, Pos2::new(250.0, 170.0));

        let back = surface_to_image(on_surface, &placement, original).unwrap();
        assert!((back.x - 400.0).abs() < 1e-4);
        assert!((back.y - 300.0).abs() < 1e-4);
    }

    #[test]
    fn test_zero_original_collapses_to_origin() {
        let placement = ImagePlacement::default();
        let p = image_to_surface(123.0, 456.0, &placement, Vec2::ZERO);
        assert_eq!(p, Pos2::ZERO);
        assert!(surface_to_image(p, &placement, Vec2::ZERO).is_none());
    }
}
