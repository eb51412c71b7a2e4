// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Path rendering.
//!
//! [`PathProjector`] owns the canvas view state and draws a full frame from
//! scratch on every call: background, dashed connections, point markers,
//! labels and, over the abstract 3D scene, a small axis gizmo.

pub mod projection;
pub mod style;
pub mod surface;

use crate::models::path::PathResult;
use crate::models::view::{BackgroundMode, InputEvent, ViewMode, ViewState};
use crate::util::geometry::{place_image, Bounds, ImagePlacement};
use egui::{Pos2, Rect, Vec2};
use projection::{project, ImageMapping};
use style::*;
use surface::Surface;

/// State of the background image as seen by the renderer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ImageStatus {
    /// No image has been chosen.
    None,
    Loading,
    Failed,
    /// Decoded and uploaded, with its natural size in pixels.
    Ready { size: Vec2 },
}

#[derive(Debug, Default)]
pub struct PathProjector {
    pub view: ViewState,
    /// Image mapping of the last frame that had a ready image.
    last_mapping: Option<ImageMapping>,
}

impl PathProjector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply an input event to the view. Returns `true` if a redraw is due.
    pub fn handle_input(&mut self, event: InputEvent, surface_size: Vec2) -> bool {
        self.view.handle(event, surface_size)
    }

    pub fn last_image_mapping(&self) -> Option<&ImageMapping> {
        self.last_mapping.as_ref()
    }

    /// Forget the placement of a previous image, e.g. when a new one is opened.
    pub fn clear_image_mapping(&mut self) {
        self.last_mapping = None;
    }

    /// Whether the frame is drawn over the original image.
    pub fn shows_image(&self, image: ImageStatus) -> bool {
        self.view.background == BackgroundMode::OriginalImage && image != ImageStatus::None
    }

    /// Draw one complete frame onto `surface`.
    ///
    /// Never fails on bad data: a missing or empty result draws only the
    /// background, connections with out-of-range indices are skipped, and
    /// points that project to non-finite coordinates are not drawn.
    pub fn render_frame<S: Surface>(
        &mut self,
        surface: &mut S,
        result: Option<&PathResult>,
        image: ImageStatus,
        surface_size: Vec2,
    ) {
        let on_image = self.shows_image(image);
        let perspective = !on_image && self.view.mode == ViewMode::Projection3D;

        let fill = if perspective { SPACE_FILL } else { FLAT_FILL };
        surface.fill_rect(Rect::from_min_size(Pos2::ZERO, surface_size), fill);

        let Some(result) = result.filter(|r| !r.is_empty()) else {
            return;
        };

        let mapping = if on_image {
            Some(self.image_mapping(surface, result, image, surface_size))
        } else {
            None
        };

        let projected = project(result.points(), &self.view, surface_size, mapping.as_ref());

        let stroke = egui::Stroke::new(CONNECTION_WIDTH, CONNECTION_COLOR);
        for connection in result.connections() {
            if !connection.is_within(projected.len()) {
                continue;
            }
            let (start, end) = (projected[connection.from], projected[connection.to]);
            if start.is_finite() && end.is_finite() {
                surface.line(start.pos, end.pos, stroke, Some(CONNECTION_DASH));
            }
        }

        let count = projected.len();
        for (index, point) in projected.iter().enumerate() {
            if !point.is_finite() {
                continue;
            }
            let style = point_style(index, count, result.metadata_for(index));
            surface.circle(point.pos, style.radius, style.color, OUTLINE);
            let label_pos = point.pos - Vec2::new(0.0, style.radius + LABEL_OFFSET);
            surface.text(label_pos, &style.label, LABEL_SIZE, LABEL_COLOR);
        }

        if self.view.mode == ViewMode::Projection3D && self.view.background == BackgroundMode::Abstract {
            draw_axes(surface, (surface_size / 2.0).to_pos2());
        }
    }

    /// Place the image for this frame and draw it, or fall back to the last
    /// known placement when the image is not available.
    fn image_mapping<S: Surface>(
        &mut self,
        surface: &mut S,
        result: &PathResult,
        image: ImageStatus,
        surface_size: Vec2,
    ) -> ImageMapping {
        match image {
            ImageStatus::Ready { size } => {
                let placement = place_image(size, surface_size, self.view.zoom, self.view.pan);
                surface.draw_image(placement.rect());
                let mapping = ImageMapping {
                    placement,
                    original_size: original_image_size(result, Some(size)),
                };
                self.last_mapping = Some(mapping);
                mapping
            }
            _ => self.last_mapping.unwrap_or_else(|| ImageMapping {
                placement: ImagePlacement::default(),
                original_size: original_image_size(result, None),
            }),
        }
    }
}

/// Pixel size the path coordinates refer to: the analysed image size if the
/// result carries one, else the loaded image, else the path's own extent.
fn original_image_size(result: &PathResult, natural: Option<Vec2>) -> Vec2 {
    result
        .analysis
        .as_ref()
        .and_then(|a| a.image_dimensions())
        .map(|(w, h)| Vec2::new(w as f32, h as f32))
        .or(natural)
        .or_else(|| Bounds::of_points(result.points()).map(|b| b.size()))
        .unwrap_or(Vec2::ZERO)
}

/// Fixed-size X/Y axes at the canvas center, independent of the camera.
fn draw_axes<S: Surface>(surface: &mut S, center: Pos2) {
    let h = AXIS_HALF_LENGTH;
    surface.line(center - Vec2::new(h, 0.0), center + Vec2::new(h, 0.0), AXIS_STROKE, None);
    surface.line(center - Vec2::new(0.0, h), center + Vec2::new(0.0, h), AXIS_STROKE, None);
    surface.text(center + Vec2::new(h + 5.0, 3.0), "X", AXIS_LABEL_SIZE, AXIS_LABEL_COLOR);
    surface.text(center + Vec2::new(3.0, -(h + 5.0)), "Y", AXIS_LABEL_SIZE, AXIS_LABEL_COLOR);
}
