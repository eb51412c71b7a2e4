// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Drawing primitives the path renderer needs from its host.
//!
//! Coordinates are surface-local: (0, 0) is the top-left corner of the
//! canvas, in logical points. egui takes care of the device pixel ratio.

use super::style::Dash;
use egui::{Align2, Color32, FontId, Painter, Pos2, Rect, Shape, Stroke, TextureId, Vec2};

pub trait Surface {
    fn fill_rect(&mut self, rect: Rect, color: Color32);

    /// Draw the background image stretched over `rect`.
    fn draw_image(&mut self, rect: Rect);

    fn line(&mut self, from: Pos2, to: Pos2, stroke: Stroke, dash: Option<Dash>);

    fn circle(&mut self, center: Pos2, radius: f32, fill: Color32, outline: Stroke);

    /// Text centered horizontally with its baseline at `pos`.
    fn text(&mut self, pos: Pos2, text: &str, size: f32, color: Color32);
}

/// [`Surface`] backed by an egui painter clipped to the canvas rect.
pub struct EguiSurface<'a> {
    painter: &'a Painter,
    origin: Vec2,
    texture: Option<TextureId>,
}

impl<'a> EguiSurface<'a> {
    pub fn new(painter: &'a Painter, canvas: Rect, texture: Option<TextureId>) -> Self {
        Self {
            painter,
            origin: canvas.min.to_vec2(),
            texture,
        }
    }

    fn to_screen(&self, pos: Pos2) -> Pos2 {
        pos + self.origin
    }
}

impl Surface for EguiSurface<'_> {
    fn fill_rect(&mut self, rect: Rect, color: Color32) {
        self.painter.rect_filled(rect.translate(self.origin), 0.0, color);
    }

    fn draw_image(&mut self, rect: Rect) {
        if let Some(texture) = self.texture {
            self.painter.image(
                texture,
                rect.translate(self.origin),
                Rect::from_min_max(Pos2::ZERO, Pos2::new(1.0, 1.0)),
                Color32::WHITE,
            );
        }
    }

    fn line(&mut self, from: Pos2, to: Pos2, stroke: Stroke, dash: Option<Dash>) {
        let points = [self.to_screen(from), self.to_screen(to)];
        match dash {
            Some(dash) => {
                self.painter
                    .extend(Shape::dashed_line(&points, stroke, dash.length, dash.gap));
            }
            None => {
                self.painter.line_segment(points, stroke);
            }
        }
    }

    fn circle(&mut self, center: Pos2, radius: f32, fill: Color32, outline: Stroke) {
        self.painter
            .circle(self.to_screen(center), radius, fill, outline);
    }

    fn text(&mut self, pos: Pos2, text: &str, size: f32, color: Color32) {
        self.painter.text(
            self.to_screen(pos),
            Align2::CENTER_BOTTOM,
            text,
            FontId::proportional(size),
            color,
        );
    }
}
