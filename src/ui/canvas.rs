// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Path canvas.
//!
//! This module hosts the path projector inside an egui panel: it turns
//! egui pointer and scroll input into view events, then draws the frame.

use crate::models::path::PathResult;
use crate::models::view::{BackgroundMode, InputEvent, PointerButton, ViewMode};
use crate::render::style::{CANVAS_BACKDROP, CANVAS_ROUNDING};
use crate::render::surface::EguiSurface;
use crate::render::{ImageStatus, PathProjector};
use crate::util::geometry::surface_to_image;
use egui::{Pos2, Rect, Sense, Vec2};

/// Display the path canvas and route its input to the projector.
pub fn show(
    ui: &mut egui::Ui,
    projector: &mut PathProjector,
    result: Option<&PathResult>,
    image: ImageStatus,
    texture: Option<&egui::TextureHandle>,
) {
    let available = ui.available_size() - Vec2::new(0.0, ui.spacing().interact_size.y * 1.5);
    let (rect, response) = ui.allocate_exact_size(available.max(Vec2::splat(1.0)), Sense::click_and_drag());

    let events = collect_events(ui, &response, rect, projector.view.is_panning());
    let mut changed = false;
    for event in events {
        changed |= projector.handle_input(event, rect.size());
    }
    if changed {
        ui.ctx().request_repaint();
    }

    let painter = ui.painter_at(rect);
    painter.rect_filled(rect, CANVAS_ROUNDING, CANVAS_BACKDROP);
    let mut surface = EguiSurface::new(&painter, rect, texture.map(|t| t.id()));
    projector.render_frame(&mut surface, result, image, rect.size());

    if result.map_or(true, PathResult::is_empty) {
        painter.text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            "No path data available",
            egui::FontId::proportional(14.0),
            egui::Color32::from_gray(130),
        );
    }

    // Status line below the canvas
    ui.horizontal(|ui| {
        let view = &projector.view;
        let mode = match view.mode {
            ViewMode::Projection3D => "3D",
            ViewMode::Projection2D => "2D",
        };
        ui.label(format!("View: {}", mode));
        ui.separator();
        ui.label(match (view.background, image) {
            (BackgroundMode::Abstract, _) | (_, ImageStatus::None) => "Background: abstract",
            (_, ImageStatus::Loading) => "Background: loading image...",
            (_, ImageStatus::Failed) => "Background: image unavailable",
            (_, ImageStatus::Ready { .. }) => "Background: original image",
        });

        if projector.shows_image(image) {
            let cursor = response.hover_pos().and_then(|pos| {
                let mapping = projector.last_image_mapping()?;
                surface_to_image(to_local(pos, rect), &mapping.placement, mapping.original_size)
            });
            if let Some(px) = cursor {
                ui.separator();
                ui.label(format!("Image px: ({:.0}, {:.0})", px.x, px.y));
            }
        }
    });
}

fn to_local(pos: Pos2, rect: Rect) -> Pos2 {
    (pos - rect.min).to_pos2()
}

/// Translate this frame's egui input into canvas events, in the order the
/// canvas would have seen them.
fn collect_events(ui: &egui::Ui, response: &egui::Response, rect: Rect, panning: bool) -> Vec<InputEvent> {
    let mut events = Vec::new();
    let (pointer, scroll, modifier) =
        ui.input(|i| (i.pointer.clone(), i.raw_scroll_delta, i.modifiers.command || i.modifiers.ctrl));

    let latest = pointer.latest_pos().map(|pos| to_local(pos, rect));

    if response.hovered() {
        if let Some(pos) = latest {
            if pointer.button_pressed(egui::PointerButton::Middle) {
                events.push(InputEvent::PointerDown { button: PointerButton::Middle, modifier, pos });
            } else if pointer.button_pressed(egui::PointerButton::Primary) {
                events.push(InputEvent::PointerDown { button: PointerButton::Primary, modifier, pos });
            } else if pointer.button_pressed(egui::PointerButton::Secondary) {
                events.push(InputEvent::PointerDown { button: PointerButton::Secondary, modifier, pos });
            }
        }
    }

    // Pans keep following the pointer outside the canvas while dragging.
    if pointer.is_moving() && (response.hovered() || response.dragged() || panning) {
        if let Some(pos) = latest {
            events.push(InputEvent::PointerMove { pos });
        }
    }

    if pointer.any_released() {
        events.push(InputEvent::PointerUp);
    } else if panning && !response.hovered() && !response.dragged() {
        events.push(InputEvent::PointerLeave);
    }

    if response.hovered() && scroll.y != 0.0 {
        // egui reports scrolling up as positive; the canvas expects the opposite.
        events.push(InputEvent::Wheel { delta_y: -scroll.y });
    }

    events
}
