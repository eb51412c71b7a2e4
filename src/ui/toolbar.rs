// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! View controls above the path canvas.
//!
//! This module provides the toolbar for switching between the 3D and 2D
//! projections, showing the path on the original image, and zooming.

use crate::models::view::{BackgroundMode, ViewMode, ViewState};

/// Display the view toolbar. Returns `true` if the view changed.
pub fn show(ui: &mut egui::Ui, view: &mut ViewState) -> bool {
    let before = view.clone();

    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;

        ui.label("View:");

        ui.separator();

        if ui.selectable_label(view.mode == ViewMode::Projection3D, "🌐 3D View").clicked() {
            view.set_mode(ViewMode::Projection3D);
        }

        if ui.selectable_label(view.mode == ViewMode::Projection2D, "▭ 2D View").clicked() {
            view.set_mode(ViewMode::Projection2D);
        }

        let on_image = view.background == BackgroundMode::OriginalImage;
        if ui.selectable_label(on_image, "📷 On Image").clicked() {
            view.toggle_background();
        }

        ui.separator();

        if ui.button("🔍+").on_hover_text("Zoom In").clicked() {
            view.zoom_in();
        }

        if ui.button("🔍-").on_hover_text("Zoom Out").clicked() {
            view.zoom_out();
        }

        if ui.button("🏠 Reset").on_hover_text("Reset View").clicked() {
            view.reset();
        }

        ui.separator();

        let hint = if view.background == BackgroundMode::OriginalImage {
            "Zoom and pan move the image together with the path"
        } else if view.mode == ViewMode::Projection3D {
            "Move the pointer over the canvas to rotate the scene"
        } else {
            "Top-down view of the path"
        };

        ui.label(egui::RichText::new(hint).italics().weak());
    });

    *view != before
}
