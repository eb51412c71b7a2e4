// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Legend explaining the canvas markers.

use crate::models::view::{BackgroundMode, ViewState};
use crate::render::style::{
    CONNECTION_COLOR, END_COLOR, FEASIBLE_COLOR, INFEASIBLE_COLOR, START_COLOR,
};

/// Percentage shown for a zoom factor.
pub fn zoom_percent(zoom: f32) -> u32 {
    (zoom * 100.0).round() as u32
}

pub fn show(ui: &mut egui::Ui, view: &ViewState) {
    ui.heading("Legend");

    swatch(ui, START_COLOR, "Start Position");
    swatch(ui, FEASIBLE_COLOR, "Feasible Debris");
    swatch(ui, INFEASIBLE_COLOR, "Non-feasible");
    swatch(ui, END_COLOR, "End Position");

    ui.horizontal(|ui| {
        let (rect, _) = ui.allocate_exact_size(egui::vec2(12.0, 12.0), egui::Sense::hover());
        ui.painter().line_segment(
            [rect.left_center(), rect.right_center()],
            egui::Stroke::new(2.0, CONNECTION_COLOR),
        );
        ui.label("Path Connection");
    });

    ui.add_space(6.0);
    ui.label(format!("🔍 Zoom: {}%", zoom_percent(view.zoom)));
    ui.label(
        egui::RichText::new("Controls: Scroll=Zoom, Ctrl+Drag=Pan, Move=Rotate (3D)")
            .small()
            .weak(),
    );
    if view.background == BackgroundMode::OriginalImage {
        ui.label(
            egui::RichText::new("📷 Image Mode: Zoom and pan work with the image")
                .small()
                .weak(),
        );
    }
}

fn swatch(ui: &mut egui::Ui, color: egui::Color32, text: &str) {
    ui.horizontal(|ui| {
        let (rect, _) = ui.allocate_exact_size(egui::vec2(12.0, 12.0), egui::Sense::hover());
        ui.painter().circle_filled(rect.center(), 6.0, color);
        ui.label(text);
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zoom_percent() {
        assert_eq!(zoom_percent(1.0), 100);
        assert_eq!(zoom_percent(1.1), 110);
        assert_eq!(zoom_percent(0.1), 10);
        assert_eq!(zoom_percent(0.999), 100);
    }
}
