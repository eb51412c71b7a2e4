// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Path summary panel.
//!
//! This module shows the planner's mission totals as info cards and the
//! ordered list of capture steps.

use crate::models::path::{PathResult, PathStep};
use crate::render::style::{END_COLOR, FEASIBLE_COLOR, START_COLOR};

/// Total distance in kilometres, from metres.
pub fn format_distance(metres: Option<f64>) -> String {
    match metres {
        Some(m) if m != 0.0 => format!("{:.1} km", m / 1000.0),
        _ => "0 km".to_string(),
    }
}

/// Mission time in hours, from seconds.
pub fn format_time(seconds: Option<f64>) -> String {
    match seconds {
        Some(s) if s != 0.0 => format!("{:.1} hours", s / 3600.0),
        _ => "0 hours".to_string(),
    }
}

pub fn format_fuel(kg: Option<f64>) -> String {
    match kg {
        Some(kg) if kg != 0.0 => format!("{:.1} kg", kg),
        _ => "0 kg".to_string(),
    }
}

/// Title of a step entry; the first step is the start position.
pub fn step_title(index: usize, step: &PathStep) -> String {
    let number = step.number(index);
    if index == 0 {
        format!("Step {}: Start", number)
    } else if step.is_end() {
        format!("Step {}: Return", number)
    } else {
        match step.target_id() {
            Some(id) => format!("Step {}: Debris {}", number, id),
            None => format!("Step {}: Debris ?", number),
        }
    }
}

pub fn step_color(index: usize, count: usize) -> egui::Color32 {
    if index == 0 {
        START_COLOR
    } else if index + 1 == count {
        END_COLOR
    } else {
        FEASIBLE_COLOR
    }
}

pub fn show(ui: &mut egui::Ui, result: &PathResult) {
    ui.heading("Path Summary");

    egui::Grid::new("path_info")
        .num_columns(2)
        .spacing([12.0, 6.0])
        .show(ui, |ui| {
            card(ui, "Path Length", &format!("{} steps", result.path_length));
            card(ui, "Total Distance", &format_distance(result.metrics.total_distance));
            ui.end_row();
            card(ui, "Mission Time", &format_time(result.metrics.total_time));
            card(ui, "Fuel Required", &format_fuel(result.metrics.total_fuel));
            ui.end_row();
        });

    if let Some(analysis) = &result.analysis {
        ui.label(format!(
            "{} of {} detected objects feasible",
            analysis.feasible_objects, analysis.total_objects
        ));
    }

    ui.add_space(8.0);
    ui.label(egui::RichText::new("Path Steps:").strong());

    egui::ScrollArea::vertical()
        .max_height(200.0)
        .auto_shrink([false, true])
        .show(ui, |ui| {
            let count = result.path.len();
            for (index, step) in result.path.iter().enumerate() {
                ui.horizontal(|ui| {
                    let (rect, _) = ui.allocate_exact_size(egui::vec2(3.0, 16.0), egui::Sense::hover());
                    ui.painter().rect_filled(rect, 0.0, step_color(index, count));
                    ui.label(step_title(index, step));
                    if let Some(distance) = step.distance_from_previous {
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            ui.label(egui::RichText::new(format!("{:.1}m", distance)).weak());
                        });
                    }
                });
            }
        });
}

fn card(ui: &mut egui::Ui, label: &str, value: &str) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.vertical(|ui| {
            ui.label(egui::RichText::new(label.to_uppercase()).small().weak());
            ui.label(egui::RichText::new(value).strong());
        });
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metric_formatting() {
        assert_eq!(format_distance(Some(1260.0)), "1.3 km");
        assert_eq!(format_distance(None), "0 km");
        assert_eq!(format_distance(Some(0.0)), "0 km");
        assert_eq!(format_time(Some(5400.0)), "1.5 hours");
        assert_eq!(format_time(None), "0 hours");
        assert_eq!(format_fuel(Some(85.24)), "85.2 kg");
        assert_eq!(format_fuel(None), "0 kg");
    }

    #[test]
    fn test_step_titles() {
        let demo = PathResult::demo();
        assert_eq!(step_title(0, &demo.path[0]), "Step 0: Start");
        assert_eq!(step_title(2, &demo.path[2]), "Step 2: Debris 2");

        let unknown = PathStep { step: Some(7), ..Default::default() };
        assert_eq!(step_title(1, &unknown), "Step 7: Debris ?");
    }

    #[test]
    fn test_planner_step_titles() {
        let json = r#"[
            {"position": [0, 0, 0], "type": "start"},
            {"position": [5, 5, 0], "type": "debris", "debris_data": {"id": 11}},
            {"position": [0, 0, 0], "type": "end"}
        ]"#;
        let steps: Vec<PathStep> = serde_json::from_str(json).unwrap();
        assert_eq!(step_title(0, &steps[0]), "Step 0: Start");
        assert_eq!(step_title(1, &steps[1]), "Step 1: Debris 11");
        assert_eq!(step_title(2, &steps[2]), "Step 2: Return");
    }

    #[test]
    fn test_step_colors() {
        assert_eq!(step_color(0, 4), START_COLOR);
        assert_eq!(step_color(1, 4), FEASIBLE_COLOR);
        assert_eq!(step_color(3, 4), END_COLOR);
    }
}
