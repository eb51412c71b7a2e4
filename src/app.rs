// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Main application state and egui App implementation.
//!
//! This module contains the main application structure that implements
//! the eframe::App trait, holding the loaded path result, the background
//! image and the path projector, and wiring them to the UI components.

use crate::io::loader::ImageLoader;
use crate::models::path::PathResult;
use crate::models::view::BackgroundMode;
use crate::render::{ImageStatus, PathProjector};
use crate::ui::{canvas, legend, summary, toolbar};
use std::path::{Path, PathBuf};

/// Files to open when the viewer starts.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StartupFiles {
    pub path_result: Option<PathBuf>,
    pub image: Option<PathBuf>,
}

impl StartupFiles {
    /// Sort command-line arguments into a path result and an image by
    /// extension. Later arguments of the same kind win.
    pub fn from_args<I>(args: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut files = Self::default();
        for arg in args {
            let path = PathBuf::from(arg);
            let ext = path
                .extension()
                .and_then(|e| e.to_str())
                .map(str::to_ascii_lowercase);
            match ext.as_deref() {
                Some("json") | Some("yaml") | Some("yml") => files.path_result = Some(path),
                Some("png") | Some("jpg") | Some("jpeg") | Some("bmp") | Some("tif") | Some("tiff") => {
                    files.image = Some(path)
                }
                _ => log::warn!("Ignoring argument {}", path.display()),
            }
        }
        files
    }
}

/// Main application state.
pub struct PathViewerApp {
    /// Canvas view state and projection
    projector: PathProjector,

    /// Currently loaded path result
    result: Option<PathResult>,

    /// Where the current path result came from
    result_source: Option<String>,

    /// Background image texture for display
    image_texture: Option<egui::TextureHandle>,

    /// Background image state as seen by the renderer
    image_status: ImageStatus,

    /// Image path requested at startup, loaded on the first frame
    startup_image: Option<PathBuf>,

    /// Background image decoding
    image_loader: ImageLoader,
}

impl Default for PathViewerApp {
    fn default() -> Self {
        Self::new(StartupFiles::default())
    }
}

impl PathViewerApp {
    /// Create the viewer, opening any files given on the command line.
    pub fn new(startup: StartupFiles) -> Self {
        let mut app = Self {
            projector: PathProjector::new(),
            result: None,
            result_source: None,
            image_texture: None,
            image_status: ImageStatus::None,
            startup_image: startup.image,
            image_loader: ImageLoader::new(),
        };
        if let Some(path) = startup.path_result {
            app.open_path_result(&path);
        }
        app
    }

    /// Load a path result from a JSON or YAML file.
    fn open_path_result(&mut self, path: &Path) {
        match crate::io::serialization::import_path_result(path) {
            Ok(result) => {
                log::info!(
                    "Loaded path with {} points and {} connections from {}",
                    result.points().len(),
                    result.connections().len(),
                    path.display()
                );
                self.set_result(result, path.display().to_string());
            }
            Err(e) => log::error!("{:#}", e),
        }
    }

    fn set_result(&mut self, result: PathResult, source: String) {
        self.result = Some(result);
        self.result_source = Some(source);
    }

    /// Load the built-in sample plan.
    fn load_demo(&mut self) {
        log::info!("Loaded demo path");
        self.set_result(PathResult::demo(), "demo".to_string());
    }

    /// Export the current path result to a file.
    fn export_path_result(&self, path: PathBuf) {
        if let Some(ref result) = self.result {
            match crate::io::serialization::export_path_result(result, &path) {
                Ok(_) => log::info!("Exported path result to {}", path.display()),
                Err(e) => log::error!("{:#}", e),
            }
        }
    }

    /// Start loading a background image and switch the canvas onto it.
    fn open_image(&mut self, path: PathBuf) {
        let generation = self.image_loader.request(path.clone());
        log::info!("Loading image {} (request {})", path.display(), generation);

        self.image_texture = None;
        self.image_status = ImageStatus::Loading;
        self.projector.clear_image_mapping();
        self.projector.view.background = BackgroundMode::OriginalImage;
    }

    /// Pick up a finished image load, if any.
    fn poll_image(&mut self, ctx: &egui::Context) {
        let Some(result) = self.image_loader.poll() else {
            return;
        };

        match result {
            Ok(loaded) => {
                let color_image = egui::ColorImage::from_rgba_unmultiplied(loaded.size(), &loaded.pixels);
                let texture = ctx.load_texture("background_image", color_image, egui::TextureOptions::LINEAR);

                self.image_texture = Some(texture);
                self.image_status = ImageStatus::Ready {
                    size: egui::vec2(loaded.width as f32, loaded.height as f32),
                };
                log::info!("Background image ready");
            }
            Err(e) => {
                self.image_texture = None;
                self.image_status = ImageStatus::Failed;
                log::error!("Failed to load image: {}", e);
            }
        }
    }

    fn menu_bar(&mut self, ctx: &egui::Context, ui: &mut egui::Ui) {
        egui::menu::bar(ui, |ui| {
            ui.menu_button("File", |ui| {
                if ui.button("Open Path Result...").clicked() {
                    if let Some(path) = rfd::FileDialog::new()
                        .add_filter("Path results", &["json", "yaml", "yml"])
                        .pick_file()
                    {
                        self.open_path_result(&path);
                    }
                    ui.close_menu();
                }
                if ui.button("Open Background Image...").clicked() {
                    if let Some(path) = rfd::FileDialog::new()
                        .add_filter("Images", &["jpg", "jpeg", "png", "bmp", "tiff", "tif"])
                        .pick_file()
                    {
                        self.open_image(path);
                    }
                    ui.close_menu();
                }
                if ui.button("Load Demo Path").clicked() {
                    self.load_demo();
                    ui.close_menu();
                }
                ui.separator();
                ui.add_enabled_ui(self.result.is_some(), |ui| {
                    ui.menu_button("Export Path Result", |ui| {
                        if ui.button("Export as YAML...").clicked() {
                            if let Some(path) = rfd::FileDialog::new()
                                .add_filter("YAML", &["yaml", "yml"])
                                .set_file_name("path.yaml")
                                .save_file()
                            {
                                self.export_path_result(path);
                            }
                            ui.close_menu();
                        }
                        if ui.button("Export as JSON...").clicked() {
                            if let Some(path) = rfd::FileDialog::new()
                                .add_filter("JSON", &["json"])
                                .set_file_name("path.json")
                                .save_file()
                            {
                                self.export_path_result(path);
                            }
                            ui.close_menu();
                        }
                    });
                });
                ui.separator();
                if ui.button("Quit").clicked() {
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });

            ui.menu_button("View", |ui| {
                let view = &mut self.projector.view;
                if ui.button("Toggle 3D / 2D").clicked() {
                    view.toggle_mode();
                    ui.close_menu();
                }
                if ui.button("Toggle On Image").clicked() {
                    view.toggle_background();
                    ui.close_menu();
                }
                ui.separator();
                if ui.button("Zoom In").clicked() {
                    view.zoom_in();
                    ui.close_menu();
                }
                if ui.button("Zoom Out").clicked() {
                    view.zoom_out();
                    ui.close_menu();
                }
                if ui.button("Reset View").clicked() {
                    view.reset();
                    ui.close_menu();
                }
            });
        });
    }
}

impl eframe::App for PathViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if let Some(path) = self.startup_image.take() {
            self.open_image(path);
        }

        // Check for completed image loading
        self.poll_image(ctx);

        // Keep polling while a load is in flight
        if self.image_loader.is_pending() {
            ctx.request_repaint();
        }

        // Top menu bar
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            self.menu_bar(ctx, ui);
        });

        // Legend and path summary (right)
        egui::SidePanel::right("summary_panel")
            .resizable(true)
            .default_width(280.0)
            .show(ctx, |ui| {
                if let Some(source) = &self.result_source {
                    ui.label(egui::RichText::new(source).weak().small());
                    ui.separator();
                }
                legend::show(ui, &self.projector.view);
                ui.separator();
                match &self.result {
                    Some(result) => summary::show(ui, result),
                    None => {
                        ui.label("Open a path result to see its summary");
                    }
                }
            });

        // Main canvas (center)
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("🗺 Path Visualization");
            if toolbar::show(ui, &mut self.projector.view) {
                ctx.request_repaint();
            }
            ui.separator();

            canvas::show(
                ui,
                &mut self.projector,
                self.result.as_ref(),
                self.image_status,
                self.image_texture.as_ref(),
            );
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_startup_files_by_extension() {
        let files = StartupFiles::from_args(args(&["plan.json", "frame.PNG", "notes.txt"]));
        assert_eq!(files.path_result, Some(PathBuf::from("plan.json")));
        assert_eq!(files.image, Some(PathBuf::from("frame.PNG")));
    }

    #[test]
    fn test_startup_files_empty() {
        assert_eq!(StartupFiles::from_args(Vec::new()), StartupFiles::default());
    }

    #[test]
    fn test_missing_startup_result_is_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let app = PathViewerApp::new(StartupFiles {
            path_result: Some(dir.path().join("missing.json")),
            image: None,
        });
        assert!(app.result.is_none());
    }

    #[test]
    fn test_startup_result_is_loaded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plan.yaml");
        crate::io::serialization::export_path_result(&PathResult::demo(), &path).unwrap();

        let app = PathViewerApp::new(StartupFiles {
            path_result: Some(path),
            image: None,
        });
        assert_eq!(app.result, Some(PathResult::demo()));
        assert_eq!(app.image_status, ImageStatus::None);
    }

    #[test]
    fn test_open_image_switches_background() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = PathViewerApp::default();
        app.open_image(dir.path().join("missing.png"));
        assert_eq!(app.image_status, ImageStatus::Loading);
        assert_eq!(app.projector.view.background, BackgroundMode::OriginalImage);
    }
}
