// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Debris Path Viewer
//!
//! A cross-platform desktop application for inspecting space-debris
//! capture paths produced by a path-planning service, either as an
//! abstract 3D/2D scene or overlaid on the analysed image.
//!
//! Usage: `debris-path-viewer [PATH_RESULT.json|yaml] [IMAGE]`

mod app;
mod io;
mod models;
mod render;
mod ui;
mod util;

use anyhow::Result;
use app::{PathViewerApp, StartupFiles};

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    let startup = StartupFiles::from_args(std::env::args().skip(1));

    // Configure egui options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 720.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("Debris Path Viewer"),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "Debris Path Viewer",
        options,
        Box::new(|_cc| Ok(Box::new(PathViewerApp::new(startup)))),
    )
    .map_err(|e| anyhow::anyhow!("Application error: {}", e))?;

    Ok(())
}
