// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Camera and interaction state of the path canvas.
//!
//! All input is funnelled through [`ViewState::handle`], which applies the
//! canvas interaction rules and reports whether anything changed so the
//! caller can request a repaint.

use egui::{Pos2, Vec2};
use std::f32::consts::PI;

pub const MIN_ZOOM: f32 = 0.1;
pub const MAX_ZOOM: f32 = 10.0;

/// Wheel zoom step factors (scroll down, scroll up).
const WHEEL_ZOOM_OUT: f32 = 0.9;
const WHEEL_ZOOM_IN: f32 = 1.1;

/// Toolbar zoom step factors.
const BUTTON_ZOOM_IN: f32 = 1.2;
const BUTTON_ZOOM_OUT: f32 = 0.8;

/// How path points are projected onto the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Projection3D,
    Projection2D,
}

/// What is drawn behind the path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BackgroundMode {
    #[default]
    Abstract,
    OriginalImage,
}

/// Camera rotation in radians.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rotation {
    /// About the horizontal axis.
    pub pitch: f32,
    /// About the vertical axis.
    pub yaw: f32,
}

/// Pointer button as reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Middle,
    Secondary,
}

/// Canvas input, in surface-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    PointerDown { button: PointerButton, modifier: bool, pos: Pos2 },
    PointerMove { pos: Pos2 },
    PointerUp,
    PointerLeave,
    /// Positive `delta_y` scrolls down (zooms out).
    Wheel { delta_y: f32 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    pub mode: ViewMode,
    pub background: BackgroundMode,
    pub rotation: Rotation,
    pub zoom: f32,
    pub pan: Vec2,
    /// Last pointer position while a pan drag is active.
    pan_anchor: Option<Pos2>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewState {
    pub fn new() -> Self {
        Self {
            mode: ViewMode::default(),
            background: BackgroundMode::default(),
            rotation: Rotation::default(),
            zoom: 1.0,
            pan: Vec2::ZERO,
            pan_anchor: None,
        }
    }

    pub fn is_panning(&self) -> bool {
        self.pan_anchor.is_some()
    }

    /// Rotation follows the pointer only over the abstract 3D scene.
    pub fn rotates_with_pointer(&self) -> bool {
        self.mode == ViewMode::Projection3D && self.background == BackgroundMode::Abstract
    }

    /// Apply one input event. Returns `true` when the frame must be redrawn.
    pub fn handle(&mut self, event: InputEvent, surface_size: Vec2) -> bool {
        match event {
            InputEvent::PointerDown { button, modifier, pos } => {
                let starts_pan = button == PointerButton::Middle
                    || (button == PointerButton::Primary && modifier);
                if starts_pan {
                    self.pan_anchor = Some(pos);
                }
                starts_pan
            }
            InputEvent::PointerMove { pos } => {
                if let Some(anchor) = self.pan_anchor {
                    self.pan_by(pos - anchor);
                    self.pan_anchor = Some(pos);
                    true
                } else if self.rotates_with_pointer() {
                    self.rotate_to(pos, surface_size)
                } else {
                    false
                }
            }
            InputEvent::PointerUp | InputEvent::PointerLeave => {
                self.pan_anchor.take().is_some()
            }
            InputEvent::Wheel { delta_y } => {
                let factor = if delta_y > 0.0 { WHEEL_ZOOM_OUT } else { WHEEL_ZOOM_IN };
                self.zoom_by(factor);
                true
            }
        }
    }

    pub fn pan_by(&mut self, delta: Vec2) {
        self.pan += delta;
    }

    /// Absolute rotation derived from the pointer position on the surface.
    fn rotate_to(&mut self, pos: Pos2, surface_size: Vec2) -> bool {
        if surface_size.x <= 0.0 || surface_size.y <= 0.0 {
            return false;
        }
        let x = pos.x / surface_size.x;
        let y = pos.y / surface_size.y;
        self.rotation = Rotation {
            pitch: (y - 0.5) * PI,
            yaw: (x - 0.5) * PI,
        };
        true
    }

    pub fn zoom_by(&mut self, factor: f32) {
        self.zoom = (self.zoom * factor).clamp(MIN_ZOOM, MAX_ZOOM);
    }

    pub fn zoom_in(&mut self) {
        self.zoom_by(BUTTON_ZOOM_IN);
    }

    pub fn zoom_out(&mut self) {
        self.zoom_by(BUTTON_ZOOM_OUT);
    }

    /// Restore the camera. Mode and background are left alone.
    pub fn reset(&mut self) {
        self.zoom = 1.0;
        self.pan = Vec2::ZERO;
        self.rotation = Rotation::default();
    }

    pub fn set_mode(&mut self, mode: ViewMode) {
        self.mode = mode;
    }

    pub fn toggle_mode(&mut self) {
        self.mode = match self.mode {
            ViewMode::Projection3D => ViewMode::Projection2D,
            ViewMode::Projection2D => ViewMode::Projection3D,
        };
    }

    pub fn toggle_background(&mut self) {
        self.background = match self.background {
            BackgroundMode::Abstract => BackgroundMode::OriginalImage,
            BackgroundMode::OriginalImage => BackgroundMode::Abstract,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SURFACE: Vec2 = Vec2::new(800.0, 400.0);

    #[test]
    fn test_middle_button_pans() {
        let mut view = ViewState::new();
        let down = InputEvent::PointerDown {
            button: PointerButton::Middle,
            modifier: false,
            pos: Pos2::new(100.0, 100.0),
        };
        assert!(view.handle(down, SURFACE));
        assert!(view.is_panning());

        view.handle(InputEvent::PointerMove { pos: Pos2::new(130.0, 90.0) }, SURFACE);
        view.handle(InputEvent::PointerMove { pos: Pos2::new(140.0, 95.0) }, SURFACE);
        assert_eq!(view.pan, Vec2::new(40.0, -5.0));

        assert!(view.handle(InputEvent::PointerUp, SURFACE));
        assert!(!view.is_panning());
    }

    #[test]
    fn test_ctrl_left_pans_plain_left_does_not() {
        let mut view = ViewState::new();
        let plain = InputEvent::PointerDown {
            button: PointerButton::Primary,
            modifier: false,
            pos: Pos2::ZERO,
        };
        assert!(!view.handle(plain, SURFACE));
        assert!(!view.is_panning());

        let with_ctrl = InputEvent::PointerDown {
            button: PointerButton::Primary,
            modifier: true,
            pos: Pos2::ZERO,
        };
        assert!(view.handle(with_ctrl, SURFACE));
        assert!(view.is_panning());

        view.handle(InputEvent::PointerLeave, SURFACE);
        assert!(!view.is_panning());
    }

    #[test]
    fn test_panning_does_not_rotate() {
        let mut view = ViewState::new();
        view.handle(
            InputEvent::PointerDown {
                button: PointerButton::Middle,
                modifier: false,
                pos: Pos2::ZERO,
            },
            SURFACE,
        );
        view.handle(InputEvent::PointerMove { pos: Pos2::new(700.0, 300.0) }, SURFACE);
        assert_eq!(view.rotation, Rotation::default());
    }

    #[test]
    fn test_pointer_move_sets_absolute_rotation() {
        let mut view = ViewState::new();
        view.handle(InputEvent::PointerMove { pos: Pos2::new(800.0, 0.0) }, SURFACE);
        assert!((view.rotation.yaw - PI / 2.0).abs() < 1e-6);
        assert!((view.rotation.pitch + PI / 2.0).abs() < 1e-6);

        // Same position again gives the same rotation, not an accumulated one
        view.handle(InputEvent::PointerMove { pos: Pos2::new(800.0, 0.0) }, SURFACE);
        assert!((view.rotation.yaw - PI / 2.0).abs() < 1e-6);

        view.handle(InputEvent::PointerMove { pos: Pos2::new(400.0, 200.0) }, SURFACE);
        assert_eq!(view.rotation, Rotation::default());
    }

    #[test]
    fn test_no_rotation_in_2d_or_on_image() {
        let mut view = ViewState::new();
        view.set_mode(ViewMode::Projection2D);
        assert!(!view.handle(InputEvent::PointerMove { pos: Pos2::new(10.0, 10.0) }, SURFACE));

        let mut view = ViewState::new();
        view.toggle_background();
        assert!(!view.handle(InputEvent::PointerMove { pos: Pos2::new(10.0, 10.0) }, SURFACE));
        assert_eq!(view.rotation, Rotation::default());
    }

    #[test]
    fn test_wheel_zoom_clamps() {
        let mut view = ViewState::new();
        view.handle(InputEvent::Wheel { delta_y: 1.0 }, SURFACE);
        assert!((view.zoom - 0.9).abs() < 1e-6);
        view.handle(InputEvent::Wheel { delta_y: -1.0 }, SURFACE);
        assert!((view.zoom - 0.99).abs() < 1e-6);

        for _ in 0..100 {
            view.handle(InputEvent::Wheel { delta_y: -3.0 }, SURFACE);
        }
        assert_eq!(view.zoom, MAX_ZOOM);

        for _ in 0..100 {
            view.handle(InputEvent::Wheel { delta_y: 3.0 }, SURFACE);
        }
        assert_eq!(view.zoom, MIN_ZOOM);
    }

    #[test]
    fn test_zoom_buttons_clamp() {
        let mut view = ViewState::new();
        view.zoom_in();
        assert!((view.zoom - 1.2).abs() < 1e-6);
        view.zoom_out();
        assert!((view.zoom - 0.96).abs() < 1e-6);

        view.zoom = 9.5;
        view.zoom_in();
        assert_eq!(view.zoom, MAX_ZOOM);
        view.zoom = 0.11;
        view.zoom_out();
        assert_eq!(view.zoom, MIN_ZOOM);
    }

    #[test]
    fn test_reset_keeps_modes() {
        let mut view = ViewState::new();
        view.toggle_mode();
        view.toggle_background();
        view.zoom = 3.0;
        view.pan = Vec2::new(5.0, 6.0);
        view.rotation = Rotation { pitch: 0.3, yaw: -0.2 };

        view.reset();
        assert_eq!(view.zoom, 1.0);
        assert_eq!(view.pan, Vec2::ZERO);
        assert_eq!(view.rotation, Rotation::default());
        assert_eq!(view.mode, ViewMode::Projection2D);
        assert_eq!(view.background, BackgroundMode::OriginalImage);
    }

    #[test]
    fn test_toggles_do_not_reset_camera() {
        let mut view = ViewState::new();
        view.zoom = 2.0;
        view.pan = Vec2::new(1.0, 1.0);
        view.toggle_mode();
        view.toggle_background();
        assert_eq!(view.zoom, 2.0);
        assert_eq!(view.pan, Vec2::new(1.0, 1.0));
    }
}
