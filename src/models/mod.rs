// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Data model: path results from the planner and the canvas view state.

pub mod path;
pub mod view;
