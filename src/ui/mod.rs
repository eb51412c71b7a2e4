// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! UI components of the path viewer.

pub mod canvas;
pub mod legend;
pub mod summary;
pub mod toolbar;
