// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! I/O operations for path results and background images.

pub mod loader;
pub mod media;
pub mod serialization;
