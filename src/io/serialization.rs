// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Path result serialization and deserialization.
//!
//! This module handles exporting and importing path-planning results in
//! YAML and JSON formats. JSON files use the planner's response shape.

use crate::models::path::PathResult;
use anyhow::{anyhow, Context, Result};
use std::path::Path;

/// Export a path result to YAML format.
pub fn export_yaml(data: &PathResult, path: &Path) -> Result<()> {
    let yaml = serde_yaml::to_string(data)?;
    std::fs::write(path, yaml)?;
    Ok(())
}

/// Export a path result to JSON format.
pub fn export_json(data: &PathResult, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(data)?;
    std::fs::write(path, json)?;
    Ok(())
}

/// Import a path result from YAML format.
pub fn import_yaml(path: &Path) -> Result<PathResult> {
    let yaml = std::fs::read_to_string(path)?;
    let data = serde_yaml::from_str(&yaml)?;
    Ok(data)
}

/// Import a path result from JSON format.
pub fn import_json(path: &Path) -> Result<PathResult> {
    let json = std::fs::read_to_string(path)?;
    let data = serde_json::from_str(&json)?;
    Ok(data)
}

fn extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|s| s.to_str())
        .map(str::to_ascii_lowercase)
}

/// Import a path result, picking the format from the file extension.
pub fn import_path_result(path: &Path) -> Result<PathResult> {
    let result = match extension(path).as_deref() {
        Some("yaml") | Some("yml") => import_yaml(path),
        Some("json") => import_json(path),
        other => return Err(anyhow!("Unsupported file extension: {:?}", other)),
    };
    result.with_context(|| format!("Failed to import {}", path.display()))
}

/// Export a path result, picking the format from the file extension.
pub fn export_path_result(data: &PathResult, path: &Path) -> Result<()> {
    let result = match extension(path).as_deref() {
        Some("yaml") | Some("yml") => export_yaml(data, path),
        Some("json") => export_json(data, path),
        other => return Err(anyhow!("Unsupported file extension: {:?}", other)),
    };
    result.with_context(|| format!("Failed to export {}", path.display()))
}
