// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Path result data structures.
//!
//! These mirror the JSON returned by the path-planning service. Every
//! collection defaults to empty so that partially filled documents still
//! load; the projector decides what to do with what is missing.

use serde::{Deserialize, Serialize};

/// A point of the capture path. `z` is 0 for points in image-pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<f64>", into = "[f64; 3]")]
pub struct PathPoint {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl PathPoint {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

impl From<Vec<f64>> for PathPoint {
    fn from(coords: Vec<f64>) -> Self {
        let at = |i: usize| coords.get(i).copied().unwrap_or(0.0);
        Self::new(at(0), at(1), at(2))
    }
}

impl From<PathPoint> for [f64; 3] {
    fn from(p: PathPoint) -> Self {
        [p.x, p.y, p.z]
    }
}

/// A directed edge between two points, by index. Indices that are not
/// non-negative integers load as `usize::MAX`, so the edge is never within
/// any point list and gets skipped instead of failing the whole document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<serde_json::Value>", into = "[usize; 2]")]
pub struct Connection {
    pub from: usize,
    pub to: usize,
}

impl Connection {
    pub fn new(from: usize, to: usize) -> Self {
        Self { from, to }
    }

    /// Both endpoints index into a point list of length `len`.
    pub fn is_within(&self, len: usize) -> bool {
        self.from < len && self.to < len
    }
}

impl From<Vec<serde_json::Value>> for Connection {
    fn from(ends: Vec<serde_json::Value>) -> Self {
        let at = |i: usize| {
            ends.get(i)
                .and_then(serde_json::Value::as_u64)
                .and_then(|n| usize::try_from(n).ok())
                .unwrap_or(usize::MAX)
        };
        Self::new(at(0), at(1))
    }
}

impl From<Connection> for [usize; 2] {
    fn from(c: Connection) -> Self {
        [c.from, c.to]
    }
}

/// Per-target metadata, aligned to `points[1..]`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PointMetadata {
    #[serde(default)]
    pub feasible: bool,
    #[serde(default)]
    pub size: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub debris_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub material: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<f64>,
}

/// Geometry of the path as drawn by the viewer.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PathVisualization {
    #[serde(default)]
    pub points: Vec<PathPoint>,
    #[serde(default)]
    pub connections: Vec<Connection>,
    #[serde(default)]
    pub metadata: Vec<PointMetadata>,
}

/// Mission totals reported by the planner (metres, seconds, kilograms).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PathMetrics {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_distance: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_time: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_fuel: Option<f64>,
}

/// One entry of the planner's step list.
///
/// Two shapes are accepted: `{step, debris_id, distance_from_previous}` and
/// the planner's raw `{position, type, debris_data}` entries.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PathStep {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub step: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub debris_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance_from_previous: Option<f64>,
    /// `start`, `debris` or `end`.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<PathPoint>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub debris_data: Option<StepDebris>,
}

/// The debris object a raw planner step visits. Other fields are ignored.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StepDebris {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
}

impl PathStep {
    /// Step number, falling back to the entry's position in the list.
    pub fn number(&self, index: usize) -> u32 {
        self.step.unwrap_or(index as u32)
    }

    /// Id of the visited debris object, from either step shape.
    pub fn target_id(&self) -> Option<u64> {
        self.debris_id
            .or_else(|| self.debris_data.as_ref().and_then(|d| d.id))
    }

    pub fn is_end(&self) -> bool {
        self.kind.as_deref() == Some("end")
    }
}

/// Summary of the image analysis the path was planned from.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AnalysisMetadata {
    /// Original image size as `[rows, cols]`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_size: Option<[u32; 2]>,
    #[serde(default)]
    pub total_objects: u32,
    #[serde(default)]
    pub feasible_objects: u32,
}

impl AnalysisMetadata {
    /// Original image size as `(width, height)`.
    pub fn image_dimensions(&self) -> Option<(u32, u32)> {
        self.image_size.map(|[rows, cols]| (cols, rows))
    }
}

/// Complete path-planning result as loaded from disk.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PathResult {
    #[serde(default)]
    pub visualization: PathVisualization,
    #[serde(default)]
    pub path_length: u32,
    #[serde(default)]
    pub metrics: PathMetrics,
    #[serde(default)]
    pub path: Vec<PathStep>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analysis: Option<AnalysisMetadata>,
}

impl PathResult {
    pub fn points(&self) -> &[PathPoint] {
        &self.visualization.points
    }

    pub fn connections(&self) -> &[Connection] {
        &self.visualization.connections
    }

    /// Metadata for the point at `index`. The start point never has any.
    pub fn metadata_for(&self, index: usize) -> Option<&PointMetadata> {
        index
            .checked_sub(1)
            .and_then(|i| self.visualization.metadata.get(i))
    }

    pub fn is_empty(&self) -> bool {
        self.visualization.points.is_empty()
    }

    /// The sample plan the dashboard shows when no service is reachable:
    /// start at the origin, visit three debris objects, return to start.
    pub fn demo() -> Self {
        let start = PathPoint::new(0.0, 0.0, 0.0);
        let debris = [
            (1, PathPoint::new(100.0, 150.0, 0.0), 2.5, "aluminum", 0.9),
            (2, PathPoint::new(300.0, 200.0, 0.0), 1.8, "steel", 0.7),
            (3, PathPoint::new(450.0, 120.0, 0.0), 3.2, "titanium", 0.95),
        ];

        let mut points = vec![start];
        points.extend(debris.iter().map(|d| d.1));
        points.push(start);

        let connections = (0..=debris.len()).map(|i| Connection::new(i, i + 1)).collect();

        let metadata = debris
            .iter()
            .map(|&(id, _, size, material, priority)| PointMetadata {
                feasible: true,
                size,
                debris_id: Some(id),
                material: Some(material.to_string()),
                priority: Some(priority),
            })
            .collect();

        let mut path = vec![PathStep { step: Some(0), ..Default::default() }];
        let mut previous = start;
        for (i, &(id, position, ..)) in debris.iter().enumerate() {
            let dx = position.x - previous.x;
            let dy = position.y - previous.y;
            path.push(PathStep {
                step: Some(i as u32 + 1),
                debris_id: Some(id),
                distance_from_previous: Some((dx * dx + dy * dy).sqrt()),
                ..Default::default()
            });
            previous = position;
        }

        Self {
            visualization: PathVisualization { points, connections, metadata },
            path_length: path.len() as u32,
            metrics: PathMetrics {
                total_distance: Some(450.5),
                total_time: Some(12.3),
                total_fuel: Some(85.2),
            },
            path,
            analysis: Some(AnalysisMetadata {
                image_size: Some([600, 800]),
                total_objects: 3,
                feasible_objects: 3,
            }),
        }
    }
}
