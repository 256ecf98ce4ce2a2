//! Projection of track progress onto a drawn 2D path.
//!
//! Paths are polylines in percentage coordinates (0-100 on both axes) drawn
//! over the map by the arbiter. They are purely visual: nothing in the
//! simulation ever reads them.

use serde::{Deserialize, Serialize};

use super::locations::GOAL_PROGRESS;

/// A point in percentage coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal position, 0 (left) to 100 (right).
    pub x: f64,
    /// Vertical position, 0 (top) to 100 (bottom).
    pub y: f64,
}

impl Point {
    /// Creates a point.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Where along a path a projected point falls.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathPosition {
    /// Index of the segment's starting point.
    pub segment: usize,
    /// Fraction of the way along that segment, in `[0, 1]`.
    pub ratio: f64,
}

/// Euclidean distance between two points.
#[must_use]
pub fn distance(a: Point, b: Point) -> f64 {
    (a.x - b.x).hypot(a.y - b.y)
}

/// Total arc length of a polyline; zero for fewer than two points.
#[must_use]
pub fn path_length(path: &[Point]) -> f64 {
    path.windows(2).map(|pair| distance(pair[0], pair[1])).sum()
}

/// Converts progress into a completion percentage in `[0, 100]`.
#[must_use]
pub fn progress_percentage(progress: f64) -> f64 {
    if progress.is_nan() {
        return 0.0;
    }
    (progress / f64::from(GOAL_PROGRESS)).clamp(0.0, 1.0) * 100.0
}

/// Locates the segment and in-segment ratio for `progress` along `path`.
///
/// Returns `None` when the path has fewer than two points or zero total
/// length.
#[must_use]
pub fn locate(progress: f64, path: &[Point]) -> Option<PathPosition> {
    if path.len() < 2 {
        return None;
    }
    let total = path_length(path);
    if total <= 0.0 {
        return None;
    }

    let target = progress_percentage(progress) / 100.0 * total;
    let mut walked = 0.0;
    for (segment, pair) in path.windows(2).enumerate() {
        let length = distance(pair[0], pair[1]);
        if walked + length >= target {
            let ratio = if length > 0.0 {
                ((target - walked) / length).clamp(0.0, 1.0)
            } else {
                0.0
            };
            return Some(PathPosition { segment, ratio });
        }
        walked += length;
    }

    // Rounding left the target just past the end.
    Some(PathPosition {
        segment: path.len() - 2,
        ratio: 1.0,
    })
}

/// Projects `progress` onto `path`.
///
/// Without a usable path (missing or fewer than two points) the marker runs
/// along the horizontal midline: `(percentage, 50)`. A path of zero total
/// length pins the marker to its first point.
#[must_use]
pub fn project(progress: f64, path: Option<&[Point]>) -> Point {
    let percentage = progress_percentage(progress);
    let Some(path) = path.filter(|p| p.len() >= 2) else {
        return Point::new(percentage, 50.0);
    };

    match locate(progress, path) {
        Some(PathPosition { segment, ratio }) => {
            let (a, b) = (path[segment], path[segment + 1]);
            Point::new(a.x + (b.x - a.x) * ratio, a.y + (b.y - a.y) * ratio)
        }
        None => path[0],
    }
}
