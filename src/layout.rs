//! Node layout utilities.
//!
//! Pure functions producing normalized node coordinates for the graph
//! algorithms. Positions live in the unit square: each component is in
//! `[0, 1]`, index-aligned with the adjacency list they accompany.

use serde::{Deserialize, Serialize};

/// A normalized 2-D coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    /// Horizontal component in `[0, 1]`.
    pub x: f64,
    /// Vertical component in `[0, 1]`.
    pub y: f64,
}

impl Position {
    /// Create a position.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another position.
    #[must_use]
    pub fn distance_to(&self, other: Self) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx.hypot(dy)
    }
}

/// Arrange `node_count` positions evenly on a circle.
#[must_use]
pub fn circle_layout(node_count: usize, center: Position, radius: f64) -> Vec<Position> {
    let mut positions = Vec::with_capacity(node_count);
    if node_count == 0 {
        return positions;
    }
    let angle_step = 2.0 * std::f64::consts::PI / node_count as f64;

    for i in 0..node_count {
        let angle = i as f64 * angle_step;
        positions.push(Position::new(
            radius.mul_add(angle.cos(), center.x),
            radius.mul_add(angle.sin(), center.y),
        ));
    }
    positions
}

/// Arrange positions on two concentric circles centered at (0.5, 0.5).
///
/// The outer ring takes `ceil(node_count / 2)` nodes; the remainder go on
/// the inner ring, phase-offset by half an inner slot so the rings don't
/// line up radially.
#[must_use]
pub fn concentric_layout(node_count: usize, outer_radius: f64, inner_radius: f64) -> Vec<Position> {
    let mut positions = Vec::with_capacity(node_count);
    let outer_count = node_count.div_ceil(2);
    let inner_count = node_count - outer_count;

    let center = Position::new(0.5, 0.5);

    for i in 0..outer_count {
        let angle = 2.0 * std::f64::consts::PI * i as f64 / outer_count as f64;
        positions.push(Position::new(
            outer_radius.mul_add(angle.cos(), center.x),
            outer_radius.mul_add(angle.sin(), center.y),
        ));
    }

    for i in 0..inner_count {
        let angle = 2.0 * std::f64::consts::PI * i as f64 / inner_count as f64
            + std::f64::consts::PI / inner_count as f64;
        positions.push(Position::new(
            inner_radius.mul_add(angle.cos(), center.x),
            inner_radius.mul_add(angle.sin(), center.y),
        ));
    }

    positions
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_distance_to() {
        let a = Position::new(0.0, 0.0);
        let b = Position::new(3.0, 4.0);
        assert!((a.distance_to(b) - 5.0).abs() < EPS);
        assert!(a.distance_to(a).abs() < EPS);
    }

    #[test]
    fn test_circle_layout_count() {
        let positions = circle_layout(8, Position::new(0.5, 0.5), 0.45);
        assert_eq!(positions.len(), 8);
    }

    #[test]
    fn test_circle_layout_empty() {
        assert!(circle_layout(0, Position::new(0.5, 0.5), 0.45).is_empty());
    }

    /// All points lie exactly on the circle.
    #[test]
    fn test_circle_layout_radius() {
        let center = Position::new(0.5, 0.5);
        for p in circle_layout(10, center, 0.4) {
            assert!((p.distance_to(center) - 0.4).abs() < EPS);
        }
    }

    /// First node sits at angle 0: (cx + r, cy).
    #[test]
    fn test_circle_layout_first_node() {
        let positions = circle_layout(4, Position::new(0.5, 0.5), 0.4);
        assert!((positions[0].x - 0.9).abs() < EPS);
        assert!((positions[0].y - 0.5).abs() < EPS);
    }

    #[test]
    fn test_concentric_layout_split() {
        // 7 nodes: 4 outer, 3 inner
        let center = Position::new(0.5, 0.5);
        let positions = concentric_layout(7, 0.45, 0.25);
        assert_eq!(positions.len(), 7);
        for p in &positions[..4] {
            assert!((p.distance_to(center) - 0.45).abs() < EPS);
        }
        for p in &positions[4..] {
            assert!((p.distance_to(center) - 0.25).abs() < EPS);
        }
    }

    #[test]
    fn test_concentric_layout_even_split() {
        let center = Position::new(0.5, 0.5);
        let positions = concentric_layout(10, 0.5, 0.3);
        assert_eq!(positions.len(), 10);
        let outer = positions
            .iter()
            .filter(|p| (p.distance_to(center) - 0.5).abs() < EPS)
            .count();
        assert_eq!(outer, 5);
    }

    #[test]
    fn test_concentric_layout_single_node() {
        let positions = concentric_layout(1, 0.45, 0.25);
        assert_eq!(positions.len(), 1);
    }

    #[test]
    fn test_concentric_layout_empty() {
        assert!(concentric_layout(0, 0.45, 0.25).is_empty());
    }
}
