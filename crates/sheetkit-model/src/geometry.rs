//! Planar boundary geometry: points, line/arc edges, and closed loops.
//!
//! Angles are in radians, measured counter-clockwise from the +X axis. All
//! lengths are millimetres.

use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

use crate::error::BoundaryDefect;

/// Tolerance for edge contiguity and loop closure checks, in mm.
///
/// Boundaries come out of a B-rep kernel, so endpoints of consecutive edges
/// can drift by floating-point error; anything beyond this is a real gap.
pub const BOUNDARY_TOL: f64 = 1e-4;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Point on the circle `(center, radius)` at the given angle.
pub fn polar(center: Point, radius: f64, angle: f64) -> Point {
    Point::new(
        center.x + radius * angle.cos(),
        center.y + radius * angle.sin(),
    )
}

/// Axis-aligned rectangle given by its lower-left corner and size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }
}

/// One edge of a planar boundary contour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Edge {
    Line {
        start: Point,
        end: Point,
    },
    /// Circular arc from `start_angle` to `end_angle` around `center`.
    /// A delta greater than zero runs counter-clockwise.
    Arc {
        center: Point,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
    },
}

impl Edge {
    /// The point where traversal of this edge begins.
    pub fn start_point(&self) -> Point {
        match self {
            Edge::Line { start, .. } => *start,
            Edge::Arc {
                center,
                radius,
                start_angle,
                ..
            } => polar(*center, *radius, *start_angle),
        }
    }

    /// The point where traversal of this edge ends.
    pub fn end_point(&self) -> Point {
        match self {
            Edge::Line { end, .. } => *end,
            Edge::Arc {
                center,
                radius,
                end_angle,
                ..
            } => polar(*center, *radius, *end_angle),
        }
    }
}

/// An ordered, closed sequence of edges describing one planar contour:
/// a part's outer profile or an interior hole.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoundaryLoop {
    pub edges: Vec<Edge>,
}

impl BoundaryLoop {
    pub fn new(edges: Vec<Edge>) -> Self {
        Self { edges }
    }

    /// Axis-aligned rectangular loop, counter-clockwise from the lower-left
    /// corner.
    pub fn rectangle(x: f64, y: f64, width: f64, height: f64) -> Self {
        let p0 = Point::new(x, y);
        let p1 = Point::new(x + width, y);
        let p2 = Point::new(x + width, y + height);
        let p3 = Point::new(x, y + height);
        Self::new(vec![
            Edge::Line { start: p0, end: p1 },
            Edge::Line { start: p1, end: p2 },
            Edge::Line { start: p2, end: p3 },
            Edge::Line { start: p3, end: p0 },
        ])
    }

    /// Full circle as a single counter-clockwise arc edge.
    pub fn circle(center: Point, radius: f64) -> Self {
        Self::new(vec![Edge::Arc {
            center,
            radius,
            start_angle: 0.0,
            end_angle: TAU,
        }])
    }

    /// Checks that the loop is usable as a cut contour: non-empty, each edge
    /// contiguous with the next within [`BOUNDARY_TOL`], closed, and with
    /// well-formed arc parameters.
    pub fn validate(&self) -> Result<(), BoundaryDefect> {
        if self.edges.is_empty() {
            return Err(BoundaryDefect::Empty);
        }
        for (index, edge) in self.edges.iter().enumerate() {
            if let Edge::Arc {
                radius,
                start_angle,
                end_angle,
                ..
            } = edge
            {
                if *radius <= 0.0 {
                    return Err(BoundaryDefect::NonPositiveRadius {
                        index,
                        radius: *radius,
                    });
                }
                if start_angle == end_angle {
                    return Err(BoundaryDefect::DegenerateArc { index });
                }
            }
            let next = &self.edges[(index + 1) % self.edges.len()];
            let gap = edge.end_point().distance_to(&next.start_point());
            if gap > BOUNDARY_TOL {
                if index + 1 == self.edges.len() {
                    return Err(BoundaryDefect::Open { gap });
                }
                return Err(BoundaryDefect::Discontinuous { index, gap });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_point_distance() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert_eq!(a.distance_to(&b), 5.0);
    }

    #[test]
    fn test_arc_endpoints() {
        let arc = Edge::Arc {
            center: Point::new(0.0, 0.0),
            radius: 10.0,
            start_angle: 0.0,
            end_angle: PI / 2.0,
        };
        let start = arc.start_point();
        assert!((start.x - 10.0).abs() < 1e-9);
        assert!(start.y.abs() < 1e-9);
        let end = arc.end_point();
        assert!(end.x.abs() < 1e-9);
        assert!((end.y - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_rectangle_loop_is_valid() {
        let outline = BoundaryLoop::rectangle(0.0, 0.0, 50.0, 30.0);
        assert_eq!(outline.edges.len(), 4);
        assert!(outline.validate().is_ok());
    }

    #[test]
    fn test_circle_loop_is_valid() {
        let outline = BoundaryLoop::circle(Point::new(5.0, 5.0), 2.5);
        assert!(outline.validate().is_ok());
    }

    #[test]
    fn test_empty_loop_rejected() {
        let outline = BoundaryLoop::new(vec![]);
        assert_eq!(outline.validate(), Err(BoundaryDefect::Empty));
    }

    #[test]
    fn test_discontinuous_loop_rejected() {
        let outline = BoundaryLoop::new(vec![
            Edge::Line {
                start: Point::new(0.0, 0.0),
                end: Point::new(10.0, 0.0),
            },
            Edge::Line {
                start: Point::new(10.0, 1.0),
                end: Point::new(0.0, 0.0),
            },
        ]);
        assert!(matches!(
            outline.validate(),
            Err(BoundaryDefect::Discontinuous { index: 0, .. })
        ));
    }

    #[test]
    fn test_open_loop_rejected() {
        let outline = BoundaryLoop::new(vec![
            Edge::Line {
                start: Point::new(0.0, 0.0),
                end: Point::new(10.0, 0.0),
            },
            Edge::Line {
                start: Point::new(10.0, 0.0),
                end: Point::new(10.0, 10.0),
            },
        ]);
        assert!(matches!(
            outline.validate(),
            Err(BoundaryDefect::Open { .. })
        ));
    }

    #[test]
    fn test_bad_arc_rejected() {
        let outline = BoundaryLoop::new(vec![Edge::Arc {
            center: Point::new(0.0, 0.0),
            radius: -1.0,
            start_angle: 0.0,
            end_angle: PI,
        }]);
        assert!(matches!(
            outline.validate(),
            Err(BoundaryDefect::NonPositiveRadius { index: 0, .. })
        ));
    }
}
