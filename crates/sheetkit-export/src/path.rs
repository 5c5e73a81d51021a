//! Boundary-to-path conversion.
//!
//! A boundary loop is walked edge by edge into a list of typed path commands,
//! and only that command list is ever serialized to SVG `d` syntax. Keeping
//! the arc-flag arithmetic on typed values makes it testable without string
//! parsing.
//!
//! Flag derivation, in the counter-clockwise-from-+X angle convention the
//! edges use:
//! - `large_arc` is set when the absolute angular span, normalized to
//!   `[0, 2pi)`, exceeds pi.
//! - `sweep` is set when the angular delta is positive (counter-clockwise).
//!
//! Both flags and the arc endpoints come from the same angles, so a rendered
//! arc always bulges to the correct side. Output documents flip the Y axis
//! with a group transform, which mirrors arcs and coordinates together and
//! leaves these flags valid.

use serde::{Deserialize, Serialize};
use std::f64::consts::{PI, TAU};

use sheetkit_model::{polar, BoundaryDefect, BoundaryLoop, Edge, Point};

/// Angular tolerance below which a normalized span counts as a full turn.
const FULL_TURN_TOL: f64 = 1e-9;

/// One command of a vector path.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    /// Circular arc to `end`. `radius` is used for both ellipse axes and the
    /// x-axis rotation is always zero.
    ArcTo {
        radius: f64,
        large_arc: bool,
        sweep: bool,
        end: Point,
    },
    Close,
}

/// Converts one boundary loop into a closed command sequence.
///
/// The first edge contributes the opening move; after the last edge a line
/// back to the loop's start point and a close command are always emitted, so
/// the path stays closed even when the final edge drifts by floating-point
/// error.
pub fn loop_to_commands(outline: &BoundaryLoop) -> Result<Vec<PathCommand>, BoundaryDefect> {
    outline.validate()?;

    let loop_start = outline.edges[0].start_point();
    let mut commands = vec![PathCommand::MoveTo(loop_start)];
    for edge in &outline.edges {
        match edge {
            Edge::Line { end, .. } => commands.push(PathCommand::LineTo(*end)),
            Edge::Arc {
                center,
                radius,
                start_angle,
                end_angle,
            } => push_arc(&mut commands, *center, *radius, *start_angle, *end_angle),
        }
    }
    commands.push(PathCommand::LineTo(loop_start));
    commands.push(PathCommand::Close);
    Ok(commands)
}

fn push_arc(commands: &mut Vec<PathCommand>, center: Point, radius: f64, start: f64, end: f64) {
    let delta = end - start;
    let sweep = delta > 0.0;
    let span = delta.abs() % TAU;

    if span < FULL_TURN_TOL {
        // Start and end coincide on the circle: a full turn. A single arc
        // command between coincident endpoints renders as nothing, so emit
        // two half-circle sweeps through the antipodal point.
        let mid = start + if sweep { PI } else { -PI };
        commands.push(PathCommand::ArcTo {
            radius,
            large_arc: false,
            sweep,
            end: polar(center, radius, mid),
        });
        commands.push(PathCommand::ArcTo {
            radius,
            large_arc: false,
            sweep,
            end: polar(center, radius, end),
        });
    } else {
        commands.push(PathCommand::ArcTo {
            radius,
            large_arc: span > PI,
            sweep,
            end: polar(center, radius, end),
        });
    }
}

/// Returns the commands shifted by `(dx, dy)`.
pub fn translate(commands: &[PathCommand], dx: f64, dy: f64) -> Vec<PathCommand> {
    let shift = |p: Point| Point::new(p.x + dx, p.y + dy);
    commands
        .iter()
        .map(|cmd| match *cmd {
            PathCommand::MoveTo(p) => PathCommand::MoveTo(shift(p)),
            PathCommand::LineTo(p) => PathCommand::LineTo(shift(p)),
            PathCommand::ArcTo {
                radius,
                large_arc,
                sweep,
                end,
            } => PathCommand::ArcTo {
                radius,
                large_arc,
                sweep,
                end: shift(end),
            },
            PathCommand::Close => PathCommand::Close,
        })
        .collect()
}

/// Serializes commands to SVG path data.
pub fn to_svg_path(commands: &[PathCommand]) -> String {
    let mut d = String::new();
    for command in commands {
        match command {
            PathCommand::MoveTo(p) => d.push_str(&format!("M {} {} ", p.x, p.y)),
            PathCommand::LineTo(p) => d.push_str(&format!("L {} {} ", p.x, p.y)),
            PathCommand::ArcTo {
                radius,
                large_arc,
                sweep,
                end,
            } => d.push_str(&format!(
                "A {} {} 0 {} {} {} {} ",
                radius, radius, *large_arc as u8, *sweep as u8, end.x, end.y
            )),
            PathCommand::Close => d.push_str("Z "),
        }
    }
    d.trim_end().to_string()
}
