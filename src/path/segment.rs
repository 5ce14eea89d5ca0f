use geo_types::Point;
use serde::{Deserialize, Serialize};

pub use crate::geometry::curve::CurveConfig;
use crate::geometry::curve::control_points;

/// How the `at` point of a shape builder relates to the shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Align {
    #[default]
    TopLeft,
    Center,
}

/// Caller-facing arc options. Missing radii are filled in from the displacement
/// between the previous point and the arc's end when the arc is appended.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ArcOptions {
    pub radius_x: Option<f64>,
    pub radius_y: Option<f64>,
    /// Degrees, as SVG expects.
    pub x_axis_rotation: f64,
    pub large_arc: bool,
}

/// Fully resolved arc parameters, as stored on a segment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArcConfig {
    pub radius_x: f64,
    pub radius_y: f64,
    pub x_axis_rotation: f64,
    pub large_arc: bool,
}

/// One drawing instruction. Segments never hold their start point; it is the
/// end point of whatever precedes them in the path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Segment {
    Move { to: Point<f64> },
    Line { to: Point<f64> },
    Curve { to: Point<f64>, config: CurveConfig },
    Arc { to: Point<f64>, config: ArcConfig },
    Close,
}

impl Segment {
    /// End point, if the segment has one.
    pub fn to(&self) -> Option<Point<f64>> {
        match self {
            Segment::Move { to }
            | Segment::Line { to }
            | Segment::Curve { to, .. }
            | Segment::Arc { to, .. } => Some(*to),
            Segment::Close => None,
        }
    }

    /// Same segment with a new end point. `Close` is returned unchanged.
    pub fn with_to(self, point: Point<f64>) -> Segment {
        match self {
            Segment::Move { .. } => Segment::Move { to: point },
            Segment::Line { .. } => Segment::Line { to: point },
            Segment::Curve { config, .. } => Segment::Curve { to: point, config },
            Segment::Arc { config, .. } => Segment::Arc { to: point, config },
            Segment::Close => Segment::Close,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Segment::Move { .. } => "move",
            Segment::Line { .. } => "line",
            Segment::Curve { .. } => "curve",
            Segment::Arc { .. } => "arc",
            Segment::Close => "close",
        }
    }

    /// SVG path command, given the point the pen is at before this segment.
    pub(crate) fn command(&self, previous: Point<f64>) -> String {
        match self {
            Segment::Move { to } => format!("M {} {}", to.x(), to.y()),
            Segment::Line { to } => format!("L {} {}", to.x(), to.y()),
            Segment::Curve { to, config } => {
                let cp = control_points(previous, *to, config);
                format!(
                    "C {} {} {} {} {} {}",
                    cp.first.x(),
                    cp.first.y(),
                    cp.second.x(),
                    cp.second.y(),
                    to.x(),
                    to.y()
                )
            }
            // The sweep flag is always 1, whatever large_arc says.
            Segment::Arc { to, config } => format!(
                "A {} {} {} {} 1 {} {}",
                config.radius_x,
                config.radius_y,
                config.x_axis_rotation,
                u8::from(config.large_arc),
                to.x(),
                to.y()
            ),
            Segment::Close => "Z".to_string(),
        }
    }
}
