use std::f64::consts::FRAC_PI_2;

use geo_types::Point;
use serde::{Deserialize, Serialize};

use super::{midpoint, Vector2};

/// Declarative description of a cubic curve between two points. Every knob is
/// independent:
///
/// * `curve_size` scales how far the curve bulges, relative to the chord length.
/// * `polarity` picks the side of the chord the bulge sits on (`1` or `-1`).
/// * `bulbousness` spreads the two control points apart, fattening the shoulders.
/// * `curve_angle` (radians) swings the bulge away from perpendicular.
/// * `twist` (radians) rotates the control point spread independently of the bulge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurveConfig {
    pub curve_size: f64,
    #[serde(alias = "polarlity")]
    pub polarity: f64,
    pub bulbousness: f64,
    pub curve_angle: f64,
    pub twist: f64,
}

impl Default for CurveConfig {
    fn default() -> Self {
        Self {
            curve_size: 1.0,
            polarity: 1.0,
            bulbousness: 1.0,
            curve_angle: 0.0,
            twist: 0.0,
        }
    }
}

/// The two Bézier control points for a cubic ending at `to`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlPoints {
    pub first: Point<f64>,
    pub second: Point<f64>,
}

/// Solve the control points of the curve from `from` to `to`.
///
/// Coincident endpoints give NaN control points rather than an error.
pub fn control_points(from: Point<f64>, to: Point<f64>, config: &CurveConfig) -> ControlPoints {
    let chord = to - from;
    let length = chord.magnitude();
    let mid = midpoint(from, to);

    let perpendicular = chord.rotate(-FRAC_PI_2).normalise();
    let bulge_direction = perpendicular.rotate(config.curve_angle);
    let bulge = mid + bulge_direction * (config.curve_size * config.polarity * length / 2.0);

    let spread_direction = bulge_direction
        .rotate(-FRAC_PI_2 - config.twist)
        .normalise();
    let spread = spread_direction * (config.bulbousness * length / 2.0);

    ControlPoints {
        first: bulge + spread,
        second: bulge - spread,
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn solve(config: CurveConfig) -> ControlPoints {
        control_points(Point::new(0.0, 0.0), Point::new(1.0, 0.0), &config)
    }

    fn close(a: Point<f64>, b: Point<f64>) -> bool {
        a.distance(&b) < 1e-9
    }

    #[test]
    fn test_default_curve_is_symmetric() {
        let cp = solve(CurveConfig::default());
        assert!(close(cp.first, Point::new(0.0, -0.5)));
        assert!(close(cp.second, Point::new(1.0, -0.5)));
    }

    #[test]
    fn test_polarity_flips_side() {
        let cp = solve(CurveConfig {
            polarity: -1.0,
            ..Default::default()
        });
        assert!(close(cp.first, Point::new(0.0, 0.5)));
        assert!(close(cp.second, Point::new(1.0, 0.5)));
    }

    #[test]
    fn test_zero_bulbousness_collapses_controls() {
        let cp = solve(CurveConfig {
            bulbousness: 0.0,
            ..Default::default()
        });
        assert!(close(cp.first, cp.second));
        assert!(close(cp.first, Point::new(0.5, -0.5)));
    }

    #[test]
    fn test_each_knob_changes_the_curve() {
        use crate::path::Segment;

        let base = CurveConfig::default();
        let variants = [
            base,
            CurveConfig { curve_size: 0.5, ..base },
            CurveConfig { curve_size: 2.0, ..base },
            CurveConfig { polarity: -1.0, ..base },
            CurveConfig { bulbousness: 0.3, ..base },
            CurveConfig { curve_angle: 0.4, ..base },
            CurveConfig { twist: 0.4, ..base },
        ];
        let commands: Vec<String> = variants
            .iter()
            .map(|config| {
                Segment::Curve {
                    to: Point::new(1.0, 0.0),
                    config: *config,
                }
                .command(Point::new(0.0, 0.0))
            })
            .collect();
        for (i, a) in commands.iter().enumerate() {
            assert!(a.starts_with("C "));
            for (j, b) in commands.iter().enumerate().skip(i + 1) {
                assert_ne!(a, b, "{:?} vs {:?}", variants[i], variants[j]);
            }
        }
    }

    #[test]
    fn test_coincident_points_do_not_panic() {
        let cp = control_points(Point::new(0.3, 0.3), Point::new(0.3, 0.3), &CurveConfig::default());
        assert!(cp.first.x().is_nan());
    }

    #[test]
    fn test_config_accepts_misspelt_polarity() {
        let config: CurveConfig = ron::from_str("(polarlity: -1.0, twist: 0.2)").unwrap();
        assert_eq!(config.polarity, -1.0);
        assert_eq!(config.twist, 0.2);
        assert_eq!(config.curve_size, 1.0);
    }
}
