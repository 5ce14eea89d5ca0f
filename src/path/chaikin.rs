use super::segment::Segment;
use crate::geometry::point_along;

/// One round of Chaikin corner cutting over a segment list.
///
/// Each interior line whose neighbours are a point-bearing predecessor (move or
/// line) and a following line has its corner replaced by two lines: 75% of the
/// way along the incoming edge and 25% of the way along the outgoing one. The
/// first and last segments, and anything that is not part of a straight run,
/// are copied through unchanged.
pub(crate) fn chaikin_pass(segments: &[Segment]) -> Vec<Segment> {
    if segments.len() < 3 {
        return segments.to_vec();
    }
    let mut out = Vec::with_capacity(segments.len() * 2);
    out.push(segments[0]);
    for window in segments.windows(3) {
        match (window[0], window[1], window[2]) {
            (
                Segment::Move { to: a } | Segment::Line { to: a },
                Segment::Line { to: b },
                Segment::Line { to: c },
            ) => {
                out.push(Segment::Line {
                    to: point_along(a, b, 0.75),
                });
                out.push(Segment::Line {
                    to: point_along(b, c, 0.25),
                });
            }
            (_, middle, _) => out.push(middle),
        }
    }
    out.push(segments[segments.len() - 1]);
    out
}

#[cfg(test)]
mod test {
    use super::*;
    use geo_types::Point;

    #[test]
    fn test_short_paths_untouched() {
        let segments = vec![
            Segment::Move { to: Point::new(0.0, 0.0) },
            Segment::Line { to: Point::new(1.0, 0.0) },
        ];
        assert_eq!(chaikin_pass(&segments), segments);
    }

    #[test]
    fn test_single_corner_cut() {
        let segments = vec![
            Segment::Move { to: Point::new(0.0, 0.0) },
            Segment::Line { to: Point::new(1.0, 0.0) },
            Segment::Line { to: Point::new(1.0, 1.0) },
        ];
        assert_eq!(
            chaikin_pass(&segments),
            vec![
                Segment::Move { to: Point::new(0.0, 0.0) },
                Segment::Line { to: Point::new(0.75, 0.0) },
                Segment::Line { to: Point::new(1.0, 0.25) },
                Segment::Line { to: Point::new(1.0, 1.0) },
            ]
        );
    }

    #[test]
    fn test_close_and_curves_pass_through() {
        let curve = Segment::Curve {
            to: Point::new(2.0, 2.0),
            config: Default::default(),
        };
        let segments = vec![
            Segment::Move { to: Point::new(0.0, 0.0) },
            curve,
            Segment::Line { to: Point::new(3.0, 2.0) },
            Segment::Close,
        ];
        assert_eq!(chaikin_pass(&segments), segments);
    }
}
