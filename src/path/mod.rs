use std::f64::consts::PI;

use geo_types::Point;

use crate::attributes::Attributes;
use crate::errors::{GeometryError, PathError};
use crate::geometry::{self, polar_to_cartesian};

pub mod chaikin;
pub mod segment;

pub use segment::{Align, ArcConfig, ArcOptions, CurveConfig, Segment};

/// Pen bookkeeping while walking a segment list: where the pen is and where
/// the current subpath started (the target of a `Close`).
#[derive(Debug, Clone, Copy, Default)]
struct Pen {
    at: Point<f64>,
    start: Point<f64>,
}

impl Pen {
    fn advance(&mut self, segment: &Segment) {
        match segment {
            Segment::Move { to } => {
                self.at = *to;
                self.start = *to;
            }
            Segment::Close => self.at = self.start,
            other => {
                if let Some(to) = other.to() {
                    self.at = to;
                }
            }
        }
    }
}

/// A mutable sequence of drawing segments plus the attributes it is rendered
/// with.
///
/// Builder calls append segments and return `&mut Self` so they can be chained.
/// Nothing is validated while building; [`Path::data`] and friends fail if the
/// path is empty or does not begin with a move.
///
/// # Example
///
/// ```rust
/// use sketchpath::attributes::Attributes;
/// use sketchpath::path::Path;
///
/// let mut path = Path::new(Attributes::new());
/// path.move_to((0.1, 0.1)).line_to((0.9, 0.1)).line_to((0.5, 0.8)).close();
/// assert_eq!(path.data().unwrap(), "M 0.1 0.1 L 0.9 0.1 L 0.5 0.8 Z");
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Path {
    segments: Vec<Segment>,
    attributes: Attributes,
}

impl Path {
    pub fn new(attributes: Attributes) -> Path {
        Path {
            segments: vec![],
            attributes,
        }
    }

    /// Polyline through `points`, optionally closed with a `Close` segment.
    pub fn from_points(points: &[Point<f64>], closed: bool, attributes: Attributes) -> Path {
        let mut path = Path::new(attributes);
        if let Some((first, rest)) = points.split_first() {
            path.move_to(*first).add_points(rest);
            if closed {
                path.close();
            }
        }
        path
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    pub fn attributes_mut(&mut self) -> &mut Attributes {
        &mut self.attributes
    }

    /// Where the pen sits after the last segment, if anything was drawn.
    fn current_point(&self) -> Option<Point<f64>> {
        if self.segments.is_empty() {
            return None;
        }
        let mut pen = Pen::default();
        for segment in &self.segments {
            pen.advance(segment);
        }
        Some(pen.at)
    }

    pub fn move_to(&mut self, to: impl Into<Point<f64>>) -> &mut Self {
        self.segments.push(Segment::Move { to: to.into() });
        self
    }

    pub fn line_to(&mut self, to: impl Into<Point<f64>>) -> &mut Self {
        self.segments.push(Segment::Line { to: to.into() });
        self
    }

    /// A line to each point in turn.
    pub fn add_points(&mut self, points: &[Point<f64>]) -> &mut Self {
        self.segments
            .extend(points.iter().map(|to| Segment::Line { to: *to }));
        self
    }

    /// Cubic curve to `to`. The control points are worked out from the
    /// previous point when the path is serialized, see
    /// [`crate::geometry::curve::control_points`].
    pub fn curve_to(&mut self, to: impl Into<Point<f64>>, config: CurveConfig) -> &mut Self {
        self.segments.push(Segment::Curve {
            to: to.into(),
            config,
        });
        self
    }

    /// Elliptical arc from the current point to `to`. Radii left unset are
    /// taken from the absolute x and y displacement.
    ///
    /// With nothing drawn yet there is no start point; the call is logged and
    /// ignored.
    pub fn arc_to(&mut self, to: impl Into<Point<f64>>, options: ArcOptions) -> &mut Self {
        let to = to.into();
        let Some(from) = self.current_point() else {
            log::warn!(
                "arc_to({}, {}) on a path with no previous segment, ignoring",
                to.x(),
                to.y()
            );
            return self;
        };
        let delta = to - from;
        self.segments.push(Segment::Arc {
            to,
            config: ArcConfig {
                radius_x: options.radius_x.unwrap_or(delta.x().abs()),
                radius_y: options.radius_y.unwrap_or(delta.y().abs()),
                x_axis_rotation: options.x_axis_rotation,
                large_arc: options.large_arc,
            },
        });
        self
    }

    pub fn close(&mut self) -> &mut Self {
        self.segments.push(Segment::Close);
        self
    }

    /// Rectangle outline, clockwise from the top left corner and back to it by
    /// coordinate. No `Close` is added.
    pub fn rect(
        &mut self,
        at: impl Into<Point<f64>>,
        width: f64,
        height: f64,
        align: Align,
    ) -> &mut Self {
        let at = at.into();
        let corner = match align {
            Align::TopLeft => at,
            Align::Center => at - Point::new(width / 2.0, height / 2.0),
        };
        let (x, y) = corner.x_y();
        self.move_to(corner)
            .line_to((x + width, y))
            .line_to((x + width, y + height))
            .line_to((x, y + height))
            .line_to(corner)
    }

    /// Regular polygon with its first vertex at angle `rotation`, the rest
    /// following at increasing angles. The final line returns to the first
    /// vertex exactly. With [`Align::TopLeft`], `at` is the top left of the
    /// bounding circle's square.
    pub fn regular_polygon(
        &mut self,
        at: impl Into<Point<f64>>,
        sides: usize,
        radius: f64,
        rotation: f64,
        align: Align,
    ) -> &mut Self {
        if sides == 0 {
            return self;
        }
        let at = at.into();
        let center = match align {
            Align::TopLeft => at + Point::new(radius, radius),
            Align::Center => at,
        };
        let step = 2.0 * PI / sides as f64;
        let first = polar_to_cartesian(center, radius, rotation);
        self.move_to(first);
        for i in 1..sides {
            self.line_to(polar_to_cartesian(center, radius, rotation + i as f64 * step));
        }
        self.line_to(first)
    }

    /// Four arcs through the cardinal points, starting at the top.
    pub fn ellipse(
        &mut self,
        at: impl Into<Point<f64>>,
        width: f64,
        height: f64,
        align: Align,
    ) -> &mut Self {
        let at = at.into();
        let (rx, ry) = (width / 2.0, height / 2.0);
        let center = match align {
            Align::TopLeft => at + Point::new(rx, ry),
            Align::Center => at,
        };
        let (cx, cy) = center.x_y();
        let config = ArcConfig {
            radius_x: rx,
            radius_y: ry,
            x_axis_rotation: 0.0,
            large_arc: false,
        };
        let top = Point::new(cx, cy - ry);
        self.move_to(top);
        for to in [
            Point::new(cx + rx, cy),
            Point::new(cx, cy + ry),
            Point::new(cx - rx, cy),
            top,
        ] {
            self.segments.push(Segment::Arc { to, config });
        }
        self
    }

    pub fn circle(&mut self, center: impl Into<Point<f64>>, radius: f64) -> &mut Self {
        self.ellipse(center, radius * 2.0, radius * 2.0, Align::Center)
    }

    /// Chaikin corner cutting, applied `iterations` times to straight runs.
    pub fn chaikin(&mut self, iterations: usize) -> &mut Self {
        for _ in 0..iterations {
            self.segments = chaikin::chaikin_pass(&self.segments);
        }
        self
    }

    /// Replace every segment with `f(segment, index)`. Nothing stops `f` from
    /// changing the kind of a segment.
    pub fn map(&mut self, mut f: impl FnMut(Segment, usize) -> Segment) -> &mut Self {
        self.segments = self
            .segments
            .iter()
            .enumerate()
            .map(|(i, segment)| f(*segment, i))
            .collect();
        self
    }

    /// Independent copy, optionally with different attributes.
    pub fn clone_with(&self, attributes: Option<Attributes>) -> Path {
        Path {
            segments: self.segments.clone(),
            attributes: attributes.unwrap_or_else(|| self.attributes.clone()),
        }
    }

    /// End points of every segment that has one, in order.
    pub fn points(&self) -> Vec<Point<f64>> {
        self.segments.iter().filter_map(Segment::to).collect()
    }

    pub fn centroid(&self) -> Result<Point<f64>, GeometryError> {
        geometry::centroid(&self.points())
    }

    fn validate(&self) -> Result<(), PathError> {
        match self.segments.first() {
            None => Err(PathError::Empty),
            Some(Segment::Move { .. }) => Ok(()),
            Some(other) => Err(PathError::MissingMove {
                found: other.kind(),
            }),
        }
    }

    /// The `d` attribute: one command per segment, space separated.
    pub fn data(&self) -> Result<String, PathError> {
        self.validate()?;
        let mut pen = Pen::default();
        let mut commands = Vec::with_capacity(self.segments.len());
        for segment in &self.segments {
            commands.push(segment.command(pen.at));
            pen.advance(segment);
        }
        Ok(commands.join(" "))
    }

    /// The `<path>` element, indented two spaces per `depth`.
    pub fn string(&self, depth: usize) -> Result<String, PathError> {
        Ok(format!(
            "{}<path{} d=\"{}\" />",
            "  ".repeat(depth),
            self.attributes,
            self.data()?
        ))
    }

    pub fn to_element(&self) -> Result<svg::node::element::Path, PathError> {
        let mut element = svg::node::element::Path::new();
        for (key, value) in self.attributes.pairs() {
            element = element.set(key, value);
        }
        Ok(element.set("d", self.data()?))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::geometry::Vector2;

    fn close(a: Point<f64>, b: Point<f64>) -> bool {
        a.distance(&b) < 1e-9
    }

    fn square() -> Path {
        let mut path = Path::new(Attributes::stroked());
        path.move_to((0.25, 0.25))
            .line_to((0.75, 0.25))
            .line_to((0.75, 0.75))
            .line_to((0.25, 0.75))
            .close();
        path
    }

    /// Largest change of heading between consecutive straight segments.
    fn max_turn(path: &Path) -> f64 {
        let points = path.points();
        points
            .windows(3)
            .map(|w| {
                let a = w[1] - w[0];
                let b = w[2] - w[1];
                let cos = a.dot(b) / (a.magnitude() * b.magnitude());
                cos.clamp(-1.0, 1.0).acos()
            })
            .fold(0.0, f64::max)
    }

    #[test]
    fn test_empty_path_fails() {
        let path = Path::new(Attributes::new());
        assert_eq!(path.data(), Err(PathError::Empty));
        assert!(path.string(0).is_err());
    }

    #[test]
    fn test_path_must_start_with_move() {
        let mut path = Path::new(Attributes::new());
        path.line_to((1.0, 1.0));
        assert_eq!(path.data(), Err(PathError::MissingMove { found: "line" }));
        assert_eq!(
            path.data().unwrap_err().to_string(),
            "invalid path state: path must start with a move, found line"
        );
    }

    #[test]
    fn test_square_string() {
        let path = square();
        assert_eq!(
            path.data().unwrap(),
            "M 0.25 0.25 L 0.75 0.25 L 0.75 0.75 L 0.25 0.75 Z"
        );
        assert_eq!(
            path.string(1).unwrap(),
            concat!(
                "  <path style=\"fill:none; stroke:#000000; stroke-width:0.005; ",
                "stroke-linecap:round; stroke-linejoin:round;\" ",
                "d=\"M 0.25 0.25 L 0.75 0.25 L 0.75 0.75 L 0.25 0.75 Z\" />"
            )
        );
    }

    #[test]
    fn test_rect_center() {
        let mut path = Path::default();
        path.rect((0.5, 0.5), 0.2, 0.4, Align::Center);
        let expected = [(0.4, 0.3), (0.6, 0.3), (0.6, 0.7), (0.4, 0.7), (0.4, 0.3)];
        assert_eq!(path.len(), 5);
        assert!(matches!(path.segments()[0], Segment::Move { .. }));
        for (segment, (x, y)) in path.segments().iter().zip(expected) {
            assert!(close(segment.to().unwrap(), Point::new(x, y)));
        }
        assert!(path.segments()[1..]
            .iter()
            .all(|s| matches!(s, Segment::Line { .. })));
    }

    #[test]
    fn test_rect_top_left() {
        let mut path = Path::default();
        path.rect((0.0, 0.0), 1.0, 0.5, Align::TopLeft);
        assert_eq!(path.data().unwrap(), "M 0 0 L 1 0 L 1 0.5 L 0 0.5 L 0 0");
    }

    #[test]
    fn test_regular_polygon_returns_to_start() {
        let mut path = Path::default();
        path.regular_polygon((0.0, 0.0), 4, 1.0, 0.0, Align::Center);
        assert_eq!(path.len(), 5);
        let points = path.points();
        assert!(close(points[0], Point::new(1.0, 0.0)));
        assert!(close(points[1], Point::new(0.0, 1.0)));
        assert!(close(points[2], Point::new(-1.0, 0.0)));
        assert!(close(points[3], Point::new(0.0, -1.0)));
        assert_eq!(points[4], points[0]);
    }

    #[test]
    fn test_regular_polygon_top_left_offsets_center() {
        let mut path = Path::default();
        path.regular_polygon((0.0, 0.0), 6, 0.5, 0.0, Align::TopLeft);
        assert_eq!(path.len(), 7);
        assert!(close(path.points()[0], Point::new(1.0, 0.5)));
        assert!(close(path.points()[3], Point::new(0.0, 0.5)));
    }

    #[test]
    fn test_ellipse_quadrants() {
        let mut path = Path::default();
        path.ellipse((0.5, 0.5), 0.4, 0.2, Align::Center);
        assert_eq!(path.len(), 5);
        assert_eq!(
            path.data().unwrap(),
            concat!(
                "M 0.5 0.4 A 0.2 0.1 0 0 1 0.7 0.5 A 0.2 0.1 0 0 1 0.5 0.6 ",
                "A 0.2 0.1 0 0 1 0.3 0.5 A 0.2 0.1 0 0 1 0.5 0.4"
            )
        );
    }

    #[test]
    fn test_circle() {
        let mut path = Path::default();
        path.circle((0.5, 0.5), 0.25);
        assert_eq!(path.len(), 5);
        assert!(path.segments()[1..].iter().all(|s| matches!(
            s,
            Segment::Arc { config, .. } if config.radius_x == 0.25 && config.radius_y == 0.25
        )));
    }

    #[test]
    fn test_arc_to_default_radii() {
        let mut path = Path::default();
        path.move_to((0.0, 0.0)).arc_to((0.5, -0.25), ArcOptions::default());
        assert_eq!(path.data().unwrap(), "M 0 0 A 0.5 0.25 0 0 1 0.5 -0.25");

        let mut explicit = Path::default();
        explicit.move_to((0.0, 0.0)).arc_to(
            (0.5, 0.25),
            ArcOptions {
                radius_x: Some(1.0),
                large_arc: true,
                ..Default::default()
            },
        );
        assert_eq!(explicit.data().unwrap(), "M 0 0 A 1 0.25 0 1 1 0.5 0.25");
    }

    #[test]
    fn test_arc_to_without_start_is_ignored() {
        let mut path = Path::default();
        path.arc_to((0.5, 0.5), ArcOptions::default());
        assert!(path.is_empty());
    }

    #[test]
    fn test_arc_after_close_starts_from_subpath_start() {
        let mut path = Path::default();
        path.move_to((0.0, 0.0))
            .line_to((1.0, 0.0))
            .close()
            .arc_to((0.5, 0.5), ArcOptions::default());
        assert!(path.data().unwrap().ends_with("Z A 0.5 0.5 0 0 1 0.5 0.5"));
    }

    #[test]
    fn test_curve_to() {
        let mut path = Path::default();
        path.move_to((0.0, 0.0)).curve_to((1.0, 0.0), CurveConfig::default());
        let data = path.data().unwrap();
        assert!(data.starts_with("M 0 0 C "));
        assert!(data.ends_with(" 1 0"));
        assert_eq!(data.split(' ').count(), 10);
    }

    #[test]
    fn test_from_points() {
        let points = [
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(1.0, 1.0),
        ];
        let open = Path::from_points(&points, false, Attributes::new());
        assert_eq!(open.data().unwrap(), "M 0 0 L 1 0 L 1 1");
        let closed = Path::from_points(&points, true, Attributes::new());
        assert_eq!(closed.data().unwrap(), "M 0 0 L 1 0 L 1 1 Z");
        assert!(Path::from_points(&[], true, Attributes::new()).is_empty());
    }

    #[test]
    fn test_chaikin_grows() {
        let points = [
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(0.0, 1.0),
        ];
        let original = Path::from_points(&points, false, Attributes::new());
        let mut once = original.clone();
        once.chaikin(1);
        let mut thrice = original.clone();
        thrice.chaikin(3);
        assert!(once.len() > original.len());
        assert!(thrice.len() > once.len());
        assert_eq!(thrice.segments()[0], original.segments()[0]);
        assert_eq!(thrice.segments().last(), original.segments().last());
    }

    #[test]
    fn test_chaikin_converges() {
        let points = [
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(0.0, 1.0),
        ];
        let mut previous = f64::INFINITY;
        for iterations in 0..4 {
            let mut path = Path::from_points(&points, false, Attributes::new());
            path.chaikin(iterations);
            let turn = max_turn(&path);
            assert!(turn < previous, "{} iterations: {} >= {}", iterations, turn, previous);
            previous = turn;
        }
    }

    #[test]
    fn test_map_mirror() {
        let mut path = square();
        path.map(|segment, _| match segment.to() {
            Some(to) => segment.with_to(Point::new(1.0 - to.x(), to.y())),
            None => segment,
        });
        assert_eq!(
            path.data().unwrap(),
            "M 0.75 0.25 L 0.25 0.25 L 0.25 0.75 L 0.75 0.75 Z"
        );
    }

    #[test]
    fn test_map_passes_index() {
        let mut path = square();
        let mut seen = vec![];
        path.map(|segment, i| {
            seen.push(i);
            segment
        });
        assert_eq!(seen, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_clone_independence() {
        let original = square();
        let before = original.string(0).unwrap();

        let mut copy = original.clone_with(None);
        copy.attributes_mut().stroke_width(0.5).class("copy");
        copy.line_to((0.0, 0.0)).map(|s, _| s.with_to(Point::new(0.0, 0.0)));
        assert_eq!(original.string(0).unwrap(), before);
        assert_ne!(copy.string(0).unwrap(), before);

        let restyled = original.clone_with(Some(Attributes::new()));
        assert_eq!(restyled.segments(), original.segments());
        assert_eq!(restyled.attributes(), &Attributes::new());
    }

    #[test]
    fn test_centroid() {
        let mut path = Path::default();
        path.rect((0.0, 0.0), 1.0, 1.0, Align::TopLeft);
        // the start corner is repeated, which pulls the mean toward it
        assert!(close(path.centroid().unwrap(), Point::new(0.4, 0.4)));
        assert_eq!(Path::default().centroid(), Err(GeometryError::EmptyCentroid));
    }

    #[test]
    fn test_to_element() {
        let element = square().to_element().unwrap().to_string();
        assert!(element.starts_with("<path"));
        assert!(element.contains("d=\"M 0.25 0.25 L 0.75 0.25 L 0.75 0.75 L 0.25 0.75 Z\""));
        assert!(element.contains("stroke:#000000"));
        assert!(Path::default().to_element().is_err());
    }
}
