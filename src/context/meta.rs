use geo_types::Point;

/// Output size and the normalized drawing space derived from it.
///
/// x always runs from 0 to 1. y runs from 0 to `1 / aspect_ratio`, so a shape
/// drawn in these coordinates keeps its proportions at any output size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Meta {
    pub width: f64,
    pub height: f64,
    pub aspect_ratio: f64,
    pub top: f64,
    pub bottom: f64,
    pub left: f64,
    pub right: f64,
    pub center: Point<f64>,
}

impl Meta {
    pub fn new(width: f64, height: f64) -> Meta {
        let aspect_ratio = width / height;
        let bottom = 1.0 / aspect_ratio;
        Meta {
            width,
            height,
            aspect_ratio,
            top: 0.0,
            bottom,
            left: 0.0,
            right: 1.0,
            center: Point::new(0.5, bottom / 2.0),
        }
    }
}
