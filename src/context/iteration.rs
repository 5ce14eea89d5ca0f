//! Layout loops that hand each step's geometry to a drawing callback.
use std::f64::consts::PI;

use geo_types::Point;
use serde::{Deserialize, Serialize};

use super::Canvas;
use crate::geometry::polar_to_cartesian;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TilingKind {
    /// `n` columns and `n` rows, stretched to the canvas shape.
    #[default]
    Proportionate,
    /// `n` columns, with rows in proportion to the canvas aspect ratio so the
    /// cells come out close to square.
    Square,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TilingOrder {
    /// Left to right along a row, then down to the next row.
    RowFirst,
    /// Top to bottom down a column, then across to the next column.
    #[default]
    ColumnFirst,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TilingConfig {
    pub n: usize,
    pub kind: TilingKind,
    pub margin: f64,
    pub order: TilingOrder,
}

impl Default for TilingConfig {
    fn default() -> Self {
        Self {
            n: 2,
            kind: TilingKind::Proportionate,
            margin: 0.0,
            order: TilingOrder::ColumnFirst,
        }
    }
}

/// One cell of a layout loop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tile {
    /// Top left corner.
    pub origin: Point<f64>,
    /// Width and height.
    pub delta: Point<f64>,
    pub center: Point<f64>,
    /// Position in visiting order.
    pub index: usize,
}

impl Tile {
    fn new(origin: Point<f64>, delta: Point<f64>, index: usize) -> Tile {
        Tile {
            origin,
            delta,
            center: origin + delta / 2.0,
            index,
        }
    }
}

impl Canvas {
    pub fn times(&mut self, n: usize, mut draw: impl FnMut(&mut Canvas, usize)) {
        for i in 0..n {
            draw(self, i);
        }
    }

    /// `n` evenly spaced values starting at `from`. When `inclusive`, the last
    /// value is `to`; otherwise the values stop one step short of it.
    pub fn range(
        &mut self,
        from: f64,
        to: f64,
        n: usize,
        inclusive: bool,
        mut draw: impl FnMut(&mut Canvas, f64, usize),
    ) {
        let divisions = if inclusive { n.saturating_sub(1) } else { n };
        let step = if divisions == 0 {
            0.0
        } else {
            (to - from) / divisions as f64
        };
        for i in 0..n {
            draw(self, from + i as f64 * step, i);
        }
    }

    /// Grid of cells inside `margin`, visited in `config.order`.
    pub fn for_tiling(&mut self, config: TilingConfig, mut draw: impl FnMut(&mut Canvas, Tile)) {
        if config.n == 0 {
            return;
        }
        let margin = config.margin;
        let width = 1.0 - 2.0 * margin;
        let height = self.meta.bottom - 2.0 * margin;
        let delta_x = width / config.n as f64;
        let rows = match config.kind {
            TilingKind::Proportionate => config.n,
            // tolerate rounding when the ratio divides exactly
            TilingKind::Square => {
                ((config.n as f64 / self.meta.aspect_ratio + 1e-9).floor() as usize).max(1)
            }
        };
        let columns = config.n;
        let delta_y = height / rows as f64;
        let delta = Point::new(delta_x, delta_y);
        let (outer, inner) = match config.order {
            TilingOrder::RowFirst => (rows, columns),
            TilingOrder::ColumnFirst => (columns, rows),
        };
        let mut index = 0;
        for a in 0..outer {
            for b in 0..inner {
                let (column, row) = match config.order {
                    TilingOrder::RowFirst => (b, a),
                    TilingOrder::ColumnFirst => (a, b),
                };
                let origin = Point::new(
                    margin + column as f64 * delta_x,
                    margin + row as f64 * delta_y,
                );
                draw(self, Tile::new(origin, delta, index));
                index += 1;
            }
        }
    }

    /// `n` full height columns, left to right.
    pub fn for_horizontal(&mut self, n: usize, margin: f64, mut draw: impl FnMut(&mut Canvas, Tile)) {
        if n == 0 {
            return;
        }
        let delta = Point::new((1.0 - 2.0 * margin) / n as f64, self.meta.bottom - 2.0 * margin);
        for i in 0..n {
            let origin = Point::new(margin + i as f64 * delta.x(), margin);
            draw(self, Tile::new(origin, delta, i));
        }
    }

    /// `n` full width rows, top to bottom.
    pub fn for_vertical(&mut self, n: usize, margin: f64, mut draw: impl FnMut(&mut Canvas, Tile)) {
        if n == 0 {
            return;
        }
        let delta = Point::new(1.0 - 2.0 * margin, (self.meta.bottom - 2.0 * margin) / n as f64);
        for i in 0..n {
            let origin = Point::new(margin, margin + i as f64 * delta.y());
            draw(self, Tile::new(origin, delta, i));
        }
    }

    /// `n` points evenly spaced on a circle, starting at the top and going
    /// clockwise on screen.
    pub fn around_circle(
        &mut self,
        n: usize,
        radius: f64,
        center: Point<f64>,
        mut draw: impl FnMut(&mut Canvas, Point<f64>, usize),
    ) {
        for i in 0..n {
            let angle = -PI / 2.0 + i as f64 * 2.0 * PI / n as f64;
            draw(self, polar_to_cartesian(center, radius, angle), i);
        }
    }
}
