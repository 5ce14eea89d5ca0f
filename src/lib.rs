//! Declarative, deterministic SVG sketching
//!
//! This library builds generative drawings as a scene graph of paths and
//! groups in a normalized coordinate space, then writes them out as SVG. Curves
//! are described by a handful of independent knobs rather than raw control
//! points, polylines can be rounded off with Chaikin smoothing, and every
//! random helper draws from one seeded PCG32 stream, so a seed always gives the
//! same picture.
//!
//! ```rust
//! use sketchpath::prelude::*;
//!
//! let mut canvas = Canvas::seeded(800.0, 800.0, 1234);
//! canvas.for_tiling(TilingConfig { n: 8, margin: 0.1, ..Default::default() }, |c, tile| {
//!     let from = tile.origin;
//!     let to = tile.origin + tile.delta;
//!     let polarity = c.random_polarity();
//!     c.stroked_path(|_| {}).move_to(from).curve_to(
//!         to,
//!         CurveConfig { polarity, ..Default::default() },
//!     );
//! });
//! let svg = canvas.image().unwrap();
//! assert_eq!(svg.matches("<path").count(), 64);
//! ```
//!
//! *Nothing here touches the filesystem. Use [`svg::save`] with
//! [`context::Canvas::to_document`], or write [`context::Canvas::image`]
//! wherever it needs to go.*

/// Styling: colours, stroke and fill settings, transforms.
pub mod attributes;

/// The drawing canvas, its scene tree and the helpers that drive it.
pub mod context;

pub mod errors;

/// Vector math on [`geo_types::Point`] and the curve solver.
pub mod geometry;

/// Paths, segments and smoothing.
pub mod path;

pub mod util;

/// Import prelude::* for the usual sketching surface in one go.
pub mod prelude {
    pub use crate::attributes::{transform, Attributes, Color, LineCap, LineJoin};
    pub use crate::context::config::{SketchConfig, Units};
    pub use crate::context::iteration::{Tile, TilingConfig, TilingKind, TilingOrder};
    pub use crate::context::Canvas;
    pub use crate::geometry::{midpoint, point_along, polar_to_cartesian, Vector2};
    pub use crate::path::{Align, ArcOptions, CurveConfig, Path, Segment};
    pub use geo_types::Point;
}
