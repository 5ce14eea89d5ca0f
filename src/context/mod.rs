//! Provides the [`crate::context::Canvas`] struct, the root of a sketch: it owns
//! the scene tree, the current group scope and the random stream, and writes
//! the finished drawing out as SVG.
use svg::Document;

use crate::attributes::{Attributes, Color};
use crate::errors::{ConfigError, PathError};
use crate::path::{Align, Path};
use crate::util::pcg::Pcg32;

pub mod config;
pub mod iteration;
pub mod meta;
pub mod random;
pub mod scene;

use config::{SketchConfig, Units};
use meta::Meta;
use scene::{Group, Node};

/// # Canvas
///
/// A Canvas is a _drawing_ context over a normalized coordinate space: x runs
/// from 0 to 1 and y from 0 to `1 / aspect_ratio` (see [`Canvas::meta`]),
/// whatever the output size.
///
/// Paths are added to the current scope, which is the top level unless a
/// [`Canvas::group`] closure is running. Every random helper draws from the one
/// generator the canvas owns, so reordering drawing code changes the output.
///
/// # Example
///
/// ```rust
/// use sketchpath::attributes::{Attributes, Color};
/// use sketchpath::context::Canvas;
/// use sketchpath::path::Align;
///
/// let mut canvas = Canvas::seeded(400.0, 200.0, 7);
/// canvas.background(Color::white());
/// canvas.group(Attributes::stroked(), |c| {
///     let bottom = c.meta().bottom;
///     for i in 0..10 {
///         let x = 0.05 + i as f64 * 0.1;
///         let wobble = c.uniform_random_float(-0.02, 0.02);
///         c.path(Attributes::new())
///             .move_to((x, 0.1))
///             .line_to((x + wobble, bottom - 0.1));
///     }
/// });
/// let center = canvas.meta().center;
/// canvas
///     .stroked_path(|a| {
///         a.stroke_width(0.01);
///     })
///     .rect(center, 0.2, 0.2, Align::Center);
/// let svg = canvas.image().unwrap();
/// assert!(svg.starts_with("<svg"));
/// ```
#[derive(Debug, Clone)]
pub struct Canvas {
    meta: Meta,
    rng: Pcg32,
    root: Vec<Node>,
    scopes: Vec<Group>,
}

/// Closes the innermost group when dropped, on return or while unwinding.
struct ScopeGuard<'a> {
    canvas: &'a mut Canvas,
}

impl Drop for ScopeGuard<'_> {
    fn drop(&mut self) {
        if let Some(group) = self.canvas.scopes.pop() {
            self.canvas.children_mut().push(Node::Group(group));
        }
    }
}

impl Canvas {
    /// A canvas with a non-reproducible random stream.
    ///
    /// `width` and `height` must be positive and finite; nothing checks them
    /// here. Go through [`Canvas::from_config`] for checked sizes.
    pub fn new(width: f64, height: f64) -> Canvas {
        Canvas::with_rng(width, height, Pcg32::from_entropy_seed())
    }

    /// A canvas whose random helpers replay the same way for the same seed.
    /// Sizes are unchecked, as for [`Canvas::new`].
    pub fn seeded(width: f64, height: f64, seed: u64) -> Canvas {
        Canvas::with_rng(width, height, Pcg32::new((seed >> 32) as u32, seed as u32))
    }

    /// A canvas sized and seeded from `config`, after
    /// [`SketchConfig::validate`].
    pub fn from_config(config: &SketchConfig) -> Result<Canvas, ConfigError> {
        config.validate()?;
        Ok(match config.seed {
            Some(seed) => Canvas::seeded(config.width, config.height, seed),
            None => Canvas::new(config.width, config.height),
        })
    }

    fn with_rng(width: f64, height: f64, rng: Pcg32) -> Canvas {
        log::debug!(
            "new {}x{} canvas, rng state {:?}",
            width,
            height,
            rng.get_state()
        );
        Canvas {
            meta: Meta::new(width, height),
            rng,
            root: vec![],
            scopes: vec![],
        }
    }

    pub fn meta(&self) -> &Meta {
        &self.meta
    }

    pub fn rng(&self) -> &Pcg32 {
        &self.rng
    }

    /// Direct access to the generator, e.g. to save and restore its state.
    pub fn rng_mut(&mut self) -> &mut Pcg32 {
        &mut self.rng
    }

    /// Top level nodes drawn so far.
    pub fn children(&self) -> &[Node] {
        &self.root
    }

    fn children_mut(&mut self) -> &mut Vec<Node> {
        match self.scopes.last_mut() {
            Some(group) => group.children_mut(),
            None => &mut self.root,
        }
    }

    /// Start a new empty path in the current scope.
    pub fn path(&mut self, attributes: Attributes) -> &mut Path {
        self.draw(Path::new(attributes))
    }

    /// Start a path from [`Attributes::stroked`], adjusted by `configure`.
    pub fn stroked_path(&mut self, configure: impl FnOnce(&mut Attributes)) -> &mut Path {
        self.path(Attributes::stroked().with(configure))
    }

    /// Add a path built elsewhere to the current scope.
    pub fn draw(&mut self, path: Path) -> &mut Path {
        let children = self.children_mut();
        children.push(Node::Path(path));
        match children.last_mut() {
            Some(Node::Path(path)) => path,
            _ => unreachable!("a path was just pushed"),
        }
    }

    /// Fill the whole drawing area.
    pub fn background(&mut self, color: Color) -> &mut Path {
        let bottom = self.meta.bottom;
        self.path(Attributes::filled(color))
            .rect((0.0, 0.0), 1.0, bottom, Align::TopLeft)
            .close()
    }

    /// Run `draw` with a new group as the current scope. The group is added
    /// to the enclosing scope once `draw` finishes, and the enclosing scope is
    /// restored even if `draw` panics.
    pub fn group<R>(&mut self, attributes: Attributes, draw: impl FnOnce(&mut Canvas) -> R) -> R {
        self.scopes.push(Group::new(attributes));
        let mut scope = ScopeGuard { canvas: self };
        draw(&mut *scope.canvas)
    }

    fn render(&self, width: String, height: String) -> Result<String, PathError> {
        let mut out = format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 1 {}\" width=\"{}\" height=\"{}\">\n",
            self.meta.bottom, width, height
        );
        for child in &self.root {
            out.push_str(&child.string(1)?);
            out.push('\n');
        }
        out.push_str("</svg>");
        log::debug!("rendered {} top level nodes", self.root.len());
        Ok(out)
    }

    /// The drawing as an SVG string sized in pixels.
    pub fn image(&self) -> Result<String, PathError> {
        self.render(self.meta.width.to_string(), self.meta.height.to_string())
    }

    /// Same document, with the root size in millimetres for import into
    /// vector editors and plotter tooling.
    pub fn image_mm(&self) -> Result<String, PathError> {
        self.render(
            format!("{}mm", self.meta.width),
            format!("{}mm", self.meta.height),
        )
    }

    /// An [`svg::Document`], ready for [`svg::save`].
    pub fn to_document(&self, units: Units) -> Result<Document, PathError> {
        let suffix = match units {
            Units::Pixels => "",
            Units::Millimetres => "mm",
        };
        let mut document = Document::new()
            .set("viewBox", format!("0 0 1 {}", self.meta.bottom))
            .set("width", format!("{}{}", self.meta.width, suffix))
            .set("height", format!("{}{}", self.meta.height, suffix));
        for child in &self.root {
            document = document.add(child.to_element()?);
        }
        Ok(document)
    }
}
