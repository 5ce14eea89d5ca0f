use std::fmt;

use nalgebra::Affine2;
use serde::{Deserialize, Serialize};

pub mod color;
pub mod transform;

pub use color::Color;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Paint {
    None,
    Color(Color),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LineCap {
    Butt,
    Round,
    Square,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LineJoin {
    Miter,
    Round,
    Bevel,
}

impl LineCap {
    fn as_str(&self) -> &'static str {
        match self {
            LineCap::Butt => "butt",
            LineCap::Round => "round",
            LineCap::Square => "square",
        }
    }
}

impl LineJoin {
    fn as_str(&self) -> &'static str {
        match self {
            LineJoin::Miter => "miter",
            LineJoin::Round => "round",
            LineJoin::Bevel => "bevel",
        }
    }
}

/// Styling and element attributes of a path or group.
///
/// Unset fields are simply left out of the output, so SVG defaults (and the
/// values inherited from enclosing groups) apply.
///
/// # Example
///
/// ```rust
/// use sketchpath::attributes::{Attributes, Color, LineCap};
///
/// let mut attrs = Attributes::stroked();
/// attrs.stroke(Color::hsl(0.0, 100.0, 50.0))
///     .stroke_width(0.01)
///     .line_cap(LineCap::Square)
///     .class("outline");
/// assert_eq!(
///     attrs.to_string(),
///     " class=\"outline\" style=\"fill:none; stroke:#FF0000; stroke-width:0.01; stroke-linecap:square; stroke-linejoin:round;\""
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Attributes {
    fill: Option<Paint>,
    stroke: Option<Paint>,
    stroke_width: Option<f64>,
    line_cap: Option<LineCap>,
    line_join: Option<LineJoin>,
    dash: Option<Vec<f64>>,
    opacity: Option<f64>,
    transform: Option<Affine2<f64>>,
    transform_origin: Option<String>,
    class: Option<String>,
    id: Option<String>,
}

impl Attributes {
    pub fn new() -> Attributes {
        Attributes::default()
    }

    /// Unfilled, thin black round-capped line.
    pub fn stroked() -> Attributes {
        let mut attrs = Attributes::default();
        attrs
            .no_fill()
            .stroke(Color::black())
            .stroke_width(0.005)
            .line_cap(LineCap::Round)
            .line_join(LineJoin::Round);
        attrs
    }

    /// Solid fill, no outline.
    pub fn filled(color: Color) -> Attributes {
        let mut attrs = Attributes::default();
        attrs.fill(color).no_stroke();
        attrs
    }

    /// Apply further changes to an owned attribute set, handy on presets.
    pub fn with(mut self, configure: impl FnOnce(&mut Attributes)) -> Attributes {
        configure(&mut self);
        self
    }

    pub fn fill(&mut self, color: Color) -> &mut Self {
        self.fill = Some(Paint::Color(color));
        self
    }

    pub fn no_fill(&mut self) -> &mut Self {
        self.fill = Some(Paint::None);
        self
    }

    pub fn stroke(&mut self, color: Color) -> &mut Self {
        self.stroke = Some(Paint::Color(color));
        self
    }

    pub fn no_stroke(&mut self) -> &mut Self {
        self.stroke = Some(Paint::None);
        self
    }

    pub fn stroke_width(&mut self, width: f64) -> &mut Self {
        self.stroke_width = Some(width);
        self
    }

    pub fn line_cap(&mut self, cap: LineCap) -> &mut Self {
        self.line_cap = Some(cap);
        self
    }

    pub fn line_join(&mut self, join: LineJoin) -> &mut Self {
        self.line_join = Some(join);
        self
    }

    /// Dash pattern, alternating dash and gap lengths.
    pub fn dash(&mut self, pattern: Vec<f64>) -> &mut Self {
        self.dash = Some(pattern);
        self
    }

    pub fn opacity(&mut self, opacity: f64) -> &mut Self {
        self.opacity = Some(opacity);
        self
    }

    /// See [`transform`] for helpers to build and compose the matrix.
    pub fn transform(&mut self, transformation: Affine2<f64>) -> &mut Self {
        self.transform = Some(transformation);
        self
    }

    /// Any CSS `transform-origin` value, e.g. `"center"` or `"0.5 0.5"`.
    pub fn transform_origin(&mut self, origin: &str) -> &mut Self {
        self.transform_origin = Some(origin.to_string());
        self
    }

    pub fn class(&mut self, class: &str) -> &mut Self {
        self.class = Some(class.to_string());
        self
    }

    pub fn id(&mut self, id: &str) -> &mut Self {
        self.id = Some(id.to_string());
        self
    }

    fn style_properties(&self) -> Vec<(&'static str, String)> {
        let mut props = vec![];
        if let Some(fill) = &self.fill {
            paint_properties(&mut props, "fill", "fill-opacity", fill);
        }
        if let Some(stroke) = &self.stroke {
            paint_properties(&mut props, "stroke", "stroke-opacity", stroke);
        }
        if let Some(width) = self.stroke_width {
            props.push(("stroke-width", width.to_string()));
        }
        if let Some(cap) = self.line_cap {
            props.push(("stroke-linecap", cap.as_str().to_string()));
        }
        if let Some(join) = self.line_join {
            props.push(("stroke-linejoin", join.as_str().to_string()));
        }
        if let Some(dash) = &self.dash {
            let pattern: Vec<String> = dash.iter().map(|d| d.to_string()).collect();
            props.push(("stroke-dasharray", pattern.join(" ")));
        }
        if let Some(opacity) = self.opacity {
            props.push(("opacity", opacity.to_string()));
        }
        props
    }

    /// The `style` attribute value, `"k:v; k:v;"`, or empty.
    pub fn style(&self) -> String {
        self.style_properties()
            .iter()
            .map(|(key, value)| format!("{}:{};", key, value))
            .collect::<Vec<String>>()
            .join(" ")
    }

    /// Element attributes in output order, with style properties folded into a
    /// single `style` entry.
    pub fn pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![];
        if let Some(class) = &self.class {
            pairs.push(("class", class.clone()));
        }
        if let Some(id) = &self.id {
            pairs.push(("id", id.clone()));
        }
        if let Some(tx) = &self.transform {
            pairs.push(("transform", transform::to_svg(tx)));
        }
        if let Some(origin) = &self.transform_origin {
            pairs.push(("transform-origin", origin.clone()));
        }
        let style = self.style();
        if !style.is_empty() {
            pairs.push(("style", style));
        }
        pairs
    }
}

fn paint_properties(
    props: &mut Vec<(&'static str, String)>,
    key: &'static str,
    opacity_key: &'static str,
    paint: &Paint,
) {
    match paint {
        Paint::None => props.push((key, "none".to_string())),
        Paint::Color(color) => {
            props.push((key, color.to_string()));
            if let Some(alpha) = color.separate_alpha() {
                props.push((opacity_key, alpha.to_string()));
            }
        }
    }
}

/// Escape a value for use inside a double quoted XML attribute.
fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c => out.push(c),
        }
    }
    out
}

/// Renders as it sits inside an element tag: empty, or with a leading space.
/// Values are XML escaped.
impl fmt::Display for Attributes {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (key, value) in self.pairs() {
            write!(f, " {}=\"{}\"", key, escape(&value))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_empty_renders_nothing() {
        assert_eq!(Attributes::new().to_string(), "");
        assert_eq!(Attributes::new().style(), "");
    }

    #[test]
    fn test_stroked_preset() {
        assert_eq!(
            Attributes::stroked().style(),
            "fill:none; stroke:#000000; stroke-width:0.005; stroke-linecap:round; stroke-linejoin:round;"
        );
    }

    #[test]
    fn test_filled_with_alpha() {
        let attrs = Attributes::filled(Color::hsla(0.0, 100.0, 50.0, 0.25));
        assert_eq!(
            attrs.to_string(),
            " style=\"fill:#FF0000; fill-opacity:0.25; stroke:none;\""
        );
    }

    #[test]
    fn test_element_attributes_before_style() {
        let mut attrs = Attributes::new();
        attrs
            .opacity(0.5)
            .id("a")
            .class("b")
            .transform(transform::translate(0.1, 0.2))
            .transform_origin("center")
            .dash(vec![0.01, 0.02]);
        assert_eq!(
            attrs.to_string(),
            concat!(
                " class=\"b\" id=\"a\" transform=\"matrix(1 0 0 1 0.1 0.2)\"",
                " transform-origin=\"center\" style=\"stroke-dasharray:0.01 0.02; opacity:0.5;\""
            )
        );
    }

    #[test]
    fn test_values_are_escaped() {
        let mut attrs = Attributes::new();
        attrs.class("a\" onload=\"x").id("<b>&");
        assert_eq!(
            attrs.to_string(),
            " class=\"a&quot; onload=&quot;x\" id=\"&lt;b&gt;&amp;\""
        );
        assert!(!attrs.to_string().contains(" onload="));
    }

    #[test]
    fn test_with_on_preset() {
        let attrs = Attributes::stroked().with(|a| {
            a.stroke_width(0.02);
        });
        assert!(attrs.style().contains("stroke-width:0.02;"));
        assert!(attrs.style().contains("fill:none;"));
    }
}
