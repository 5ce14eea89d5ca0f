//! The tree a [`super::Canvas`] accumulates: groups of paths and further groups.
use svg::node::element::Group as SvgGroup;

use crate::attributes::Attributes;
use crate::errors::PathError;
use crate::path::Path;

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Path(Path),
    Group(Group),
}

impl Node {
    pub fn string(&self, depth: usize) -> Result<String, PathError> {
        match self {
            Node::Path(path) => path.string(depth),
            Node::Group(group) => group.string(depth),
        }
    }

    pub fn to_element(&self) -> Result<Box<dyn svg::Node>, PathError> {
        let element: Box<dyn svg::Node> = match self {
            Node::Path(path) => Box::new(path.to_element()?),
            Node::Group(group) => Box::new(group.to_element()?),
        };
        Ok(element)
    }
}

/// Ordered children sharing one set of attributes, written as a `<g>`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Group {
    attributes: Attributes,
    children: Vec<Node>,
}

impl Group {
    pub fn new(attributes: Attributes) -> Group {
        Group {
            attributes,
            children: vec![],
        }
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub(crate) fn children_mut(&mut self) -> &mut Vec<Node> {
        &mut self.children
    }

    pub fn string(&self, depth: usize) -> Result<String, PathError> {
        let indent = "  ".repeat(depth);
        let mut out = format!("{}<g{}>\n", indent, self.attributes);
        for child in &self.children {
            out.push_str(&child.string(depth + 1)?);
            out.push('\n');
        }
        out.push_str(&indent);
        out.push_str("</g>");
        Ok(out)
    }

    pub fn to_element(&self) -> Result<SvgGroup, PathError> {
        let mut element = SvgGroup::new();
        for (key, value) in self.attributes.pairs() {
            element = element.set(key, value);
        }
        for child in &self.children {
            element = element.add(child.to_element()?);
        }
        Ok(element)
    }
}
