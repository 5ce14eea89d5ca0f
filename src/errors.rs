use thiserror::Error;

/// Structural problems with a [`crate::path::Path`], detected when it is serialized.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PathError {
    #[error("invalid path state: path has no segments")]
    Empty,

    #[error("invalid path state: path must start with a move, found {found}")]
    MissingMove { found: &'static str },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    #[error("cannot compute the centroid of zero points")]
    EmptyCentroid,
}

/// Problems loading a [`crate::context::config::SketchConfig`].
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to parse sketch config: {0}")]
    Parse(#[from] ron::error::SpannedError),

    #[error("invalid canvas dimensions {width}x{height}, both must be positive and finite")]
    InvalidDimensions { width: f64, height: f64 },
}
