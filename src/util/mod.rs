/// Seedable PCG32 generator underlying every random helper.
pub mod pcg;
