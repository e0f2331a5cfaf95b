/// Set of geometric primitives - atomic building blocks for the geometry module
pub mod primitives;
