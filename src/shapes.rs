//! Functions to create simple point sets

mod cube;

pub use cube::{hypercube_vertices, unit_lattice};
