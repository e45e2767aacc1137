//! This is the documentation for the **snellview** package, a small tool for visualizing the
//! refraction of a light ray at the planar interface between two media.
//!
//! For given refractive indices `n1`, `n2` and an angle of incidence, Snell's law
//! (`n1·sin θ1 = n2·sin θ2`) determines whether the ray is refracted or totally internally
//! reflected. The result is a [`solver::RayDiagram`] which can be plotted (see
//! [`plottable`]) or written as JSON report (see [`reporter`]).
#![allow(clippy::module_name_repetitions)]

pub mod console;
pub mod error;
pub mod incidence;
pub mod medium;
pub mod medium_table;
pub mod plottable;
pub mod reporter;
pub mod solver;
pub mod utils;

/// Return the version information of the currently built snellview executable.
#[must_use]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
