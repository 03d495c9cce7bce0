//! Simplified two-body propagation of TLE element sets
//!
//! Mean anomaly is advanced linearly from the epoch, Kepler's equation is
//! solved for the eccentric anomaly and the orbital plane position is rotated
//! into celestial and then Earth-fixed coordinates. No perturbations are
//! modeled; the drag terms of the element set are ignored.

pub extern crate nalgebra as na;

pub use crate::error::PropagationError;
pub use crate::frames::{
    celestial_to_earth_fixed, geodetic_sub_point, greenwich_hour_angle, orbital_plane_position,
    perifocal_to_celestial, GeodeticPoint,
};
pub use crate::propagator::{propagate, reduce_angle, PropagationResult, Propagator};
pub use crate::solver::{solve_kepler, KeplerSolution, SolverSettings};

pub mod error;
pub mod frames;
pub mod propagator;
pub mod solver;
