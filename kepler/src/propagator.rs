use crate::{
    frames::{
        celestial_to_earth_fixed, geodetic_sub_point, greenwich_hour_angle,
        orbital_plane_position, perifocal_to_celestial, GeodeticPoint,
    },
    solver::{solve_kepler, SolverSettings},
    PropagationError,
};
use derive_more::Display;
use na::{Vector2, Vector3};
use std::f64::consts::TAU;
use tletypes::{
    element_set::OrbitalElementSet,
    time::{seconds_between, UtcTimestamp},
};
use tracing::debug;

/// State of a satellite at one evaluation instant
#[derive(Copy, Clone, PartialEq, Debug, Display)]
#[display(
    fmt = "{{elapsed: {}, E: {}, r: {}, sub_point: {}}}",
    "elapsed_seconds",
    "eccentric_anomaly",
    "radius",
    "sub_point"
)]
pub struct PropagationResult {
    /// Seconds since the element set epoch, negative before it
    pub elapsed_seconds: f64,

    /// Mean anomaly at the instant [rad], [0, 2pi)
    pub mean_anomaly: f64,

    /// Solved eccentric anomaly [rad]
    pub eccentric_anomaly: f64,

    pub solver_iterations: usize,

    /// Orbital radius [m]
    pub radius: f64,

    /// Position in the orbital plane, x towards perigee [m]
    pub orbital_plane: Vector2<f64>,

    /// Geocentric equatorial position, celestial frame [m]
    pub celestial: Vector3<f64>,

    /// Geocentric equatorial position, Earth-fixed frame [m]
    pub earth_fixed: Vector3<f64>,

    /// [rad], [0, 2pi)
    pub greenwich_hour_angle: f64,

    pub sub_point: GeodeticPoint,
}

/// Reduce an angle [rad] into [0, 2pi)
pub fn reduce_angle(angle: f64) -> f64 {
    let reduced = angle - TAU * (angle / TAU).floor();
    if reduced >= TAU {
        0.0
    } else {
        reduced
    }
}

/// Two-body propagator. Holds only solver settings, no per-call state.
#[derive(Copy, Clone, PartialEq, Debug, Default)]
pub struct Propagator {
    settings: SolverSettings,
}

impl Propagator {
    pub fn new(settings: SolverSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &SolverSettings {
        &self.settings
    }

    /// Position of `elements` at `at`
    pub fn propagate(
        &self,
        elements: &OrbitalElementSet,
        at: UtcTimestamp,
    ) -> Result<PropagationResult, PropagationError> {
        let mean = elements.elements();
        let derived = elements.derived();
        let ecc = mean.eccentricity;

        let elapsed_seconds = seconds_between(elements.epoch_instant(), at);
        let mean_anomaly = reduce_angle(
            derived.mean_motion_rad_per_sec * elapsed_seconds + mean.mean_anomaly.to_radians(),
        );

        let solution = solve_kepler(mean_anomaly, ecc, &self.settings)?;
        let eccentric_anomaly = solution.eccentric_anomaly;
        let radius = derived.semi_major_axis * (1.0 - ecc * eccentric_anomaly.cos());

        let orbital_plane = orbital_plane_position(
            derived.semi_major_axis,
            derived.semi_minor_axis,
            ecc,
            eccentric_anomaly,
        );
        let celestial =
            perifocal_to_celestial(mean) * Vector3::new(orbital_plane.x, orbital_plane.y, 0.0);

        let greenwich_hour_angle = greenwich_hour_angle(at);
        let earth_fixed = celestial_to_earth_fixed(&celestial, greenwich_hour_angle);
        let sub_point = geodetic_sub_point(&earth_fixed, radius)?;

        debug!(
            catalog_number = elements.catalog_number(),
            elapsed_seconds,
            iterations = solution.iterations,
            latitude = sub_point.latitude,
            longitude = sub_point.longitude,
            "Propagated element set"
        );

        Ok(PropagationResult {
            elapsed_seconds,
            mean_anomaly,
            eccentric_anomaly,
            solver_iterations: solution.iterations,
            radius,
            orbital_plane,
            celestial,
            earth_fixed,
            greenwich_hour_angle,
            sub_point,
        })
    }
}

/// Propagate with the default solver settings
pub fn propagate(
    elements: &OrbitalElementSet,
    at: UtcTimestamp,
) -> Result<PropagationResult, PropagationError> {
    Propagator::default().propagate(elements, at)
}
