//! Newton-Raphson solver for Kepler's equation, E - e sin(E) = M

use crate::PropagationError;
use derive_more::Display;
use tracing::{trace, warn};

#[derive(Copy, Clone, PartialEq, Debug, Display)]
#[display(
    fmt = "{{max_iterations: {}, tolerance: {}}}",
    "max_iterations",
    "tolerance"
)]
pub struct SolverSettings {
    /// Give up after this many Newton steps
    pub max_iterations: usize,

    /// Stop once a step is no larger than this [rad]
    pub tolerance: f64,
}

impl SolverSettings {
    pub const DEFAULT_MAX_ITERATIONS: usize = 100;
    pub const DEFAULT_TOLERANCE: f64 = 1E-4;
}

impl Default for SolverSettings {
    fn default() -> Self {
        Self {
            max_iterations: Self::DEFAULT_MAX_ITERATIONS,
            tolerance: Self::DEFAULT_TOLERANCE,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Debug, Display)]
#[display(fmt = "{{E: {}, iterations: {}}}", "eccentric_anomaly", "iterations")]
pub struct KeplerSolution {
    /// Eccentric anomaly [rad]
    pub eccentric_anomaly: f64,

    /// Newton steps taken
    pub iterations: usize,
}

/// Solve for the eccentric anomaly [rad] given mean anomaly [rad] and eccentricity.
///
/// Starts from E = M and stops when the Newton step |f(E)/f'(E)| is within
/// the tolerance. Fails with [`PropagationError::NonConvergent`] once
/// `max_iterations` steps have been taken without getting there.
pub fn solve_kepler(
    mean_anomaly: f64,
    eccentricity: f64,
    settings: &SolverSettings,
) -> Result<KeplerSolution, PropagationError> {
    let mut eccentric_anomaly = mean_anomaly;

    for iteration in 1..=settings.max_iterations {
        let f = eccentric_anomaly - eccentricity * eccentric_anomaly.sin() - mean_anomaly;
        let df = 1.0 - eccentricity * eccentric_anomaly.cos();
        let step = f / df;
        eccentric_anomaly -= step;
        trace!(iteration, eccentric_anomaly, step, "Kepler step");

        if step.abs() <= settings.tolerance {
            return Ok(KeplerSolution {
                eccentric_anomaly,
                iterations: iteration,
            });
        }
    }

    warn!(
        mean_anomaly,
        eccentricity,
        max_iterations = settings.max_iterations,
        "Kepler solver did not converge"
    );
    Err(PropagationError::NonConvergent {
        iterations: settings.max_iterations,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    fn residual(e_anom: f64, ecc: f64, m: f64) -> f64 {
        (e_anom - ecc * e_anom.sin() - m).abs()
    }

    #[test]
    fn circular_orbit_is_identity() {
        for m in [0.0, 0.3, PI / 2.0, PI, 5.9] {
            let s = solve_kepler(m, 0.0, &SolverSettings::default()).unwrap();
            assert_eq!(s.eccentric_anomaly, m);
            assert!(s.iterations <= 1);
        }
    }

    #[test]
    fn converges_for_eccentric_orbits() {
        let settings = SolverSettings::default();
        for ecc in [0.0006703, 0.1, 0.5, 0.7235521, 0.9] {
            for step in 0..64 {
                let m = step as f64 * 2.0 * PI / 64.0;
                let s = solve_kepler(m, ecc, &settings).unwrap();
                assert!(s.iterations <= settings.max_iterations);
                assert!(
                    residual(s.eccentric_anomaly, ecc, m) < 1E-6,
                    "ecc {ecc}, M {m}: {s}"
                );
            }
        }
    }

    #[test]
    fn tight_tolerance() {
        let settings = SolverSettings {
            max_iterations: 50,
            tolerance: 1E-14,
        };
        let s = solve_kepler(1.0, 0.7235521, &settings).unwrap();
        assert!(residual(s.eccentric_anomaly, 0.7235521, 1.0) < 1E-12);
    }

    #[test]
    fn iteration_cap() {
        let settings = SolverSettings {
            max_iterations: 1,
            tolerance: 1E-15,
        };
        assert_eq!(
            solve_kepler(1.0, 0.7, &settings),
            Err(PropagationError::NonConvergent { iterations: 1 })
        );

        let settings = SolverSettings {
            max_iterations: 0,
            tolerance: 1.0,
        };
        assert_eq!(
            solve_kepler(1.0, 0.0, &settings),
            Err(PropagationError::NonConvergent { iterations: 0 })
        );
    }

    #[test]
    fn nan_input_does_not_hang() {
        assert_eq!(
            solve_kepler(f64::NAN, 0.1, &SolverSettings::default()),
            Err(PropagationError::NonConvergent { iterations: 100 })
        );
    }
}
