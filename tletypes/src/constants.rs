//! Physical constants shared by the element set derivation and the propagator

use std::f64::consts::{PI, TAU};

/// Solar day [s]
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Sidereal day [s]
pub const SIDEREAL_DAY_SECONDS: f64 = 86_164.0984;

/// Tropical year [days]
pub const TROPICAL_YEAR_DAYS: f64 = 365.242197;

/// Earth's gravitational parameter GM [m^3/s^2]
pub const EARTH_GM: f64 = 3.986004418E14;

/// GM / (4 pi^2) [m^3/s^2], the Kepler's third law factor a^3 = GM_OVER_4PI2 * T^2
pub const GM_OVER_4PI2: f64 = EARTH_GM / (4.0 * PI * PI);

/// Earth's rotation rate relative to the vernal equinox [rad/s].
/// One turn per solar day plus the extra turn per tropical year.
pub const EARTH_ROTATION_RATE: f64 = (TAU + TAU / TROPICAL_YEAR_DAYS) / SECONDS_PER_DAY;

/// Greenwich hour angle of Aries at [`GHAA_REFERENCE_UNIX_SECONDS`] [deg]
pub const GHAA_REFERENCE_DEG: f64 = 280.46061837;

/// J2000.0, 2000-01-01T12:00:00Z, as unix seconds
pub const GHAA_REFERENCE_UNIX_SECONDS: i64 = 946_728_000;

/// Epoch years at or above this two digit value belong to the 1900s
pub const EPOCH_YEAR_PIVOT: u8 = 57;
