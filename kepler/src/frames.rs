//! Orbital plane, celestial and Earth-fixed frames

use crate::{propagator::reduce_angle, PropagationError};
use derive_more::Display;
use na::{Rotation3, Vector2, Vector3};
use tletypes::{
    constants::{EARTH_ROTATION_RATE, GHAA_REFERENCE_DEG},
    elements::MeanElements,
    time::{ghaa_reference_instant, seconds_between, UtcTimestamp},
};

/// Slack allowed on |z/r| before the latitude is considered undefined
const LATITUDE_DOMAIN_SLACK: f64 = 1E-9;

/// Sub-satellite point
#[derive(Copy, Clone, PartialEq, PartialOrd, Debug, Display)]
#[display(fmt = "{{lat: {}, lon: {}}}", "latitude", "longitude")]
pub struct GeodeticPoint {
    /// [deg], [-90, 90]
    pub latitude: f64,
    /// [deg], (-180, 180]
    pub longitude: f64,
}

/// Position in the orbital plane, x towards perigee [m]
pub fn orbital_plane_position(
    semi_major_axis: f64,
    semi_minor_axis: f64,
    eccentricity: f64,
    eccentric_anomaly: f64,
) -> Vector2<f64> {
    Vector2::new(
        semi_major_axis * (eccentric_anomaly.cos() - eccentricity),
        semi_minor_axis * eccentric_anomaly.sin(),
    )
}

/// 3-1-3 rotation from the orbital plane into celestial coordinates:
/// argument of perigee about z, inclination about x, RAAN about z
pub fn perifocal_to_celestial(elements: &MeanElements) -> Rotation3<f64> {
    let raan = Rotation3::from_axis_angle(
        &Vector3::z_axis(),
        elements.right_ascension.to_radians(),
    );
    let incl = Rotation3::from_axis_angle(&Vector3::x_axis(), elements.inclination.to_radians());
    let argp = Rotation3::from_axis_angle(
        &Vector3::z_axis(),
        elements.argument_of_perigee.to_radians(),
    );
    raan * incl * argp
}

/// Greenwich hour angle of Aries at `at` [rad], [0, 2pi)
pub fn greenwich_hour_angle(at: UtcTimestamp) -> f64 {
    let dt = seconds_between(ghaa_reference_instant(), at);
    reduce_angle(GHAA_REFERENCE_DEG.to_radians() + EARTH_ROTATION_RATE * dt)
}

/// Rotate celestial coordinates by -GHAA about z, z is carried over unchanged
pub fn celestial_to_earth_fixed(
    celestial: &Vector3<f64>,
    greenwich_hour_angle: f64,
) -> Vector3<f64> {
    let (sin, cos) = greenwich_hour_angle.sin_cos();
    Vector3::new(
        celestial.x * cos + celestial.y * sin,
        -celestial.x * sin + celestial.y * cos,
        celestial.z,
    )
}

/// Latitude from asin(z/r), longitude from atan2(y, x).
///
/// `radius` is the orbital radius at the same instant. Rounding excess up to
/// a small slack is clamped, anything beyond is a [`PropagationError::DomainError`].
pub fn geodetic_sub_point(
    earth_fixed: &Vector3<f64>,
    radius: f64,
) -> Result<GeodeticPoint, PropagationError> {
    let ratio = earth_fixed.z / radius;
    if !(ratio.abs() <= 1.0 + LATITUDE_DOMAIN_SLACK) {
        return Err(PropagationError::DomainError { ratio });
    }
    Ok(GeodeticPoint {
        latitude: ratio.clamp(-1.0, 1.0).asin().to_degrees(),
        longitude: earth_fixed.y.atan2(earth_fixed.x).to_degrees(),
    })
}
