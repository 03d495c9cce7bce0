use derive_more::Display;

/// Direction of travel relative to Earth's rotation, from the inclination
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Display)]
pub enum OrbitDirection {
    /// Inclination below 90 degrees
    Prograde,
    /// Inclination of exactly 90 degrees
    Polar,
    /// Inclination above 90 degrees
    Retrograde,
}

impl OrbitDirection {
    /// Inclination [deg]
    pub fn from_inclination(inclination: f64) -> Self {
        use OrbitDirection::*;
        if inclination > 90.0 {
            Retrograde
        } else if inclination < 90.0 {
            Prograde
        } else {
            Polar
        }
    }

    pub fn is_prograde(self) -> bool {
        self == OrbitDirection::Prograde
    }

    pub fn is_polar(self) -> bool {
        self == OrbitDirection::Polar
    }

    pub fn is_retrograde(self) -> bool {
        self == OrbitDirection::Retrograde
    }
}
