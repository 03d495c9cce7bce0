use crate::element_set::InvalidElement;
use derive_more::Display;

/// Mean orbital elements from line 2
#[derive(Copy, Clone, PartialEq, PartialOrd, Debug, Display)]
#[display(
    fmt = "{{incl: {}, raan: {}, ecc: {}, argp: {}, ma: {}, n: {}}}",
    "inclination",
    "right_ascension",
    "eccentricity",
    "argument_of_perigee",
    "mean_anomaly",
    "mean_motion"
)]
pub struct MeanElements {
    /// Inclination [deg], [0, 180]
    pub inclination: f64,

    /// Right ascension of the ascending node [deg], [0, 360)
    pub right_ascension: f64,

    /// Eccentricity, [0, 1)
    pub eccentricity: f64,

    /// Argument of perigee [deg], [0, 360)
    pub argument_of_perigee: f64,

    /// Mean anomaly [deg], [0, 360)
    pub mean_anomaly: f64,

    /// Mean motion [rev/day], > 0
    pub mean_motion: f64,
}

/// Drag model terms from line 1.
///
/// Stored as decoded, the propagator does not use them.
#[derive(Copy, Clone, PartialEq, PartialOrd, Debug, Default, Display)]
#[display(
    fmt = "{{ndot: {}, nddot: {}, bstar: {}}}",
    "mean_motion_dot",
    "mean_motion_ddot",
    "bstar"
)]
pub struct DragTerms {
    /// First derivative of mean motion divided by two [rev/day^2]
    pub mean_motion_dot: f64,

    /// Second derivative of mean motion divided by six [rev/day^3]
    pub mean_motion_ddot: f64,

    /// B* drag term [1/earth radii]
    pub bstar: f64,
}

impl MeanElements {
    /// Check every element against its domain, reporting the first offender
    pub fn validate(&self) -> Result<(), InvalidElement> {
        let in_turn = |v: f64| (0.0..360.0).contains(&v);

        if !(0.0..=180.0).contains(&self.inclination) {
            return Err(InvalidElement("inclination"));
        }
        if !in_turn(self.right_ascension) {
            return Err(InvalidElement("rightAscension"));
        }
        if !(0.0..1.0).contains(&self.eccentricity) {
            return Err(InvalidElement("eccentricity"));
        }
        if !in_turn(self.argument_of_perigee) {
            return Err(InvalidElement("argumentOfPerigee"));
        }
        if !in_turn(self.mean_anomaly) {
            return Err(InvalidElement("meanAnomaly"));
        }
        if !(self.mean_motion.is_finite() && self.mean_motion > 0.0) {
            return Err(InvalidElement("meanMotion"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn iss() -> MeanElements {
        MeanElements {
            inclination: 51.6416,
            right_ascension: 247.4627,
            eccentricity: 0.0006703,
            argument_of_perigee: 130.536,
            mean_anomaly: 325.0288,
            mean_motion: 15.72125391,
        }
    }

    #[test]
    fn valid_elements() {
        assert_eq!(iss().validate(), Ok(()));
    }

    #[test]
    fn out_of_range_elements() {
        let cases: [(fn(&mut MeanElements), &str); 7] = [
            (|e| e.inclination = 180.5, "inclination"),
            (|e| e.right_ascension = 360.0, "rightAscension"),
            (|e| e.eccentricity = 1.0, "eccentricity"),
            (|e| e.argument_of_perigee = -0.1, "argumentOfPerigee"),
            (|e| e.mean_anomaly = f64::NAN, "meanAnomaly"),
            (|e| e.mean_motion = 0.0, "meanMotion"),
            (|e| e.mean_motion = -1.0, "meanMotion"),
        ];
        for (mutate, field) in cases {
            let mut e = iss();
            mutate(&mut e);
            assert_eq!(e.validate(), Err(InvalidElement(field)));
        }
    }
}
