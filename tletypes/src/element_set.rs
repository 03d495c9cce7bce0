use crate::{
    classification::Classification,
    constants::{GM_OVER_4PI2, SECONDS_PER_DAY, SIDEREAL_DAY_SECONDS},
    designator::InternationalDesignator,
    elements::{DragTerms, MeanElements},
    orbit_direction::OrbitDirection,
    time::{self, UtcTimestamp},
};
use derive_more::Display;
use std::f64::consts::TAU;

/// A decoded element failed its domain check; carries the field name
#[derive(Copy, Clone, Eq, PartialEq, Debug, thiserror::Error)]
#[error("Element '{0}' is outside its valid range")]
pub struct InvalidElement(pub &'static str);

/// Everything a record carries, before derivation and validation
#[derive(Clone, PartialEq, Debug)]
pub struct ElementSetFields {
    pub satellite_name: Option<String>,
    pub catalog_number: u32,
    pub classification: Classification,
    pub designator: Option<InternationalDesignator>,

    /// Four digit year
    pub epoch_year: i32,
    /// 1-based fractional day of year
    pub epoch_day: f64,

    pub ephemeris_type: u8,
    pub element_set_number: u16,
    pub elements: MeanElements,
    pub drag: DragTerms,
    pub revolution_number: u32,
}

/// Reference instant of the element set
#[derive(Copy, Clone, PartialEq, PartialOrd, Debug, Display)]
#[display(fmt = "{}", "instant")]
pub struct Epoch {
    pub year: i32,
    pub day_of_year: f64,
    pub instant: UtcTimestamp,
}

/// Time independent quantities computed once from the mean elements
#[derive(Copy, Clone, PartialEq, PartialOrd, Debug, Display)]
#[display(
    fmt = "{{n: {}, period: {}, a: {}, b: {}}}",
    "mean_motion_rad_per_sec",
    "period",
    "semi_major_axis",
    "semi_minor_axis"
)]
pub struct DerivedQuantities {
    /// Mean motion [rad/s]
    pub mean_motion_rad_per_sec: f64,

    /// Orbital period [s], mean motion scaled by the sidereal day
    pub period: f64,

    /// Semi-major axis [m]
    pub semi_major_axis: f64,

    /// Semi-minor axis [m]
    pub semi_minor_axis: f64,
}

impl DerivedQuantities {
    pub fn from_elements(elements: &MeanElements) -> Self {
        let mean_motion_rad_per_sec = elements.mean_motion * TAU / SECONDS_PER_DAY;
        // NOTE: rev/day times the sidereal day, not 1/n. The axes below are
        // defined in terms of this value.
        let period = elements.mean_motion * SIDEREAL_DAY_SECONDS;
        let semi_major_axis = (GM_OVER_4PI2 * period * period).cbrt();
        let semi_minor_axis =
            semi_major_axis * (1.0 - elements.eccentricity * elements.eccentricity).sqrt();
        Self {
            mean_motion_rad_per_sec,
            period,
            semi_major_axis,
            semi_minor_axis,
        }
    }
}

/// A validated, immutable TLE element set
#[derive(Clone, PartialEq, Debug, Display)]
#[display(
    fmt = "{{catalog: {}, epoch: {}, elements: {}}}",
    "catalog_number",
    "epoch",
    "elements"
)]
pub struct OrbitalElementSet {
    satellite_name: Option<String>,
    catalog_number: u32,
    classification: Classification,
    designator: Option<InternationalDesignator>,
    epoch: Epoch,
    ephemeris_type: u8,
    element_set_number: u16,
    elements: MeanElements,
    drag: DragTerms,
    revolution_number: u32,
    derived: DerivedQuantities,
}

impl OrbitalElementSet {
    /// Validate the fields and compute the derived quantities.
    ///
    /// Either the whole set is valid or nothing is constructed.
    pub fn new(fields: ElementSetFields) -> Result<Self, InvalidElement> {
        fields.elements.validate()?;
        if !(1.0..367.0).contains(&fields.epoch_day) {
            return Err(InvalidElement("epochDay"));
        }
        let instant = time::epoch_instant(fields.epoch_year, fields.epoch_day)
            .ok_or(InvalidElement("epochDay"))?;

        Ok(Self {
            satellite_name: fields.satellite_name,
            catalog_number: fields.catalog_number,
            classification: fields.classification,
            designator: fields.designator,
            epoch: Epoch {
                year: fields.epoch_year,
                day_of_year: fields.epoch_day,
                instant,
            },
            ephemeris_type: fields.ephemeris_type,
            element_set_number: fields.element_set_number,
            derived: DerivedQuantities::from_elements(&fields.elements),
            elements: fields.elements,
            drag: fields.drag,
            revolution_number: fields.revolution_number,
        })
    }

    pub fn satellite_name(&self) -> Option<&str> {
        self.satellite_name.as_deref()
    }

    /// NORAD catalog number
    pub fn catalog_number(&self) -> u32 {
        self.catalog_number
    }

    pub fn classification(&self) -> Classification {
        self.classification
    }

    pub fn designator(&self) -> Option<&InternationalDesignator> {
        self.designator.as_ref()
    }

    pub fn epoch(&self) -> &Epoch {
        &self.epoch
    }

    pub fn epoch_instant(&self) -> UtcTimestamp {
        self.epoch.instant
    }

    pub fn ephemeris_type(&self) -> u8 {
        self.ephemeris_type
    }

    pub fn element_set_number(&self) -> u16 {
        self.element_set_number
    }

    pub fn elements(&self) -> &MeanElements {
        &self.elements
    }

    pub fn drag(&self) -> &DragTerms {
        &self.drag
    }

    /// Revolution number at epoch
    pub fn revolution_number(&self) -> u32 {
        self.revolution_number
    }

    pub fn derived(&self) -> &DerivedQuantities {
        &self.derived
    }

    pub fn direction(&self) -> OrbitDirection {
        OrbitDirection::from_inclination(self.elements.inclination)
    }

    pub fn is_prograde(&self) -> bool {
        self.direction().is_prograde()
    }

    pub fn is_polar(&self) -> bool {
        self.direction().is_polar()
    }

    pub fn is_retrograde(&self) -> bool {
        self.direction().is_retrograde()
    }
}
