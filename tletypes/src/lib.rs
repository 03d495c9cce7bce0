pub mod classification;
pub mod constants;
pub mod designator;
pub mod element_set;
pub mod elements;
pub mod orbit_direction;
pub mod prelude;
pub mod time;
pub mod tle;
