pub use crate::classification::Classification;
pub use crate::designator::InternationalDesignator;
pub use crate::element_set::{
    DerivedQuantities, ElementSetFields, Epoch, InvalidElement, OrbitalElementSet,
};
pub use crate::elements::{DragTerms, MeanElements};
pub use crate::orbit_direction::OrbitDirection;
pub use crate::time::UtcTimestamp;
pub use crate::tle::UnstructuredTle;
