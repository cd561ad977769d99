//! Ring entity and ring-order resolution
//!
//! Ring order is semantically fixed: `adopt=0, trial=1, assess=2,
//! hold=3`. The position at which a ring name is first discovered in a
//! dataset never changes its order.

use crate::error::RadarError;
use serde::{Deserialize, Serialize};

/// Number of rings a radar can carry.
pub const MAX_RINGS: usize = 4;

/// A concentric maturity band on the radar
///
/// The `name` keeps the casing used in the dataset for display; the
/// `order` is always the semantic rank.
///
/// # Example
///
/// ```
/// use radar_domain::Ring;
///
/// let ring = Ring::new("Adopt").unwrap();
/// assert_eq!(ring.order(), 0);
/// assert_eq!(ring.name(), "Adopt");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Ring {
    name: String,
    order: usize,
}

impl Ring {
    /// Create a ring, resolving its fixed order from the name.
    pub fn new(name: impl Into<String>) -> Result<Self, RadarError> {
        let name = name.into();
        let order = Self::order_of(&name)?;
        Ok(Self { name, order })
    }

    /// Resolve a ring name to its fixed order, case-insensitively.
    ///
    /// Fails with [`RadarError::UnknownRing`] for any name outside the
    /// four known rings.
    pub fn order_of(name: &str) -> Result<usize, RadarError> {
        match name.to_lowercase().as_str() {
            "adopt" => Ok(0),
            "trial" => Ok(1),
            "assess" => Ok(2),
            "hold" => Ok(3),
            _ => Err(RadarError::UnknownRing(name.to_string())),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn order(&self) -> usize {
        self.order
    }
}
