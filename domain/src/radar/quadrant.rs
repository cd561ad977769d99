//! Quadrant entity

use super::blip::Blip;
use serde::{Deserialize, Serialize};

/// A category grouping of blips (e.g. "Tools", "Languages")
///
/// Created lazily when the first blip referencing it is assembled;
/// blips keep their dataset order within the quadrant.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Quadrant {
    name: String,
    blips: Vec<Blip>,
}

impl Quadrant {
    /// Create an empty quadrant with a display name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            blips: Vec::new(),
        }
    }

    pub fn add(&mut self, blip: Blip) {
        self.blips.push(blip);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn blips(&self) -> &[Blip] {
        &self.blips
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::radar::ring::Ring;
    use std::sync::Arc;

    #[test]
    fn test_blips_keep_insertion_order() {
        let ring = Arc::new(Ring::new("trial").unwrap());
        let mut quadrant = Quadrant::new("Tools");
        quadrant.add(Blip::new("first", ring.clone(), false, "", ""));
        quadrant.add(Blip::new("second", ring, true, "", ""));

        let names: Vec<&str> = quadrant.blips().iter().map(|b| b.name()).collect();
        assert_eq!(names, vec!["first", "second"]);
    }
}
