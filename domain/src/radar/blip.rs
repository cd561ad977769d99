//! Blip entity

use super::ring::Ring;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A single technology entry on the radar
///
/// Belongs to exactly one quadrant and holds a non-owning reference to
/// one of the load-scoped shared rings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Blip {
    name: String,
    ring: Arc<Ring>,
    is_new: bool,
    topic: String,
    description: String,
}

impl Blip {
    pub fn new(
        name: impl Into<String>,
        ring: Arc<Ring>,
        is_new: bool,
        topic: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            ring,
            is_new,
            topic: topic.into(),
            description: description.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ring(&self) -> &Ring {
        &self.ring
    }

    /// The shared ring handle, for callers that need to keep it.
    pub fn ring_handle(&self) -> Arc<Ring> {
        self.ring.clone()
    }

    pub fn is_new(&self) -> bool {
        self.is_new
    }

    pub fn topic(&self) -> &str {
        &self.topic
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blip_accessors() {
        let ring = Arc::new(Ring::new("adopt").unwrap());
        let blip = Blip::new("Terraform", ring, true, "infra", "Infrastructure as code");
        assert_eq!(blip.name(), "Terraform");
        assert_eq!(blip.ring().order(), 0);
        assert!(blip.is_new());
        assert_eq!(blip.topic(), "infra");
        assert_eq!(blip.description(), "Infrastructure as code");
    }

    #[test]
    fn test_blips_share_one_ring_value() {
        let ring = Arc::new(Ring::new("hold").unwrap());
        let a = Blip::new("A", ring.clone(), false, "", "");
        let b = Blip::new("B", ring.clone(), false, "", "");
        assert!(Arc::ptr_eq(&a.ring_handle(), &b.ring_handle()));
    }
}
