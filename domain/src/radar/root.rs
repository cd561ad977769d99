//! Radar root aggregate

use super::quadrant::Quadrant;
use serde::{Deserialize, Serialize};

/// The root aggregate for one fully loaded dataset
///
/// Owns all quadrants in first-seen order, plus the names of any
/// alternative sheets the UI can switch to and the name of the sheet
/// this radar was built from.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Radar {
    quadrants: Vec<Quadrant>,
    alternatives: Vec<String>,
    current_sheet_name: String,
}

impl Radar {
    pub fn new() -> Self {
        Self {
            quadrants: Vec::new(),
            alternatives: Vec::new(),
            current_sheet_name: String::new(),
        }
    }

    pub fn add_quadrant(&mut self, quadrant: Quadrant) {
        self.quadrants.push(quadrant);
    }

    pub fn add_alternative(&mut self, sheet_name: impl Into<String>) {
        self.alternatives.push(sheet_name.into());
    }

    pub fn set_current_sheet(&mut self, sheet_name: impl Into<String>) {
        self.current_sheet_name = sheet_name.into();
    }

    pub fn quadrants(&self) -> &[Quadrant] {
        &self.quadrants
    }

    pub fn alternatives(&self) -> &[String] {
        &self.alternatives
    }

    pub fn current_sheet_name(&self) -> &str {
        &self.current_sheet_name
    }

    /// Total number of blips across all quadrants.
    pub fn blip_count(&self) -> usize {
        self.quadrants.iter().map(|q| q.blips().len()).sum()
    }
}

impl Default for Radar {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quadrants_keep_first_seen_order() {
        let mut radar = Radar::new();
        radar.add_quadrant(Quadrant::new("Tools"));
        radar.add_quadrant(Quadrant::new("Languages"));

        let names: Vec<&str> = radar.quadrants().iter().map(|q| q.name()).collect();
        assert_eq!(names, vec!["Tools", "Languages"]);
    }

    #[test]
    fn test_alternatives_and_current_sheet() {
        let mut radar = Radar::new();
        radar.add_alternative("Vol 1");
        radar.add_alternative("Vol 2");
        radar.set_current_sheet("CSV File");

        assert_eq!(radar.alternatives(), ["Vol 1", "Vol 2"]);
        assert_eq!(radar.current_sheet_name(), "CSV File");
    }
}
