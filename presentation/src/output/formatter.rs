//! Radar output formatter

use radar_domain::Radar;

/// Trait for formatting an assembled radar
pub trait RadarFormatter: Send + Sync {
    /// Format the radar for console display
    fn format(&self, radar: &Radar) -> String;

    /// Format as JSON
    fn format_json(&self, radar: &Radar) -> String;
}

/// Plain-text quadrant/ring layout
pub struct TextFormatter;

impl TextFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl RadarFormatter for TextFormatter {
    fn format(&self, radar: &Radar) -> String {
        let mut out = String::new();
        out.push_str(&format!(
            "{} ({} quadrants, {} blips)\n",
            radar.current_sheet_name(),
            radar.quadrants().len(),
            radar.blip_count()
        ));

        for quadrant in radar.quadrants() {
            out.push_str(&format!("\n{}\n", quadrant.name()));
            // Blips grouped by ring order inside each quadrant,
            // dataset order preserved within a ring.
            for order in 0..4 {
                for blip in quadrant.blips().iter().filter(|b| b.ring().order() == order) {
                    let marker = if blip.is_new() { " (new)" } else { "" };
                    out.push_str(&format!(
                        "  [{}] {}{}\n",
                        blip.ring().name(),
                        blip.name(),
                        marker
                    ));
                }
            }
        }

        if !radar.alternatives().is_empty() {
            out.push_str(&format!(
                "\nAlternative sheets: {}\n",
                radar.alternatives().join(", ")
            ));
        }
        out
    }

    fn format_json(&self, radar: &Radar) -> String {
        serde_json::to_string_pretty(radar)
            .unwrap_or_else(|e| format!("{{\"error\": \"{e}\"}}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use radar_domain::{Blip, Quadrant, Ring};
    use std::sync::Arc;

    fn sample_radar() -> Radar {
        let adopt = Arc::new(Ring::new("Adopt").unwrap());
        let hold = Arc::new(Ring::new("hold").unwrap());

        let mut tools = Quadrant::new("Tools");
        tools.add(Blip::new("B", hold, false, "", ""));
        tools.add(Blip::new("A", adopt, true, "", ""));

        let mut radar = Radar::new();
        radar.add_quadrant(tools);
        radar.set_current_sheet("CSV File");
        radar
    }

    #[test]
    fn test_text_format_groups_by_ring_order() {
        let text = TextFormatter::new().format(&sample_radar());
        assert!(text.contains("CSV File (1 quadrants, 2 blips)"));
        // A (adopt) is listed before B (hold) despite dataset order.
        let a = text.find("[Adopt] A (new)").unwrap();
        let b = text.find("[hold] B").unwrap();
        assert!(a < b);
    }

    #[test]
    fn test_json_format_is_valid_json() {
        let json = TextFormatter::new().format_json(&sample_radar());
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["current_sheet_name"], "CSV File");
    }
}
