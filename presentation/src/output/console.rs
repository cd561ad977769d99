//! Console implementations of the rendering and error-display ports

use super::formatter::RadarFormatter;
use colored::Colorize;
use radar_application::{ErrorPresenter, Renderer};
use radar_domain::Radar;

/// Renders the radar to stdout through a [`RadarFormatter`]
pub struct ConsoleRenderer {
    formatter: Box<dyn RadarFormatter>,
    json: bool,
}

impl ConsoleRenderer {
    pub fn new(formatter: Box<dyn RadarFormatter>) -> Self {
        Self {
            formatter,
            json: false,
        }
    }

    /// Emit JSON instead of the text layout.
    pub fn with_json(mut self, json: bool) -> Self {
        self.json = json;
        self
    }
}

impl Renderer for ConsoleRenderer {
    fn render(&self, radar: &Radar, viewport_size: u32) {
        if self.json {
            println!("{}", self.formatter.format_json(radar));
        } else {
            println!("{}", format!("viewport: {viewport_size}").dimmed());
            println!("{}", self.formatter.format(radar));
        }
    }
}

/// Presents load failures on stderr
pub struct ConsoleErrorPresenter {
    color: bool,
}

impl ConsoleErrorPresenter {
    pub fn new(color: bool) -> Self {
        Self { color }
    }
}

impl ErrorPresenter for ConsoleErrorPresenter {
    fn present(&self, user_message: &str) {
        if self.color {
            eprintln!("{}", user_message.red().bold());
        } else {
            eprintln!("{user_message}");
        }
    }
}
