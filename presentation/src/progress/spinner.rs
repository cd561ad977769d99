//! Spinner loading presenter

use indicatif::{ProgressBar, ProgressStyle};
use radar_application::LoadingPresenter;
use std::sync::Mutex;
use std::time::Duration;

/// Shows a spinner while a load is in flight
///
/// `show`/`hide` bracket the Loading state; the spinner is created
/// lazily on `show` and cleared on `hide`.
pub struct SpinnerLoadingPresenter {
    bar: Mutex<Option<ProgressBar>>,
}

impl SpinnerLoadingPresenter {
    pub fn new() -> Self {
        Self {
            bar: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap()
    }
}

impl Default for SpinnerLoadingPresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl LoadingPresenter for SpinnerLoadingPresenter {
    fn show(&self) {
        let bar = ProgressBar::new_spinner();
        bar.set_style(Self::spinner_style());
        bar.set_message("Loading radar data...");
        bar.enable_steady_tick(Duration::from_millis(100));
        *self.bar.lock().unwrap() = Some(bar);
    }

    fn hide(&self) {
        if let Some(bar) = self.bar.lock().unwrap().take() {
            bar.finish_and_clear();
        }
    }
}
