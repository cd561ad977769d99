//! Error presenter port

/// Displays the user-facing message for a failed load
///
/// Invoked exactly once per failed load with the already-translated
/// message; implementations never see raw error values.
pub trait ErrorPresenter: Send + Sync {
    fn present(&self, user_message: &str);
}

/// No-op error presenter
pub struct NoErrorPresenter;

impl ErrorPresenter for NoErrorPresenter {
    fn present(&self, _user_message: &str) {}
}
