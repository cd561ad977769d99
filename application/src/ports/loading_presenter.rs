//! Loading presenter port

/// Loading indicator bracketing the Loading state
///
/// `show` is called on entry to Loading, `hide` when the load reaches
/// a terminal state (Ready or Failed).
pub trait LoadingPresenter: Send + Sync {
    fn show(&self);
    fn hide(&self);
}

/// No-op loading presenter
pub struct NoLoadingPresenter;

impl LoadingPresenter for NoLoadingPresenter {
    fn show(&self) {}
    fn hide(&self) {}
}
