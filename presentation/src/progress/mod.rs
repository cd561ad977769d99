//! Loading indicator

pub mod spinner;

pub use spinner::SpinnerLoadingPresenter;
