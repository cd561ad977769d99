//! Use cases

pub mod load_radar;

pub use load_radar::{DocumentTitle, LoadError, LoadOutcome, LoadRadarInput, LoadRadarUseCase};
