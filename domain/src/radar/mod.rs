//! Radar aggregate
//!
//! Entities built once per successful load and immutable thereafter:
//! the [`Radar`] owns its [`Quadrant`]s, each quadrant owns its
//! [`Blip`]s, and every blip holds a shared reference to one of at
//! most four [`Ring`] values resolved for that load.

pub mod blip;
pub mod quadrant;
pub mod ring;
pub mod root;
pub mod row;

// Re-export main types
pub use blip::Blip;
pub use quadrant::Quadrant;
pub use ring::Ring;
pub use root::Radar;
pub use row::BlipRow;
