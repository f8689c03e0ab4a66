//! Domain models for the Farmie crop recommendation engine

mod crop;
mod cultivation;
mod farm;
mod recommendation;
mod suitability;
mod weather;

pub use crop::*;
pub use cultivation::*;
pub use farm::*;
pub use recommendation::*;
pub use suitability::*;
pub use weather::*;
