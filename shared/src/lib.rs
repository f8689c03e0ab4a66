//! Shared types and models for the Farmie crop recommendation platform
//!
//! This crate holds the pure recommendation engine (weather reduction,
//! cultivation aggregation, suitability scoring and ranking) so the backend
//! and the client (via WASM) compute identical results.

pub mod models;
pub mod types;
pub mod validation;

pub use models::*;
pub use types::*;
pub use validation::*;
