//! Business logic services for the Farmie backend

pub mod memory_store;
pub mod pg_store;
pub mod providers;
pub mod recommendation;
pub mod weather;

pub use memory_store::InMemoryStore;
pub use pg_store::PgStore;
pub use providers::{CropCatalog, CultivationLedger, FarmLocator};
pub use recommendation::RecommendationService;
pub use weather::WeatherService;
