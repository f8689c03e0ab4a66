//! HTTP request handlers

pub mod health;
pub mod recommendation;
pub mod weather;

pub use health::health_check;
pub use recommendation::{get_recommendation_report, get_recommendations};
pub use weather::get_farm_weather;
