//! `TripCraft` - Personalized multi-day travel itinerary planning
//!
//! This library assembles city-break itineraries from three tabular
//! datasets: one accommodation within budget for the stay, a fresh
//! attraction and restaurant for every day, and a running spend estimate.
//! Companion recommenders map a budget to transportation advice and
//! sample destination suggestions.

pub mod api;
pub mod config;
pub mod datasets;
pub mod error;
pub mod models;
pub mod planner;
pub mod web;

// Re-export core types for public API
pub use config::TripCraftConfig;
pub use datasets::{DatasetKind, DatasetStore};
pub use error::TripCraftError;
pub use models::{Accommodation, Attraction, PriceRange, Restaurant};
pub use planner::itinerary::{
    Itinerary, ItineraryDay, ItineraryPlanner, NoMatchReason, PlanOutcome, PlanRequest,
};
pub use planner::recommend::{
    DestinationSuggestion, recommend_destinations, recommend_transportation,
};
pub use planner::sampler::{RandomSampler, Sampler, SeededSampler};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, TripCraftError>;
