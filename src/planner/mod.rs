//! Itinerary planning module
//!
//! This module provides the planning core, including:
//! - Candidate filtering by type, cuisine, diet, and budget
//! - Uniqueness tracking so days never repeat a pick
//! - Daily budget estimation from fees, meal tiers, and nightly rates
//! - The all-or-nothing multi-day planning state machine
//! - Standalone transportation and destination recommenders

pub mod budget;
pub mod filters;
pub mod itinerary;
pub mod recommend;
pub mod sampler;

// Re-export commonly used types from submodules
pub use itinerary::{
    Itinerary, ItineraryDay, ItineraryPlanner, NoMatchReason, PlanOutcome, PlanRequest,
};
pub use recommend::{DestinationSuggestion, recommend_destinations, recommend_transportation};
pub use sampler::{RandomSampler, Sampler, SeededSampler};
