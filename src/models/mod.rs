//! Data models for the TripCraft application
//!
//! This module contains the core domain models organized by concern:
//! - Attraction: Sightseeing rows from the tourism dataset
//! - Restaurant: Dining rows with cuisine and price tier
//! - Accommodation: Lodging rows with nightly price ranges
//! - Price: Parsed price intervals and amounts

pub mod accommodation;
pub mod attraction;
pub mod price;
pub mod restaurant;

// Re-export all public types for convenient access
pub use accommodation::Accommodation;
pub use attraction::Attraction;
pub use price::PriceRange;
pub use restaurant::Restaurant;
