//! Daily budget estimation
//!
//! A day costs the attraction entrance fee plus a meal estimate derived
//! from the restaurant price tier plus the accommodation nightly rate.

use crate::error::TripCraftError;
use crate::models::{Attraction, Restaurant};

/// Pounds per `£` symbol in a restaurant price tier
const MEAL_COST_PER_TIER: u32 = 10;

/// Meal cost estimate: price tier times a flat per-tier amount.
/// `"££"` estimates to 20, `"££££"` to 40.
#[must_use]
pub fn meal_estimate(restaurant: &Restaurant) -> u32 {
    restaurant.price_tier() * MEAL_COST_PER_TIER
}

/// Estimated spend for one day: entrance fee + meal estimate + nightly
/// rate. Fails only when the entrance fee text cannot be parsed.
pub fn calculate_daily_total(
    attraction: &Attraction,
    restaurant: &Restaurant,
    nightly_rate: f64,
) -> Result<f64, TripCraftError> {
    let entrance_fee = attraction.entrance_fee_pounds()?;
    Ok(f64::from(entrance_fee) + f64::from(meal_estimate(restaurant)) + nightly_rate)
}
