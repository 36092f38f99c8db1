//! Candidate filtering over the dataset tables
//!
//! All filters are pure: they borrow rows from the tables, preserve input
//! order, and never rescore or sort. Selection happens elsewhere.

use std::collections::HashSet;

use crate::error::TripCraftError;
use crate::models::{Accommodation, Attraction, PriceRange, Restaurant};

/// Attractions whose type is one of the requested place types
#[must_use]
pub fn attractions_by_type<'a>(
    attractions: &'a [Attraction],
    place_types: &[String],
) -> Vec<&'a Attraction> {
    attractions
        .iter()
        .filter(|attraction| place_types.iter().any(|t| *t == attraction.attraction_type))
        .collect()
}

/// Restaurants matching the requested cuisines, optionally restricted to
/// vegetarian-friendly rows
#[must_use]
pub fn restaurants_by_preference<'a>(
    restaurants: &'a [Restaurant],
    cuisines: &[String],
    vegetarian_only: bool,
) -> Vec<&'a Restaurant> {
    restaurants
        .iter()
        .filter(|restaurant| cuisines.iter().any(|c| *c == restaurant.cuisine))
        .filter(|restaurant| !vegetarian_only || restaurant.is_vegetarian_friendly())
        .collect()
}

/// Accommodations of the requested type
#[must_use]
pub fn accommodations_by_type<'a>(
    accommodations: &'a [Accommodation],
    accommodation_type: &str,
) -> Vec<&'a Accommodation> {
    accommodations
        .iter()
        .filter(|accommodation| accommodation.accommodation_type == accommodation_type)
        .collect()
}

/// Rows whose parsed price range overlaps the budget interval, both ends
/// inclusive. A row whose price text does not parse aborts the filter.
pub fn within_budget<'a, T, F>(
    rows: &[&'a T],
    budget: &PriceRange,
    price_text: F,
) -> Result<Vec<&'a T>, TripCraftError>
where
    F: Fn(&T) -> &str,
{
    let mut matches = Vec::new();
    for row in rows {
        let range = PriceRange::parse(price_text(row))?;
        if range.overlaps(budget) {
            matches.push(*row);
        }
    }
    Ok(matches)
}

/// Rows whose name has not been used yet. Names match case-sensitively.
#[must_use]
pub fn excluding_names<'a, T, F>(rows: &[&'a T], used: &HashSet<String>, name: F) -> Vec<&'a T>
where
    F: Fn(&T) -> &str,
{
    rows.iter()
        .filter(|row| !used.contains(name(row)))
        .copied()
        .collect()
}
