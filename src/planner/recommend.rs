//! Standalone recommenders: transportation advice and destination sampling

use serde::{Deserialize, Serialize};

use crate::models::Attraction;
use crate::planner::filters;
use crate::planner::sampler::Sampler;

/// A sampled destination suggestion
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct DestinationSuggestion {
    pub name: String,
    pub attraction_type: String,
    pub location: String,
    pub description: String,
}

impl From<&Attraction> for DestinationSuggestion {
    fn from(attraction: &Attraction) -> Self {
        Self {
            name: attraction.name.clone(),
            attraction_type: attraction.attraction_type.clone(),
            location: attraction.location.clone(),
            description: attraction.description.clone(),
        }
    }
}

/// Transportation advice for a daily budget in pounds.
/// Upper bounds are inclusive: 50 still suggests walking, 100 still
/// suggests public transport.
#[must_use]
pub fn recommend_transportation(budget: f64) -> &'static str {
    match budget {
        b if b <= 0.0 => "Sorry, you might need to increase your budget to travel.",
        b if b <= 50.0 => "With this budget, consider walking or cycling.",
        b if b <= 100.0 => "Your budget fits well for public transport like buses or trains.",
        _ => "You can comfortably use a car or a taxi within this budget.",
    }
}

/// Up to `count` distinct destinations of the requested types, sampled
/// uniformly without replacement. Fewer matches than `count` yields all
/// matches; zero matches yields an empty list.
#[must_use]
pub fn recommend_destinations(
    attractions: &[Attraction],
    place_types: &[String],
    count: usize,
    sampler: &mut dyn Sampler,
) -> Vec<DestinationSuggestion> {
    let candidates = filters::attractions_by_type(attractions, place_types);
    let picks = sampler.pick_distinct(candidates.len(), count);
    picks
        .into_iter()
        .map(|index| DestinationSuggestion::from(candidates[index]))
        .collect()
}
