//! Itinerary Planning Module
//!
//! This module assembles multi-day itineraries by combining the dataset
//! tables with user preferences: one accommodation for the stay, then one
//! attraction and one restaurant per day with no repeats across days, with
//! a running budget estimate.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::datasets::DatasetStore;
use crate::error::TripCraftError;
use crate::models::{Accommodation, Attraction, PriceRange, Restaurant};
use crate::planner::budget;
use crate::planner::filters;
use crate::planner::sampler::Sampler;

/// User preferences for a trip
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanRequest {
    /// Place types to draw attractions from
    pub place_types: Vec<String>,
    /// Cuisines to draw restaurants from
    pub cuisines: Vec<String>,
    /// Requested accommodation type
    pub accommodation_type: String,
    /// Restrict restaurants to vegetarian-friendly rows
    pub vegetarian_only: bool,
    /// Acceptable nightly price interval
    pub nightly_budget: PriceRange,
    /// Number of days to plan
    pub stay_duration: u32,
}

impl PlanRequest {
    /// Bounds check for driver input. The planner itself accepts any
    /// request; drivers reject what the form would never submit.
    pub fn validate(&self) -> Result<(), TripCraftError> {
        if self.stay_duration < 1 || self.stay_duration > 30 {
            return Err(TripCraftError::validation(format!(
                "stay duration must be between 1 and 30 days, got {}",
                self.stay_duration
            )));
        }
        if self.nightly_budget.low > self.nightly_budget.high {
            return Err(TripCraftError::validation(
                "budget range is inverted, the lower bound exceeds the upper bound",
            ));
        }
        if self.nightly_budget.high > 1000 {
            return Err(TripCraftError::validation(format!(
                "nightly budget must stay within £0 - £1000, got £{}",
                self.nightly_budget.high
            )));
        }
        Ok(())
    }
}

/// One planned day
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItineraryDay {
    /// 1-based day number
    pub day: u32,
    /// Attraction to visit
    pub attraction: Attraction,
    /// Restaurant to eat at
    pub restaurant: Restaurant,
    /// Accommodation for the stay, present on the first day only
    pub accommodation: Option<Accommodation>,
    /// Estimated spend for the day in pounds
    pub daily_total: f64,
}

/// A complete multi-day itinerary
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Itinerary {
    /// Planned days in order
    pub days: Vec<ItineraryDay>,
    /// Sum of the daily totals in pounds
    pub grand_total: f64,
    /// When this itinerary was generated
    pub generated_at: DateTime<Utc>,
}

/// Why planning produced no itinerary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum NoMatchReason {
    /// No accommodation of the requested type fell within the budget
    NoAccommodations,
    /// Attraction or restaurant candidates ran out before the stay was filled
    NotEnoughOptions { stay_duration: u32 },
}

impl NoMatchReason {
    /// The message shown to the traveller in place of a plan
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            NoMatchReason::NoAccommodations => {
                "Sorry, we couldn't find any accommodations that match your preferences. \
                 Please try adjusting your preferences."
                    .to_string()
            }
            NoMatchReason::NotEnoughOptions { stay_duration } => format!(
                "Sorry, we couldn't find enough options to fill your itinerary for \
                 {stay_duration} days. Please try adjusting your preferences."
            ),
        }
    }
}

/// Result of a planning run: a full plan or an explanation, never a
/// partial plan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum PlanOutcome {
    /// Every day was filled
    Planned(Itinerary),
    /// Planning stopped and nothing was kept
    NoMatch(NoMatchReason),
}

impl PlanOutcome {
    /// Render the outcome as the text shown to the traveller
    #[must_use]
    pub fn into_text(self) -> String {
        match self {
            PlanOutcome::Planned(itinerary) => itinerary.to_string(),
            PlanOutcome::NoMatch(reason) => reason.user_message(),
        }
    }
}

/// Itinerary planning service
pub struct ItineraryPlanner;

impl ItineraryPlanner {
    /// Plan a full stay against the dataset tables.
    ///
    /// Planning is all-or-nothing: if the accommodation search or any day
    /// comes up empty, the outcome is a [`NoMatchReason`] and no partial
    /// days are returned. Only malformed price text in the datasets is an
    /// error.
    pub fn plan(
        store: &DatasetStore,
        request: &PlanRequest,
        sampler: &mut dyn Sampler,
    ) -> Result<PlanOutcome, TripCraftError> {
        info!(
            "Planning a {}-day itinerary for accommodation type '{}'",
            request.stay_duration, request.accommodation_type
        );

        // Accommodation first; its nightly rate prices every day
        let Some((accommodation, nightly_rate)) =
            Self::select_accommodation(store, request, sampler)?
        else {
            warn!(
                "No accommodations of type '{}' within £{} - £{}",
                request.accommodation_type, request.nightly_budget.low, request.nightly_budget.high
            );
            return Ok(PlanOutcome::NoMatch(NoMatchReason::NoAccommodations));
        };
        debug!(
            "Selected accommodation '{}' at £{} per night",
            accommodation.name, nightly_rate
        );

        // The base candidate sets are the same every day; days differ only
        // by the names already used
        let base_attractions =
            filters::attractions_by_type(&store.attractions, &request.place_types);
        let base_restaurants = filters::restaurants_by_preference(
            &store.restaurants,
            &request.cuisines,
            request.vegetarian_only,
        );
        debug!(
            "{} attraction and {} restaurant candidates before uniqueness",
            base_attractions.len(),
            base_restaurants.len()
        );

        let mut used_attractions: HashSet<String> = HashSet::new();
        let mut used_restaurants: HashSet<String> = HashSet::new();
        let mut days = Vec::new();
        let mut grand_total = 0.0;

        for day in 1..=request.stay_duration {
            let attractions =
                filters::excluding_names(&base_attractions, &used_attractions, |a| &a.name);
            let restaurants =
                filters::excluding_names(&base_restaurants, &used_restaurants, |r| &r.name);

            let Some((attraction, restaurant)) =
                Self::pick_pair(&attractions, &restaurants, sampler)
            else {
                warn!(
                    "Ran out of candidates on day {} of {}",
                    day, request.stay_duration
                );
                return Ok(PlanOutcome::NoMatch(NoMatchReason::NotEnoughOptions {
                    stay_duration: request.stay_duration,
                }));
            };

            used_attractions.insert(attraction.name.clone());
            used_restaurants.insert(restaurant.name.clone());

            let daily_total = budget::calculate_daily_total(attraction, restaurant, nightly_rate)?;
            grand_total += daily_total;

            days.push(ItineraryDay {
                day,
                attraction: attraction.clone(),
                restaurant: restaurant.clone(),
                accommodation: (day == 1).then(|| accommodation.clone()),
                daily_total,
            });
        }

        info!(
            "Planned {} days with an estimated total of £{}",
            days.len(),
            grand_total
        );
        Ok(PlanOutcome::Planned(Itinerary {
            days,
            grand_total,
            generated_at: Utc::now(),
        }))
    }

    /// Pick one accommodation of the requested type within budget, with
    /// its nightly rate (the midpoint of the parsed price range)
    fn select_accommodation<'a>(
        store: &'a DatasetStore,
        request: &PlanRequest,
        sampler: &mut dyn Sampler,
    ) -> Result<Option<(&'a Accommodation, f64)>, TripCraftError> {
        let by_type =
            filters::accommodations_by_type(&store.accommodations, &request.accommodation_type);
        let candidates = filters::within_budget(&by_type, &request.nightly_budget, |a| {
            &a.price_range_per_night
        })?;
        debug!(
            "{} accommodation candidates of type '{}'",
            candidates.len(),
            request.accommodation_type
        );

        let Some(index) = sampler.pick_index(candidates.len()) else {
            return Ok(None);
        };
        let accommodation = candidates[index];
        let nightly_rate = accommodation.nightly_price_range()?.midpoint();
        Ok(Some((accommodation, nightly_rate)))
    }

    /// Pick one attraction and one restaurant for a day. `None` when
    /// either candidate set is empty.
    fn pick_pair<'a>(
        attractions: &[&'a Attraction],
        restaurants: &[&'a Restaurant],
        sampler: &mut dyn Sampler,
    ) -> Option<(&'a Attraction, &'a Restaurant)> {
        if attractions.is_empty() || restaurants.is_empty() {
            return None;
        }
        let attraction = attractions[sampler.pick_index(attractions.len())?];
        let restaurant = restaurants[sampler.pick_index(restaurants.len())?];
        Some((attraction, restaurant))
    }
}

impl std::fmt::Display for Itinerary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "📅 Here's your exciting travel itinerary! 🌍✈️🎒")?;
        writeln!(f)?;
        for day in &self.days {
            writeln!(f, "Day {}:", day.day)?;
            write!(f, "{}", format_attraction(&day.attraction))?;
            write!(f, "{}", format_restaurant(&day.restaurant))?;
            if let Some(accommodation) = &day.accommodation {
                write!(f, "{}", format_accommodation(accommodation))?;
            }
            writeln!(f, "Estimated budget for the day: £{}", day.daily_total)?;
            writeln!(f)?;
        }
        writeln!(
            f,
            "💷 Total estimated budget for your trip: £{}",
            self.grand_total
        )?;
        write!(f, "We hope you have a fantastic journey! Bon Voyage! 🚢")
    }
}

fn format_attraction(attraction: &Attraction) -> String {
    format!(
        "🏛️ Attraction - {}:\nType: {}\nLocation: {}\nDescription: {}\nEntrance Fee: {}\n\n",
        attraction.name,
        attraction.attraction_type,
        attraction.location,
        attraction.description,
        attraction.entrance_fee
    )
}

fn format_restaurant(restaurant: &Restaurant) -> String {
    format!(
        "🍴 Restaurant - {}:\nCuisine: {}\nPrice Range: {}\nVegetarian-Friendly: {}\n\n",
        restaurant.name, restaurant.cuisine, restaurant.price_range, restaurant.vegetarian_friendly
    )
}

fn format_accommodation(accommodation: &Accommodation) -> String {
    format!(
        "🛌 Accommodation - {}:\nType: {}\nPrice Range per Night: {}\n\n",
        accommodation.name, accommodation.accommodation_type, accommodation.price_range_per_night
    )
}
