//! Integration tests for TripCraft planning
//!
//! Drives the path a request takes in production: CSV text into the typed
//! dataset store, through the planner, out as rendered itinerary text.

use tripcraft::{
    DatasetKind, DatasetStore, ItineraryPlanner, NoMatchReason, PlanOutcome, PlanRequest,
    PriceRange, SeededSampler, recommend_destinations, recommend_transportation,
};

const ATTRACTIONS_CSV: &str = "\
Name,Type,Location,Description,Entrance Fee
British Museum,Museum,Bloomsbury,World-famous collection spanning two million years,Free
Natural History Museum,Museum,South Kensington,Dinosaurs and the blue whale hall,Free
Science Museum,Museum,South Kensington,Interactive science galleries,Free
Tower of London,Historic,Tower Hill,Medieval fortress with the Crown Jewels,£33
Tate Modern,Gallery,Bankside,Modern art in a former power station,Free
Hyde Park,Park,Westminster,Royal park with the Serpentine,Free
";

const RESTAURANTS_CSV: &str = "\
Name,Cuisine,Price Range,Vegetarian-Friendly
Padella,Italian,££,No
Bancone,Italian,££,Yes
Luca,Italian,££££,No
Dishoom,Indian,££,Yes
Gymkhana,Indian,££££,Yes
Hoppers,Sri Lankan,££,Yes
";

const ACCOMMODATIONS_CSV: &str = "\
Name,Type,Price Range per Night
The Hoxton,Hotel,£140 - £220
Premier Inn,Hotel,£80 - £120
The Savoy,Hotel,£450 - £700
Generator,Hostel,£25 - £45
";

fn load_store() -> DatasetStore {
    DatasetStore::from_csv_text(ATTRACTIONS_CSV, RESTAURANTS_CSV, ACCOMMODATIONS_CSV)
        .expect("test datasets should parse")
}

fn museum_trip_request(stay_duration: u32) -> PlanRequest {
    PlanRequest {
        place_types: vec!["Museum".to_string(), "Historic".to_string()],
        cuisines: vec!["Italian".to_string(), "Indian".to_string()],
        accommodation_type: "Hotel".to_string(),
        vegetarian_only: false,
        nightly_budget: PriceRange::new(50, 300),
        stay_duration,
    }
}

/// A full run renders one attraction and restaurant block per day and an
/// accommodation block on day one only
#[test]
fn test_plan_renders_every_requested_day() {
    let store = load_store();
    let mut sampler = SeededSampler::new(11);

    let outcome = ItineraryPlanner::plan(&store, &museum_trip_request(3), &mut sampler)
        .expect("datasets are well-formed");
    let PlanOutcome::Planned(itinerary) = outcome else {
        panic!("expected a plan");
    };
    let text = itinerary.to_string();

    assert!(text.starts_with("📅 Here's your exciting travel itinerary!"));
    assert_eq!(text.matches("🏛️ Attraction - ").count(), 3);
    assert_eq!(text.matches("🍴 Restaurant - ").count(), 3);
    assert_eq!(text.matches("🛌 Accommodation - ").count(), 1);
    assert!(text.contains("Day 1:"));
    assert!(text.contains("Day 3:"));
    assert!(text.ends_with("We hope you have a fantastic journey! Bon Voyage! 🚢"));
}

/// The rendered grand total equals the sum of the rendered daily totals
#[test]
fn test_rendered_totals_add_up() {
    let store = load_store();
    let mut sampler = SeededSampler::new(29);

    let outcome = ItineraryPlanner::plan(&store, &museum_trip_request(4), &mut sampler)
        .expect("datasets are well-formed");
    let text = outcome.into_text();

    let mut daily_sum = 0.0;
    let mut grand_total = None;
    for line in text.lines() {
        if let Some(amount) = line.strip_prefix("Estimated budget for the day: £") {
            daily_sum += amount.parse::<f64>().expect("daily amount is numeric");
        }
        if let Some(amount) = line.strip_prefix("💷 Total estimated budget for your trip: £") {
            grand_total = Some(amount.parse::<f64>().expect("total amount is numeric"));
        }
    }

    assert_eq!(grand_total, Some(daily_sum));
}

/// The same seed reproduces the identical itinerary text
#[test]
fn test_same_seed_reproduces_the_plan() {
    let store = load_store();

    let first = ItineraryPlanner::plan(
        &store,
        &museum_trip_request(3),
        &mut SeededSampler::new(1234),
    )
    .expect("datasets are well-formed")
    .into_text();
    let second = ItineraryPlanner::plan(
        &store,
        &museum_trip_request(3),
        &mut SeededSampler::new(1234),
    )
    .expect("datasets are well-formed")
    .into_text();

    assert_eq!(first, second);
}

/// No accommodation within budget means the message comes back instead of
/// a plan, before any day is attempted
#[test]
fn test_out_of_budget_accommodation_yields_message() {
    let store = load_store();
    let mut request = museum_trip_request(3);
    request.nightly_budget = PriceRange::new(1, 10);

    let outcome = ItineraryPlanner::plan(&store, &request, &mut SeededSampler::new(5))
        .expect("datasets are well-formed");

    let PlanOutcome::NoMatch(reason) = outcome else {
        panic!("expected no match");
    };
    assert_eq!(reason, NoMatchReason::NoAccommodations);
    assert!(reason.user_message().contains("couldn't find any accommodations"));
}

/// Running out of unique candidates part way through discards everything
#[test]
fn test_candidate_exhaustion_discards_partial_plans() {
    let store = load_store();
    let mut request = museum_trip_request(5);
    // Three museums cannot fill five days
    request.place_types = vec!["Museum".to_string()];

    let outcome = ItineraryPlanner::plan(&store, &request, &mut SeededSampler::new(5))
        .expect("datasets are well-formed");

    let PlanOutcome::NoMatch(reason) = outcome else {
        panic!("expected no match");
    };
    assert_eq!(reason, NoMatchReason::NotEnoughOptions { stay_duration: 5 });
    assert!(reason.user_message().contains("for 5 days"));
}

/// Options listing reports each dataset's distinct category values
#[test]
fn test_options_listing_from_csv() {
    let store = load_store();

    assert_eq!(
        store.options(DatasetKind::Tourism),
        vec!["Museum", "Historic", "Gallery", "Park"]
    );
    assert_eq!(
        store.options(DatasetKind::Restaurants),
        vec!["Italian", "Indian", "Sri Lankan"]
    );
    assert_eq!(
        store.options(DatasetKind::Accommodations),
        vec!["Hotel", "Hostel"]
    );
}

/// The standalone recommenders work off the same loaded tables
#[test]
fn test_recommenders_over_loaded_tables() {
    let store = load_store();

    assert!(recommend_transportation(30.0).contains("walking or cycling"));
    assert!(recommend_transportation(150.0).contains("car or a taxi"));

    let mut sampler = SeededSampler::new(77);
    let suggestions = recommend_destinations(
        &store.attractions,
        &["Gallery".to_string(), "Park".to_string()],
        5,
        &mut sampler,
    );
    assert_eq!(suggestions.len(), 2);
}

/// Vegetarian-only requests never seat the traveller at a non-vegetarian
/// restaurant, whatever the sampler picks
#[test]
fn test_vegetarian_only_plans_use_vegetarian_rows() {
    let store = load_store();
    let mut request = museum_trip_request(3);
    request.vegetarian_only = true;

    for seed in 0..20u64 {
        let outcome = ItineraryPlanner::plan(&store, &request, &mut SeededSampler::new(seed))
            .expect("datasets are well-formed");
        let PlanOutcome::Planned(itinerary) = outcome else {
            panic!("expected a plan");
        };
        for day in &itinerary.days {
            assert_eq!(day.restaurant.vegetarian_friendly, "Yes");
        }
    }
}
