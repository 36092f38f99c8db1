//! HTTP API for the planner: options listing, itinerary planning, and the
//! standalone recommenders

use std::sync::Arc;

use axum::{
    Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::config::DefaultsConfig;
use crate::datasets::{DatasetKind, DatasetStore};
use crate::models::PriceRange;
use crate::planner::itinerary::{ItineraryPlanner, PlanOutcome, PlanRequest};
use crate::planner::recommend::{self, DestinationSuggestion};
use crate::planner::sampler::RandomSampler;

/// Shared state handed to every handler
pub struct AppState {
    /// The loaded dataset tables
    pub datasets: DatasetStore,
    /// Planning defaults from the configuration
    pub defaults: DefaultsConfig,
}

#[derive(Serialize, Deserialize)]
pub struct ApiPlanRequest {
    pub place_types: Vec<String>,
    pub cuisines: Vec<String>,
    pub accommodation_type: String,
    #[serde(default)]
    pub vegetarian_only: bool,
    pub budget_low: u32,
    pub budget_high: u32,
    pub stay_duration: u32,
}

impl From<ApiPlanRequest> for PlanRequest {
    fn from(api: ApiPlanRequest) -> Self {
        Self {
            place_types: api.place_types,
            cuisines: api.cuisines,
            accommodation_type: api.accommodation_type,
            vegetarian_only: api.vegetarian_only,
            nightly_budget: PriceRange::new(api.budget_low, api.budget_high),
            stay_duration: api.stay_duration,
        }
    }
}

#[derive(Serialize, Deserialize)]
pub struct ApiPlanResponse {
    /// Whether every day could be filled
    pub planned: bool,
    /// Itinerary text, or the explanation when planning found no match
    pub plan: String,
}

#[derive(Deserialize)]
pub struct TransportationParams {
    pub budget: f64,
}

#[derive(Serialize, Deserialize)]
pub struct ApiTransportationResponse {
    pub advice: String,
}

#[derive(Serialize, Deserialize)]
pub struct ApiDestinationsRequest {
    pub place_types: Vec<String>,
    /// Falls back to the configured default count when omitted
    #[serde(default)]
    pub count: Option<u32>,
}

#[derive(Serialize, Deserialize)]
pub struct ApiDestination {
    pub name: String,
    pub attraction_type: String,
    pub location: String,
    pub description: String,
}

impl From<&DestinationSuggestion> for ApiDestination {
    fn from(suggestion: &DestinationSuggestion) -> Self {
        Self {
            name: suggestion.name.clone(),
            attraction_type: suggestion.attraction_type.clone(),
            location: suggestion.location.clone(),
            description: suggestion.description.clone(),
        }
    }
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/options/{dataset}", get(get_options))
        .route("/plan", post(create_plan))
        .route("/transportation", get(get_transportation))
        .route("/destinations", post(get_destinations))
        .with_state(state)
}

async fn get_options(
    State(state): State<Arc<AppState>>,
    Path(dataset): Path<String>,
) -> Result<Json<Vec<String>>, StatusCode> {
    let kind: DatasetKind = dataset.parse().map_err(|_| StatusCode::NOT_FOUND)?;
    Ok(Json(state.datasets.options(kind)))
}

async fn create_plan(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<ApiPlanRequest>,
) -> Result<Json<ApiPlanResponse>, StatusCode> {
    let request = PlanRequest::from(payload);
    if let Err(e) = request.validate() {
        warn!("Rejected plan request: {}", e);
        return Err(StatusCode::UNPROCESSABLE_ENTITY);
    }

    let outcome = ItineraryPlanner::plan(&state.datasets, &request, &mut RandomSampler)
        .map_err(|e| {
            warn!("Planning failed: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR
        })?;

    let planned = matches!(outcome, PlanOutcome::Planned(_));
    Ok(Json(ApiPlanResponse {
        planned,
        plan: outcome.into_text(),
    }))
}

async fn get_transportation(
    Query(params): Query<TransportationParams>,
) -> Json<ApiTransportationResponse> {
    Json(ApiTransportationResponse {
        advice: recommend::recommend_transportation(params.budget).to_string(),
    })
}

async fn get_destinations(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<ApiDestinationsRequest>,
) -> Json<Vec<ApiDestination>> {
    let count = payload.count.unwrap_or(state.defaults.destination_count) as usize;
    let suggestions = recommend::recommend_destinations(
        &state.datasets.attractions,
        &payload.place_types,
        count,
        &mut RandomSampler,
    );
    Json(suggestions.iter().map(ApiDestination::from).collect())
}
