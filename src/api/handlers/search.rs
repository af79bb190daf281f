//! Handler for the availability search endpoint.

use axum::{
    Json,
    extract::{Query, State},
};

use crate::api::dto::search::{AvailableRestaurant, SearchParams, SearchResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Finds restaurants that could seat the party at the given time.
///
/// # Endpoint
///
/// `GET /reservation/search?user_ids=1,2&time=2026-08-14T18:30:00Z`
///
/// # Response
///
/// Restaurants where the party holds no reservation in the candidate
/// window, whose endorsements cover the party's dietary restrictions, and
/// that still have at least one free table large enough. Each restaurant's
/// table list is filtered the same way and ordered best fit first.
///
/// # Errors
///
/// Returns 400 for a past time, 404 if any user is unknown.
pub async fn search_handler(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<SearchResponse>, AppError> {
    let results = state
        .reservation_service
        .search(&params.user_ids, params.time)
        .await?;

    Ok(Json(SearchResponse {
        restaurants: results.into_iter().map(AvailableRestaurant::from).collect(),
    }))
}
