//! Search API endpoints - JSON API

use super::page::SearchParams;
use crate::{ApiError, AppState};
use axum::extract::{Query, State};
use axum::response::Json;
use serde_json::{json, Value};
use tcgsearch_client::or_empty;
use tcgsearch_core::CardSummary;

/// GET /api/games
pub async fn api_games(State(state): State<AppState>) -> Json<Value> {
    let games = or_empty(state.api.games().await, "games list");
    let count = games.len();
    Json(json!({ "data": games, "count": count }))
}

/// GET /api/search?q=pikachu&game=pokemon
///
/// Same shaping as the results grid. Unlike the page, a missing `q` is an error.
pub async fn api_search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Value>, ApiError> {
    let query = params.to_query();
    if query.is_empty() {
        return Err(ApiError::bad_request("Missing required query parameter: q"));
    }

    let cards = or_empty(state.api.search_cards(&query).await, "search results");
    let results: Vec<CardSummary> = cards.iter().map(CardSummary::from_card).collect();
    let count = results.len();
    Ok(Json(json!({ "data": results, "count": count })))
}
