//! Axum route handlers for the search demo. Both return HTML fragments meant to
//! be swapped into the page's results panel and skills grid.

use axum::{extract::State, http::StatusCode, response::Html, Json};
use serde::Deserialize;

use crate::errors::AppError;
use crate::render::HtmlRegion;
use crate::search::controller::{SearchController, SearchOutcome};
use crate::state::AppState;

pub const RESULTS_REGION_ID: &str = "search-results";
pub const SKILLS_REGION_ID: &str = "skills-grid";

#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    pub query: String,
}

/// POST /api/search
///
/// Runs the query against the router and returns the results fragment.
/// Router failures still return a fragment (the error text) with 502.
pub async fn handle_search(
    State(state): State<AppState>,
    Json(request): Json<SearchRequest>,
) -> Result<(StatusCode, Html<String>), AppError> {
    if request.query.trim().is_empty() {
        return Err(AppError::Validation("query cannot be empty".to_string()));
    }

    let controller = SearchController::new(state.backend.as_ref(), &state.render_options);
    let mut region = HtmlRegion::new(RESULTS_REGION_ID);

    let status = match controller.run_search(&request.query, &mut region).await {
        SearchOutcome::Rendered => StatusCode::OK,
        SearchOutcome::Failed(_) => StatusCode::BAD_GATEWAY,
        SearchOutcome::Skipped => {
            return Err(AppError::Validation("query cannot be empty".to_string()))
        }
    };

    Ok((status, Html(region.into_markup())))
}

/// GET /api/skills
///
/// Returns the skills grid fragment, or the loading text if the catalog is down.
pub async fn handle_skills(State(state): State<AppState>) -> Html<String> {
    let controller = SearchController::new(state.backend.as_ref(), &state.render_options);
    let mut region = HtmlRegion::new(SKILLS_REGION_ID);
    controller.load_skills(&mut region).await;
    Html(region.into_markup())
}
