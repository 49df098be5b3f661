//! Search Controller — request lifecycle around the router call.
//!
//! The controller never renders a report it could not decode: transport and
//! decode failures replace the results region with plain error text instead.
//! Retry and timeout policy live in the router client, not here.

use tracing::{info, warn};

use crate::render::markup::esc;
use crate::render::{render, render_skills_grid, Region, RenderOptions, SKILLS_LOADING_MARKUP};
use crate::router_client::SearchBackend;

/// Placeholder written into the results region while the router call is in flight.
pub const LOADING_MARKUP: &str = r#"<div class="search-status">Searching 6 subsystems...</div>"#;

#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    /// Blank query; the region was left untouched.
    Skipped,
    Rendered,
    /// The region holds the error text; carries the error message.
    Failed(String),
}

pub fn error_markup(message: &str) -> String {
    format!(
        r#"<div class="search-error">Error: {}</div>"#,
        esc(message)
    )
}

pub struct SearchController<'a> {
    backend: &'a dyn SearchBackend,
    options: &'a RenderOptions,
}

impl<'a> SearchController<'a> {
    pub fn new(backend: &'a dyn SearchBackend, options: &'a RenderOptions) -> Self {
        Self { backend, options }
    }

    /// Runs one search into `results`. Concurrent searches against the same
    /// region are not sequenced; whichever finishes last wins.
    pub async fn run_search<R: Region>(&self, query: &str, results: &mut R) -> SearchOutcome {
        let query = query.trim();
        if query.is_empty() {
            return SearchOutcome::Skipped;
        }

        info!("Running search ({} chars)", query.chars().count());
        results.replace(LOADING_MARKUP.to_string());

        match self.backend.submit_query(query).await {
            Ok(report) => {
                render(&report, results, self.options);
                SearchOutcome::Rendered
            }
            Err(e) => {
                warn!("Search failed: {e}");
                let message = e.to_string();
                results.replace(error_markup(&message));
                SearchOutcome::Failed(message)
            }
        }
    }

    /// Fills the skills grid, or leaves the loading text when the catalog is
    /// unavailable. Returns the number of skills rendered.
    pub async fn load_skills<R: Region>(&self, grid: &mut R) -> usize {
        match self.backend.list_skills().await {
            Ok(skills) => {
                render_skills_grid(&skills, grid);
                skills.len()
            }
            Err(e) => {
                warn!("Skill catalog unavailable: {e}");
                grid.replace(SKILLS_LOADING_MARKUP.to_string());
                0
            }
        }
    }
}
