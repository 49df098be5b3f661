//! Result rendering pipeline: formatters → card builders → report markup.
//!
//! Rendering is synchronous and pure up to the final write. The output container
//! is passed in as a `Region`; a render pass replaces its content exactly once.

pub mod cards;
pub mod format;
pub mod markup;
pub mod skills_grid;

use crate::models::report::SearchReport;
use crate::render::cards::build_cards;
use crate::render::format::{number, percent, text};
use crate::render::markup::esc;

pub use skills_grid::{render_skills_grid, SKILLS_LOADING_MARKUP};

/// Default for the "N skills available" line when the router omits the list.
pub const DEFAULT_SKILLS_FALLBACK_COUNT: usize = 19;

/// Knobs for the rendering pipeline that come from configuration.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub skills_fallback_count: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            skills_fallback_count: DEFAULT_SKILLS_FALLBACK_COUNT,
        }
    }
}

/// An addressable output container (the results panel, the skills grid).
pub trait Region {
    fn id(&self) -> &str;
    /// Replaces the whole content of the region.
    fn replace(&mut self, markup: String);
}

/// In-memory region; the HTTP layer returns its final content as the response.
#[derive(Debug, Clone, Default)]
pub struct HtmlRegion {
    id: String,
    markup: String,
}

impl HtmlRegion {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            markup: String::new(),
        }
    }

    pub fn markup(&self) -> &str {
        &self.markup
    }

    pub fn into_markup(self) -> String {
        self.markup
    }
}

impl Region for HtmlRegion {
    fn id(&self) -> &str {
        &self.id
    }

    fn replace(&mut self, markup: String) {
        self.markup = markup;
    }
}

/// Builds the full report markup: header, then every non-suppressed card in the
/// fixed order Parsed Query, Market Context, Infrastructure, Memory, Events,
/// Entities, Skills.
pub fn render_report(report: &SearchReport, options: &RenderOptions) -> String {
    let mut html = render_header(report);
    html.push_str(r#"<div class="result-grid">"#);
    for card in build_cards(report, options) {
        html.push_str(&card.to_html());
    }
    html.push_str("</div>");
    html
}

/// Renders `report` into `region` with a single write.
pub fn render(report: &SearchReport, region: &mut dyn Region, options: &RenderOptions) {
    let html = render_report(report, options);
    tracing::debug!(region = region.id(), bytes = html.len(), "rendered search report");
    region.replace(html);
}

/// Latency, parser confidence and parser method; each omitted when absent.
fn render_header(report: &SearchReport) -> String {
    let parsed = report.parsed.as_ref();

    let mut meta = String::new();
    if let Some(latency) = number(report.latency_ms) {
        meta.push_str(&format!(r#"<span class="latency">{}ms</span>"#, esc(&latency)));
    }
    if let Some(confidence) = percent(parsed.and_then(|p| p.confidence), 0) {
        meta.push_str(&format!("<span>Confidence: {}</span>", esc(&confidence)));
    }
    if let Some(method) = text(parsed.and_then(|p| p.method.as_deref())) {
        meta.push_str(&format!("<span>Parser: {}</span>", esc(&method)));
    }

    format!(
        r#"<div class="result-header"><h3>Intelligence Package</h3><div class="result-meta">{meta}</div></div>"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const CARD_TITLES: [&str; 7] = [
        "<h4>Parsed Query</h4>",
        "<h4>Market Context</h4>",
        "<h4>Infrastructure</h4>",
        "<h4>Memory (",
        "<h4>Recent Events (",
        "<h4>Entities (",
        "<h4>Skills</h4>",
    ];

    fn report(json: &str) -> SearchReport {
        SearchReport::from_value(serde_json::from_str(json).unwrap()).unwrap()
    }

    fn full_report() -> SearchReport {
        report(
            r#"{
                "latency_ms": 412,
                "parsed": {"state": "TX", "confidence": 0.92, "method": "hybrid"},
                "market_context": {"tier": 1, "label": "HOT", "state_name": "Texas", "heat": 88},
                "infrastructure": {"rail": [1, 2]},
                "memory_results": {"total": 2, "results": [{"summary": "a"}, {"summary": "b"}]},
                "recent_events": {"total": 1, "events": [{"summary": "Rezoning"}]},
                "related_entities": [{"name": "Prologis", "entity_type": "reit"}],
                "skills": {"recommended": ["comp_finder"], "available": ["x"]}
            }"#,
        )
    }

    fn title_positions(html: &str) -> Vec<usize> {
        CARD_TITLES.iter().filter_map(|t| html.find(t)).collect()
    }

    #[test]
    fn test_header_contents() {
        let html = render_report(&full_report(), &RenderOptions::default());
        assert!(html.starts_with(
            r#"<div class="result-header"><h3>Intelligence Package</h3><div class="result-meta"><span class="latency">412ms</span><span>Confidence: 92%</span><span>Parser: hybrid</span></div></div>"#
        ));
    }

    #[test]
    fn test_full_report_renders_all_cards_in_order() {
        let html = render_report(&full_report(), &RenderOptions::default());
        let positions = title_positions(&html);
        assert_eq!(positions.len(), 7);
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert!(html.ends_with("</div></div>"));
    }

    #[test]
    fn test_empty_report_renders_parsed_and_skills_only() {
        let html = render_report(&SearchReport::default(), &RenderOptions::default());
        assert!(html.contains(r#"<div class="result-meta"></div>"#));
        assert_eq!(html.matches(r#"<div class="result-card">"#).count(), 2);
        assert!(html.contains(r#"<h4>Parsed Query</h4><div class="tags"></div>"#));
        assert!(html.contains("19 skills available"));
        assert!(!html.contains("NaN"));
        assert!(!html.contains("undefined"));
    }

    #[test]
    fn test_order_holds_for_partial_reports() {
        let html = render_report(
            &report(r#"{"related_entities": [{"name": "A"}], "market_context": {"label": "COOL"}}"#),
            &RenderOptions::default(),
        );
        let market = html.find("<h4>Market Context</h4>").unwrap();
        let entities = html.find("<h4>Entities (1)</h4>").unwrap();
        let skills = html.find("<h4>Skills</h4>").unwrap();
        assert!(html.find("<h4>Parsed Query</h4>").unwrap() < market);
        assert!(market < entities && entities < skills);
        assert!(!html.contains("<h4>Infrastructure</h4>"));
        assert!(!html.contains("<h4>Memory"));
    }

    #[test]
    fn test_twelve_memory_results_show_five_and_total_twelve() {
        let results: Vec<String> = (0..12)
            .map(|i| format!(r#"{{"object_id": "obj-{i}", "score": 0.5}}"#))
            .collect();
        let json = format!(
            r#"{{"memory_results": {{"total": 12, "results": [{}]}}}}"#,
            results.join(",")
        );
        let html = render_report(&report(&json), &RenderOptions::default());
        assert!(html.contains("<h4>Memory (12 matches)</h4>"));
        let memory = &html[html.find("<h4>Memory").unwrap()..html.find("<h4>Skills").unwrap()];
        assert_eq!(memory.matches("<li>").count(), 5);
    }

    #[test]
    fn test_render_is_idempotent_and_writes_once() {
        struct CountingRegion {
            writes: Vec<String>,
        }
        impl Region for CountingRegion {
            fn id(&self) -> &str {
                "search-results"
            }
            fn replace(&mut self, markup: String) {
                self.writes.push(markup);
            }
        }

        let report = full_report();
        let mut region = CountingRegion { writes: vec![] };
        render(&report, &mut region, &RenderOptions::default());
        assert_eq!(region.writes.len(), 1);
        render(&report, &mut region, &RenderOptions::default());
        assert_eq!(region.writes.len(), 2);
        assert_eq!(region.writes[0], region.writes[1]);
    }

    #[test]
    fn test_html_region_replaces_previous_content() {
        let mut region = HtmlRegion::new("search-results");
        region.replace("first".to_string());
        render(&SearchReport::default(), &mut region, &RenderOptions::default());
        assert!(!region.markup().contains("first"));
        assert_eq!(region.id(), "search-results");
    }
}
