//! Card builders — one per optional report section.
//!
//! Each builder is a pure function of the report. A builder returns `None` when
//! its backing section is absent (or, for list cards, empty); a present but
//! sparse section still yields a card. Tag and line order inside a card is fixed.

use crate::models::report::{
    Entity, Infrastructure, MarketContext, MemoryResults, ParsedQuery, RecentEvents, SearchReport,
    SkillSet,
};
use crate::render::format::{
    area_thousands, count_noun, currency_millions, label_case, number, percent, plain_percent,
    text,
};
use crate::render::markup::{esc, list, note, paragraph, small_tag, tag, tags};
use crate::render::RenderOptions;

/// List-backed cards never show more than this many items.
pub const MAX_LIST_ITEMS: usize = 5;

const NOT_AVAILABLE: &str = "N/A";

/// A rendered report block: plain-text title plus body markup.
#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    pub title: String,
    pub body: String,
}

impl Card {
    pub fn to_html(&self) -> String {
        format!(
            r#"<div class="result-card"><h4>{}</h4>{}</div>"#,
            esc(&self.title),
            self.body
        )
    }
}

/// Builds every card in report order, skipping the suppressed ones.
pub fn build_cards(report: &SearchReport, options: &RenderOptions) -> Vec<Card> {
    [
        Some(parsed_query_card(report.parsed.as_ref())),
        report.market_context.as_ref().map(market_context_card),
        report.infrastructure.as_ref().and_then(infrastructure_card),
        report.memory_results.as_ref().and_then(memory_card),
        report.recent_events.as_ref().and_then(events_card),
        report.related_entities.as_deref().and_then(entities_card),
        Some(skills_card(report.skills.as_ref(), options)),
    ]
    .into_iter()
    .flatten()
    .collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Parsed Query
// ────────────────────────────────────────────────────────────────────────────

/// Always rendered; an absent `parsed` section is treated as all fields absent.
pub fn parsed_query_card(parsed: Option<&ParsedQuery>) -> Card {
    let default = ParsedQuery::default();
    let p = parsed.unwrap_or(&default);

    let tag_texts = [
        label_case(p.asset_type.as_deref()),
        text(p.state.as_deref()),
        text(p.city.as_deref()),
        area_thousands(p.sf),
        currency_millions(p.price),
        plain_percent(p.cap_rate).map(|rate| format!("{rate} cap")),
        label_case(p.intent.as_deref()),
    ];
    let rendered: Vec<String> = tag_texts.iter().flatten().map(|t| tag(t, None)).collect();

    Card {
        title: "Parsed Query".to_string(),
        body: tags(&rendered),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Market Context
// ────────────────────────────────────────────────────────────────────────────

/// Styling class for the market label tag. "HOT" wins over any tier.
pub fn market_tier_class(label: Option<&str>, tier: Option<i64>) -> Option<&'static str> {
    if label == Some("HOT") {
        return Some("hot");
    }
    match tier {
        Some(1) => Some("tier1"),
        Some(2) => Some("warm"),
        _ => None,
    }
}

pub fn market_context_card(market: &MarketContext) -> Card {
    let label = text(market.label.as_deref());
    let heading = match (&label, market.tier) {
        (Some(label), Some(tier)) => Some(format!("{label} (Tier {tier})")),
        (Some(label), None) => Some(label.clone()),
        (None, Some(tier)) => Some(format!("Tier {tier}")),
        (None, None) => None,
    };

    let mut rendered = Vec::new();
    if let Some(heading) = heading {
        rendered.push(tag(
            &heading,
            market_tier_class(market.label.as_deref(), market.tier),
        ));
    }
    if let Some(state_name) = text(market.state_name.as_deref()) {
        rendered.push(tag(&state_name, None));
    }
    if let Some(heat) = number(market.heat) {
        rendered.push(tag(&format!("Heat: {heat}/100"), None));
    }

    let mut body = tags(&rendered);
    if let Some(reason) = text(market.reason.as_deref()) {
        body.push_str(&paragraph(&reason));
    }
    body.push_str(&note(&market_terms_line(market)));

    Card {
        title: "Market Context".to_string(),
        body,
    }
}

/// `Cap: 5.5% - 7.0% | Tax: 1.81% | Income tax: No`
fn market_terms_line(market: &MarketContext) -> String {
    let cap = market
        .cap_rate_range
        .and_then(|(low, high)| {
            Some(format!(
                "{} - {}",
                percent(Some(low), 1)?,
                percent(Some(high), 1)?
            ))
        })
        .unwrap_or_else(|| NOT_AVAILABLE.to_string());
    let tax = percent(market.property_tax_rate, 2).unwrap_or_else(|| NOT_AVAILABLE.to_string());
    let income_tax = match market.income_tax {
        Some(true) => "Yes",
        Some(false) => "No",
        None => NOT_AVAILABLE,
    };
    format!("Cap: {cap} | Tax: {tax} | Income tax: {income_tax}")
}

// ────────────────────────────────────────────────────────────────────────────
// Infrastructure
// ────────────────────────────────────────────────────────────────────────────

/// Suppressed when every list is absent or empty.
pub fn infrastructure_card(infra: &Infrastructure) -> Option<Card> {
    let lines: Vec<String> = [
        (&infra.ports, "port(s)"),
        (&infra.rail, "rail hub(s)"),
        (&infra.power, "power zone(s)"),
        (&infra.last_mile, "last-mile zone(s)"),
        (&infra.air_cargo, "air cargo airport(s)"),
    ]
    .into_iter()
    .filter_map(|(items, noun)| {
        let count = items.as_ref().map_or(0, Vec::len);
        (count > 0).then(|| esc(&format!("{count} {noun}")))
    })
    .collect();

    if lines.is_empty() {
        return None;
    }
    Some(Card {
        title: "Infrastructure".to_string(),
        body: list(&lines),
    })
}

// ────────────────────────────────────────────────────────────────────────────
// Memory / Events / Entities
// ────────────────────────────────────────────────────────────────────────────

/// Title carries the authoritative total; at most `MAX_LIST_ITEMS` rows render.
pub fn memory_card(memory: &MemoryResults) -> Option<Card> {
    let results = memory.results.as_deref().filter(|r| !r.is_empty())?;
    let total = memory.total.unwrap_or(results.len() as u64);

    let items: Vec<String> = results
        .iter()
        .take(MAX_LIST_ITEMS)
        .map(|hit| {
            let label = text(hit.summary.as_deref())
                .or_else(|| text(hit.object_id.as_deref()))
                .unwrap_or_else(|| NOT_AVAILABLE.to_string());
            match percent(hit.score, 0) {
                Some(score) => format!("{} {}", esc(&label), small_tag(&score)),
                None => esc(&label),
            }
        })
        .collect();

    Some(Card {
        title: format!("Memory ({})", count_noun(total, "match", "matches")),
        body: list(&items),
    })
}

pub fn events_card(events: &RecentEvents) -> Option<Card> {
    let rows = events.events.as_deref().filter(|e| !e.is_empty())?;
    let total = events.total.unwrap_or(rows.len() as u64);

    let items: Vec<String> = rows
        .iter()
        .take(MAX_LIST_ITEMS)
        .map(|event| {
            let detail = text(event.summary.as_deref())
                .or_else(|| text(event.state.as_deref()))
                .unwrap_or_else(|| NOT_AVAILABLE.to_string());
            match label_case(event.event_type.as_deref()) {
                Some(kind) => esc(&format!("{kind} — {detail}")),
                None => esc(&detail),
            }
        })
        .collect();

    Some(Card {
        title: format!("Recent Events ({total})"),
        body: list(&items),
    })
}

pub fn entities_card(entities: &[Entity]) -> Option<Card> {
    if entities.is_empty() {
        return None;
    }

    let items: Vec<String> = entities
        .iter()
        .take(MAX_LIST_ITEMS)
        .map(|entity| {
            let name = text(entity.name.as_deref()).unwrap_or_else(|| NOT_AVAILABLE.to_string());
            match text(entity.entity_type.as_deref()) {
                Some(kind) => format!("{} {}", esc(&name), small_tag(&kind)),
                None => esc(&name),
            }
        })
        .collect();

    Some(Card {
        title: format!("Entities ({})", entities.len()),
        body: list(&items),
    })
}

// ────────────────────────────────────────────────────────────────────────────
// Skills
// ────────────────────────────────────────────────────────────────────────────

/// Always rendered. The available count is the list length when the router sent
/// a list (even an empty one) and the configured fallback otherwise.
pub fn skills_card(skills: Option<&SkillSet>, options: &RenderOptions) -> Card {
    let recommended: String = skills
        .and_then(|s| s.recommended.as_deref())
        .unwrap_or_default()
        .iter()
        .filter_map(|name| label_case(Some(name.as_str())))
        .map(|name| format!(r#"<span class="skill-tag recommended">{}</span>"#, esc(&name)))
        .collect();

    let available = skills
        .and_then(|s| s.available.as_ref())
        .map_or(options.skills_fallback_count, Vec::len);

    Card {
        title: "Skills".to_string(),
        body: format!(
            r#"<div class="result-skills">{recommended}</div>{}"#,
            note(&format!("{available} skills available"))
        ),
    }
}
