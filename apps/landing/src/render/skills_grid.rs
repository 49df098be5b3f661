//! The skills grid: a flat mapping of the router's skill catalog to cards.

use crate::models::skill::SkillDescriptor;
use crate::render::format::{label_case, text, truncate};
use crate::render::markup::{attr, esc};
use crate::render::Region;

const DESCRIPTION_MAX_CHARS: usize = 80;
const DEFAULT_VERSION: &str = "1.0";

/// Shown in the grid when the catalog could not be fetched.
pub const SKILLS_LOADING_MARKUP: &str = r#"<p class="skills-loading">Loading skills...</p>"#;

pub fn skill_card(skill: &SkillDescriptor) -> String {
    let name = label_case(skill.name.as_deref()).unwrap_or_default();
    let version = text(skill.version.as_deref()).unwrap_or_else(|| DEFAULT_VERSION.to_string());
    let blurb = text(skill.description.as_deref())
        .or_else(|| text(skill.role.as_deref()))
        .unwrap_or_default();

    format!(
        r#"<div class="skill-card" title="{}"><h4>{}</h4><div class="skill-ver">v{}</div><p>{}</p></div>"#,
        attr(skill.description.as_deref().unwrap_or_default()),
        esc(&name),
        esc(&version),
        esc(&truncate(&blurb, DESCRIPTION_MAX_CHARS)),
    )
}

pub fn skills_grid_markup(skills: &[SkillDescriptor]) -> String {
    skills.iter().map(skill_card).collect()
}

/// Renders the catalog into `region` with a single write.
pub fn render_skills_grid(skills: &[SkillDescriptor], region: &mut dyn Region) {
    region.replace(skills_grid_markup(skills));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::HtmlRegion;

    #[test]
    fn test_skill_card_full() {
        let skill = SkillDescriptor {
            name: Some("deal_screener".into()),
            version: Some("2.1".into()),
            description: Some("Screens \"off-market\" deals".into()),
            role: Some("analyst".into()),
        };
        assert_eq!(
            skill_card(&skill),
            r#"<div class="skill-card" title="Screens &quot;off-market&quot; deals"><h4>deal screener</h4><div class="skill-ver">v2.1</div><p>Screens "off-market" deals</p></div>"#
        );
    }

    #[test]
    fn test_skill_card_defaults() {
        let skill = SkillDescriptor {
            role: Some("underwriter".into()),
            ..Default::default()
        };
        assert_eq!(
            skill_card(&skill),
            r#"<div class="skill-card" title=""><h4></h4><div class="skill-ver">v1.0</div><p>underwriter</p></div>"#
        );
    }

    #[test]
    fn test_numeric_version_from_catalog_is_shown() {
        let catalog = serde_json::json!([{"name": "comp_finder", "version": 2}]);
        let skills = crate::models::skill::decode_catalog(catalog).unwrap();
        assert!(skill_card(&skills[0]).contains(r#"<div class="skill-ver">v2</div>"#));
    }

    #[test]
    fn test_long_description_is_truncated_to_80_chars() {
        let skill = SkillDescriptor {
            name: Some("x".into()),
            description: Some("d".repeat(100)),
            ..Default::default()
        };
        let html = skill_card(&skill);
        let expected = format!("<p>{}…</p>", "d".repeat(80));
        assert!(html.contains(&expected));
        // the tooltip keeps the full text
        assert!(html.contains(&format!(r#"title="{}""#, "d".repeat(100))));
    }

    #[test]
    fn test_render_skills_grid_writes_every_card() {
        let skills = vec![
            SkillDescriptor {
                name: Some("a".into()),
                ..Default::default()
            },
            SkillDescriptor {
                name: Some("b".into()),
                ..Default::default()
            },
        ];
        let mut region = HtmlRegion::new("skills-grid");
        render_skills_grid(&skills, &mut region);
        assert_eq!(region.markup().matches("skill-card").count(), 2);

        render_skills_grid(&[], &mut region);
        assert_eq!(region.markup(), "");
    }
}
