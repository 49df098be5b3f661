//! Small HTML fragment helpers. Text arguments are escaped here; arguments
//! named `*_html` are trusted markup produced by other helpers.

use std::fmt::Write;

use html_escape::{encode_double_quoted_attribute, encode_text};

/// Escapes text for element content.
pub fn esc(text: &str) -> String {
    encode_text(text).into_owned()
}

/// Escapes text for a double-quoted attribute value.
pub fn attr(text: &str) -> String {
    encode_double_quoted_attribute(text).into_owned()
}

/// `<span class="tag {class}">text</span>`
pub fn tag(text: &str, class: Option<&str>) -> String {
    match class {
        Some(class) => format!(r#"<span class="tag {}">{}</span>"#, attr(class), esc(text)),
        None => format!(r#"<span class="tag">{}</span>"#, esc(text)),
    }
}

/// The compact inline tag used next to list items (scores, entity types).
pub fn small_tag(text: &str) -> String {
    format!(r#"<span class="tag tag-sm">{}</span>"#, esc(text))
}

/// `<div class="tags">…</div>` around already-rendered tags.
pub fn tags(tags_html: &[String]) -> String {
    format!(r#"<div class="tags">{}</div>"#, tags_html.concat())
}

/// `<ul>` with one `<li>` per already-rendered item.
pub fn list(items_html: &[String]) -> String {
    let mut out = String::from("<ul>");
    for item in items_html {
        let _ = write!(out, "<li>{item}</li>");
    }
    out.push_str("</ul>");
    out
}

/// `<p>text</p>`
pub fn paragraph(text: &str) -> String {
    format!("<p>{}</p>", esc(text))
}

/// De-emphasized footnote line under a card's main content.
pub fn note(text: &str) -> String {
    format!(r#"<p class="card-note">{}</p>"#, esc(text))
}
