//! Markdown rendering for assistant replies.
//!
//! Replies are model output grounded on backend-supplied abstracts, so they
//! are untrusted: raw HTML is dropped and link or image destinations outside
//! `http`, `https`, `mailto`, or relative URLs are replaced with `#`.

#[cfg(test)]
#[path = "markdown_test.rs"]
mod markdown_test;

use pulldown_cmark::{CowStr, Event, Options, Parser, Tag, html};

const SAFE_SCHEMES: &[&str] = &["http", "https", "mailto"];

/// Render `markdown` to HTML with raw HTML stripped and unsafe URLs defused.
pub fn render_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);

    let parser = Parser::new_ext(markdown, options).filter_map(|event| match event {
        Event::Html(_) | Event::InlineHtml(_) => None,
        Event::Start(Tag::Link { link_type, dest_url, title, id }) => {
            Some(Event::Start(Tag::Link { link_type, dest_url: safe_dest(dest_url), title, id }))
        }
        Event::Start(Tag::Image { link_type, dest_url, title, id }) => {
            Some(Event::Start(Tag::Image { link_type, dest_url: safe_dest(dest_url), title, id }))
        }
        other => Some(other),
    });

    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}

fn safe_dest(dest: CowStr<'_>) -> CowStr<'_> {
    if is_safe_url(&dest) { dest } else { CowStr::Borrowed("#") }
}

/// Whether `url` is relative or uses an allowed scheme.
///
/// Browsers ignore ASCII whitespace and control characters inside a scheme,
/// so those are stripped before comparing.
fn is_safe_url(url: &str) -> bool {
    let normalized: String = url
        .chars()
        .filter(|c| !c.is_ascii_whitespace() && !c.is_ascii_control())
        .collect::<String>()
        .to_ascii_lowercase();

    match normalized.split_once(':') {
        None => true,
        Some((scheme, _)) if scheme.contains(['/', '?', '#']) => true,
        Some((scheme, _)) => SAFE_SCHEMES.contains(&scheme),
    }
}
