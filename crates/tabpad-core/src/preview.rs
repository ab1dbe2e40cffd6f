//! Markdown detection and preview rendering

use lazy_static::lazy_static;
use pulldown_cmark::{html, CowStr, Event, Options, Parser, Tag};
use regex::Regex;

lazy_static! {
    // Block syntax at the start of any line
    static ref BLOCK_MARKDOWN: Regex = Regex::new(r"(?m)^(# |\* |- |> |`)").unwrap();

    // Inline emphasis or code anywhere
    static ref INLINE_MARKDOWN: Regex = Regex::new(r"(\*\*|__|`)").unwrap();
}

const UNSAFE_SCHEMES: [&str; 3] = ["javascript:", "vbscript:", "data:"];

/// Whether `text` looks like Markdown worth previewing.
pub fn has_markdown(text: &str) -> bool {
    BLOCK_MARKDOWN.is_match(text) || INLINE_MARKDOWN.is_match(text)
}

/// Render Markdown to HTML. Raw HTML in the source is escaped and links with
/// script-capable schemes are neutralized.
pub fn render_markdown(text: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);

    let parser = Parser::new_ext(text, options).map(|event| match event {
        Event::Html(raw) => Event::Text(raw),
        Event::Start(Tag::Link(kind, dest, title)) => {
            Event::Start(Tag::Link(kind, sanitize_url(dest), title))
        }
        Event::Start(Tag::Image(kind, dest, title)) => {
            Event::Start(Tag::Image(kind, sanitize_url(dest), title))
        }
        other => other,
    });

    let mut out = String::with_capacity(text.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}

/// Preview for the split view: present only when enabled and the text
/// contains Markdown.
pub fn preview_html(text: &str, enabled: bool) -> Option<String> {
    if enabled && has_markdown(text) {
        Some(render_markdown(text))
    } else {
        None
    }
}

fn sanitize_url(dest: CowStr<'_>) -> CowStr<'_> {
    let lowered = dest.trim().to_lowercase();
    if UNSAFE_SCHEMES.iter().any(|scheme| lowered.starts_with(scheme)) {
        CowStr::Borrowed("#")
    } else {
        dest
    }
}
