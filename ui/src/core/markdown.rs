//! Markdown → HTML for chat bodies.
//!
//! Single newlines are kept as line breaks (people type chat, not prose) and
//! raw HTML in a message is shown as text rather than injected.

use pulldown_cmark::{html, Event, Options, Parser};

pub fn render_markdown(source: &str) -> String {
    let options = Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH;
    let events = Parser::new_ext(source, options).map(|event| match event {
        Event::SoftBreak => Event::HardBreak,
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        other => other,
    });

    let mut out = String::with_capacity(source.len() * 3 / 2);
    html::push_html(&mut out, events);
    out
}
