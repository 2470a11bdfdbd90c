//! Markdown to prose conversion.
//!
//! Creators often draft long-form posts in markdown. Scoring the raw source
//! would count code, table cells and heading text as sentences, so `.md`
//! inputs are reduced to the prose a reader actually reads.

use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd};

/// Strip markdown formatting, returning plain prose text.
///
/// Dropped: front matter, code (blocks and inline), headings, tables,
/// raw HTML and image alt text. Kept: paragraph, list item and blockquote
/// text, link text, emphasis text without markers. Block boundaries become
/// line breaks.
#[tracing::instrument(skip_all, fields(input_len = text.len()))]
pub fn strip_to_prose(text: &str) -> String {
    let body = strip_front_matter(text);

    let options =
        Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH | Options::ENABLE_FOOTNOTES;
    let mut prose = String::with_capacity(body.len());
    let mut skip_depth: usize = 0;

    for event in Parser::new_ext(body, options) {
        match event {
            Event::Start(
                Tag::CodeBlock(_) | Tag::Heading { .. } | Tag::Table(_) | Tag::Image { .. },
            ) => skip_depth += 1,
            Event::End(
                TagEnd::CodeBlock | TagEnd::Heading(_) | TagEnd::Table | TagEnd::Image,
            ) => skip_depth = skip_depth.saturating_sub(1),

            Event::Text(t) if skip_depth == 0 => prose.push_str(&t),
            Event::SoftBreak | Event::HardBreak if skip_depth == 0 => prose.push(' '),
            Event::End(TagEnd::Paragraph | TagEnd::Item) if skip_depth == 0 => {
                prose.push('\n');
            }

            _ => {}
        }
    }

    prose
}

/// Remove a leading `---` delimited YAML block, if present.
fn strip_front_matter(text: &str) -> &str {
    let Some(rest) = text.trim_start().strip_prefix("---") else {
        return text;
    };
    match rest.split_once("\n---") {
        Some((_, after)) => after.strip_prefix('\n').unwrap_or(after),
        None => text,
    }
}
