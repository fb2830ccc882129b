//! Plain-text extraction from CommonMark via pulldown-cmark.
//!
//! Two flavours share one event walk: [`strip_to_prose`] for
//! markdown documents handed to detection or rewriting, and [`strip_markup`]
//! for generated text that must come back as plain prose.

use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd};

/// Strip a markdown document down to its prose.
///
/// Removes:
/// - YAML frontmatter
/// - Code blocks (fenced and indented) and inline code
/// - Headings (section titles are not prose)
/// - Tables, images, and HTML
///
/// Preserves link text, blockquote text, list item text, and emphasised
/// text (without markers). Blocks are separated by blank lines.
#[tracing::instrument(skip_all, fields(input_len = text.len()))]
pub fn strip_to_prose(text: &str) -> String {
    let text = strip_frontmatter(text);
    render_plain(&text, false)
}

/// Remove markup from generated text, keeping everything a reader would see.
///
/// Unlike [`strip_to_prose`], heading text and inline code text are kept
/// (without `#` markers or backticks). Emphasis markers, list bullets, link
/// targets, and code blocks are dropped.
#[tracing::instrument(skip_all, fields(input_len = text.len()))]
pub fn strip_markup(text: &str) -> String {
    render_plain(text, true)
}

fn render_plain(text: &str, keep_headings: bool) -> String {
    let options =
        Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH | Options::ENABLE_FOOTNOTES;
    let parser = Parser::new_ext(text, options);

    let mut result = String::with_capacity(text.len());
    let mut skip_depth: usize = 0;

    for event in parser {
        match event {
            Event::Start(Tag::CodeBlock(_) | Tag::Table(_) | Tag::Image { .. }) => {
                skip_depth += 1;
            }
            Event::End(TagEnd::CodeBlock | TagEnd::Table | TagEnd::Image) => {
                skip_depth = skip_depth.saturating_sub(1);
            }
            Event::Start(Tag::Heading { .. }) if !keep_headings => {
                skip_depth += 1;
            }
            Event::End(TagEnd::Heading(_)) if !keep_headings => {
                skip_depth = skip_depth.saturating_sub(1);
            }

            Event::Text(t) if skip_depth == 0 => {
                result.push_str(&t);
            }
            Event::Code(t) if keep_headings && skip_depth == 0 => {
                result.push_str(&t);
            }
            Event::SoftBreak | Event::HardBreak if skip_depth == 0 => {
                result.push(' ');
            }

            Event::End(TagEnd::Paragraph | TagEnd::Heading(_) | TagEnd::Item)
                if skip_depth == 0 =>
            {
                end_block(&mut result);
            }

            _ => {}
        }
    }

    result.trim().to_string()
}

/// Close the current block with a blank line, once.
fn end_block(result: &mut String) {
    let trimmed = result.trim_end_matches([' ', '\t']).len();
    result.truncate(trimmed);
    if !result.is_empty() && !result.ends_with("\n\n") {
        result.push_str("\n\n");
    }
}

/// Strip YAML frontmatter delimited by `---` lines.
fn strip_frontmatter(text: &str) -> String {
    let trimmed = text.trim_start();
    if !trimmed.starts_with("---") {
        return text.to_string();
    }

    let after_opening = &trimmed[3..];
    let Some(close_pos) = after_opening.find("\n---") else {
        return text.to_string();
    };

    let remainder = &after_opening[close_pos + 4..];
    remainder
        .strip_prefix('\n')
        .unwrap_or(remainder)
        .to_string()
}
