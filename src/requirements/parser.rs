//! Requirement block parsing.

use tracing::debug;

use super::block::{Category, RequirementBlock};
use super::markup;

/// Parse a raw requirement block into categories.
///
/// Returns `None` when there is no markup to parse. Each list item is
/// assigned to the first category whose label prefixes it; items without a
/// label are folded into Additional Notes. Markup without any usable list
/// items ends up entirely in Additional Notes.
///
/// # Example
///
/// ```
/// use pixelbuddy::requirements::{parse, Category};
///
/// let block = parse(Some("<ul><li><strong>Memory:</strong> 8 GB RAM</li></ul>")).unwrap();
/// assert_eq!(block.get(Category::Memory), "8 GB RAM");
/// assert!(parse(None).is_none());
/// ```
pub fn parse(raw_markup: Option<&str>) -> Option<RequirementBlock> {
    let raw = raw_markup.filter(|s| !s.trim().is_empty())?;
    let mut block = RequirementBlock::new();

    for line in markup::list_items(raw) {
        match match_category(&line) {
            Some((category, value)) => block.set(category, value),
            None => block.append_note(&line),
        }
    }

    if block.is_empty() {
        debug!("No labelled list items; keeping the whole block as notes");
        block.set(Category::AdditionalNotes, markup::text_nodes(raw).join(" "));
    }

    Some(block)
}

/// Find the first category labelling `line` and return the remaining text.
///
/// A label matches case-insensitively when followed by `:` or whitespace.
fn match_category(line: &str) -> Option<(Category, &str)> {
    Category::ALL.into_iter().find_map(|category| {
        let rest = strip_prefix_ignore_case(line, category.label())?;
        if !rest.starts_with(|c: char| c == ':' || c.is_whitespace()) {
            return None;
        }
        let value = rest.trim_start_matches(|c: char| c == ':' || c.is_whitespace());
        Some((category, value.trim_end()))
    })
}

fn strip_prefix_ignore_case<'a>(s: &'a str, prefix: &str) -> Option<&'a str> {
    let head = s.get(..prefix.len())?;
    head.eq_ignore_ascii_case(prefix)
        .then(|| &s[prefix.len()..])
}
