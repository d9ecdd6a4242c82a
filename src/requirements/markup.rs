//! Minimal HTML text extraction for requirement blocks.
//!
//! Steam requirement blocks are small, flat fragments (`<ul>`, `<li>`,
//! `<strong>`, `<br>`), so a tag tokenizer is enough. Text nodes are
//! entity-decoded and trimmed; empty nodes are dropped.

/// A lexical piece of markup.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    Text(String),
    Open(String),
    Close(String),
}

/// Split markup into text and tag tokens. Tag names are lower-cased.
fn tokenize(markup: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut rest = markup;

    while !rest.is_empty() {
        let Some(lt) = rest.find('<') else {
            tokens.push(Token::Text(rest.to_string()));
            break;
        };
        if lt > 0 {
            tokens.push(Token::Text(rest[..lt].to_string()));
        }

        let after = &rest[lt + 1..];
        if let Some(comment) = after.strip_prefix("!--") {
            rest = match comment.find("-->") {
                Some(end) => &comment[end + 3..],
                None => "",
            };
            continue;
        }

        let Some(gt) = after.find('>') else {
            // Unterminated tag: keep the remainder as text.
            tokens.push(Token::Text(rest[lt..].to_string()));
            break;
        };

        let inner = &after[..gt];
        let (closing, body) = match inner.strip_prefix('/') {
            Some(body) => (true, body),
            None => (false, inner),
        };
        let name: String = body
            .trim_start()
            .chars()
            .take_while(|c| c.is_ascii_alphanumeric())
            .map(|c| c.to_ascii_lowercase())
            .collect();
        if !name.is_empty() {
            tokens.push(if closing {
                Token::Close(name)
            } else {
                Token::Open(name)
            });
        }

        rest = &after[gt + 1..];
    }

    tokens
}

fn is_list(name: &str) -> bool {
    name == "ul" || name == "ol"
}

/// Push a decoded, trimmed text node if it is non-empty.
fn push_text(out: &mut Vec<String>, raw: &str) {
    let decoded = decode_entities(raw);
    let trimmed = decoded.trim();
    if !trimmed.is_empty() {
        out.push(trimmed.to_string());
    }
}

/// Text of every `<li>` element, in document order.
///
/// Each item's text nodes (including nested elements) are trimmed and
/// joined with a single space.
pub fn list_items(markup: &str) -> Vec<String> {
    let tokens = tokenize(markup);
    let mut items = Vec::new();

    for (start, token) in tokens.iter().enumerate() {
        if !matches!(token, Token::Open(name) if name == "li") {
            continue;
        }

        let mut parts = Vec::new();
        let mut li_depth = 1usize;
        let mut list_depth = 0usize;

        for token in &tokens[start + 1..] {
            match token {
                Token::Text(text) => push_text(&mut parts, text),
                Token::Open(name) if name == "li" => li_depth += 1,
                Token::Close(name) if name == "li" => {
                    li_depth -= 1;
                    if li_depth == 0 {
                        break;
                    }
                }
                Token::Open(name) if is_list(name) => list_depth += 1,
                Token::Close(name) if is_list(name) => {
                    if list_depth == 0 {
                        // The enclosing list ended without closing this item.
                        break;
                    }
                    list_depth -= 1;
                }
                _ => {}
            }
        }

        items.push(parts.join(" "));
    }

    items
}

/// Every non-empty text node in the markup, trimmed, in document order.
pub fn text_nodes(markup: &str) -> Vec<String> {
    let mut parts = Vec::new();
    for token in tokenize(markup) {
        if let Token::Text(text) = token {
            push_text(&mut parts, &text);
        }
    }
    parts
}

/// Decode named and numeric character references.
///
/// Unknown references are left untouched.
pub fn decode_entities(s: &str) -> String {
    if !s.contains('&') {
        return s.to_string();
    }

    let mut out = String::with_capacity(s.len());
    let mut rest = s;

    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        let candidate = &rest[amp + 1..];

        let decoded = candidate
            .find(';')
            .filter(|&semi| semi <= 10)
            .and_then(|semi| entity_char(&candidate[..semi]).map(|c| (c, semi)));

        match decoded {
            Some((c, semi)) => {
                out.push(c);
                rest = &candidate[semi + 1..];
            }
            None => {
                out.push('&');
                rest = candidate;
            }
        }
    }
    out.push_str(rest);
    out
}

fn entity_char(name: &str) -> Option<char> {
    if let Some(num) = name.strip_prefix('#') {
        let code = match num.strip_prefix(['x', 'X']) {
            Some(hex) => u32::from_str_radix(hex, 16).ok()?,
            None => num.parse::<u32>().ok()?,
        };
        return char::from_u32(code);
    }

    let c = match name {
        "amp" => '&',
        "lt" => '<',
        "gt" => '>',
        "quot" => '"',
        "apos" => '\'',
        "nbsp" => '\u{a0}',
        "reg" => '®',
        "trade" => '™',
        "copy" => '©',
        _ => return None,
    };
    Some(c)
}

#[cfg(test)]
mod tests {
    use super::*;

    const STEAM_BLOCK: &str = "<strong>Minimum:</strong><br><ul class=\"bb_ul\">\
        <li>Requires a 64-bit processor and operating system<br></li>\
        <li><strong>OS:</strong> Windows 10<br></li>\
        <li><strong>Memory:</strong> 8 GB RAM<br></li></ul>";

    #[test]
    fn extracts_list_items_in_order() {
        let items = list_items(STEAM_BLOCK);
        assert_eq!(
            items,
            vec![
                "Requires a 64-bit processor and operating system",
                "OS: Windows 10",
                "Memory: 8 GB RAM",
            ]
        );
    }

    #[test]
    fn list_items_empty_without_lists() {
        assert!(list_items("<p>Windows 10, 8 GB RAM</p>").is_empty());
    }

    #[test]
    fn unclosed_items_end_at_list_close() {
        let items = list_items("<ul><li>one<li>two</ul><p>after</p>");
        // The first item swallows the second, as an HTML parser nests them.
        assert_eq!(items, vec!["one two", "two"]);
    }

    #[test]
    fn text_nodes_are_trimmed_and_nonempty() {
        let nodes = text_nodes("<p>  Windows 10 </p>\n<br>  <b>8 GB</b>");
        assert_eq!(nodes, vec!["Windows 10", "8 GB"]);
    }

    #[test]
    fn comments_are_skipped() {
        let nodes = text_nodes("a<!-- hidden <b>x</b> -->b");
        assert_eq!(nodes, vec!["a", "b"]);
    }

    #[test]
    fn unterminated_tag_kept_as_text() {
        let nodes = text_nodes("8 GB < 16 GB");
        assert_eq!(nodes, vec!["8 GB", "< 16 GB"]);
    }

    #[test]
    fn decodes_named_and_numeric_entities() {
        assert_eq!(decode_entities("Tom &amp; Jerry"), "Tom & Jerry");
        assert_eq!(decode_entities("&lt;b&gt;"), "<b>");
        assert_eq!(decode_entities("&#169; &#xAE;"), "© ®");
        assert_eq!(decode_entities("8&nbsp;GB"), "8\u{a0}GB");
    }

    #[test]
    fn leaves_unknown_entities() {
        assert_eq!(decode_entities("AT&T &bogus; &"), "AT&T &bogus; &");
    }
}
