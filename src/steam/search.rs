//! Store search result scraping.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::requirements::markup;

/// A game found by a store search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameListing {
    /// Display title.
    pub name: String,
    /// Steam application id.
    pub app_id: u32,
    /// Store page URL.
    pub url: String,
}

static ANCHOR_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?is)<a\s[^>]*>").unwrap());

static CLASS_ATTR_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)\bclass\s*=\s*"([^"]*)""#).unwrap());

static HREF_ATTR_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)\bhref\s*=\s*"([^"]*)""#).unwrap());

static TITLE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?is)<span[^>]*\bclass\s*=\s*"(?:[^"]*\s)?title(?:\s[^"]*)?"[^>]*>(.*?)</span>"#)
        .unwrap()
});

static APP_ID_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"/app/(\d+)").unwrap());

const ROW_CLASS: &str = "search_result_row";

/// Extract up to `max_results` listings from a store search page.
///
/// The first `max_results` result rows are considered; rows whose link has
/// no application id or that carry no title are dropped, so fewer listings
/// may be returned.
pub fn parse_search_results(html: &str, max_results: usize) -> Vec<GameListing> {
    result_rows(html)
        .take(max_results)
        .filter_map(|(href, body)| {
            let app_id = APP_ID_REGEX.captures(href)?[1].parse().ok()?;
            let title = TITLE_REGEX.captures(body)?;
            let name = markup::text_nodes(&title[1]).join(" ");
            if name.is_empty() {
                return None;
            }
            Some(GameListing {
                name,
                app_id,
                url: markup::decode_entities(href),
            })
        })
        .collect()
}

/// `(href, inner markup)` of every anchor carrying the result row class.
fn result_rows(html: &str) -> impl Iterator<Item = (&str, &str)> {
    ANCHOR_REGEX.find_iter(html).filter_map(move |tag| {
        let open = tag.as_str();
        let classes = CLASS_ATTR_REGEX.captures(open)?.get(1)?.as_str();
        if !classes.split_whitespace().any(|c| c == ROW_CLASS) {
            return None;
        }
        let href = HREF_ATTR_REGEX.captures(open)?.get(1)?.as_str();

        let rest = &html[tag.end()..];
        let body_end = find_ignore_case(rest, "</a>").unwrap_or(rest.len());
        Some((href, &rest[..body_end]))
    })
}

fn find_ignore_case(haystack: &str, needle: &str) -> Option<usize> {
    haystack
        .as_bytes()
        .windows(needle.len())
        .position(|w| w.eq_ignore_ascii_case(needle.as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(app_path: &str, title: &str) -> String {
        format!(
            r#"<a href="https://store.steampowered.com{app_path}?snr=1_7_7_151_150_1" data-ds-appid="1" class="search_result_row ds_collapse_flag " onmouseover="x">
                <div class="col search_capsule"><img src="cap.jpg"></div>
                <div class="responsive_search_name_combined">
                    <div class="col search_name ellipsis"><span class="title">{title}</span></div>
                    <div class="col search_released responsive_secondrow">19 Apr, 2011</div>
                </div>
            </a>"#
        )
    }

    fn page(rows: &[String]) -> String {
        format!(
            r#"<html><body><a href="/about" class="menuitem">About</a><div id="search_resultsRows">{}</div></body></html>"#,
            rows.join("\n")
        )
    }

    #[test]
    fn parses_rows_in_order() {
        let html = page(&[
            row("/app/620/Portal_2/", "Portal 2"),
            row("/app/400/Portal/", "Portal"),
        ]);
        let results = parse_search_results(&html, 5);

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].name, "Portal 2");
        assert_eq!(results[0].app_id, 620);
        assert!(results[0].url.contains("/app/620/Portal_2/"));
        assert_eq!(results[1].app_id, 400);
    }

    #[test]
    fn limits_to_max_results() {
        let rows: Vec<_> = (1..=8)
            .map(|i| row(&format!("/app/{i}/Game/"), &format!("Game {i}")))
            .collect();
        let results = parse_search_results(&page(&rows), 3);
        let ids: Vec<_> = results.iter().map(|r| r.app_id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn drops_rows_without_app_id_after_limiting() {
        let html = page(&[
            row("/bundle/232/Valve_Complete_Pack/", "Valve Complete Pack"),
            row("/app/620/Portal_2/", "Portal 2"),
            row("/app/400/Portal/", "Portal"),
        ]);
        let results = parse_search_results(&html, 2);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, "Portal 2");
    }

    #[test]
    fn decodes_title_entities() {
        let html = page(&[row("/app/1/X/", "Tom Clancy&#39;s Rainbow Six&reg; Siege")]);
        let results = parse_search_results(&html, 5);
        assert_eq!(results[0].name, "Tom Clancy's Rainbow Six® Siege");
    }

    #[test]
    fn ignores_non_result_anchors() {
        assert!(parse_search_results(&page(&[]), 5).is_empty());
    }

    #[test]
    fn no_results_page() {
        let html = r#"<div id="search_resultsRows"></div><div class="search_results_count">0 results</div>"#;
        assert!(parse_search_results(html, 5).is_empty());
    }
}
