// Footer region codec - markers, stripping, rendering, and link parsing

use regex::Regex;
use serde::Serialize;
use std::sync::OnceLock;

pub const FOOTER_START: &str = "<!-- FooterStart -->";
pub const FOOTER_END: &str = "<!-- FooterEnd -->";
pub const FOOTER_SKIP: &str = "<!-- FooterSkip -->";

const LINK_SEPARATOR: &str = " | ";
const PREVIOUS_ARROW: &str = "←";
const NEXT_ARROW: &str = "→";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Previous,
    Next,
}

/// A navigation link to a neighboring document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    pub direction: Direction,
    pub title: String,
    pub target: String,
}

impl Link {
    pub fn previous(title: impl Into<String>, target: impl Into<String>) -> Self {
        Link {
            direction: Direction::Previous,
            title: title.into(),
            target: target.into(),
        }
    }

    pub fn next(title: impl Into<String>, target: impl Into<String>) -> Self {
        Link {
            direction: Direction::Next,
            title: title.into(),
            target: target.into(),
        }
    }

    /// Markdown rendering: `[← Title](target)` or `[Title →](target)`.
    pub fn render(&self) -> String {
        match self.direction {
            Direction::Previous => format!("[{PREVIOUS_ARROW} {}]({})", self.title, self.target),
            Direction::Next => format!("[{} {NEXT_ARROW}]({})", self.title, self.target),
        }
    }
}

/// True when the document opts out of footer management.
pub fn has_skip_marker(content: &str) -> bool {
    content.contains(FOOTER_SKIP)
}

/// Split content at the first start marker into main content and the
/// existing footer block (marker included).
pub fn split_footer(content: &str) -> (&str, Option<&str>) {
    match content.find(FOOTER_START) {
        Some(pos) => (&content[..pos], Some(&content[pos..])),
        None => (content, None),
    }
}

/// Everything before the first start marker.
pub fn strip_footer(content: &str) -> &str {
    split_footer(content).0
}

/// Render a footer block holding the given links in order.
pub fn build_footer(links: &[Link]) -> String {
    let rendered: Vec<String> = links.iter().map(Link::render).collect();
    format!(
        "\n\n{FOOTER_START}\n---\n{}\n{FOOTER_END}\n",
        rendered.join(LINK_SEPARATOR)
    )
}

/// Replace whatever footer `content` carries with a freshly built one.
pub fn compose(content: &str, links: &[Link]) -> String {
    let main = strip_footer(content).trim_end();
    let mut out = String::with_capacity(main.len() + 128);
    out.push_str(main);
    out.push_str(&build_footer(links));
    out
}

/// Whether writing `new_content` would change the file, ignoring
/// leading and trailing whitespace.
pub fn content_changed(old_content: &str, new_content: &str) -> bool {
    old_content.trim() != new_content.trim()
}

fn link_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"\[([^\]]*)\]\(([^)]*)\)").expect("link pattern is valid")
    })
}

/// Extract the navigation links embedded in an existing footer block.
/// Labels without an arrow are ignored.
pub fn parse_links(footer: &str) -> Vec<Link> {
    let body = match footer.find(FOOTER_END) {
        Some(end) => &footer[..end],
        None => footer,
    };

    link_pattern()
        .captures_iter(body)
        .filter_map(|caps| {
            let label = caps.get(1)?.as_str();
            let target = caps.get(2)?.as_str();
            if let Some(title) = label.strip_prefix(PREVIOUS_ARROW) {
                Some(Link::previous(title.trim(), target))
            } else {
                label
                    .strip_suffix(NEXT_ARROW)
                    .map(|title| Link::next(title.trim(), target))
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_render_links() {
        assert_eq!(
            Link::previous("Alpha", "../a/README.md").render(),
            "[← Alpha](../a/README.md)"
        );
        assert_eq!(
            Link::next("Beta", "docs/b/README.md").render(),
            "[Beta →](docs/b/README.md)"
        );
    }

    #[test]
    fn test_build_footer_both_links() {
        let footer = build_footer(&[
            Link::previous("Alpha", "../a/README.md"),
            Link::next("README", "../../README.md"),
        ]);
        assert_eq!(
            footer,
            "\n\n<!-- FooterStart -->\n---\n[← Alpha](../a/README.md) | [README →](../../README.md)\n<!-- FooterEnd -->\n"
        );
    }

    #[test]
    fn test_build_footer_without_links() {
        assert_eq!(
            build_footer(&[]),
            "\n\n<!-- FooterStart -->\n---\n\n<!-- FooterEnd -->\n"
        );
    }

    #[test]
    fn test_split_footer() {
        let content = "# Doc\n\nBody\n\n<!-- FooterStart -->\n---\n[X →](x)\n<!-- FooterEnd -->\n";
        let (main, footer) = split_footer(content);
        assert_eq!(main, "# Doc\n\nBody\n\n");
        assert!(footer.unwrap().starts_with(FOOTER_START));

        let (main, footer) = split_footer("# No footer\n");
        assert_eq!(main, "# No footer\n");
        assert!(footer.is_none());
    }

    #[test]
    fn test_strip_footer_cuts_at_first_marker() {
        let content = "Body\n<!-- FooterStart -->\nold\n<!-- FooterEnd -->\n<!-- FooterStart -->\nolder\n";
        assert_eq!(strip_footer(content), "Body\n");
    }

    #[test]
    fn test_compose_replaces_existing_footer() {
        let content = "# Doc\n\nBody text\n\n\n<!-- FooterStart -->\n---\n[Old →](old.md)\n<!-- FooterEnd -->\n";
        let composed = compose(content, &[Link::next("New", "new/README.md")]);
        assert_eq!(
            composed,
            "# Doc\n\nBody text\n\n<!-- FooterStart -->\n---\n[New →](new/README.md)\n<!-- FooterEnd -->\n"
        );
        assert_eq!(composed.matches(FOOTER_START).count(), 1);
        assert_eq!(composed.matches(FOOTER_END).count(), 1);
    }

    #[test]
    fn test_compose_is_stable() {
        let links = [Link::previous("A", "../a/README.md"), Link::next("C", "../c/README.md")];
        let once = compose("# B\n\ntext\n", &links);
        let twice = compose(&once, &links);
        assert_eq!(once, twice);
        assert!(!content_changed(&once, &twice));
    }

    #[test]
    fn test_content_changed_ignores_outer_whitespace() {
        assert!(!content_changed("body\n\n", "\nbody"));
        assert!(content_changed("body", "body2"));
    }

    #[test]
    fn test_skip_marker_is_case_sensitive() {
        assert!(has_skip_marker("text\n<!-- FooterSkip -->\n"));
        assert!(!has_skip_marker("text\n<!-- footerskip -->\n"));
    }

    #[test]
    fn test_parse_links_roundtrip_footer() {
        let links = vec![
            Link::previous("Alpha", "../a/README.md"),
            Link::next("README", "../../README.md"),
        ];
        let footer = build_footer(&links);
        let (_, block) = split_footer(footer.as_str());
        assert_eq!(parse_links(block.unwrap()), links);
    }

    #[test]
    fn test_parse_links_ignores_plain_links() {
        let footer = "<!-- FooterStart -->\n---\n[docs](https://example.com) | [Next →](n.md)\n<!-- FooterEnd -->\n[after](ignored.md)";
        assert_eq!(parse_links(footer), vec![Link::next("Next", "n.md")]);
    }
}
