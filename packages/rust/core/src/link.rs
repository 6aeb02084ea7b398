//! Rendering of navigation anchors.
//!
//! [`render_link`] turns an `<a>` node into a [`LinkToken`] without deciding
//! how it is framed; [`emit`] is the table-page framing used by the wiki.

use std::io::{self, Write};

use docwiki_markdown::{TableSink, link};

use crate::dom::{self, DocNode};

/// `href` value the documentation site uses for section headings.
pub const SECTION_PLACEHOLDER: &str = "#";

/// Site-relative documentation links that get the docs host prefixed.
const DOCS_PATH_PREFIX: &str = "/docs";

/// What a navigation anchor renders to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkToken {
    /// An anchor pointing at `#`: the start of a titled section.
    SectionHeader(String),
    /// A regular link.
    Link { text: String, href: String },
    /// Nothing to render.
    Empty,
}

/// Render `node` as a [`LinkToken`].
///
/// A non-empty `override_href` replaces the anchor's own `href`, but only when
/// the anchor has one. Links into `/docs` are made absolute with `docs_host`.
pub fn render_link(node: DocNode<'_>, override_href: Option<&str>, docs_host: &str) -> LinkToken {
    if !dom::is_anchor(node) {
        return LinkToken::Empty;
    }

    let Some(own_href) = dom::attr(node, "href") else {
        return LinkToken::Empty;
    };
    let text = dom::first_child_text(node).unwrap_or_default();
    let href = match override_href {
        Some(href) if !href.is_empty() => href,
        _ => own_href,
    };

    if href == SECTION_PLACEHOLDER {
        return LinkToken::SectionHeader(text.to_string());
    }
    if text.is_empty() {
        return LinkToken::Empty;
    }

    let href = if href.starts_with(DOCS_PATH_PREFIX) {
        format!("{docs_host}{href}")
    } else {
        href.to_string()
    };

    LinkToken::Link {
        text: text.to_string(),
        href,
    }
}

/// Write `token` to a table page: links become cells, section headers open a
/// new titled table.
pub fn emit<W: Write>(token: &LinkToken, sink: &mut TableSink<W>) -> io::Result<()> {
    match token {
        LinkToken::SectionHeader(title) => sink.start_section(title),
        LinkToken::Link { text, href } => sink.write_cell(&link(text, href)),
        LinkToken::Empty => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use docwiki_markdown::RawSink;
    use scraper::{Html, Selector};

    const HOST: &str = "https://www.terraform.io";

    fn render(html: &str, override_href: Option<&str>) -> LinkToken {
        let doc = Html::parse_fragment(html);
        let sel = Selector::parse("a, p").unwrap();
        let node = *doc.select(&sel).next().expect("anchor or paragraph");
        render_link(node, override_href, HOST)
    }

    fn emitted(tokens: &[LinkToken]) -> String {
        let mut sink = TableSink::new(RawSink::new(Vec::new()), 2).unwrap();
        for token in tokens {
            emit(token, &mut sink).unwrap();
        }
        String::from_utf8(sink.finish().unwrap()).unwrap()
    }

    #[test]
    fn non_anchor_renders_nothing() {
        assert_eq!(render("<p>text</p>", None), LinkToken::Empty);
    }

    #[test]
    fn docs_links_become_absolute() {
        assert_eq!(
            render(r#"<a href="/docs/providers/aws/r/instance.html">aws_instance</a>"#, None),
            LinkToken::Link {
                text: "aws_instance".into(),
                href: "https://www.terraform.io/docs/providers/aws/r/instance.html".into(),
            }
        );
    }

    #[test]
    fn other_links_are_kept() {
        assert_eq!(
            render(r#"<a href="https://www.hashicorp.com">HashiCorp</a>"#, None),
            LinkToken::Link {
                text: "HashiCorp".into(),
                href: "https://www.hashicorp.com".into(),
            }
        );
    }

    #[test]
    fn placeholder_href_is_a_section_header() {
        assert_eq!(
            render(r##"<a href="#">Data Sources</a>"##, None),
            LinkToken::SectionHeader("Data Sources".into())
        );
    }

    #[test]
    fn override_wins_over_actual_href() {
        let token = render(r#"<a href="/docs/providers/aws/guides">Guides</a>"#, Some("aws_guides"));
        assert_eq!(
            token,
            LinkToken::Link {
                text: "Guides".into(),
                href: "aws_guides".into(),
            }
        );

        let token = render(r##"<a href="#">Guides</a>"##, Some("aws_guides"));
        assert!(matches!(token, LinkToken::Link { .. }));
    }

    #[test]
    fn empty_override_is_ignored() {
        assert_eq!(
            render(r##"<a href="#">Guides</a>"##, Some("")),
            LinkToken::SectionHeader("Guides".into())
        );
    }

    #[test]
    fn missing_text_or_href_renders_nothing() {
        assert_eq!(render(r#"<a href="/docs/x"></a>"#, None), LinkToken::Empty);
        assert_eq!(render(r#"<a href="/docs/x"><b>Bold</b></a>"#, None), LinkToken::Empty);
        assert_eq!(render("<a>No href</a>", Some("aws_x")), LinkToken::Empty);
    }

    #[test]
    fn rendering_is_repeatable() {
        let doc = Html::parse_fragment(r#"<a href="/docs/x">X</a>"#);
        let sel = Selector::parse("a").unwrap();
        let node = *doc.select(&sel).next().unwrap();

        let first = render_link(node, Some("aws_x"), HOST);
        let second = render_link(node, Some("aws_x"), HOST);
        assert_eq!(first, second);
        assert_eq!(dom::attr(node, "href"), Some("/docs/x"));
    }

    #[test]
    fn section_header_never_emits_a_link() {
        let out = emitted(&[LinkToken::SectionHeader("Guides".into())]);
        assert_eq!(out, "# Guides\n\n| | |\n| --- | --- |\n");
        assert!(!out.contains('['));
    }

    #[test]
    fn links_are_table_cells() {
        let out = emitted(&[
            LinkToken::Link {
                text: "A".into(),
                href: "a".into(),
            },
            LinkToken::Empty,
            LinkToken::Link {
                text: "B".into(),
                href: "b".into(),
            },
        ]);
        assert_eq!(out, " | [A](a) | [B](b) |\n");
    }
}
