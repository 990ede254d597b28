//! Allow-list HTML sanitization.
//!
//! The output fragment may contain only structural tags and the single
//! attribute `href`. Anchors are absolutized against the page URL and opened
//! in a new context; anchors whose href cannot be resolved lose the
//! attribute (de-linked) rather than being dropped.

use ammonia::{Builder, UrlRelative};
use std::collections::{HashMap, HashSet};
use url::Url;

/// Structural tags allowed through: headings, paragraphs, emphasis, lists,
/// tables, links, code/quote blocks.
const ALLOWED_TAGS: &[&str] = &[
    "h1",
    "h2",
    "h3",
    "h4",
    "h5",
    "h6",
    "p",
    "br",
    "hr",
    "b",
    "strong",
    "i",
    "em",
    "u",
    "s",
    "ul",
    "ol",
    "li",
    "table",
    "thead",
    "tbody",
    "tr",
    "th",
    "td",
    "a",
    "blockquote",
    "code",
    "pre",
];

pub fn sanitize(html: &str, base: &Url) -> String {
    let tags: HashSet<&str> = ALLOWED_TAGS.iter().copied().collect();
    let mut anchor_attrs: HashMap<&str, HashSet<&str>> = HashMap::new();
    anchor_attrs.insert("a", HashSet::from(["href"]));

    Builder::default()
        .tags(tags)
        .generic_attributes(HashSet::new())
        .tag_attributes(anchor_attrs)
        .url_relative(UrlRelative::RewriteWithBase(base.clone()))
        .link_rel(Some("noopener noreferrer"))
        .set_tag_attribute_value("a", "target", "_blank")
        .clean(html)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse("https://example.com/articles/post/").unwrap()
    }

    #[test]
    fn strips_disallowed_tags_keeps_text() {
        let clean = sanitize(
            r#"<div><p>keep</p><script>alert(1)</script><img src="x.png"><span>inline</span></div>"#,
            &base(),
        );
        assert!(!clean.contains("<div"));
        assert!(!clean.contains("<script"));
        assert!(!clean.contains("<img"));
        assert!(!clean.contains("<span"));
        assert!(clean.contains("<p>keep</p>"));
        assert!(clean.contains("inline"));
    }

    #[test]
    fn only_href_survives_on_anchors() {
        let clean = sanitize(
            r#"<a href="/x" onclick="evil()" class="link" id="a1">x</a>"#,
            &base(),
        );
        assert!(!clean.contains("onclick"));
        assert!(!clean.contains("class="));
        assert!(!clean.contains("id="));
        assert!(clean.contains("href="));
    }

    #[test]
    fn relative_hrefs_become_absolute() {
        let clean = sanitize(r#"<p><a href="../other">link</a></p>"#, &base());
        assert!(clean.contains(r#"href="https://example.com/articles/other""#));
    }

    #[test]
    fn anchors_get_blank_target_and_rel() {
        let clean = sanitize(r#"<a href="https://example.org/">x</a>"#, &base());
        assert!(clean.contains(r#"target="_blank""#));
        assert!(clean.contains(r#"rel="noopener noreferrer""#));
    }

    #[test]
    fn unresolvable_href_is_delinked_not_dropped() {
        let clean = sanitize(r#"<p><a href="javascript:alert(1)">still here</a></p>"#, &base());
        assert!(clean.contains("still here"));
        assert!(!clean.contains("javascript:"));
    }

    #[test]
    fn every_output_tag_is_allow_listed_and_only_href_survives() {
        let messy = r#"<div class="wrap"><h2 id="x">H</h2><p style="color:red">text
            <a href="/a" title="t">link</a> <video src="v.mp4">v</video>
            <ul data-x="1"><li>item</li></ul><iframe src="evil"></iframe></p></div>"#;
        let clean = sanitize(messy, &base());

        let fragment = scraper::Html::parse_fragment(&clean);
        for element in fragment
            .root_element()
            .descendent_elements()
        {
            let name = element.value().name();
            if name == "html" {
                continue; // fragment wrapper
            }
            assert!(ALLOWED_TAGS.contains(&name), "tag <{name}> not allowed");
            for (attr, _) in element.value().attrs() {
                if name == "a" {
                    assert!(
                        attr == "href" || attr == "target" || attr == "rel",
                        "unexpected attribute {attr} on <a>"
                    );
                } else {
                    panic!("unexpected attribute {attr} on <{name}>");
                }
            }
        }
    }

    #[test]
    fn table_structure_is_preserved() {
        let clean = sanitize(
            "<table><thead><tr><th>h</th></tr></thead><tbody><tr><td>d</td></tr></tbody></table>",
            &base(),
        );
        assert!(clean.contains("<th>h</th>"));
        assert!(clean.contains("<td>d</td>"));
    }
}
