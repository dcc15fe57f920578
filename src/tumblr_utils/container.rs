use log::{debug, warn};

use crate::common::constants::POSTS_WRAPPER_CLASS;

/// Where rendered posts are appended, parsed from a selector string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Container {
    /// `body`, or an empty selector.
    Body,
    /// `#id`, or a bare name.
    Id(String),
    /// `.class`
    Class(String),
}

impl Container {
    pub fn from_selector(selector: &str) -> Self {
        let selector = selector.trim();
        if selector.is_empty() || selector.eq_ignore_ascii_case("body") {
            return Container::Body;
        }

        if let Some(class) = selector.strip_prefix('.') {
            return Container::Class(class.to_string());
        }

        let id = selector.strip_prefix('#').unwrap_or(selector);
        if !id.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_') {
            warn!(
                "Selector '{}' is not a plain id; using it verbatim as the element id",
                selector
            );
        }
        Container::Id(id.to_string())
    }

    fn open_tag(&self) -> Option<String> {
        match self {
            Container::Body => None,
            Container::Id(id) => Some(format!(r#"<div id="{}">"#, id)),
            Container::Class(class) => Some(format!(r#"<div class="{}">"#, class)),
        }
    }
}

/// Wrap rendered post fragments in the posts element, preserving order.
pub fn wrap_posts(fragments: &[String]) -> String {
    format!(
        r#"<div class="{}">{}</div>"#,
        POSTS_WRAPPER_CLASS,
        fragments.concat()
    )
}

/// Output page assembled from one or more containers. Appending to a
/// container that already exists adds to its end.
#[derive(Debug, Default)]
pub struct Page {
    sections: Vec<(Container, String)>,
}

impl Page {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, selector: &str, html: &str) {
        let container = Container::from_selector(selector);
        match self.sections.iter_mut().find(|(c, _)| *c == container) {
            Some((_, content)) => content.push_str(html),
            None => {
                debug!("Adding container {:?} to page", container);
                self.sections.push((container, html.to_string()));
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Body markup only.
    pub fn render_fragment(&self) -> String {
        let mut out = String::new();
        for (container, content) in &self.sections {
            match container.open_tag() {
                Some(open) => {
                    out.push_str(&open);
                    out.push_str(content);
                    out.push_str("</div>");
                }
                None => out.push_str(content),
            }
        }
        out
    }

    /// A complete HTML document around [`Page::render_fragment`].
    pub fn render_document(&self, title: &str) -> String {
        format!(
            "<!DOCTYPE html><html><head><meta charset=\"utf-8\"><title>{}</title></head><body>{}</body></html>",
            html_escape::encode_text(title),
            self.render_fragment()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_container_from_selector() {
        assert_eq!(Container::from_selector("body"), Container::Body);
        assert_eq!(Container::from_selector(""), Container::Body);
        assert_eq!(
            Container::from_selector("#posts"),
            Container::Id("posts".to_string())
        );
        assert_eq!(
            Container::from_selector("posts"),
            Container::Id("posts".to_string())
        );
        assert_eq!(
            Container::from_selector(".feed"),
            Container::Class("feed".to_string())
        );
    }

    #[test]
    fn test_wrap_posts() {
        let fragments = vec!["<p>1</p>".to_string(), "<p>2</p>".to_string()];
        assert_eq!(
            wrap_posts(&fragments),
            r#"<div class="tumblr-reader-posts"><p>1</p><p>2</p></div>"#
        );
        assert_eq!(wrap_posts(&[]), r#"<div class="tumblr-reader-posts"></div>"#);
    }

    #[test]
    fn test_page_appends_to_existing_container() {
        let mut page = Page::new();
        page.append("#a", "1");
        page.append(".b", "2");
        page.append("a", "3");
        page.append("body", "4");

        assert_eq!(
            page.render_fragment(),
            r#"<div id="a">13</div><div class="b">2</div>4"#
        );
    }

    #[test]
    fn test_render_document_escapes_title() {
        let mut page = Page::new();
        assert!(page.is_empty());
        page.append("body", "<p>x</p>");

        let doc = page.render_document("Tom & Jerry");
        assert!(doc.starts_with("<!DOCTYPE html>"));
        assert!(doc.contains("<title>Tom &amp; Jerry</title>"));
        assert!(doc.contains("<body><p>x</p></body>"));
    }
}
