use log::{debug, warn};
use std::collections::HashMap;

use crate::template::Template;

pub const DATE_TEMPLATE: &str = concat!(
    r#"<div class="tumblr-reader-date">"#,
    r#"<a class="tumblr-reader-permalink" href="${url}">${date}</a>"#,
    "</div>"
);

pub const TAGS_TEMPLATE: &str = r#"<div class="tumblr-reader-tags">${tags}</div>"#;

pub const REGULAR_TEMPLATE: &str = concat!(
    r#"<div class="tumblr-reader-post tumblr-reader-post-regular">"#,
    "${date_block}${tags_block}",
    r#"<div class="tumblr-reader-title">${title}</div>"#,
    r#"<div class="tumblr-reader-body">${body}</div>"#,
    "</div>"
);

pub const PHOTO_TEMPLATE: &str = concat!(
    r#"<div class="tumblr-reader-post tumblr-reader-post-photo">"#,
    "${date_block}${tags_block}",
    r#"<div class="tumblr-reader-photo"><img src="${photo}" /></div>"#,
    r#"<div class="tumblr-reader-caption">${caption}</div>"#,
    "</div>"
);

pub const QUOTE_TEMPLATE: &str = concat!(
    r#"<div class="tumblr-reader-post tumblr-reader-post-quote">"#,
    "${date_block}${tags_block}",
    r#"<div class="tumblr-reader-quote">${quote}</div>"#,
    r#"<div class="tumblr-reader-source">${source}</div>"#,
    "</div>"
);

/// Permalink and target use distinct names; the browser reader used `${url}`
/// for both and left it unsubstituted in link posts.
pub const LINK_TEMPLATE: &str = concat!(
    r#"<div class="tumblr-reader-post tumblr-reader-post-link">"#,
    "${date_block}${tags_block}",
    r#"<div class="tumblr-reader-link"><a href="${link_url}">${text}</a></div>"#,
    "</div>"
);

/// Templates for every renderable post type plus the shared date and tag
/// sub-templates.
#[derive(Debug, Clone)]
pub struct TemplateSet {
    pub date: Template,
    pub tags: Template,
    pub regular: Template,
    pub photo: Template,
    pub quote: Template,
    pub link: Template,
}

impl Default for TemplateSet {
    fn default() -> Self {
        Self {
            date: Template::new(DATE_TEMPLATE),
            tags: Template::new(TAGS_TEMPLATE),
            regular: Template::new(REGULAR_TEMPLATE),
            photo: Template::new(PHOTO_TEMPLATE),
            quote: Template::new(QUOTE_TEMPLATE),
            link: Template::new(LINK_TEMPLATE),
        }
    }
}

impl TemplateSet {
    /// Defaults with any entry replaced by `overrides`, keyed by post type
    /// (`regular`, `photo`, `quote`, `link`) or sub-template (`date`, `tags`).
    pub fn with_overrides(overrides: &HashMap<String, String>) -> Self {
        let mut set = Self::default();
        for (name, source) in overrides {
            let slot = match name.as_str() {
                "date" => &mut set.date,
                "tags" => &mut set.tags,
                "regular" => &mut set.regular,
                "photo" => &mut set.photo,
                "quote" => &mut set.quote,
                "link" => &mut set.link,
                other => {
                    warn!("Ignoring template override for unknown name '{}'", other);
                    continue;
                }
            };
            debug!("Overriding '{}' template", name);
            *slot = Template::new(source.as_str());
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_overrides() {
        let mut overrides = HashMap::new();
        overrides.insert("quote".to_string(), "<q>${quote}</q>".to_string());
        overrides.insert("video".to_string(), "<video/>".to_string());

        let set = TemplateSet::with_overrides(&overrides);
        assert_eq!(set.quote.source(), "<q>${quote}</q>");
        assert_eq!(set.regular.source(), REGULAR_TEMPLATE);
    }
}
