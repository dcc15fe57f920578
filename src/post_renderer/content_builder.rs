use log::debug;

use super::formatting::{format_date, format_tags};
use super::templates::TemplateSet;
use crate::common::time_utils::DateStyle;
use crate::common::types::{Post, PostKind};
use crate::template::{RenderContext, Template};

/// Builds the render context for a post and picks its template.
pub struct PostContentBuilder<'a> {
    templates: &'a TemplateSet,
    date_style: DateStyle,
}

impl<'a> PostContentBuilder<'a> {
    pub fn new(templates: &'a TemplateSet, date_style: DateStyle) -> Self {
        Self {
            templates,
            date_style,
        }
    }

    /// `None` for unsupported post types.
    pub fn build_post_content(&self, post: &Post) -> Option<String> {
        let template = self.template_for(&post.kind)?;
        let context = self.build_context(post);
        debug!(
            "Rendering {} post {} with {} context entries",
            post.kind.type_name(),
            post.id,
            context.len()
        );
        Some(template.render(&context))
    }

    fn template_for(&self, kind: &PostKind) -> Option<&'a Template> {
        let templates: &'a TemplateSet = self.templates;
        match kind {
            PostKind::Regular { .. } => Some(&templates.regular),
            PostKind::Photo { .. } => Some(&templates.photo),
            PostKind::Quote { .. } => Some(&templates.quote),
            PostKind::Link { .. } => Some(&templates.link),
            PostKind::Unsupported => None,
        }
    }

    pub fn build_context(&self, post: &Post) -> RenderContext {
        let mut context = RenderContext::new();
        self.build_shared_entries(post, &mut context);
        self.build_kind_entries(&post.kind, &mut context);
        context
    }

    fn build_shared_entries(&self, post: &Post, context: &mut RenderContext) {
        let date = format_date(post, self.date_style);
        let tags = format_tags(&post.tags);

        let date_block = self.templates.date.render(&crate::render_context!(
            "url" => post.url_with_slug,
            "date" => date,
        ));
        let tags_block = self
            .templates
            .tags
            .render(&crate::render_context!("tags" => tags));

        context.extend(crate::render_context!(
            "url" => post.url_with_slug,
            "permalink" => post.url_with_slug,
            "date" => date,
            "tags" => tags,
            "date_block" => date_block,
            "tags_block" => tags_block,
        ));
    }

    fn build_kind_entries(&self, kind: &PostKind, context: &mut RenderContext) {
        let entries: Vec<(&str, &str)> = match kind {
            PostKind::Regular { title, body } => vec![("title", title.as_str()), ("body", body.as_str())],
            PostKind::Photo { photo_url, caption } => {
                vec![("photo", photo_url.as_str()), ("caption", caption.as_str())]
            }
            PostKind::Quote { text, source } => vec![("quote", text.as_str()), ("source", source.as_str())],
            PostKind::Link {
                text,
                url,
                description,
            } => vec![
                ("text", text.as_str()),
                ("link_url", url.as_str()),
                ("description", description.as_str()),
            ],
            PostKind::Unsupported => Vec::new(),
        };

        for (key, value) in entries {
            context.insert(key.to_string(), value.to_string());
        }
    }
}
