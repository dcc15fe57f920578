use log::debug;

mod content_builder;
mod formatting;
mod templates;

pub use content_builder::PostContentBuilder;
pub use formatting::{format_date, format_tags};
pub use templates::TemplateSet;

use crate::common::time_utils::DateStyle;
use crate::common::types::Post;

/// Dispatches posts to the template for their type.
#[derive(Debug, Clone, Default)]
pub struct PostRenderer {
    templates: TemplateSet,
    date_style: DateStyle,
}

impl PostRenderer {
    pub fn new(templates: TemplateSet, date_style: DateStyle) -> Self {
        Self {
            templates,
            date_style,
        }
    }

    /// Rendered fragment, or `None` when the post type has no template.
    pub fn render_post(&self, post: &Post) -> Option<String> {
        PostContentBuilder::new(&self.templates, self.date_style).build_post_content(post)
    }

    /// Fragments in input order with unsupported posts dropped.
    pub fn render_posts(&self, posts: &[Post]) -> Vec<String> {
        let builder = PostContentBuilder::new(&self.templates, self.date_style);
        let fragments: Vec<String> = posts
            .iter()
            .filter_map(|post| {
                let rendered = builder.build_post_content(post);
                if rendered.is_none() {
                    debug!("Skipping unsupported post {}", post.id);
                }
                rendered
            })
            .collect();

        debug!(
            "Rendered {} of {} posts ({} skipped)",
            fragments.len(),
            posts.len(),
            posts.len() - fragments.len()
        );
        fragments
    }
}
