use anyhow::Result;
use log::{debug, info};

use crate::common::constants::TUMBLR_ENDPOINT;
use crate::common::types::ReadResponse;
use crate::post_renderer::PostRenderer;
use crate::settings::{ReaderOptions, Settings};
use crate::tumblr_utils::{fetch_posts, wrap_posts, Page};

/// Result of reading one blog.
#[derive(Debug, Clone)]
pub struct RenderedBlog {
    pub blog: String,
    pub title: String,
    /// `<div class="tumblr-reader-posts">` with every rendered post.
    pub html: String,
    pub rendered: usize,
    pub skipped: usize,
}

/// Fetches a blog and renders its posts. Holds no state between reads.
#[derive(Debug, Clone)]
pub struct TumblrReader {
    endpoint: String,
    renderer: PostRenderer,
}

impl Default for TumblrReader {
    fn default() -> Self {
        Self::new(TUMBLR_ENDPOINT, PostRenderer::default())
    }
}

impl TumblrReader {
    pub fn new(endpoint: impl Into<String>, renderer: PostRenderer) -> Self {
        Self {
            endpoint: endpoint.into(),
            renderer,
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.endpoint.clone(), settings.renderer())
    }

    /// One GET, then render every supported post.
    pub fn read(&self, options: &ReaderOptions) -> Result<RenderedBlog> {
        let response = fetch_posts(&self.endpoint, options)?;
        Ok(self.render_response(options, &response))
    }

    /// Read `options.blog` and append the result to its container in `page`.
    pub fn read_into(&self, options: &ReaderOptions, page: &mut Page) -> Result<RenderedBlog> {
        let rendered = self.read(options)?;
        page.append(&options.container, &rendered.html);
        debug!(
            "Appended {} posts from '{}' to container '{}'",
            rendered.rendered, options.blog, options.container
        );
        Ok(rendered)
    }

    pub fn render_response(&self, options: &ReaderOptions, response: &ReadResponse) -> RenderedBlog {
        let fragments = self.renderer.render_posts(&response.posts);
        let skipped = response.posts.len() - fragments.len();
        let title = response
            .tumblelog
            .as_ref()
            .map(|t| t.title.clone())
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| options.blog.clone());

        info!(
            "Rendered {} posts from '{}' ({} unsupported)",
            fragments.len(),
            options.blog,
            skipped
        );

        RenderedBlog {
            blog: options.blog.clone(),
            title,
            html: wrap_posts(&fragments),
            rendered: fragments.len(),
            skipped,
        }
    }
}
