//! Reads posts from a Tumblr blog (read API v1) and renders them as HTML
//! fragments through per-type `${name}` templates.

pub mod blog_sources;
pub mod cli_args;
pub mod common;
pub mod post_renderer;
pub mod reader;
pub mod settings;
pub mod template;
pub mod tumblr_utils;

pub use common::time_utils::DateStyle;
pub use common::types::{Post, PostKind, ReadResponse};
pub use post_renderer::{PostRenderer, TemplateSet};
pub use reader::{RenderedBlog, TumblrReader};
pub use settings::{ReaderOptions, Settings};
pub use template::{substitute, RenderContext, Template};
