use crate::common::time_utils::{format_post_date, DateStyle};
use crate::common::types::Post;

/// Date line text for a post, `month/day/year`.
pub fn format_date(post: &Post, style: DateStyle) -> String {
    format_post_date(post.unix_timestamp, style)
}

/// `#tag` for each tag, joined by `, `.
pub fn format_tags(tags: &[String]) -> String {
    tags.iter()
        .map(|tag| format!("#{}", tag))
        .collect::<Vec<_>>()
        .join(", ")
}
