use anyhow::{Context, Result};
use log::{debug, error, info};
use regex::Regex;
use std::sync::OnceLock;

use super::client::get_http_client;
use super::endpoint::build_endpoint_url;
use crate::common::types::ReadResponse;
use crate::settings::ReaderOptions;

fn padding_re() -> &'static Regex {
    static PADDING_RE: OnceLock<Regex> = OnceLock::new();
    PADDING_RE.get_or_init(|| {
        Regex::new(
            r"(?s)^\s*(?:var\s+[\w$]+\s*=\s*(?P<assigned>.*?)|[\w$.]+\s*\(\s*(?P<wrapped>.*)\s*\))\s*;?\s*$",
        )
        .expect("padding pattern is valid")
    })
}

/// Strip `callback(...)` or `var name = ...;` around a JSON body. Plain JSON
/// passes through unchanged.
pub fn strip_jsonp_padding(body: &str) -> &str {
    let trimmed = body.trim();
    if trimmed.starts_with('{') || trimmed.starts_with('[') {
        return trimmed;
    }

    match padding_re().captures(trimmed) {
        Some(caps) => caps
            .name("assigned")
            .or_else(|| caps.name("wrapped"))
            .map_or(trimmed, |m| m.as_str().trim()),
        None => trimmed,
    }
}

pub fn parse_read_response(body: &str) -> Result<ReadResponse> {
    let json = strip_jsonp_padding(body);
    let response: ReadResponse =
        serde_json::from_str(json).context("Failed to parse read API response")?;
    Ok(response)
}

/// Issue the read request for `options` and decode its posts.
pub fn fetch_posts(endpoint_template: &str, options: &ReaderOptions) -> Result<ReadResponse> {
    let url = build_endpoint_url(endpoint_template, options)?;
    info!("Fetching up to {} posts from '{}'", options.count, options.blog);

    debug!("Sending HTTP request to {}", url);
    let response = get_http_client()
        .get(&url)
        .send()
        .with_context(|| format!("Failed to fetch posts for blog '{}'", options.blog))?;

    debug!("Received response with status: {}", response.status());

    if !response.status().is_success() {
        error!("HTTP request failed with status: {}", response.status());
        return Err(anyhow::anyhow!(
            "Failed to fetch posts for blog '{}': {}",
            options.blog,
            response.status()
        ));
    }

    let body = response
        .text()
        .with_context(|| format!("Failed to read response body for blog '{}'", options.blog))?;
    debug!("Read {} bytes of response body", body.len());

    let read = parse_read_response(&body)
        .with_context(|| format!("Invalid response for blog '{}'", options.blog))?;

    debug!(
        "Blog '{}' returned {} posts ({} in total)",
        options.blog,
        read.posts.len(),
        read.posts_total
    );
    Ok(read)
}
