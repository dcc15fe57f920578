use anyhow::{Context, Result};
use log::debug;

use crate::common::constants::JSONP_CALLBACK;
use crate::settings::ReaderOptions;
use crate::template::substitute;

/// Render the endpoint template for `options` and fill in the JSONP
/// callback name.
pub fn build_endpoint_url(endpoint_template: &str, options: &ReaderOptions) -> Result<String> {
    let context = crate::render_context!(
        "blog" => options.blog,
        "count" => options.count,
        "tagged" => options.tagged,
    );

    let rendered = substitute(endpoint_template, &context)
        .replace("callback=?", &format!("callback={}", JSONP_CALLBACK));

    // Parsing percent-encodes whatever the raw substitution left unsafe
    let url = reqwest::Url::parse(&rendered)
        .with_context(|| format!("Invalid endpoint URL: {}", rendered))?;

    debug!("Endpoint for blog '{}': {}", options.blog, url);
    Ok(url.to_string())
}
