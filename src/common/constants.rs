/// Default number of posts requested per blog
pub const DEFAULT_POST_COUNT: u32 = 10;

/// Default container selector when none is given
pub const DEFAULT_CONTAINER: &str = "body";

/// Read API endpoint (API v1). Rendered with `blog`, `count` and `tagged`.
pub const TUMBLR_ENDPOINT: &str =
    "http://${blog}.tumblr.com/api/read/json?num=${count}&tagged=${tagged}&callback=?";

/// Name substituted for the JSONP `callback=?` marker
pub const JSONP_CALLBACK: &str = "tumblr_reader";

/// Default timeout for HTTP requests in seconds
pub const HTTP_TIMEOUT_SECS: u64 = 10;

/// User agent string for HTTP requests
pub const USER_AGENT: &str = concat!("tumblr-reader/", env!("CARGO_PKG_VERSION"));

/// Class of the element wrapping all rendered posts
pub const POSTS_WRAPPER_CLASS: &str = "tumblr-reader-posts";

/// Progress bar template
pub const PROGRESS_BAR_TEMPLATE: &str =
    "{spinner:.green} [{elapsed_precise}] [{wide_bar:.cyan/blue}] {pos}/{len} ({eta}) {msg}";

/// Progress bar characters
pub const PROGRESS_BAR_CHARS: &str = "#>-";
