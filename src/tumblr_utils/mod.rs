mod client;
mod container;
mod endpoint;
mod file_ops;
mod json_ops;

pub use client::get_http_client;
pub use container::{wrap_posts, Container, Page};
pub use endpoint::build_endpoint_url;
pub use file_ops::{ensure_dir_exists, resolve_output_path, write_output};
pub use json_ops::{fetch_posts, parse_read_response, strip_jsonp_padding};
