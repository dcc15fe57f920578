use std::sync::OnceLock;

use crate::common::constants::{HTTP_TIMEOUT_SECS, USER_AGENT};

static HTTP_CLIENT: OnceLock<reqwest::blocking::Client> = OnceLock::new();

pub fn get_http_client() -> &'static reqwest::blocking::Client {
    HTTP_CLIENT.get_or_init(|| {
        reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(HTTP_TIMEOUT_SECS))
            .user_agent(USER_AGENT)
            .build()
            .expect("Failed to create HTTP client")
    })
}
