//! API endpoint configuration baked in at build time.
//!
//! SYSTEM CONTEXT
//! ==============
//! A WASM bundle has no process environment at runtime, so the values are
//! captured with `option_env!` when the crate is compiled and parsed here.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_URL: &str = "https://wesourceyoub2.vercel.app";
pub const DEFAULT_TIMEOUT_MS: u32 = 10_000;

/// Where the remote REST API lives and how long a request may take.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_ms: u32,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self { base_url: DEFAULT_API_URL.to_owned(), timeout_ms: DEFAULT_TIMEOUT_MS }
    }
}

impl ApiConfig {
    /// Build the config from the compile-time environment.
    ///
    /// Optional:
    /// - `WESOURCEYOU_API_URL`: default [`DEFAULT_API_URL`]
    /// - `WESOURCEYOU_API_TIMEOUT_MS`: default 10000
    pub fn from_env() -> Self {
        Self::from_values(option_env!("WESOURCEYOU_API_URL"), option_env!("WESOURCEYOU_API_TIMEOUT_MS"))
    }

    fn from_values(base_url: Option<&str>, timeout_ms: Option<&str>) -> Self {
        Self { base_url: parse_base_url(base_url), timeout_ms: parse_timeout_ms(timeout_ms) }
    }

    /// Join an API path onto the base URL.
    pub fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{path}", self.base_url)
        } else {
            format!("{}/{path}", self.base_url)
        }
    }
}

fn parse_base_url(raw: Option<&str>) -> String {
    match raw.map(str::trim) {
        Some(url) if !url.is_empty() => url.trim_end_matches('/').to_owned(),
        _ => DEFAULT_API_URL.to_owned(),
    }
}

fn parse_timeout_ms(raw: Option<&str>) -> u32 {
    raw.and_then(|v| v.trim().parse::<u32>().ok())
        .filter(|ms| *ms > 0)
        .unwrap_or(DEFAULT_TIMEOUT_MS)
}
