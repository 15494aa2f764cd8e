//! Build-time client configuration.
//!
//! The REST backend is reached through `RESTAURANTS_API_BASE`, read when the
//! crate is compiled. Unset means same-origin requests (`/restaurants`).

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Base URL used when `RESTAURANTS_API_BASE` is unset.
pub const DEFAULT_API_BASE: &str = "";

/// Base URL for REST calls, without a trailing slash.
pub fn api_base() -> &'static str {
    option_env!("RESTAURANTS_API_BASE")
        .unwrap_or(DEFAULT_API_BASE)
        .trim_end_matches('/')
}

/// Join `path` onto `base`, producing exactly one `/` between them.
pub fn join_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    format!("{base}/{path}")
}

/// Absolute request URL for an API `path`.
pub fn api_url(path: &str) -> String {
    join_url(api_base(), path)
}
