//! Client Configuration
//!
//! Settings injected into the controller at construction. Values come from
//! `<meta name="favorites-*">` tags on the page, then build-time environment,
//! then defaults.

use log::LevelFilter;
use reqwest::Url;

use crate::error::{ClientError, ClientResult};

pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:5000/";
pub const DEFAULT_NOTICE_TTL_MS: u32 = 4_000;

pub const API_BASE_KEY: &str = "favorites-api-base";
pub const DELETE_POLICY_KEY: &str = "favorites-delete-policy";
pub const NOTICE_TTL_KEY: &str = "favorites-notice-ttl-ms";
pub const LOG_LEVEL_KEY: &str = "favorites-log-level";

/// When a deleted recipe card leaves the page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeletePolicy {
    /// Only after the server acknowledged the delete with a 2xx status
    #[default]
    RequireSuccess,
    /// As soon as the request completes, whatever the outcome
    Unconditional,
}

impl DeletePolicy {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "require-success" | "gated" => Some(DeletePolicy::RequireSuccess),
            "unconditional" | "optimistic" => Some(DeletePolicy::Unconditional),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// Always ends with `/`
    pub api_base: Url,
    pub delete_policy: DeletePolicy,
    pub notice_ttl_ms: u32,
    pub log_level: LevelFilter,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: Url::parse(DEFAULT_API_BASE).expect("default API base is a valid URL"),
            delete_policy: DeletePolicy::default(),
            notice_ttl_ms: DEFAULT_NOTICE_TTL_MS,
            log_level: LevelFilter::Info,
        }
    }
}

impl ClientConfig {
    /// Build a config from a key lookup (page meta tags in the browser)
    ///
    /// Each invalid value is reported and falls back to its default on its
    /// own; valid settings are always kept.
    pub fn from_lookup<F>(lookup: F) -> (Self, Vec<ClientError>)
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        let mut errors = Vec::new();

        let base = lookup(API_BASE_KEY)
            .or_else(|| option_env!("FAVORITES_API_BASE").map(str::to_string));
        if let Some(base) = base {
            match parse_api_base(&base) {
                Ok(url) => config.api_base = url,
                Err(e) => errors.push(e),
            }
        }

        if let Some(value) = lookup(DELETE_POLICY_KEY) {
            match DeletePolicy::parse(&value) {
                Some(policy) => config.delete_policy = policy,
                None => errors.push(ClientError::InvalidSetting { key: DELETE_POLICY_KEY, value }),
            }
        }

        if let Some(value) = lookup(NOTICE_TTL_KEY) {
            match value.trim().parse() {
                Ok(ttl) => config.notice_ttl_ms = ttl,
                Err(_) => errors.push(ClientError::InvalidSetting { key: NOTICE_TTL_KEY, value }),
            }
        }

        if let Some(value) = lookup(LOG_LEVEL_KEY) {
            match value.trim().parse() {
                Ok(level) => config.log_level = level,
                Err(_) => errors.push(ClientError::InvalidSetting { key: LOG_LEVEL_KEY, value }),
            }
        }

        (config, errors)
    }
}

/// Parse an absolute http(s) base URL, appending `/` so joins keep its path
pub fn parse_api_base(raw: &str) -> ClientResult<Url> {
    let invalid = |reason: String| ClientError::InvalidBaseUrl { value: raw.to_string(), reason };

    let mut url = Url::parse(raw.trim()).map_err(|e| invalid(e.to_string()))?;
    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(invalid(format!("unsupported scheme {}", url.scheme())));
    }
    if url.query().is_some() || url.fragment().is_some() {
        return Err(invalid("base URL must not carry a query or fragment".to_string()));
    }
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}
