//! Client Configuration
//!
//! Values are baked in at build time (`TODO_API_BASE`, `TODO_LOG_LEVEL`).

use log::LevelFilter;

use crate::error::{TodoError, TodoResult};

/// API connection and logging settings
#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    /// Backend base URL; `None` means the page origin
    pub base_url: Option<String>,
    pub log_level: LevelFilter,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            log_level: LevelFilter::Info,
        }
    }
}

impl ApiConfig {
    pub fn from_build_env() -> Self {
        Self::from_values(option_env!("TODO_API_BASE"), option_env!("TODO_LOG_LEVEL"))
    }

    fn from_values(base_url: Option<&str>, log_level: Option<&str>) -> Self {
        let base_url = base_url
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from);
        let log_level = log_level
            .and_then(|s| s.trim().parse::<LevelFilter>().ok())
            .unwrap_or(LevelFilter::Info);
        Self { base_url, log_level }
    }

    /// Base URL without trailing slash, falling back to `window.location.origin`
    pub fn resolve_base_url(&self) -> TodoResult<String> {
        let base = match &self.base_url {
            Some(url) => url.clone(),
            None => page_origin()?,
        };
        Ok(base.trim_end_matches('/').to_string())
    }
}

fn page_origin() -> TodoResult<String> {
    let window = web_sys::window()
        .ok_or_else(|| TodoError::Config("no browser window to take the origin from".into()))?;
    window
        .location()
        .origin()
        .map_err(|e| TodoError::Config(format!("cannot read page origin: {:?}", e)))
}
