//! App Configuration
//!
//! Defaults plus overrides from the page query string
//! (`?log=debug&copy_ms=1500&theme=InspiredGitHub`).

use log::LevelFilter;
use percent_encoding::percent_decode_str;

use leptos_clipboard::DEFAULT_RESET_MS;

pub const DEFAULT_THEME: &str = "base16-ocean.dark";

/// Lines kept by the in-memory log buffer
pub const LOG_CAPACITY: usize = 200;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// How long the "copied" check mark stays after a copy
    pub copy_reset_ms: u32,
    pub log_level: LevelFilter,
    /// syntect theme for the resource-type snippet
    pub highlight_theme: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            copy_reset_ms: DEFAULT_RESET_MS,
            log_level: LevelFilter::Info,
            highlight_theme: DEFAULT_THEME.to_string(),
        }
    }
}

impl AppConfig {
    /// Parse `?key=value&...`. Returns the config and the keys that were ignored,
    /// so they can be reported once logging is up.
    pub fn from_query(query: &str) -> (Self, Vec<String>) {
        let mut config = Self::default();
        let mut ignored = Vec::new();

        for pair in query.trim_start_matches('?').split('&').filter(|p| !p.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            let value = percent_decode_str(&value.replace('+', " "))
                .decode_utf8_lossy()
                .into_owned();

            let applied = match key {
                "log" => value.parse::<LevelFilter>().map(|l| config.log_level = l).is_ok(),
                "copy_ms" => value.parse::<u32>().map(|ms| config.copy_reset_ms = ms).is_ok(),
                "theme" if !value.trim().is_empty() => {
                    config.highlight_theme = value;
                    true
                }
                _ => false,
            };
            if !applied {
                ignored.push(pair.to_string());
            }
        }

        (config, ignored)
    }
}
