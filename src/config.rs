//! Application Configuration
//!
//! Fixed endpoint and UI constants, with a URL query overlay for the
//! mock-data seed.

use log::LevelFilter;

pub const DEFAULT_API_BASE_URL: &str = "https://jsonplaceholder.typicode.com";
pub const DEFAULT_REQUEST_TIMEOUT_MS: u32 = 10_000;
pub const DEFAULT_ITEMS_PER_PAGE: usize = 7;
pub const DEFAULT_SEARCH_DEBOUNCE_MS: u32 = 300;
pub const AUTH_TOKEN_KEY: &str = "authToken";
pub const LOGIN_PATH: &str = "/login";

/// Runtime configuration, provided to components via context
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub request_timeout_ms: u32,
    pub items_per_page: usize,
    pub search_debounce_ms: u32,
    pub auth_token_key: String,
    pub login_path: String,
    /// Pins the mock-data generator; `None` seeds from entropy
    pub fixture_seed: Option<u64>,
    pub log_level: LevelFilter,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            request_timeout_ms: DEFAULT_REQUEST_TIMEOUT_MS,
            items_per_page: DEFAULT_ITEMS_PER_PAGE,
            search_debounce_ms: DEFAULT_SEARCH_DEBOUNCE_MS,
            auth_token_key: AUTH_TOKEN_KEY.to_string(),
            login_path: LOGIN_PATH.to_string(),
            fixture_seed: None,
            log_level: if cfg!(debug_assertions) {
                LevelFilter::Debug
            } else {
                LevelFilter::Info
            },
        }
    }
}

impl AppConfig {
    /// Defaults overlaid with `?seed=<u64>` from the page URL
    pub fn from_location() -> Self {
        let search = web_sys::window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        Self::default().with_query(&search)
    }

    pub fn with_query(mut self, search: &str) -> Self {
        if let Some(seed) = parse_seed(search) {
            self.fixture_seed = Some(seed);
        }
        self
    }
}

/// Extract the `seed` parameter from a `?a=b&c=d` query string
fn parse_seed(search: &str) -> Option<u64> {
    search
        .trim_start_matches('?')
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == "seed")
        .and_then(|(_, value)| value.parse().ok())
}
