//! Configuration module for the subtitle bot.
//!
//! Handles loading the Telegram token and the subtitle search settings
//! from the environment. Loaded once at process start, immutable after.

mod settings;

pub use settings::{BotConfig, ConfigError, SearchConfig};

/// Base host of the subtitle site.
pub const DEFAULT_BASE_URL: &str = "https://www.opensubtitles.org";

/// Fixed desktop browser identity sent with search requests.
pub const DESKTOP_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/58.0.3029.110 Safari/537.3";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
