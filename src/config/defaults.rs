//! Default values for configuration options.
//!
//! Centralized constants to avoid magic numbers scattered across the codebase.

/// Public API base URL used when no URL is configured.
pub const API_URL: &str = "https://api.wakatime.com/api";

/// Default maximum number of offline heartbeats synced per run.
pub const SYNC_OFFLINE_ACTIVITY: u32 = 100;

/// Config file name looked up in the home directory.
pub const CONFIG_FILE_NAME: &str = ".wakatime.toml";

/// Config file section holding client settings.
pub const SETTINGS_SECTION: &str = "settings";

/// Where users can look up their API key.
pub const API_KEY_URL: &str = "wakatime.com/settings/api-key";
