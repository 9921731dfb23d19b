//! Integration constants
//!
//! Remote endpoint paths and presentation defaults shared by the client and
//! the command layer.

// Remote API paths, relative to the configured `api_url`
pub const ALBUM_PATH: &str = "/api/v1/album/";
pub const SEARCH_PATH: &str = "/api/v1/search";
pub const IMAGE_PATH: &str = "/api/v1/image/";
pub const TREE_PATH: &str = "/api/v1/tree";
pub const BINARY_PATH: &str = "/api_binary/";

// Listing defaults
pub const DEFAULT_SORT_BY: &str = "time";
pub const DEFAULT_SORT_DIRECTION: &str = "descending";
pub const TREE_SORT_BY: &str = "name";
pub const TREE_SORT_DIRECTION: &str = "ascending";
pub const DEFAULT_FILTER_SCHEMES: &str = "image";
pub const DEFAULT_PAGE_SIZE: u64 = 10;

// Transport
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;
pub const BINARY_CACHE_MAX_AGE_SECS: u64 = 300;

// Persistence
pub const DEFAULT_DATABASE_PATH: &str = "canto.db";

// User-facing flash messages
pub const FLASH_CONNECTED: &str = "Connected to canto!";
pub const FLASH_REFRESHED: &str = "Your canto token was refreshed.";
pub const FLASH_DISCONNECTED: &str = "Canto was disconnected.";
