// src/config/consts.rs

// Site
pub const SITE_ORIGIN: &str = "https://www.prospektmaschine.de";
pub const DIRECTORY_URL: &str = "https://www.prospektmaschine.de/hypermarkte/";

// Net config
pub const USER_AGENT: &str = concat!("flyer_scrape/", env!("CARGO_PKG_VERSION"));
pub const TIMEOUT_SECS: u64 = 30;

// Scrape
pub const WORKERS: usize = 1; // sequential unless asked otherwise
pub const REQUEST_PAUSE_MS: u64 = 0;

// Export
pub const DEFAULT_FILE: &str = "flyer.json";
pub const JSON_INDENT: usize = 4;
