// src/config/options.rs
use std::path::{ Path, PathBuf };
use std::time::Duration;

use url::Url;

use super::consts::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppOptions {
    pub scrape: ScrapeOptions,
    pub fetch: FetchOptions,
    pub export: ExportOptions,
    /// No per-shop progress lines; warnings only.
    pub quiet: bool,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            scrape: ScrapeOptions::default(),
            fetch: FetchOptions::default(),
            export: ExportOptions::default(),
            quiet: false,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrapeOptions {
    /// Category page listing the shops.
    pub directory_url: Url,
    /// Shop links on the directory page are relative to this.
    pub origin: Url,
    pub workers: usize,
    pub pause: Duration,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            directory_url: parse_const_url(DIRECTORY_URL),
            origin: parse_const_url(SITE_ORIGIN),
            workers: WORKERS,
            pause: Duration::from_millis(REQUEST_PAUSE_MS),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchOptions {
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(TIMEOUT_SECS),
            user_agent: s!(USER_AGENT),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    out_path: PathBuf,
    pub indent: usize,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            out_path: PathBuf::from(DEFAULT_FILE),
            indent: JSON_INDENT,
        }
    }
}

impl ExportOptions {
    /// Final file path. A directory-looking path gets the default file name.
    pub fn out_path(&self) -> PathBuf {
        if looks_like_dir_hint(&self.out_path) {
            self.out_path.join(DEFAULT_FILE)
        } else {
            self.out_path.clone()
        }
    }

    pub fn set_path(&mut self, text: &str) {
        let s = text.trim();
        self.out_path = if s.is_empty() { PathBuf::from(DEFAULT_FILE) } else { PathBuf::from(s) };
    }
}

fn looks_like_dir_hint(p: &Path) -> bool {
    let s = p.to_string_lossy();
    s.ends_with('/') || s.ends_with('\\')
}

fn parse_const_url(raw: &'static str) -> Url {
    // consts are checked by the unit tests below
    Url::parse(raw).unwrap_or_else(|e| panic!("bad built-in URL {raw}: {e}"))
}
