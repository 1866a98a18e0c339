// tests/common/mod.rs
#![allow(dead_code)]

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

use chrono::{ NaiveDate, NaiveDateTime };
use flyer_scrape::core::Fetch;
use flyer_scrape::error::FetchError;

pub const ORIGIN: &str = "https://www.prospektmaschine.de";
pub const DIRECTORY: &str = "https://www.prospektmaschine.de/hypermarkte/";

/// Serves canned pages; anything else is a 404.
#[derive(Default)]
pub struct FixtureFetcher {
    pages: HashMap<String, String>,
    pub requested: Mutex<Vec<String>>,
}

impl FixtureFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(mut self, url: &str, html: impl Into<String>) -> Self {
        self.pages.insert(url.to_string(), html.into());
        self
    }
}

impl Fetch for FixtureFetcher {
    fn fetch(&self, url: &str) -> Result<String, FetchError> {
        self.requested.lock().unwrap().push(url.to_string());
        self.pages
            .get(url)
            .cloned()
            .ok_or_else(|| FetchError::Status { status: 404, url: url.to_string() })
    }
}

pub fn at(y: i32, m: u32, d: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d).unwrap().and_hms_opt(9, 15, 0).unwrap()
}

pub fn directory_page(shops: &[(&str, &str)]) -> String {
    let links: String = shops
        .iter()
        .map(|(name, href)| format!(r#"<li><a href="{href}">{name}</a></li>"#))
        .collect();
    format!(
        r#"<html><body>
             <div class="sidebar"><ul id="left-category-shops">{links}</ul></div>
           </body></html>"#
    )
}

pub fn tile(title: &str, img: &str, dates: &str) -> String {
    format!(
        r#"<div class="grid-item box blue ">
             <a href="/flyer/" title="{title}">{img}</a>
             <small class="hidden-sm">Gültig {dates}</small>
             <small class="visible-sm">{dates}</small>
           </div>"#
    )
}

pub fn shop_page(tiles: &[String]) -> String {
    format!(
        r#"<html><body><div class="row letaky-grid">{}</div></body></html>"#,
        tiles.concat()
    )
}

pub fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("flyer_scrape_{}_{}", name, std::process::id()));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}
