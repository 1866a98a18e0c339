// src/specs/flyers.rs
//! Scraping *spec* for a shop's flyer page.
//!
//! Purpose:
//! - Parse `/<shop>/` and emit one [`FlyerRecord`] per flyer tile that belongs
//!   to the shop and is valid on `now`'s date.
//!
//! Tile shape, as served:
//! ```html
//! <div class="grid-item box blue ">
//!   <a href="/lidl/prospekt-123/" title="Lidl Prospekt">
//!     <img src="..." data-src="..." alt="...">
//!   </a>
//!   <p><small class="hidden-sm">Mo. 10.01. - Sa. 20.01.</small>
//!      <small class="visible-sm">10.01. - 20.01.</small></p>
//! </div>
//! ```
//!
//! A page may show tiles from neighbouring shops; the title must mention the
//! shop's name (case-insensitive substring) to count.

use std::sync::LazyLock;

use chrono::{ Datelike, NaiveDate, NaiveDateTime };
use scraper::{ ElementRef, Html, Selector };
use serde::Serialize;
use tracing::warn;

use crate::core::dates::parse_date_range;
use crate::core::html::{ attr, first, sel, text_stripped };
use crate::core::Fetch;
use crate::error::{ DateError, FetchError };

// Substring match on the raw class attribute, like `"grid-item box" in class`.
static TILES: LazyLock<Selector> = LazyLock::new(|| sel(r#"div[class*="grid-item box"]"#));
static TILE_LINK: LazyLock<Selector> = LazyLock::new(|| sel("a"));
static TILE_IMAGE: LazyLock<Selector> = LazyLock::new(|| sel("img"));
static TILE_DATES: LazyLock<Selector> = LazyLock::new(|| sel("small.visible-sm"));

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FlyerRecord {
    pub title: String,
    pub thumbnail: Option<String>,
    pub shop_name: String,
    pub valid_from: NaiveDate,
    pub valid_to: NaiveDate,
    #[serde(with = "parsed_time_fmt")]
    pub parsed_time: NaiveDateTime,
}

pub fn fetch_flyers(
    fetcher: &dyn Fetch,
    shop_url: &str,
    shop_name: &str,
    now: NaiveDateTime,
) -> Result<Vec<FlyerRecord>, FetchError> {
    let html_doc = fetcher.fetch(shop_url)?;
    Ok(extract_flyer_items(&html_doc, shop_name, now))
}

pub fn extract_flyer_items(html_doc: &str, shop_name: &str, now: NaiveDateTime) -> Vec<FlyerRecord> {
    let doc = Html::parse_document(html_doc);

    doc.select(&TILES)
        .filter_map(|tile| extract_tile(tile, shop_name, now))
        .collect()
}

fn extract_tile(tile: ElementRef<'_>, shop_name: &str, now: NaiveDateTime) -> Option<FlyerRecord> {
    let title = first(tile, &TILE_LINK).and_then(|a| attr(a, "title"))?;
    if !is_flyer_valid(title, shop_name) {
        return None;
    }

    let thumbnail = image_link(tile);

    let date_text = first(tile, &TILE_DATES).map(text_stripped)?;
    let range = match parse_date_range(&date_text, now.year()) {
        Ok(range) => range,
        Err(e @ DateError::Token { .. }) => {
            warn!(shop = shop_name, title, "{e}");
            return None;
        }
        Err(DateError::Shape(_)) => return None,
    };

    if !range.contains(now.date()) {
        return None;
    }

    Some(FlyerRecord {
        title: s!(title),
        thumbnail,
        shop_name: s!(shop_name),
        valid_from: range.start,
        valid_to: range.end,
        parsed_time: now,
    })
}

/// Does the tile's title name this shop?
pub fn is_flyer_valid(title: &str, shop_name: &str) -> bool {
    title.to_lowercase().contains(&shop_name.to_lowercase())
}

/// `src`, else the lazy-load `data-src`.
pub fn image_link(tile: ElementRef<'_>) -> Option<String> {
    let img = first(tile, &TILE_IMAGE)?;
    attr(img, "src").or_else(|| attr(img, "data-src")).map(String::from)
}

mod parsed_time_fmt {
    use chrono::NaiveDateTime;
    use serde::Serializer;

    const FMT: &str = "%Y-%m-%d %H:%M:%S";

    pub fn serialize<S: Serializer>(t: &NaiveDateTime, ser: S) -> Result<S::Ok, S::Error> {
        ser.collect_str(&t.format(FMT))
    }
}
