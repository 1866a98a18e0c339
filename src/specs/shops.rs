// src/specs/shops.rs
//! Scraping *spec* for the shop directory.
//!
//! Purpose:
//! - Parse a category page (e.g. `/hypermarkte/`) and list every shop in the
//!   left sidebar as `(name, absolute url)`.
//!
//! Non-Responsibilities:
//! - **No filtering or dedup.** Whatever the sidebar lists, in sidebar order.

use std::sync::LazyLock;

use scraper::{ Html, Selector };
use url::Url;

use crate::core::Fetch;
use crate::core::html::{ attr, sel, text_trimmed };
use crate::error::FetchError;

static SHOP_LINKS: LazyLock<Selector> = LazyLock::new(|| sel("#left-category-shops a"));

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShopLink {
    pub name: String,
    pub url: String,
}

pub fn fetch_shops(
    fetcher: &dyn Fetch,
    directory_url: &Url,
    origin: &Url,
) -> Result<Vec<ShopLink>, FetchError> {
    let html_doc = fetcher.fetch(directory_url.as_str())?;
    Ok(extract_shops(&html_doc, origin))
}

/// Anchors without a usable `href` are skipped. No sidebar, no shops.
pub fn extract_shops(html_doc: &str, origin: &Url) -> Vec<ShopLink> {
    let doc = Html::parse_document(html_doc);

    doc.select(&SHOP_LINKS)
        .filter_map(|a| {
            let href = attr(a, "href")?;
            let url = origin.join(href).ok()?;
            Some(ShopLink { name: text_trimmed(a), url: url.into() })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selector_parses() {
        LazyLock::force(&SHOP_LINKS);
    }

    fn origin() -> Url {
        Url::parse("https://www.prospektmaschine.de").unwrap()
    }

    const DIRECTORY: &str = r#"
        <html><body>
          <nav><a href="/ignored/">Not a shop</a></nav>
          <ul id="left-category-shops">
            <li><a href="/lidl/">
                  Lidl
                </a></li>
            <li><a href="/kaufland/">Kaufland</a></li>
            <li><a>No link</a></li>
            <li><a href="/netto-marken-discount/">Netto <span>Marken-Discount</span></a></li>
          </ul>
        </body></html>"#;

    #[test]
    fn sidebar_links_in_order() {
        let shops = extract_shops(DIRECTORY, &origin());
        let names: Vec<&str> = shops.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["Lidl", "Kaufland", "Netto Marken-Discount"]);
        assert_eq!(shops[0].url, "https://www.prospektmaschine.de/lidl/");
        assert_eq!(shops[2].url, "https://www.prospektmaschine.de/netto-marken-discount/");
    }

    #[test]
    fn no_sidebar_no_shops() {
        let shops = extract_shops("<html><body><a href='/lidl/'>Lidl</a></body></html>", &origin());
        assert!(shops.is_empty());
    }

    #[test]
    fn absolute_hrefs_are_kept() {
        let doc = r#"<div id="left-category-shops"><a href="https://cdn.example.com/x">X</a></div>"#;
        let shops = extract_shops(doc, &origin());
        assert_eq!(shops, vec![ShopLink { name: s!("X"), url: s!("https://cdn.example.com/x") }]);
    }
}
