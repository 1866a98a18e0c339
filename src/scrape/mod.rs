// src/scrape/mod.rs
mod scrape;
pub use scrape::collect_flyers;
pub use scrape::list_shops;
