// src/specs/mod.rs
//! # Scraping “specs” module
//!
//! Page-specific extraction for prospektmaschine.de. Each spec focuses on one
//! kind of page and encodes *where the ground truth lives in the HTML* and
//! *how to read it*.
//!
//! ## What lives here
//! - **Pure HTML parsing**: `&str` in, plain structs out. No I/O besides the thin
//!   `fetch_*` wrappers that pair a [`Fetch`](crate::core::Fetch) with a parser.
//! - **Selector choice**: the CSS selectors for the shop list and flyer tiles.
//! - **Record gates**: name match and validity window for flyers.
//!
//! ## What does **not** live here
//! - Looping over shops, ordering, progress (`scrape`).
//! - Output formatting and file writes (`file`).
//! - Wall-clock time: `now` is always passed in.
//!
//! ## Typical call chain
//! ```text
//! cli → scrape::collect_flyers → specs::shops::fetch_shops
//!                              ↘ specs::flyers::fetch_flyers (per shop)
//!     → file::write_flyers_json
//! ```
//!
//! ## Conventions & invariants
//! - Missing elements or attributes skip silently at the item/field level.
//! - Unparseable validity dates are logged, and the item is dropped.
//! - Document order is preserved; nothing is sorted or deduplicated.
//!
//! ## Testing notes
//! Specs are tested **offline** against inline HTML fixtures.
pub mod flyers;
pub mod shops;
