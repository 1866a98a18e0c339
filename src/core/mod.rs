// src/core/mod.rs

pub mod dates;
pub mod html;
pub mod net;

pub use dates::{ parse_date_range, DateRange };
pub use net::{ Fetch, HttpFetcher };
