//! Core library for the SuperPSX PS4 games-list scraper.
//!
//! The pipeline: download the site's post sitemaps, keep the locations
//! that carry the FPKG path marker, derive a display name from each slug,
//! drop tool and homebrew posts, and wrap the survivors in a sorted,
//! serializable catalog.

pub mod catalog;
pub mod error;
pub mod filter;
pub mod name;
pub mod scrape;
pub mod sitemap;

pub use catalog::{Catalog, GameRecord, build_catalog};
pub use error::ScrapeError;
pub use filter::is_real_game;
pub use name::display_name;
pub use scrape::{
    ScrapeOptions, ScrapeProgress, ScrapeReport, SourceOutcome, SourceReport, scrape_catalog,
};
pub use sitemap::{SitemapClient, SitemapFetcher, parse_sitemap};
