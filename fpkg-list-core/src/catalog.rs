//! Catalog data model, construction and JSON output.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ScrapeError;
use crate::filter;
use crate::name;

/// Page the catalog is credited to.
pub const SOURCE_PAGE: &str = "https://www.superpsx.com/ps4-fake-pkgs-game-list/";

/// Fixed description of how entries are collected.
pub const EXTRACTION_METHOD: &str = "Sitemap XML parsing + URL filtering";

/// One accepted game entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub name: String,
    pub url: String,
}

/// The produced catalog: run metadata plus the sorted game list. Field
/// order here is the JSON field order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    /// Run date, `YYYY-MM-DD`.
    pub timestamp: String,
    pub source: String,
    pub extraction_method: String,
    pub total_games: usize,
    pub games: Vec<GameRecord>,
}

impl Catalog {
    /// Wrap a game list with run metadata. `total_games` always mirrors
    /// `games.len()`.
    pub fn new(games: Vec<GameRecord>) -> Self {
        Self {
            timestamp: chrono::Local::now().format("%Y-%m-%d").to_string(),
            source: SOURCE_PAGE.to_string(),
            extraction_method: EXTRACTION_METHOD.to_string(),
            total_games: games.len(),
            games,
        }
    }

    /// Write the catalog as pretty-printed JSON, creating parent
    /// directories as needed.
    pub fn write_to_file(&self, path: &Path) -> Result<(), ScrapeError> {
        if let Some(parent) = path.parent() {
            // A bare filename has an empty parent
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let contents = serde_json::to_string_pretty(self)?;
        fs::write(path, contents)?;
        Ok(())
    }
}

/// Build a catalog from a deduplicated URL set: derive a display name for
/// each URL, keep the pairs the classifier accepts, sort by name without
/// regard to case.
///
/// Returns the catalog and the number of URLs the classifier rejected.
pub fn build_catalog(urls: &BTreeSet<String>) -> (Catalog, usize) {
    let mut games = Vec::new();
    let mut filtered_out = 0usize;

    for url in urls {
        let game_name = name::display_name(url);
        if filter::is_real_game(&game_name, url) {
            games.push(GameRecord {
                name: game_name,
                url: url.clone(),
            });
        } else {
            filtered_out += 1;
        }
    }

    games.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
    (Catalog::new(games), filtered_out)
}
