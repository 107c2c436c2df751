//! Run orchestration: fetch every configured sitemap, aggregate matching
//! URLs, classify them and build the catalog.

use std::collections::BTreeSet;

use crate::catalog::{self, Catalog};
use crate::error::ScrapeError;
use crate::sitemap::{self, SitemapFetcher};

/// Site the catalog is scraped from.
const BASE_URL: &str = "https://www.superpsx.com";

/// Substring a location must contain to count as a game page.
const PATH_MARKER: &str = "ps4-fpkg";

/// Threshold for the low-yield warning; the site lists well over this
/// many games, so a smaller catalog usually means sitemaps were missed.
const EXPECTED_MIN_GAMES: usize = 1200;

/// Options for a catalog run.
#[derive(Debug, Clone)]
pub struct ScrapeOptions {
    /// Sitemap documents to fetch, in order.
    pub sitemap_urls: Vec<String>,
    /// Substring a location must contain to be kept.
    pub path_marker: String,
    /// Catalogs smaller than this should be flagged to the user.
    pub expected_min_games: usize,
}

impl ScrapeOptions {
    /// Default options: the site's post sitemaps and the standard marker.
    pub fn new() -> Self {
        Self {
            sitemap_urls: vec![
                format!("{BASE_URL}/post-sitemap.xml"),
                format!("{BASE_URL}/post-sitemap2.xml"),
                format!("{BASE_URL}/post-sitemap3.xml"),
                format!("{BASE_URL}/post-sitemap4.xml"),
            ],
            path_marker: PATH_MARKER.to_string(),
            expected_min_games: EXPECTED_MIN_GAMES,
        }
    }
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// Progress events emitted during a run.
#[derive(Debug, Clone)]
pub enum ScrapeProgress {
    /// About to fetch one sitemap.
    FetchingSitemap {
        url: String,
        index: usize,
        total: usize,
    },
    /// A sitemap was fetched and parsed; `found` counts matching URLs
    /// before cross-sitemap dedup.
    SitemapLoaded { url: String, found: usize },
    /// A sitemap could not be fetched or parsed and was skipped.
    SitemapFailed { url: String, message: String },
    /// All sitemaps processed; classifying the deduplicated URL set.
    Classifying { unique_urls: usize },
    /// Run finished.
    Done,
}

/// What one sitemap source contributed to the run.
#[derive(Debug, Clone)]
pub enum SourceOutcome {
    Loaded { found: usize },
    Failed { message: String },
}

/// Per-sitemap record in the run report.
#[derive(Debug, Clone)]
pub struct SourceReport {
    pub url: String,
    pub outcome: SourceOutcome,
}

/// Result of a full catalog run.
#[derive(Debug)]
pub struct ScrapeReport {
    pub catalog: Catalog,
    /// Unique matching URLs aggregated across all sitemaps.
    pub unique_urls: usize,
    /// URLs the classifier rejected.
    pub filtered_out: usize,
    /// Outcome of each sitemap, in fetch order.
    pub sources: Vec<SourceReport>,
}

impl ScrapeReport {
    /// Number of sitemaps that failed to fetch or parse.
    pub fn failed_sources(&self) -> usize {
        self.sources
            .iter()
            .filter(|s| matches!(s.outcome, SourceOutcome::Failed { .. }))
            .count()
    }

    /// Whether the catalog came in under the configured expectation.
    pub fn below_expected(&self, expected_min: usize) -> bool {
        self.catalog.total_games < expected_min
    }
}

/// Fetch every configured sitemap and build the game catalog.
///
/// Sitemaps are best-effort: a fetch or parse failure is logged, recorded
/// in the report and skipped. The run as a whole only fails when not a
/// single game survives classification.
pub fn scrape_catalog(
    fetcher: &dyn SitemapFetcher,
    options: &ScrapeOptions,
    progress: &dyn Fn(ScrapeProgress),
) -> Result<ScrapeReport, ScrapeError> {
    let mut all_urls: BTreeSet<String> = BTreeSet::new();
    let mut sources = Vec::with_capacity(options.sitemap_urls.len());
    let total = options.sitemap_urls.len();

    for (index, url) in options.sitemap_urls.iter().enumerate() {
        progress(ScrapeProgress::FetchingSitemap {
            url: url.clone(),
            index,
            total,
        });

        let outcome = match load_sitemap(fetcher, url, &options.path_marker) {
            Ok(urls) => {
                let found = urls.len();
                all_urls.extend(urls);
                progress(ScrapeProgress::SitemapLoaded {
                    url: url.clone(),
                    found,
                });
                SourceOutcome::Loaded { found }
            }
            Err(e) => {
                log::warn!("Skipping sitemap {url}: {e}");
                progress(ScrapeProgress::SitemapFailed {
                    url: url.clone(),
                    message: e.to_string(),
                });
                SourceOutcome::Failed {
                    message: e.to_string(),
                }
            }
        };
        sources.push(SourceReport {
            url: url.clone(),
            outcome,
        });
    }

    progress(ScrapeProgress::Classifying {
        unique_urls: all_urls.len(),
    });

    let (catalog, filtered_out) = catalog::build_catalog(&all_urls);
    if catalog.games.is_empty() {
        return Err(ScrapeError::NoGames);
    }

    progress(ScrapeProgress::Done);

    Ok(ScrapeReport {
        unique_urls: all_urls.len(),
        filtered_out,
        sources,
        catalog,
    })
}

fn load_sitemap(
    fetcher: &dyn SitemapFetcher,
    url: &str,
    marker: &str,
) -> Result<BTreeSet<String>, ScrapeError> {
    let body = fetcher.fetch(url)?;
    sitemap::parse_sitemap(&body, marker)
}
