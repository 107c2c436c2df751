/// Errors that can occur while building the games catalog.
#[derive(Debug, thiserror::Error)]
pub enum ScrapeError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status} for {url}")]
    ServerError { status: u16, url: String },

    #[error("XML parse error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("no game pages found in any sitemap")]
    NoGames,
}
