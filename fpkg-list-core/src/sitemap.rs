//! Sitemap fetching and URL extraction.
//!
//! WordPress sites expose their posts through `post-sitemap*.xml` documents
//! in the sitemap protocol. Game pages are plain `<url><loc>` entries whose
//! location carries the site's FPKG path marker; everything else in the
//! document (images, news posts, guides) is ignored.

use std::collections::BTreeSet;
use std::time::Duration;

use quick_xml::events::Event;
use quick_xml::name::{Namespace, ResolveResult};
use quick_xml::reader::NsReader;

use crate::error::ScrapeError;

/// XML namespace of the sitemap protocol.
const SITEMAP_NS: &[u8] = b"http://www.sitemaps.org/schemas/sitemap/0.9";

/// User-Agent sent with sitemap requests. The site rejects obvious bot
/// agents, so requests present as a desktop browser.
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Per-request timeout for sitemap downloads.
const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Fetches raw sitemap documents. Production code uses [`SitemapClient`];
/// tests substitute canned documents.
pub trait SitemapFetcher {
    /// Retrieve the document at `url` as text.
    fn fetch(&self, url: &str) -> Result<String, ScrapeError>;
}

/// Blocking HTTP client for sitemap downloads.
pub struct SitemapClient {
    http: reqwest::blocking::Client,
}

impl SitemapClient {
    /// Build a client with the browser User-Agent and request timeout.
    pub fn new() -> Result<Self, ScrapeError> {
        let http = reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(FETCH_TIMEOUT)
            .build()?;
        Ok(Self { http })
    }
}

impl SitemapFetcher for SitemapClient {
    fn fetch(&self, url: &str) -> Result<String, ScrapeError> {
        let response = self.http.get(url).send()?;
        if !response.status().is_success() {
            return Err(ScrapeError::ServerError {
                status: response.status().as_u16(),
                url: url.to_string(),
            });
        }
        Ok(response.text()?)
    }
}

/// Which namespace binding a parse pass accepts for `<url>`/`<loc>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParseMode {
    /// Elements bound to the sitemap protocol namespace.
    Namespaced,
    /// Elements with no namespace binding at all.
    Plain,
}

/// Extract game page URLs from one sitemap document.
///
/// Entries are read from `<url><loc>` elements in the sitemap namespace
/// first; when that pass yields nothing, the document is re-read accepting
/// un-namespaced elements, which covers stripped-down or hand-written
/// sitemaps. Only locations containing `marker` are kept.
pub fn parse_sitemap(xml: &str, marker: &str) -> Result<BTreeSet<String>, ScrapeError> {
    let urls = parse_locations(xml, marker, ParseMode::Namespaced)?;
    if !urls.is_empty() {
        return Ok(urls);
    }
    parse_locations(xml, marker, ParseMode::Plain)
}

fn parse_locations(
    xml: &str,
    marker: &str,
    mode: ParseMode,
) -> Result<BTreeSet<String>, ScrapeError> {
    let mut reader = NsReader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut urls = BTreeSet::new();
    let mut buf = Vec::new();
    let mut in_url = false;
    let mut in_loc = false;

    loop {
        match reader.read_resolved_event_into(&mut buf)? {
            (resolve, Event::Start(ref e)) => {
                // Elements from other namespaces (image extensions and the
                // like) nest inside <url>; they never toggle the flags, so
                // their text is not collected.
                if in_selected_ns(&resolve, mode) {
                    match e.local_name().as_ref() {
                        b"url" => in_url = true,
                        b"loc" if in_url => in_loc = true,
                        _ => {}
                    }
                }
            }
            (_, Event::Text(ref t)) if in_loc => {
                push_location(&mut urls, &t.unescape()?, marker);
            }
            (_, Event::CData(ref t)) if in_loc => {
                push_location(&mut urls, &String::from_utf8_lossy(t.as_ref()), marker);
            }
            (resolve, Event::End(ref e)) => {
                if in_selected_ns(&resolve, mode) {
                    match e.local_name().as_ref() {
                        b"url" => {
                            in_url = false;
                            in_loc = false;
                        }
                        b"loc" => in_loc = false,
                        _ => {}
                    }
                }
            }
            (_, Event::Eof) => break,
            _ => {}
        }
        buf.clear();
    }

    Ok(urls)
}

fn in_selected_ns(resolve: &ResolveResult<'_>, mode: ParseMode) -> bool {
    match (mode, resolve) {
        (ParseMode::Namespaced, ResolveResult::Bound(Namespace(ns))) => *ns == SITEMAP_NS,
        (ParseMode::Plain, ResolveResult::Unbound) => true,
        _ => false,
    }
}

fn push_location(urls: &mut BTreeSet<String>, loc: &str, marker: &str) {
    let loc = loc.trim();
    if !loc.is_empty() && loc.contains(marker) {
        urls.insert(loc.to_string());
    }
}
