//! Breadth-first site crawler
//!
//! Sequential FIFO traversal bounded by a page budget and scoped to the
//! seed URL's authority. Individual dead links are skipped, never fatal.
//! All traversal state is local to one crawl invocation.

pub mod extractor;
pub mod scope;

use crate::http::HttpClient;
use crate::models::{CrawlResult, ScanConfig};
use std::collections::{HashSet, VecDeque};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{debug, info};
use url::Url;

/// Handle for aborting an in-progress crawl from another task.
///
/// The crawl loop checks the flag between page fetches and returns the
/// partial result collected so far when cancelled.
#[derive(Clone, Debug, Default)]
pub struct CancelHandle(Arc<AtomicBool>);

impl CancelHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// BFS crawler that maps a target site's attack surface
pub struct Crawler<'a> {
    client: &'a HttpClient,
    max_pages: usize,
    cancel: CancelHandle,
}

impl<'a> Crawler<'a> {
    pub fn new(client: &'a HttpClient, config: &ScanConfig) -> Self {
        Self {
            client,
            max_pages: config.max_pages,
            cancel: CancelHandle::new(),
        }
    }

    /// Attaches an external cancellation handle
    pub fn with_cancel(mut self, cancel: CancelHandle) -> Self {
        self.cancel = cancel;
        self
    }

    /// Crawls the site starting at `base_url` and returns the discovered
    /// attack surface.
    ///
    /// The budget caps distinct fetch attempts, so pages closest to the
    /// root are the ones kept when the crawl is truncated. Fetch and
    /// parse failures consume budget but produce no page entry.
    pub async fn crawl(&self, base_url: &str) -> CrawlResult {
        let mut visited: HashSet<String> = HashSet::new();
        let mut queued: HashSet<String> = HashSet::new();
        let mut queue: VecDeque<String> = VecDeque::new();
        let mut seen_scripts: HashSet<String> = HashSet::new();
        let mut result = CrawlResult::default();

        queued.insert(base_url.to_string());
        queue.push_back(base_url.to_string());

        loop {
            if visited.len() >= self.max_pages {
                info!("Crawl budget of {} pages reached", self.max_pages);
                break;
            }
            if self.cancel.is_cancelled() {
                info!("Crawl cancelled after {} pages", result.pages.len());
                break;
            }
            let Some(url) = queue.pop_front() else {
                break;
            };
            if visited.contains(&url) {
                continue;
            }
            visited.insert(url.clone());

            let Ok(page_url) = Url::parse(&url) else {
                debug!("Skipping unparseable URL: {url}");
                continue;
            };
            let body = match self.client.get(&url).await {
                Ok(response) => match response.text().await {
                    Ok(body) => body,
                    Err(e) => {
                        debug!("Failed to read body of {url}: {e}");
                        continue;
                    }
                },
                Err(e) => {
                    debug!("Failed to fetch {url}: {e}");
                    continue;
                }
            };

            result.pages.push(url.clone());

            let extract = extractor::extract(&page_url, &body);

            for script in extract.scripts {
                if seen_scripts.insert(script.clone()) {
                    result.scripts.push(script);
                }
            }
            result.forms.extend(extract.forms);

            for link in extract.links {
                if scope::same_authority(base_url, &link)
                    && !visited.contains(&link)
                    && !queued.contains(&link)
                {
                    queued.insert(link.clone());
                    queue.push_back(link);
                }
            }
        }

        info!(
            "Crawl finished: {} pages, {} scripts, {} forms",
            result.pages.len(),
            result.scripts.len(),
            result.forms.len()
        );
        result
    }
}
