//! Paginated catalog fetching
//!
//! The products listing is a cursor-linked sequence of pages: each response
//! carries an optional `next` fragment naming the following page.
//! [`CatalogPages`] models that as a lazy, finite, non-restartable sequence,
//! one page per pull. Continuation responses also advertise the server's
//! rate-limit budget; an exhausted budget suspends the walk for the
//! advertised reset delay before the response is consumed.

use reqwest::StatusCode;
use serde_json::{Map, Value};

use crate::api::ApiClient;
use crate::error::{CliError, CliResult};
use crate::models::{CatalogPage, RateLimitSignal, StoreCredentials};
use crate::output::print_info;
use crate::verbose;

/// Lazy page sequence over the catalog products listing
///
/// Yields one page per [`try_next`](Self::try_next) call and `None` once the
/// final page has been consumed. The sequence cannot be restarted; failures
/// are terminal.
pub struct CatalogPages<'a> {
    client: &'a ApiClient,
    credentials: &'a StoreCredentials,
    state: PageState,
}

enum PageState {
    /// The initial listing request has not been issued yet
    Start,
    /// A continuation fragment from the previous page remains to be fetched
    Next(String),
    /// The last page had no continuation link
    Done,
}

impl<'a> CatalogPages<'a> {
    /// Create a page sequence for a store's product catalog
    pub fn new(client: &'a ApiClient, credentials: &'a StoreCredentials) -> Self {
        Self {
            client,
            credentials,
            state: PageState::Start,
        }
    }

    /// Pull the next page, or `Ok(None)` once the sequence is exhausted
    pub async fn try_next(&mut self) -> CliResult<Option<CatalogPage>> {
        let page = match std::mem::replace(&mut self.state, PageState::Done) {
            PageState::Done => return Ok(None),
            PageState::Start => self.fetch_first().await?,
            PageState::Next(fragment) => self.fetch_continuation(&fragment).await?,
        };

        if let Some(next) = page.next_link() {
            self.state = PageState::Next(next.to_string());
        }

        Ok(Some(page))
    }

    async fn fetch_first(&self) -> CliResult<CatalogPage> {
        let url = self
            .client
            .config()
            .products_url(&self.credentials.store_hash);

        let response = self.client.get_authenticated(&url, self.credentials).await?;
        parse_page(response).await
    }

    async fn fetch_continuation(&self, fragment: &str) -> CliResult<CatalogPage> {
        // The fragment is a relative continuation carrying its own leading
        // query-string delimiter; it is concatenated onto the listing path.
        let url = format!(
            "{}{}",
            self.client
                .config()
                .products_url(&self.credentials.store_hash),
            fragment
        );

        let response = self.client.get_authenticated(&url, self.credentials).await?;

        // Rate-limit headers are read before the response is judged; they are
        // advertised on error responses too.
        let signal = RateLimitSignal::from_headers(response.headers());

        if let Some(left) = signal.requests_left {
            verbose!(
                "Requests left: {} - Reset in {}ms",
                left,
                signal
                    .reset_after
                    .map(|reset| reset.as_millis())
                    .unwrap_or(0)
            );
        }

        if let Some(delay) = signal.throttle_delay() {
            print_info(&format!(
                "Rate limit reached. Waiting {}ms before continuing...",
                delay.as_millis()
            ));
            tokio::time::sleep(delay).await;
        }

        parse_page(response).await
    }
}

async fn parse_page(response: reqwest::Response) -> CliResult<CatalogPage> {
    let status = response.status();
    if status != StatusCode::OK {
        return Err(CliError::Upstream {
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or("").to_string(),
        });
    }

    let body = response.text().await.map_err(CliError::from)?;
    serde_json::from_str(&body).map_err(Into::into)
}

/// Fetch every page of the product catalog and merge the items in fetch order
///
/// Each page's items are appended in their received order; there is no
/// reordering and no deduplication. Any failure discards the partial result.
pub async fn fetch_all_products(
    client: &ApiClient,
    credentials: &StoreCredentials,
) -> CliResult<Vec<Map<String, Value>>> {
    let mut pages = CatalogPages::new(client, credentials);
    let mut products = Vec::new();
    let mut page_count = 0u32;

    while let Some(page) = pages.try_next().await? {
        page_count += 1;
        verbose!("Page {}: {} products", page_count, page.data.len());
        products.extend(page.data);
    }

    Ok(products)
}
