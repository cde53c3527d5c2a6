//! Pagination handling for GitHub list endpoints.
//!
//! GitHub paginates with the RFC 8288 `Link` header. [`PageIterator`]
//! requests the first page with the `per_page`/`page` values from
//! [`ApiOptions`] and then follows each absolute `rel="next"` URL verbatim
//! until none is returned or `page_count` pages have been read.

use crate::client::GitHubClient;
use crate::config::MAX_PAGE_SIZE;
use crate::errors::GitHubResult;
use futures::stream::{self, Stream};
use reqwest::header::HeaderMap;
use serde::de::DeserializeOwned;
use serde::Deserialize;

/// Pagination links parsed from Link header.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaginationLinks {
    /// URL for the next page.
    pub next: Option<String>,
    /// URL for the previous page.
    pub prev: Option<String>,
    /// URL for the first page.
    pub first: Option<String>,
    /// URL for the last page.
    pub last: Option<String>,
}

impl PaginationLinks {
    /// Parses pagination links from the Link header (RFC 8288).
    pub fn from_header(header_value: &str) -> Self {
        let mut links = Self::default();

        for part in header_value.split(',') {
            let mut url = None;
            let mut rel = None;

            for segment in part.split(';') {
                let segment = segment.trim();
                if let Some(inner) = segment.strip_prefix('<').and_then(|s| s.strip_suffix('>')) {
                    url = Some(inner.to_string());
                } else if let Some(value) = segment.strip_prefix("rel=") {
                    rel = Some(value.trim_matches('"').to_string());
                }
            }

            if let (Some(url), Some(rel)) = (url, rel) {
                match rel.as_str() {
                    "next" => links.next = Some(url),
                    "prev" => links.prev = Some(url),
                    "first" => links.first = Some(url),
                    "last" => links.last = Some(url),
                    _ => {}
                }
            }
        }

        links
    }

    /// Parses pagination links from response headers.
    pub fn from_headers(headers: &HeaderMap) -> Self {
        headers
            .get(reqwest::header::LINK)
            .and_then(|v| v.to_str().ok())
            .map(Self::from_header)
            .unwrap_or_default()
    }

    /// Returns true if there is a next page.
    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }

    /// Returns true if there is a previous page.
    pub fn has_prev(&self) -> bool {
        self.prev.is_some()
    }

    /// Gets the total page count from the last link.
    pub fn total_pages(&self) -> Option<u32> {
        self.last.as_deref().and_then(extract_page_number)
    }
}

/// A single page of results.
#[derive(Debug, Clone)]
pub struct Page<T> {
    /// The items in this page.
    pub items: Vec<T>,
    /// Pagination links.
    pub links: PaginationLinks,
    /// Total count, for endpoints that wrap their lists.
    pub total_count: Option<u64>,
}

impl<T> Page<T> {
    /// Creates a new page.
    pub fn new(items: Vec<T>, links: PaginationLinks) -> Self {
        Self {
            items,
            links,
            total_count: None,
        }
    }

    /// Sets total count.
    pub fn with_total_count(mut self, count: u64) -> Self {
        self.total_count = Some(count);
        self
    }

    /// Returns true if there is a next page.
    pub fn has_next(&self) -> bool {
        self.links.has_next()
    }

    /// Returns the URL for the next page.
    pub fn next_url(&self) -> Option<&str> {
        self.links.next.as_deref()
    }

    /// Returns the number of items in this page.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the page is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Consumes the page and returns the items.
    pub fn into_items(self) -> Vec<T> {
        self.items
    }
}

impl<T> IntoIterator for Page<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

/// Paging options for list requests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ApiOptions {
    /// Items per page (`per_page`, capped at 100).
    pub page_size: Option<u32>,
    /// Maximum number of pages to fetch.
    pub page_count: Option<u32>,
    /// Page to start from (1-indexed).
    pub start_page: Option<u32>,
}

impl ApiOptions {
    /// Creates options that fetch every page with the server default size.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets items per page.
    pub fn page_size(mut self, size: u32) -> Self {
        self.page_size = Some(size.clamp(1, MAX_PAGE_SIZE));
        self
    }

    /// Limits the number of pages fetched.
    pub fn page_count(mut self, count: u32) -> Self {
        self.page_count = Some(count);
        self
    }

    /// Sets the first page to fetch.
    pub fn start_page(mut self, page: u32) -> Self {
        self.start_page = Some(page.max(1));
        self
    }

    /// Converts to query parameters for the first request.
    pub fn to_query(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();
        if let Some(page) = self.start_page {
            params.push(("page".to_string(), page.to_string()));
        }
        if let Some(per_page) = self.page_size {
            params.push(("per_page".to_string(), per_page.to_string()));
        }
        params
    }
}

/// A list response body. Plain JSON arrays implement this through
/// `Vec<T>`; endpoints that wrap their arrays in an object
/// (`{"total_count": 2, "workflows": [...]}`) implement it on the wrapper.
pub trait ListEnvelope: DeserializeOwned {
    /// Element type.
    type Item;

    /// Total count reported by the server, if any.
    fn total_count(&self) -> Option<u64> {
        None
    }

    /// Consumes the envelope and returns its elements.
    fn into_items(self) -> Vec<Self::Item>;
}

impl<T: DeserializeOwned> ListEnvelope for Vec<T> {
    type Item = T;

    fn into_items(self) -> Vec<T> {
        self
    }
}

/// Implements [`ListEnvelope`] for a wrapper with `total_count` and a named
/// item field.
macro_rules! list_envelope {
    ($wrapper:ty, $field:ident, $item:ty) => {
        impl $crate::pagination::ListEnvelope for $wrapper {
            type Item = $item;

            fn total_count(&self) -> Option<u64> {
                Some(self.total_count as u64)
            }

            fn into_items(self) -> Vec<$item> {
                self.$field
            }
        }
    };
}
pub(crate) use list_envelope;

/// Results of a search query.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResults<T> {
    /// Total number of matches.
    pub total_count: u64,
    /// Whether the search timed out before completing.
    #[serde(default)]
    pub incomplete_results: bool,
    /// Matches on this page.
    pub items: Vec<T>,
}

impl<T: DeserializeOwned> ListEnvelope for SearchResults<T> {
    type Item = T;

    fn total_count(&self) -> Option<u64> {
        Some(self.total_count)
    }

    fn into_items(self) -> Vec<T> {
        self.items
    }
}

/// Where the next request of a [`PageIterator`] goes.
#[derive(Debug, Clone)]
pub(crate) enum PageCursor {
    /// First request: a relative path plus query parameters.
    First {
        path: String,
        query: Vec<(String, String)>,
    },
    /// Absolute URL taken from a `rel="next"` link.
    Next(String),
    /// No more pages.
    Done,
}

/// Lazily walks the pages of a list endpoint.
pub struct PageIterator<'a, E: ListEnvelope> {
    client: &'a GitHubClient,
    cursor: PageCursor,
    page_limit: Option<u32>,
    pages_fetched: u32,
    _envelope: std::marker::PhantomData<E>,
}

impl<'a, E: ListEnvelope> PageIterator<'a, E> {
    pub(crate) fn new(
        client: &'a GitHubClient,
        path: String,
        mut query: Vec<(String, String)>,
        options: ApiOptions,
    ) -> Self {
        query.extend(options.to_query());
        Self {
            client,
            cursor: PageCursor::First { path, query },
            page_limit: options.page_count,
            pages_fetched: 0,
            _envelope: std::marker::PhantomData,
        }
    }

    /// Fetches the next page, or `None` once the listing is exhausted.
    pub async fn next_page(&mut self) -> GitHubResult<Option<Page<E::Item>>> {
        if let Some(limit) = self.page_limit {
            if self.pages_fetched >= limit {
                self.cursor = PageCursor::Done;
            }
        }

        let cursor = std::mem::replace(&mut self.cursor, PageCursor::Done);
        if matches!(cursor, PageCursor::Done) {
            return Ok(None);
        }

        let (envelope, links): (E, PaginationLinks) = self.client.fetch_page(cursor).await?;
        self.pages_fetched += 1;

        if let Some(next) = links.next.clone() {
            self.cursor = PageCursor::Next(next);
        }

        let total = envelope.total_count();
        let mut page = Page::new(envelope.into_items(), links);
        if let Some(total) = total {
            page = page.with_total_count(total);
        }
        Ok(Some(page))
    }

    /// Collects all items from all pages.
    pub async fn collect_all(mut self) -> GitHubResult<Vec<E::Item>> {
        let mut all_items = Vec::new();

        while let Some(page) = self.next_page().await? {
            all_items.extend(page.into_items());
        }

        Ok(all_items)
    }

    /// Returns true if another page may be fetched.
    pub fn has_more(&self) -> bool {
        !matches!(self.cursor, PageCursor::Done)
            && self.page_limit.map_or(true, |limit| self.pages_fetched < limit)
    }

    /// Turns the iterator into a stream of pages.
    pub fn into_stream(self) -> impl Stream<Item = GitHubResult<Page<E::Item>>> + 'a
    where
        E: 'a,
        E::Item: 'a,
    {
        stream::try_unfold(self, |mut iter| async move {
            Ok(iter.next_page().await?.map(|page| (page, iter)))
        })
    }
}

/// Extracts page number from a URL.
pub fn extract_page_number(url: &str) -> Option<u32> {
    url::Url::parse(url).ok().and_then(|u| {
        u.query_pairs()
            .find(|(k, _)| k == "page")
            .and_then(|(_, v)| v.parse().ok())
    })
}
