// src/catalog/source.rs
use crate::config::options::ReconcileOptions;
use crate::core::net::{self, FetchError};

/// Something that can hand out listing pages by number (1-based).
pub trait PageSource {
    fn fetch_page(&mut self, page: u32) -> Result<String, FetchError>;
}

/// The live ComicVine listing.
pub struct HttpCatalog {
    agent: ureq::Agent,
    base_url: String,
    sort: String,
}

impl HttpCatalog {
    pub fn new(opts: &ReconcileOptions) -> Self {
        Self {
            agent: net::agent(opts),
            base_url: opts.base_url.clone(),
            sort: opts.sort.clone(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl PageSource for HttpCatalog {
    fn fetch_page(&mut self, page: u32) -> Result<String, FetchError> {
        let page_s = page.to_string();
        logd!("Fetch: {}?page={}&sort={}", self.base_url, page_s, self.sort);
        net::http_get(
            &self.agent,
            &self.base_url,
            &[("page", page_s.as_str()), ("sort", self.sort.as_str())],
            page,
        )
    }
}
