// src/core/net.rs
//
// Blocking HTTP GET for catalog pages.
// One request per page; the response is consumed into a String before we
// return, so the connection is released on both the Ok and the Err path.

use std::io;
use thiserror::Error;

use crate::config::options::ReconcileOptions;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("page {page}: HTTP status {code}")]
    Status { page: u32, code: u16 },

    #[error("page {page}: transport error: {message}")]
    Transport { page: u32, message: String },

    #[error("page {page}: failed to read body: {source}")]
    Body { page: u32, source: io::Error },
}

pub fn agent(opts: &ReconcileOptions) -> ureq::Agent {
    ureq::AgentBuilder::new()
        .timeout_connect(opts.connect_timeout)
        .timeout_read(opts.read_timeout)
        .user_agent(&opts.user_agent)
        .build()
}

/// GET `url` with the given query params and return the body as text.
/// `page` only labels the error.
pub fn http_get(
    agent: &ureq::Agent,
    url: &str,
    query: &[(&str, &str)],
    page: u32,
) -> Result<String, FetchError> {
    let mut req = agent.get(url);
    for (k, v) in query {
        req = req.query(k, v);
    }

    let resp = req.call().map_err(|e| match e {
        ureq::Error::Status(code, _) => FetchError::Status { page, code },
        ureq::Error::Transport(t) => FetchError::Transport { page, message: t.to_string() },
    })?;

    resp.into_string().map_err(|source| FetchError::Body { page, source })
}
