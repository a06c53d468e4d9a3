//! Fetch helpers for static files served next to the page.
//!
//! Every request is cache-busted (`?_=<millis>`) and sent with `cache: no-store`,
//! so edits to the catalog show up on the next reload.

use contracts::domain::a001_product::{cache_busted, LoadError};
use gloo_net::http::{Request, Response};
use web_sys::RequestCache;

use super::browser::now_millis;

async fn get(url: &str) -> Result<Response, LoadError> {
    let response = Request::get(&cache_busted(url, now_millis()))
        .cache(RequestCache::NoStore)
        .send()
        .await
        .map_err(|e| LoadError::Fetch {
            url: url.to_string(),
            reason: e.to_string(),
        })?;

    if !response.ok() {
        return Err(LoadError::Status {
            url: url.to_string(),
            status: response.status(),
        });
    }
    Ok(response)
}

/// GET a text file
pub async fn fetch_text(url: &str) -> Result<String, LoadError> {
    get(url).await?.text().await.map_err(|e| LoadError::Parse {
        url: url.to_string(),
        reason: e.to_string(),
    })
}

/// GET a binary file
pub async fn fetch_bytes(url: &str) -> Result<Vec<u8>, LoadError> {
    get(url).await?.binary().await.map_err(|e| LoadError::Parse {
        url: url.to_string(),
        reason: e.to_string(),
    })
}
