//! Remote file index fetcher.
//!
//! Fetches a collection's listing from the contents API and converts it to
//! [`FileEntry`] values. Fail-soft: any transport or decode failure is
//! logged to the console and surfaced to the caller as an empty index.

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

use super::file_index::{entries_from_listing, Collection, FileEntry, ListingEntry};

/// Fetch one collection's file index. Never fails: an unreachable or
/// malformed listing yields an empty vec, which the UI treats the same as
/// "no matches".
pub async fn fetch_index(collection: Collection) -> Vec<FileEntry> {
    match fetch_listing(&collection.listing_url()).await {
        Ok(listing) => entries_from_listing(listing, collection),
        Err(e) => {
            web_sys::console::error_2(
                &format!("Listing fetch failed for {}:", collection.folder()).into(),
                &e,
            );
            Vec::new()
        }
    }
}

async fn fetch_listing(url: &str) -> Result<Vec<ListingEntry>, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let response: web_sys::Response = JsFuture::from(window.fetch_with_str(url))
        .await?
        .dyn_into()?;
    if !response.ok() {
        return Err(JsValue::from_str(&format!("HTTP {}", response.status())));
    }
    let json = JsFuture::from(response.json()?).await?;
    serde_wasm_bindgen::from_value(json).map_err(Into::into)
}
