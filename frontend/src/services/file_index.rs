//! File index model and search state machine.
//!
//! Everything here is plain Rust with no browser types, so the filter and
//! visibility rules are testable on the host target. The WASM transport
//! lives in `remote_index`.

use serde::Deserialize;

/// Listing repository details.
pub const REPO_OWNER: &str = "rAyO-01";
pub const REPO_NAME: &str = "sahara-files";

/// Debounce delay between the last keystroke and the filter step.
pub const DEBOUNCE_MS: u32 = 300;

// ============================================================================
// Types
// ============================================================================

/// A named group of files exposed by the remote listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    Manuals,
    Versions,
}

impl Collection {
    pub fn all() -> [Collection; 2] {
        [Collection::Manuals, Collection::Versions]
    }

    /// Folder name inside the listing repository.
    pub fn folder(&self) -> &'static str {
        match self {
            Collection::Manuals => "manuals",
            Collection::Versions => "App-Versions",
        }
    }

    /// Contents-API URL for this collection's listing.
    pub fn listing_url(&self) -> String {
        format!(
            "https://api.github.com/repos/{REPO_OWNER}/{REPO_NAME}/contents/{}",
            self.folder()
        )
    }
}

/// One remote file: decoded display name plus a directly downloadable URL.
#[derive(Debug, Clone, PartialEq)]
pub struct FileEntry {
    pub name: String,
    pub url: String,
    pub collection: Collection,
}

/// Raw listing entry as returned by the contents API.
#[derive(Debug, Clone, Deserialize)]
pub struct ListingEntry {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
}

// ============================================================================
// Listing Conversion
// ============================================================================

/// Convert a raw listing into [`FileEntry`] values: keep `file` entries
/// only, decode percent-encoding in names, and build download URLs on the
/// static hosting origin. Listing order is preserved.
pub fn entries_from_listing(listing: Vec<ListingEntry>, collection: Collection) -> Vec<FileEntry> {
    listing
        .into_iter()
        .filter(|item| item.kind == "file")
        .map(|item| FileEntry {
            name: display_name(&item.name),
            url: download_url(collection, &item.name),
            collection,
        })
        .collect()
}

/// Human-readable display name: percent-encoding reversed.
pub fn display_name(raw: &str) -> String {
    urlencoding::decode(raw)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| raw.to_string())
}

/// Stable download URL on the static hosting origin, derived from the
/// collection and the raw listing name.
pub fn download_url(collection: Collection, raw_name: &str) -> String {
    format!(
        "https://{REPO_OWNER}.github.io/{REPO_NAME}/{}/{}",
        collection.folder(),
        urlencoding::encode(raw_name)
    )
}

// ============================================================================
// Search State Machine
// ============================================================================

/// Search panel state. `results` is always a pure filter of the current
/// index by the current query; it is never mutated independently.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchController {
    pub query: String,
    pub results: Vec<FileEntry>,
    pub dropdown_visible: bool,
}

impl SearchController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Synchronous query echo; filtering happens separately once the
    /// debounce window closes.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// The filter step. An effectively empty query clears results and hides
    /// the dropdown; anything else recomputes results from the index and
    /// shows the dropdown even when nothing matched, so a "no matches"
    /// state can render.
    pub fn apply_filter(&mut self, index: &[FileEntry]) {
        if self.query.trim().is_empty() {
            self.results.clear();
            self.dropdown_visible = false;
            return;
        }
        self.results = filter_index(index, &self.query);
        self.dropdown_visible = true;
    }

    /// Pointer-down outside the panel: a pure visibility change.
    pub fn dismiss(&mut self) {
        self.dropdown_visible = false;
    }

    /// Refocusing the input with a non-empty query re-opens the dropdown
    /// using the existing results, without recomputing them.
    pub fn refocus(&mut self) {
        if !self.query.trim().is_empty() {
            self.dropdown_visible = true;
        }
    }
}

/// Case-insensitive substring filter over display names, preserving index
/// order.
pub fn filter_index(index: &[FileEntry], query: &str) -> Vec<FileEntry> {
    let needle = query.to_lowercase();
    index
        .iter()
        .filter(|entry| entry.name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}
