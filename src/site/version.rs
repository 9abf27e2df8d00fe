//! Build-version reload guard.
//!
//! Each deployment carries a build id. The page compares it with the id it
//! last saw (kept under `site_version` in local storage) and, on a change,
//! records the new id and asks for a single reload with `?v=<id>` set
//! so stale cached assets are bypassed. The stored id is updated before the
//! reload, so the reloaded page reports `Current` and does not loop.

use serde::Serialize;
use url::Url;

use crate::error::{FolioError, FolioResult};

/// Local storage key holding the last seen build id.
pub const VERSION_KEY: &str = "site_version";

/// Query parameter carrying the build id on a forced reload.
pub const VERSION_PARAM: &str = "v";

/// Minimal key-value store (browser local storage in production).
pub trait KeyValueStore {
    fn get(&self, key: &str) -> FolioResult<Option<String>>;
    fn set(&self, key: &str, value: &str) -> FolioResult<()>;
}

/// Result of comparing the stored build id with the running one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase", tag = "kind")]
pub enum VersionCheck {
    /// Nothing stored yet; the id was recorded.
    FirstVisit,
    /// Stored id matches.
    Current,
    /// A different id was stored; the caller should navigate to `url`.
    Reload { previous: String, url: String },
}

impl VersionCheck {
    pub fn needs_reload(&self) -> bool {
        matches!(self, VersionCheck::Reload { .. })
    }
}

/// Compare `build_id` with the stored one and update the store.
///
/// `current_href` is the page URL, used to build the reload target.
pub fn check_version<S: KeyValueStore + ?Sized>(
    store: &S,
    build_id: &str,
    current_href: &str,
) -> FolioResult<VersionCheck> {
    if build_id.is_empty() {
        return Err(FolioError::InvalidConfig("build id must not be empty".to_string()));
    }

    match store.get(VERSION_KEY)? {
        None => {
            store.set(VERSION_KEY, build_id)?;
            log::info!("[VERSION] First visit, recorded build {}", build_id);
            Ok(VersionCheck::FirstVisit)
        },
        Some(stored) if stored == build_id => {
            log::debug!("[VERSION] Build {} is current", build_id);
            Ok(VersionCheck::Current)
        },
        Some(stored) => {
            let url = with_version_param(current_href, build_id)?;
            store.set(VERSION_KEY, build_id)?;
            log::info!(
                "[VERSION] Build changed {} -> {}, reloading {}",
                stored,
                build_id,
                url
            );
            Ok(VersionCheck::Reload {
                previous: stored,
                url,
            })
        },
    }
}

/// Set `v=<version>` on `href` the way `URLSearchParams.set` does: the first
/// `v` keeps its position, later duplicates are dropped, and a missing `v` is
/// appended. Other parameters and the fragment are left alone.
pub fn with_version_param(href: &str, version: &str) -> FolioResult<String> {
    let mut url = Url::parse(href)?;

    let mut replaced = false;
    let mut pairs: Vec<(String, String)> = Vec::new();
    for (key, value) in url.query_pairs() {
        if key != VERSION_PARAM {
            pairs.push((key.into_owned(), value.into_owned()));
        } else if !replaced {
            pairs.push((VERSION_PARAM.to_string(), version.to_string()));
            replaced = true;
        }
    }
    if !replaced {
        pairs.push((VERSION_PARAM.to_string(), version.to_string()));
    }

    url.query_pairs_mut().clear().extend_pairs(&pairs);
    Ok(url.into())
}
