//! Input normalization and validation for submitted bookmarks.
//!
//! Checks run in a fixed order and the first failure wins: missing field,
//! then URL shape, then duplicate. Nothing here touches storage beyond the
//! duplicate lookup, and nothing performs network I/O.

use crate::error::{KeeplinkError, Result};
use crate::model::Bookmark;
use crate::store::DataStore;
use url::Url;

/// Trim the input and prepend `https://` when it does not already start
/// with `http`. No other normalization (no lowercasing, no trailing-slash
/// handling).
pub fn normalize_url(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.starts_with("http") {
        trimmed.to_string()
    } else {
        format!("https://{}", trimmed)
    }
}

/// Syntactic check only: the string must parse as an absolute URL and the
/// parsed URL must carry a host. Reachability is never checked.
pub fn is_valid_url(s: &str) -> bool {
    Url::parse(s).map(|u| u.has_host()).unwrap_or(false)
}

/// Validate a submitted name/URL pair against the store.
///
/// Returns the normalized [`Bookmark`] ready to append, or the first
/// failing check: [`KeeplinkError::MissingField`] when either trimmed field
/// is empty, [`KeeplinkError::InvalidUrl`] when the normalized URL does not
/// parse, [`KeeplinkError::Duplicate`] when the exact pair is already
/// stored.
pub fn validate<S: DataStore>(store: &S, name: &str, url: &str) -> Result<Bookmark> {
    let name = name.trim();
    if name.is_empty() || url.trim().is_empty() {
        return Err(KeeplinkError::MissingField);
    }

    let url = normalize_url(url);
    if !is_valid_url(&url) {
        return Err(KeeplinkError::InvalidUrl(url));
    }

    if store.contains(name, &url)? {
        return Err(KeeplinkError::Duplicate {
            name: name.to_string(),
            url,
        });
    }

    Ok(Bookmark::new(name.to_string(), url))
}
