//! OneDrive for Business share links → direct download link.

use serde::Serialize;
use tracing::debug;

/// Substring that marks a OneDrive for Business link.
pub const DOMAIN_MARKER: &str = "my.sharepoint.com";
const QUERY_MARKER: &str = "?e=";
const DOWNLOAD_SUFFIX: &str = "?download=1";

/// Direct download link derived from a share link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShareLink {
    pub download: String,
}

/// Replaces the `?e=` query of a share link with `?download=1`.
pub fn extract_share_link(text: &str) -> Option<ShareLink> {
    if !text.contains(DOMAIN_MARKER) {
        return None;
    }
    let (prefix, _) = text.split_once(QUERY_MARKER)?;
    debug!("sharepoint link recognized");

    Some(ShareLink {
        download: format!("{prefix}{DOWNLOAD_SUFFIX}"),
    })
}
