//! Google Drive share links → direct view/download links.

use serde::Serialize;
use tracing::debug;

/// Substring that marks a Google Drive link.
pub const DOMAIN_MARKER: &str = "drive.google.com";
/// Path segment that precedes the document identifier.
const ID_MARKER: &str = "/d/";
/// Width of the identifier window taken after [`ID_MARKER`].
pub const ID_WINDOW: usize = 33;

const VIEW_BASE: &str = "https://drive.google.com/uc?export=view&id=";
const DOWNLOAD_BASE: &str = "https://drive.google.com/uc?export=download&id=";

/// Direct links derived from a Drive share link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CloudDocLinks {
    pub view: String,
    pub download: String,
}

/// Derives view and download links from a Drive share link.
///
/// The identifier is the [`ID_WINDOW`]-character window right after the first
/// `/d/` (shorter if the input ends first). Its contents are not validated.
pub fn extract_cloud_doc_links(text: &str) -> Option<CloudDocLinks> {
    if !text.contains(DOMAIN_MARKER) {
        return None;
    }
    let (_, rest) = text.split_once(ID_MARKER)?;
    let id: String = rest.chars().take(ID_WINDOW).collect();
    debug!(id = %id, "drive link recognized");

    Some(CloudDocLinks {
        view: format!("{VIEW_BASE}{id}"),
        download: format!("{DOWNLOAD_BASE}{id}"),
    })
}
