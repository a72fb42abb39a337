//! YouTube watch links → `youtu.be` short links.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use tracing::debug;

/// Substring that marks a YouTube link.
pub const DOMAIN_MARKER: &str = "youtube.com";
const SHORT_BASE: &str = "https://youtu.be/";

static TRAILING_VIDEO_ID: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\?v=([A-Za-z0-9_-]+)$").expect("video id regex should compile"));

/// Short link for a video.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VideoShortLink {
    pub url: String,
}

/// Builds a short link when the input ends with `?v=<id>`.
pub fn extract_video_short_link(text: &str) -> Option<VideoShortLink> {
    if !text.contains(DOMAIN_MARKER) {
        return None;
    }
    let id = TRAILING_VIDEO_ID.captures(text)?.get(1)?.as_str();
    debug!(id, "youtube link recognized");

    Some(VideoShortLink {
        url: format!("{SHORT_BASE}{id}"),
    })
}
