//! Canvas file preview links → direct download links and image markup.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use tracing::{debug, warn};

use super::Platform;
use crate::error::LinkError;

/// Course site used when no other is configured.
pub const DEFAULT_BASE_URL: &str = "https://stchas.instructure.com";
const DEFAULT_MARKER: &str = "stchas.instructure.com";

static COURSE_SEGMENT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:^|/)courses(?:/|$)").expect("course segment regex should compile")
});
static PREVIEW_SUFFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"preview=\d+$").expect("preview regex should compile"));
static COURSE_ID: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"courses/(\d{4,})/files").expect("course id regex should compile"));
static FILE_ID: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"preview=(\d{7,})$").expect("file id regex should compile"));

/// Image markup and plain link to a course file's download endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CourseLinks {
    pub image: String,
    pub href: String,
}

/// The Canvas site a course link must belong to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseHost {
    base: String,
    marker: String,
}

impl Default for CourseHost {
    fn default() -> Self {
        Self {
            base: DEFAULT_BASE_URL.to_string(),
            marker: DEFAULT_MARKER.to_string(),
        }
    }
}

impl CourseHost {
    /// Builds a host from a base URL such as `https://canvas.example.edu`.
    /// The URL's host name becomes the marker links are matched against.
    pub fn new(base_url: &str) -> Result<Self, LinkError> {
        let invalid = |reason: String| LinkError::InvalidCourseBase {
            url: base_url.to_string(),
            reason,
        };
        let parsed = url::Url::parse(base_url).map_err(|e| invalid(e.to_string()))?;
        let host = parsed
            .host_str()
            .filter(|h| !h.is_empty())
            .ok_or_else(|| invalid("no host".to_string()))?;
        Ok(Self {
            base: base_url.trim_end_matches('/').to_string(),
            marker: host.to_string(),
        })
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn marker(&self) -> &str {
        &self.marker
    }

    /// Recognizes a file preview link on this host.
    ///
    /// Returns `Ok(None)` unless the input mentions the host and ends with
    /// `preview=<digits>`. Past that point a missing course id (when the link
    /// has a `courses` segment) or a file id shorter than 7 digits is a
    /// [`LinkError::MalformedExtraction`].
    pub fn extract(&self, text: &str) -> Result<Option<CourseLinks>, LinkError> {
        if !text.contains(&self.marker) || !PREVIEW_SUFFIX.is_match(text) {
            return Ok(None);
        }

        let target = if has_course_segment(text) {
            let course_id = capture(&COURSE_ID, text, "course id")?;
            let file_id = capture(&FILE_ID, text, "file id")?;
            format!("{}/courses/{course_id}/files/{file_id}/download", self.base)
        } else {
            let file_id = capture(&FILE_ID, text, "file id")?;
            format!("{}/files/{file_id}/download", self.base)
        };
        debug!(target = %target, "canvas link recognized");

        Ok(Some(CourseLinks {
            image: format!("<img src=\"{target}\" alt=\"\" />"),
            href: target,
        }))
    }
}

/// Recognizes a file preview link on the default course site.
pub fn extract_course_links(text: &str) -> Result<Option<CourseLinks>, LinkError> {
    CourseHost::default().extract(text)
}

/// True when the path (query excluded) has a `courses` segment.
fn has_course_segment(text: &str) -> bool {
    let path = text.split_once('?').map_or(text, |(path, _)| path);
    COURSE_SEGMENT.is_match(path)
}

fn capture<'t>(re: &Regex, text: &'t str, missing: &'static str) -> Result<&'t str, LinkError> {
    match re.captures(text).and_then(|c| c.get(1)) {
        Some(m) => Ok(m.as_str()),
        None => {
            warn!(missing, "canvas link matched without {}", missing);
            Err(LinkError::MalformedExtraction {
                platform: Platform::Course,
                missing,
            })
        }
    }
}
