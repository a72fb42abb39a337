//! Share-link recognizers.
//!
//! Each platform has its own predicate + extractor; nothing here parses URLs
//! in general. A recognizer that doesn't match returns `None` and the caller
//! shows nothing for that platform.

mod cloud_doc;
mod course;
mod file_share;
mod video;

use std::fmt;

use serde::Serialize;

use crate::error::LinkError;

pub use cloud_doc::{extract_cloud_doc_links, CloudDocLinks};
pub use course::{extract_course_links, CourseHost, CourseLinks, DEFAULT_BASE_URL};
pub use file_share::{extract_share_link, ShareLink};
pub use video::{extract_video_short_link, VideoShortLink};

/// Platform a recognizer handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Platform {
    CloudDoc,
    FileShare,
    Course,
    Video,
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Platform::CloudDoc => "Google Drive",
            Platform::FileShare => "OneDrive",
            Platform::Course => "Canvas",
            Platform::Video => "YouTube",
        };
        f.write_str(name)
    }
}

/// A recognized link of any platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "platform", rename_all = "kebab-case")]
pub enum Links {
    CloudDoc(CloudDocLinks),
    FileShare(ShareLink),
    Course(CourseLinks),
    Video(VideoShortLink),
}

impl Links {
    pub fn platform(&self) -> Platform {
        match self {
            Links::CloudDoc(_) => Platform::CloudDoc,
            Links::FileShare(_) => Platform::FileShare,
            Links::Course(_) => Platform::Course,
            Links::Video(_) => Platform::Video,
        }
    }

    /// Labelled output strings, in display order.
    pub fn fields(&self) -> Vec<(&'static str, &str)> {
        match self {
            Links::CloudDoc(l) => vec![("view", l.view.as_str()), ("download", l.download.as_str())],
            Links::FileShare(l) => vec![("download", l.download.as_str())],
            Links::Course(l) => vec![("image", l.image.as_str()), ("href", l.href.as_str())],
            Links::Video(l) => vec![("url", l.url.as_str())],
        }
    }
}

/// Runs every recognizer over `text` in a fixed order (Drive, OneDrive,
/// Canvas, YouTube) and keeps the ones that matched.
pub fn recognize_all(text: &str, course: &CourseHost) -> Vec<Result<Links, LinkError>> {
    [
        extract_cloud_doc_links(text).map(|l| Ok(Links::CloudDoc(l))),
        extract_share_link(text).map(|l| Ok(Links::FileShare(l))),
        course.extract(text).transpose().map(|r| r.map(Links::Course)),
        extract_video_short_link(text).map(|l| Ok(Links::Video(l))),
    ]
    .into_iter()
    .flatten()
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nothing_recognized() {
        let host = CourseHost::default();
        assert!(recognize_all("", &host).is_empty());
        assert!(recognize_all("just some text", &host).is_empty());
    }

    #[test]
    fn single_platform() {
        let host = CourseHost::default();
        let found = recognize_all("https://www.youtube.com/watch?v=dQw4w9WgXcQ", &host);
        assert_eq!(found.len(), 1);
        let links = found[0].as_ref().unwrap();
        assert_eq!(links.platform(), Platform::Video);
        assert_eq!(links.fields(), vec![("url", "https://youtu.be/dQw4w9WgXcQ")]);
    }

    #[test]
    fn malformed_course_link_reported() {
        let host = CourseHost::default();
        let found = recognize_all(
            "https://stchas.instructure.com/courses/1/files?preview=7654321",
            &host,
        );
        assert_eq!(found.len(), 1);
        assert!(matches!(
            found[0],
            Err(LinkError::MalformedExtraction {
                platform: Platform::Course,
                ..
            })
        ));
    }

    #[test]
    fn results_keep_recognizer_order() {
        // Contrived, but each recognizer only looks at its own markers.
        let text = "drive.google.com/d/x youtube.com my.sharepoint.com/f?e=1?v=abc";
        let platforms: Vec<Platform> = recognize_all(text, &CourseHost::default())
            .into_iter()
            .map(|r| r.unwrap().platform())
            .collect();
        assert_eq!(
            platforms,
            vec![Platform::CloudDoc, Platform::FileShare, Platform::Video]
        );
    }

    #[test]
    fn json_shape() {
        let links = Links::FileShare(ShareLink {
            download: "https://x-my.sharepoint.com/f?download=1".to_string(),
        });
        let json = serde_json::to_value(&links).unwrap();
        assert_eq!(json["platform"], "file-share");
        assert_eq!(json["download"], "https://x-my.sharepoint.com/f?download=1");
    }

    #[test]
    fn platform_names() {
        assert_eq!(Platform::CloudDoc.to_string(), "Google Drive");
        assert_eq!(Platform::Course.to_string(), "Canvas");
    }
}
