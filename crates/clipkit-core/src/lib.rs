//! Clipboard text helpers: filename sanitizing, share-link recognition and
//! access codes.

pub mod access_code;
pub mod config;
pub mod error;
pub mod filename;
pub mod links;
pub mod logging;

pub use access_code::{generate_access_code, generate_access_code_with};
pub use error::{AccessCodeError, LinkError};
pub use filename::sanitize;
pub use links::{
    extract_cloud_doc_links, extract_course_links, extract_share_link, extract_video_short_link,
    recognize_all, CourseHost, Links, Platform,
};
