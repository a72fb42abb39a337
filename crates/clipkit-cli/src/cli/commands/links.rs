//! `clipkit links` – print links derived from a share link.

use anyhow::Result;
use clipkit_core::config::ClipkitConfig;
use clipkit_core::{recognize_all, LinkError, Links};
use serde_json::json;

use crate::cli::input;

pub fn run_links(cfg: &ClipkitConfig, text: Option<String>, as_json: bool) -> Result<()> {
    let text = input::resolve_stdin(text)?;
    let host = cfg.course_host()?;
    let found = recognize_all(&text, &host);

    if as_json {
        println!("{}", serde_json::to_string_pretty(&to_json(&found))?);
        return Ok(());
    }

    report_errors(&found);
    if found.iter().all(|r| r.is_err()) {
        println!("No links recognized.");
    } else {
        print!("{}", render_text(&found));
    }
    Ok(())
}

/// Human-readable block per recognized platform. Errors are skipped.
pub(super) fn render_text(found: &[Result<Links, LinkError>]) -> String {
    let mut out = String::new();
    for links in found.iter().filter_map(|r| r.as_ref().ok()) {
        out.push_str(&format!("{}\n", links.platform()));
        for (label, value) in links.fields() {
            out.push_str(&format!("  {:<9} {}\n", label, value));
        }
    }
    out
}

/// Malformed matches go to stderr; the remaining results still print.
pub(super) fn report_errors(found: &[Result<Links, LinkError>]) {
    for err in found.iter().filter_map(|r| r.as_ref().err()) {
        tracing::warn!("{}", err);
        eprintln!("clipkit: {}", err);
    }
}

fn to_json(found: &[Result<Links, LinkError>]) -> serde_json::Value {
    let links: Vec<&Links> = found.iter().filter_map(|r| r.as_ref().ok()).collect();
    let errors: Vec<String> = found
        .iter()
        .filter_map(|r| r.as_ref().err())
        .map(|e| e.to_string())
        .collect();
    json!({ "links": links, "errors": errors })
}

#[cfg(test)]
mod tests {
    use super::*;
    use clipkit_core::CourseHost;

    #[test]
    fn render_drive_links() {
        let found = recognize_all(
            "https://drive.google.com/file/d/1AbCdEfGhIjKlMnOpQrStUvWxYz012345/view?usp=sharing",
            &CourseHost::default(),
        );
        let text = render_text(&found);
        assert_eq!(
            text,
            "Google Drive\n  \
             view      https://drive.google.com/uc?export=view&id=1AbCdEfGhIjKlMnOpQrStUvWxYz012345\n  \
             download  https://drive.google.com/uc?export=download&id=1AbCdEfGhIjKlMnOpQrStUvWxYz012345\n"
        );
    }

    #[test]
    fn render_skips_errors() {
        let found = recognize_all(
            "https://stchas.instructure.com/courses/1/files?preview=7654321",
            &CourseHost::default(),
        );
        assert_eq!(found.len(), 1);
        assert_eq!(render_text(&found), "");
    }

    #[test]
    fn json_lists_links_and_errors() {
        let found = recognize_all(
            "https://www.youtube.com/watch?v=dQw4w9WgXcQ",
            &CourseHost::default(),
        );
        let value = to_json(&found);
        assert_eq!(value["links"][0]["platform"], "video");
        assert_eq!(value["links"][0]["url"], "https://youtu.be/dQw4w9WgXcQ");
        assert_eq!(value["errors"].as_array().unwrap().len(), 0);

        let found = recognize_all(
            "https://stchas.instructure.com/files?preview=12",
            &CourseHost::default(),
        );
        let value = to_json(&found);
        assert!(value["links"].as_array().unwrap().is_empty());
        assert_eq!(
            value["errors"][0],
            "Canvas link matched but no file id could be extracted"
        );
    }
}
