//! Console rendering of rewrite results.

use std::fmt::Write as _;

use crate::domain::entities::Segment;
use crate::infrastructure::config::OutputFormat;

use super::plugin::Reply;

/// Renders a reply for stdout.
///
/// # Errors
/// Returns error if JSON serialization fails.
pub fn render_reply(reply: &Reply, format: OutputFormat) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(reply),
        OutputFormat::Text => Ok(match reply {
            Reply::Text(text) => text.clone(),
            Reply::Segments(segments) => render_segments(segments),
        }),
    }
}

/// Text passes through; each image becomes its own `[image] <url>` line.
fn render_segments(segments: &[Segment]) -> String {
    let mut out = String::new();
    for segment in segments {
        match segment {
            Segment::Text { text } => out.push_str(text),
            Segment::Image { url } => {
                if !out.is_empty() && !out.ends_with('\n') {
                    out.push('\n');
                }
                let _ = writeln!(out, "[image] {url}");
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_text() {
        let reply = Reply::Segments(vec![
            Segment::text("See "),
            Segment::image("https://example.com/cat.png"),
            Segment::text("!"),
        ]);

        assert_eq!(
            render_reply(&reply, OutputFormat::Text).unwrap(),
            "See \n[image] https://example.com/cat.png\n!"
        );
    }

    #[test]
    fn test_render_images_on_own_lines() {
        let reply = Reply::Segments(vec![
            Segment::image("https://example.com/a.png"),
            Segment::text("line\n"),
            Segment::image("https://example.com/b.png"),
        ]);

        assert_eq!(
            render_reply(&reply, OutputFormat::Text).unwrap(),
            "[image] https://example.com/a.png\nline\n[image] https://example.com/b.png\n"
        );
    }

    #[test]
    fn test_render_unchanged() {
        let reply = Reply::Text("nothing here".to_string());
        assert_eq!(render_reply(&reply, OutputFormat::Text).unwrap(), "nothing here");
    }

    #[test]
    fn test_render_json() {
        let reply = Reply::Segments(vec![Segment::image("https://example.com/cat.png")]);
        let json: serde_json::Value =
            serde_json::from_str(&render_reply(&reply, OutputFormat::Json).unwrap()).unwrap();

        assert_eq!(json["kind"], "segments");
        assert_eq!(json["body"][0]["type"], "image");
        assert_eq!(json["body"][0]["url"], "https://example.com/cat.png");
    }
}
