//! Cheap, offline checks used to classify a URL before probing it.

use url::Url;

/// Path suffixes treated as image files.
pub const IMAGE_SUFFIXES: [&str; 6] = [".jpg", ".jpeg", ".png", ".gif", ".bmp", ".webp"];

/// Returns true if the URL path ends with a known image extension,
/// ignoring case. Unparseable URLs are checked as plain text.
#[must_use]
pub fn has_image_suffix(url: &str) -> bool {
    let path = Url::parse(url).map_or_else(
        |_| url.to_ascii_lowercase(),
        |parsed| parsed.path().to_ascii_lowercase(),
    );

    IMAGE_SUFFIXES.iter().any(|suffix| path.ends_with(suffix))
}

/// Returns the "brand" label of the URL host.
///
/// Hosts with more than two labels give the second-from-last label
/// (`i.pximg.net` -> `pximg`), others give the first (`example.com` ->
/// `example`). Multi-part public suffixes such as `.co.uk` are not
/// recognised: `img.bbc.co.uk` yields `co`.
#[must_use]
pub fn registrable_domain_label(url: &str) -> Option<String> {
    let parsed = Url::parse(url).ok()?;
    let host = parsed.host_str()?;

    let labels: Vec<&str> = host.split('.').collect();
    let label = if labels.len() > 2 {
        labels[labels.len() - 2]
    } else {
        labels[0]
    };

    Some(label.to_string())
}

/// Returns true if a `Content-Type` value denotes an image.
#[must_use]
pub fn is_image_content_type(content_type: &str) -> bool {
    content_type.to_ascii_lowercase().starts_with("image/")
}
