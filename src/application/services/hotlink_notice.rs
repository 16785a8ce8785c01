//! User-facing text for hotlink-protected sites.

/// Placeholder replaced by the site display name.
pub const SITE_PLACEHOLDER: &str = "{site}";

/// Notice emitted in place of an image from a hotlink-protected site.
pub const DEFAULT_NOTICE_TEMPLATE: &str = "detected hotlink-protected site {site}; fetch the image by its ID through the site-specific retrieval mechanism";

/// Renders the hotlink notice for a site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HotlinkNotice {
    template: String,
}

impl Default for HotlinkNotice {
    fn default() -> Self {
        Self::new(DEFAULT_NOTICE_TEMPLATE)
    }
}

impl HotlinkNotice {
    /// Creates notice from a template containing `{site}`.
    #[must_use]
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
        }
    }

    /// Renders the notice for `site_name`.
    #[must_use]
    pub fn render(&self, site_name: &str) -> String {
        self.template.replace(SITE_PLACEHOLDER, site_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_notice() {
        assert_eq!(
            HotlinkNotice::default().render("Pixiv"),
            "detected hotlink-protected site Pixiv; fetch the image by its ID through the site-specific retrieval mechanism"
        );
    }

    #[test]
    fn test_custom_template_repeats_site() {
        let notice = HotlinkNotice::new("{site} blocks hotlinking, send \"{site}: id\" instead\n");
        assert_eq!(
            notice.render("Pixiv"),
            "Pixiv blocks hotlinking, send \"Pixiv: id\" instead\n"
        );
    }
}
