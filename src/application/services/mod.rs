pub mod hotlink_notice;
pub mod image_classifier;
pub mod url_scanner;

pub use hotlink_notice::{DEFAULT_NOTICE_TEMPLATE, HotlinkNotice};
pub use image_classifier::{has_image_suffix, is_image_content_type, registrable_domain_label};
pub use url_scanner::UrlScanner;
