//! Shared test utilities: config builders and markup inspection.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let config = site_config_with_users(Some(vec![user("A", true), user("B", false)]));
//! let html = showcase(&config, "").unwrap().into_string();
//! assert_eq!(count_logo_links(&html), 1);
//! ```

use std::path::Path;
use tempfile::TempDir;

use crate::config::{ShowcaseUser, SiteConfig};

// =========================================================================
// Fixture setup
// =========================================================================

/// Copy `fixtures/site/` to a temp directory and return it.
pub fn setup_fixtures() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let fixtures = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/site");
    for entry in std::fs::read_dir(&fixtures).unwrap() {
        let entry = entry.unwrap();
        std::fs::copy(entry.path(), tmp.path().join(entry.file_name())).unwrap();
    }
    tmp
}

// =========================================================================
// Config builders
// =========================================================================

/// A showcase user whose link and logo are derived from `caption`.
pub fn user(caption: &str, pinned: bool) -> ShowcaseUser {
    let slug = caption.to_lowercase();
    ShowcaseUser {
        info_link: format!("https://{slug}.example.com"),
        image: format!("/img/{slug}.png"),
        caption: caption.to_string(),
        pinned,
    }
}

/// Stock config with the given users list.
pub fn site_config_with_users(users: Option<Vec<ShowcaseUser>>) -> SiteConfig {
    SiteConfig {
        users,
        ..SiteConfig::default()
    }
}

// =========================================================================
// Markup inspection
// =========================================================================

/// Number of logo links inside the showcase's `logos` div.
pub fn count_logo_links(html: &str) -> usize {
    let Some(start) = html.find(r#"<div class="logos">"#) else {
        return 0;
    };
    let logos = &html[start..];
    let end = logos.find("</div>").unwrap_or(logos.len());
    logos[..end].matches("<a ").count()
}
