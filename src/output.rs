//! CLI output formatting.
//!
//! Each command has a `format_*` function returning `Vec<String>` for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure.
//!
//! ## Check
//!
//! ```text
//! Site
//!     Config: website/config.toml
//!     Title: Docs
//!     Tagline: Questions answered with documents
//!     Base URL: /docs-site/
//!
//! Showcase (3 users, 2 pinned)
//! 001 Acme → https://acme.example.com
//! 002 Initech → https://initech.example.com
//! ```
//!
//! ## Render
//!
//! ```text
//! Home (default language) → dist/index.html
//!     Showcase: 2 logos
//! ```

use crate::config::SiteConfig;
use crate::home::pinned_users;
use std::path::Path;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

fn plural(n: usize, word: &str) -> String {
    if n == 1 {
        format!("{n} {word}")
    } else {
        format!("{n} {word}s")
    }
}

fn language_label(language: &str) -> String {
    if language.is_empty() {
        "default language".to_string()
    } else {
        format!("language {language}")
    }
}

/// Showcase status line, shared by check and render output.
fn showcase_summary(config: &SiteConfig) -> String {
    match &config.users {
        None => "Showcase (not configured)".to_string(),
        Some(users) if users.is_empty() => "Showcase (no users)".to_string(),
        Some(users) => format!(
            "Showcase ({}, {} pinned)",
            plural(users.len(), "user"),
            pinned_users(users).count()
        ),
    }
}

// ============================================================================
// check
// ============================================================================

/// Format the summary printed by `check`.
pub fn format_check_output(config: &SiteConfig, site_dir: &Path) -> Vec<String> {
    let mut lines = vec![
        "Site".to_string(),
        format!("{}Config: {}", indent(1), site_dir.join("config.toml").display()),
        format!("{}Title: {}", indent(1), config.title),
        format!("{}Tagline: {}", indent(1), config.tagline),
        format!("{}Base URL: {}", indent(1), config.base_url),
        String::new(),
        showcase_summary(config),
    ];
    for (i, user) in pinned_users(config.users()).enumerate() {
        lines.push(format!(
            "{} {} → {}",
            format_index(i + 1),
            user.caption,
            user.info_link
        ));
    }
    lines
}

pub fn print_check_output(config: &SiteConfig, site_dir: &Path) {
    for line in format_check_output(config, site_dir) {
        println!("{}", line);
    }
}

// ============================================================================
// render
// ============================================================================

/// Format the status lines printed after `render` writes a file.
pub fn format_render_output(config: &SiteConfig, language: &str, output: &Path) -> Vec<String> {
    let showcase = if config.users().is_empty() {
        "not rendered".to_string()
    } else {
        plural(pinned_users(config.users()).count(), "logo")
    };
    vec![
        format!("Home ({}) → {}", language_label(language), output.display()),
        format!("{}Showcase: {}", indent(1), showcase),
    ]
}

pub fn print_render_output(config: &SiteConfig, language: &str, output: &Path) {
    for line in format_render_output(config, language, output) {
        println!("{}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::*;

    #[test]
    fn format_index_pads() {
        assert_eq!(format_index(1), "001");
        assert_eq!(format_index(42), "042");
        assert_eq!(format_index(123), "123");
    }

    #[test]
    fn indent_levels() {
        assert_eq!(indent(0), "");
        assert_eq!(indent(2), "        ");
    }

    #[test]
    fn plural_forms() {
        assert_eq!(plural(1, "user"), "1 user");
        assert_eq!(plural(0, "user"), "0 users");
        assert_eq!(plural(3, "logo"), "3 logos");
    }

    #[test]
    fn showcase_summary_variants() {
        assert_eq!(
            showcase_summary(&site_config_with_users(None)),
            "Showcase (not configured)"
        );
        assert_eq!(
            showcase_summary(&site_config_with_users(Some(vec![]))),
            "Showcase (no users)"
        );
        assert_eq!(
            showcase_summary(&site_config_with_users(Some(vec![
                user("A", true),
                user("B", false),
            ]))),
            "Showcase (2 users, 1 pinned)"
        );
    }

    #[test]
    fn check_output_lists_pinned_users() {
        let config = site_config_with_users(Some(vec![
            user("A", true),
            user("B", false),
            user("C", true),
        ]));
        let lines = format_check_output(&config, Path::new("website"));
        assert_eq!(lines[0], "Site");
        assert_eq!(lines[1], "    Config: website/config.toml");
        assert!(lines.contains(&"    Base URL: /".to_string()));
        assert!(lines.contains(&"Showcase (3 users, 2 pinned)".to_string()));
        assert!(lines.contains(&"001 A → https://a.example.com".to_string()));
        assert!(lines.contains(&"002 C → https://c.example.com".to_string()));
        assert!(!lines.iter().any(|l| l.contains(" B ")));
    }

    #[test]
    fn render_output_default_language() {
        let config = site_config_with_users(Some(vec![user("A", true)]));
        let lines = format_render_output(&config, "", Path::new("dist/index.html"));
        assert_eq!(
            lines,
            vec![
                "Home (default language) → dist/index.html".to_string(),
                "    Showcase: 1 logo".to_string(),
            ]
        );
    }

    #[test]
    fn render_output_without_users() {
        let config = site_config_with_users(None);
        let lines = format_render_output(&config, "fr", Path::new("dist/fr/index.html"));
        assert_eq!(lines[0], "Home (language fr) → dist/fr/index.html");
        assert_eq!(lines[1], "    Showcase: not rendered");
    }
}
