//! Site configuration module.
//!
//! Loads and validates the site's `config.toml`. Stock defaults are the base
//! layer; the user file is merged on top, so it only needs the keys it wants
//! to change.
//!
//! ## Config File Location
//!
//! ```text
//! website/
//! └── config.toml     # Site config (overrides stock defaults)
//! ```
//!
//! ## Configuration Options
//!
//! ```toml
//! title = "Test Site"            # Project title, shown in the splash header
//! tagline = "A website for testing"
//! base_url = "/"                 # Path prefix for every generated URL
//!
//! [colors]
//! primary = "#2E8555"
//! secondary = "#205C3B"
//!
//! [[users]]                      # Optional: omit for no showcase section
//! caption = "User1"
//! image = "/img/docusaurus.svg"
//! info_link = "https://www.facebook.com"
//! pinned = true                  # Pinned users appear on the homepage
//! ```
//!
//! Unknown keys are rejected to catch typos early.
//!
//! The loaded [`SiteConfig`] is passed explicitly to every renderer; nothing
//! in the crate looks configuration up on its own.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::urls::UrlBuilder;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Project title, shown in the splash header and the showcase link.
    pub title: String,
    /// One-line description rendered under the title.
    pub tagline: String,
    /// Prefix for every URL the site produces, e.g. `/` or `/project/`.
    pub base_url: String,
    /// Brand colors exposed to the stylesheet as custom properties.
    pub colors: ColorConfig,
    /// Organizations using the project. `None` and an empty list both
    /// suppress the showcase section.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub users: Option<Vec<ShowcaseUser>>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Test Site".to_string(),
            tagline: "A website for testing".to_string(),
            base_url: "/".to_string(),
            colors: ColorConfig::default(),
            users: None,
        }
    }
}

impl SiteConfig {
    /// URL helpers rooted at this site's `base_url`.
    pub fn urls(&self) -> UrlBuilder<'_> {
        UrlBuilder::new(&self.base_url)
    }

    /// Configured users, treating an absent list as empty.
    pub fn users(&self) -> &[ShowcaseUser] {
        self.users.as_deref().unwrap_or_default()
    }

    /// Validate values the renderers rely on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.title.trim().is_empty() {
            return Err(ConfigError::Validation("title must not be empty".into()));
        }
        if !self.base_url.starts_with('/') || !self.base_url.ends_with('/') {
            return Err(ConfigError::Validation(format!(
                "base_url must start and end with '/', got {:?}",
                self.base_url
            )));
        }
        for (key, value) in [
            ("colors.primary", &self.colors.primary),
            ("colors.secondary", &self.colors.secondary),
        ] {
            if value.contains(['<', '>', ';', '{', '}']) {
                return Err(ConfigError::Validation(format!(
                    "{key} must be a plain CSS color, got {value:?}"
                )));
            }
        }
        Ok(())
    }
}

/// One entry of the "who's using this" showcase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ShowcaseUser {
    /// Where the logo links to.
    pub info_link: String,
    /// Logo image URL, used verbatim.
    pub image: String,
    /// Shown as the logo's tooltip.
    pub caption: String,
    /// Pinned users are shown on the homepage; the rest only on the users page.
    #[serde(default)]
    pub pinned: bool,
}

/// Brand colors.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorConfig {
    pub primary: String,
    pub secondary: String,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            primary: "#2E8555".to_string(),
            secondary: "#205C3B".to_string(),
        }
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(SiteConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// Tables merge key-by-key. Any other overlay value, arrays included,
/// replaces the base value outright.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Read `config.toml` from a site directory as a raw TOML value.
///
/// Returns `Ok(None)` when the directory has no `config.toml`.
pub fn load_raw_config(site_dir: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = site_dir.join("config.toml");
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto `base`, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<SiteConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: SiteConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load the site config from `config.toml` in `site_dir`.
pub fn load_config(site_dir: &Path) -> Result<SiteConfig, ConfigError> {
    resolve_config(stock_defaults_value(), load_raw_config(site_dir)?)
}

/// Returns a fully-commented stock `config.toml`.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Site Homepage Configuration
# ===========================
# All settings are optional. Values shown below are the defaults.
# Unknown keys will cause an error.

# Project title. Shown in the splash header and in the
# "More <title> Users" showcase link.
title = "Test Site"

# One-line description rendered under the title.
tagline = "A website for testing"

# Path prefix for every URL on the site. Must start and end with "/".
# Use "/my-project/" when the site is served from a subdirectory.
base_url = "/"

# ---------------------------------------------------------------------------
# Colors (exposed to the stylesheet as --color-primary / --color-secondary)
# ---------------------------------------------------------------------------
[colors]
primary = "#2E8555"
secondary = "#205C3B"

# ---------------------------------------------------------------------------
# Showcase
# ---------------------------------------------------------------------------
# Organizations using the project. Omit entirely to hide the showcase.
# Only pinned users are shown on the homepage.
#
# [[users]]
# caption = "User1"
# image = "/img/docusaurus.svg"
# info_link = "https://www.facebook.com"
# pinned = true
"##
}

/// Generate CSS custom properties from color config.
pub fn generate_color_css(colors: &ColorConfig) -> String {
    format!(
        ":root {{\n    --color-primary: {};\n    --color-secondary: {};\n}}",
        colors.primary, colors.secondary
    )
}
