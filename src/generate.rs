//! HTML document generation.
//!
//! Wraps the homepage body from [`crate::home`] in a complete document and
//! writes it out. This is the only module that touches the filesystem.
//!
//! ## CSS
//!
//! `static/style.css` is embedded at compile time. Brand colors from the
//! config are prepended as CSS custom properties, and the whole stylesheet
//! is inlined into `<head>`.

use crate::config::{self, ConfigError, SiteConfig};
use crate::home;
use maud::{DOCTYPE, Markup, PreEscaped, html};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

const CSS_STATIC: &str = include_str!("../static/style.css");

/// Full stylesheet: color variables followed by the static rules.
pub fn site_css(config: &SiteConfig) -> String {
    format!(
        "{}\n\n{}",
        config::generate_color_css(&config.colors),
        CSS_STATIC
    )
}

/// Renders the base HTML document structure.
fn base_document(title: &str, lang: &str, css: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang=(lang) {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (PreEscaped(css)) }
            }
            body {
                (content)
            }
        }
    }
}

/// Renders the homepage as a complete HTML document.
///
/// An empty `language` renders the default-language page with `lang="en"`.
pub fn render_document(config: &SiteConfig, language: &str) -> Markup {
    let lang = if language.is_empty() { "en" } else { language };
    let title = format!("{} · {}", config.title, config.tagline);
    base_document(
        &title,
        lang,
        &site_css(config),
        home::render_home(config, language),
    )
}

/// Load the config from `site_dir`, render the homepage and write it to
/// `output`, creating parent directories as needed.
pub fn generate(
    site_dir: &Path,
    output: &Path,
    language: &str,
) -> Result<SiteConfig, GenerateError> {
    let config = config::load_config(site_dir)?;
    write_document(&config, language, output)?;
    Ok(config)
}

/// Render the homepage for an already-loaded config and write it to `output`.
pub fn write_document(
    config: &SiteConfig,
    language: &str,
    output: &Path,
) -> Result<(), GenerateError> {
    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(output, render_document(config, language).into_string())?;
    Ok(())
}
