//! # docsite-home
//!
//! Renders the homepage of a documentation site from its `config.toml`: a
//! splash header, a run of promotional content blocks, and a showcase of the
//! organizations using the project.
//!
//! # Data Flow
//!
//! ```text
//! config.toml  →  SiteConfig  →  home::render_home  →  generate::render_document
//!                     │                 │
//!                     └── UrlBuilder ───┘
//! ```
//!
//! Every renderer is a pure function of a borrowed [`config::SiteConfig`] and
//! a language tag. There is no global configuration lookup and no state kept
//! between renders; only [`generate`] and the CLI do I/O.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`config`] | `config.toml` loading over stock defaults, validation, color CSS |
//! | [`urls`] | Image, doc and page URL construction from the base URL |
//! | [`types`] | Typed props: content blocks, alignment, layout, backgrounds |
//! | [`components`] | Markdown, container, grid and button renderers |
//! | [`home`] | Homepage sections, the showcase filter, and the page composer |
//! | [`generate`] | Full HTML document wrapping and writing |
//! | [`output`] | CLI output formatting |
//!
//! # Language Tags
//!
//! A language is a plain `&str`. The empty string means "no language" and
//! drops the path segment entirely, so `/docs/doc1.html` rather than
//! `/docs//doc1.html`. Anything else is inserted verbatim.
//!
//! # Showcase Rule
//!
//! The showcase is omitted when no users are configured. Once any user is
//! configured, the section renders with one logo per pinned user and a
//! "More {title} Users" link, even if none are pinned.

pub mod components;
pub mod config;
pub mod generate;
pub mod home;
pub mod output;
pub mod types;
pub mod urls;

#[cfg(test)]
pub(crate) mod test_helpers;
