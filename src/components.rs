//! Layout components the homepage blocks are built from.
//!
//! Each component is a props struct plus a `render` method returning
//! [`Markup`]. They hold no state and know nothing about the site config.
//! Class names follow the stock documentation-site stylesheet so the output
//! drops into an existing theme.

use maud::{Markup, PreEscaped, html};
use pulldown_cmark::{Parser, html as md_html};

use crate::types::{Background, ContentBlock, GridLayout, Padding, TextAlign};

/// Convert markdown to HTML. Inline HTML in the source passes through.
pub fn markdown_to_html(markdown: &str) -> String {
    let parser = Parser::new(markdown);
    let mut body_html = String::new();
    md_html::push_html(&mut body_html, parser);
    body_html
}

/// Renders a markdown string as a block of HTML.
pub fn markdown_block(markdown: &str) -> Markup {
    html! {
        span { (PreEscaped(markdown_to_html(markdown))) }
    }
}

/// Full-width band with optional background and padding.
#[derive(Debug, Clone, Copy, Default)]
pub struct Container<'a> {
    pub padding: &'a [Padding],
    pub id: Option<&'a str>,
    pub background: Option<Background>,
}

impl Container<'_> {
    pub fn render(&self, content: Markup) -> Markup {
        let mut classes = vec!["container"];
        classes.extend(self.background.map(Background::css_class));
        classes.extend(self.padding.iter().map(|p| p.css_class()));
        html! {
            div class=(classes.join(" ")) id=[self.id] {
                div.wrapper {
                    (content)
                }
            }
        }
    }
}

/// Grid of [`ContentBlock`]s.
#[derive(Debug, Clone, Copy)]
pub struct GridBlock<'a> {
    pub align: TextAlign,
    pub layout: GridLayout,
    pub contents: &'a [ContentBlock],
}

impl GridBlock<'_> {
    pub fn render(&self) -> Markup {
        html! {
            div.gridBlock {
                @for block in self.contents {
                    (self.render_block(block))
                }
            }
        }
    }

    fn render_block(&self, block: &ContentBlock) -> Markup {
        let mut classes = vec!["blockElement"];
        classes.extend(self.align.css_class());
        classes.extend(self.layout.css_class());
        if !block.image.is_empty() {
            classes.push(block.image_align.css_class());
        }
        let image = (!block.image.is_empty()).then(|| {
            html! {
                div.blockImage {
                    img src=(block.image);
                }
            }
        });
        let leads = block.image_align.leads();

        html! {
            div class=(classes.join(" ")) {
                @if leads {
                    @if let Some(image) = &image { (image) }
                }
                div.blockContent {
                    h2 { (block.title) }
                    (markdown_block(&block.content))
                }
                @if !leads {
                    @if let Some(image) = &image { (image) }
                }
            }
        }
    }
}

/// Call-to-action link styled as a button.
#[derive(Debug, Clone, Copy)]
pub struct Button<'a> {
    pub href: &'a str,
    pub target: &'a str,
}

impl<'a> Button<'a> {
    /// A button opening in the same tab.
    pub fn new(href: &'a str) -> Self {
        Self {
            href,
            target: "_self",
        }
    }

    pub fn render(&self, label: &str) -> Markup {
        html! {
            div.pluginWrapper.buttonWrapper {
                a.button href=(self.href) target=(self.target) { (label) }
            }
        }
    }
}
