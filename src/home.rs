//! The homepage: splash header, promotional blocks and the user showcase.
//!
//! [`render_home`] composes the sections in a fixed order:
//!
//! ```text
//! splash header
//! main container
//! ├── features          (four-column grid)
//! ├── feature callout   (centered markdown)
//! ├── learn how         (light background)
//! ├── try it out        (anchor #try)
//! ├── description       (dark background)
//! └── showcase          (only when users are configured)
//! ```
//!
//! The language tag reaches the splash header and the showcase only; the
//! promotional blocks are the same in every language.

use maud::{Markup, html};

use crate::components::{Button, Container, GridBlock, markdown_block};
use crate::config::{ShowcaseUser, SiteConfig};
use crate::types::{Background, ContentBlock, GridLayout, ImageAlign, Padding, TextAlign};

const LOGO: &str = "docusaurus.svg";

const CALLOUT_TEXT: &str = "I chose this template because it was document based, and I figured answering questions would probably work well with documents. I was drawn in by the dinosaurs and I do not regret that. I did pay attention to the fact that this was created using Markdown and JavaScript which are both languages I am familiar with. The biggest struggle I had was when I was trying to edit a .js file while writing in Markdown. I would make a commit, and then look at the document on Git to see that it was still angry. I did sort that out, but I have to admit it took a bit longer than it should have.";

const LEARN_HOW_TEXT: &str = "Thank you for reaching out to us! Sorry for the trouble here. Can you tell me more about what happened just before this came up? What sort of changes were you making? Are you seeing any error messages? <br /> Any details you can provide could really help get to the bottom of this! I look forward to your reply.";

const TRY_OUT_TEXT: &str = "I have not been able to look at all the features of Netlify, but I do like what I have experienced so far. There are some things I think could be improved: for example the error messages when a build fails could be more informative. I do appreciate that there are immediate links to help documentation and the ability to contact a human to work out what the trouble is. All in all it is a great tool!";

const DESCRIPTION_TEXT: &str = "This is another description of how this project is useful";

/// Renders the complete homepage body for `language` (empty for the default).
pub fn render_home(config: &SiteConfig, language: &str) -> Markup {
    html! {
        div {
            (home_splash(config, language))
            div.mainContainer {
                (features(config))
                (feature_callout())
                (learn_how(config))
                (try_out(config))
                (description(config))
                @if let Some(showcase) = showcase(config, language) {
                    (showcase)
                }
            }
        }
    }
}

// ============================================================================
// Splash header
// ============================================================================

/// Logo, title with tagline, and the promo buttons.
pub fn home_splash(config: &SiteConfig, language: &str) -> Markup {
    let urls = config.urls();
    let favorites = urls.doc_url("doc1.html", language);
    let least_favorites = urls.doc_url("doc2.html", language);

    html! {
        div.homeContainer {
            div.homeSplashFade {
                div.wrapper.homeWrapper {
                    div.projectLogo {
                        img src=(urls.image_url(LOGO));
                    }
                    div.inner {
                        h2.projectTitle {
                            (config.title)
                            small { (config.tagline) }
                        }
                        div.section.promoSection {
                            div.promoRow {
                                div.pluginRowBlock {
                                    (Button::new("#try").render("I Tried It Out"))
                                    (Button::new(&favorites).render("Favorites"))
                                    (Button::new(&least_favorites).render("Least Favorites"))
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

// ============================================================================
// Promotional blocks
// ============================================================================

/// A padded container holding a centered grid of content blocks.
fn block(
    contents: &[ContentBlock],
    layout: GridLayout,
    id: Option<&str>,
    background: Option<Background>,
) -> Markup {
    let grid = GridBlock {
        align: TextAlign::Center,
        layout,
        contents,
    };
    Container {
        padding: &[Padding::Bottom, Padding::Top],
        id,
        background,
    }
    .render(grid.render())
}

fn content_block(
    config: &SiteConfig,
    title: &str,
    content: &str,
    align: ImageAlign,
) -> ContentBlock {
    ContentBlock {
        title: title.to_string(),
        content: content.to_string(),
        image: config.urls().image_url(LOGO),
        image_align: align,
    }
}

pub fn features(config: &SiteConfig) -> Markup {
    let contents = [
        content_block(config, "Dinosaurs", "", ImageAlign::Top),
        content_block(config, "Documents", "", ImageAlign::Top),
    ];
    block(&contents, GridLayout::FourColumn, None, None)
}

pub fn feature_callout() -> Markup {
    html! {
        div.productShowcaseSection.paddingBottom style="text-align: center" {
            h2 { "Why Docusaurus" }
            (markdown_block(CALLOUT_TEXT))
        }
    }
}

pub fn learn_how(config: &SiteConfig) -> Markup {
    let contents = [content_block(
        config,
        "Site Will Not Load",
        LEARN_HOW_TEXT,
        ImageAlign::Right,
    )];
    block(&contents, GridLayout::OneColumn, None, Some(Background::Light))
}

pub fn try_out(config: &SiteConfig) -> Markup {
    let contents = [content_block(
        config,
        "I Tried It Out",
        TRY_OUT_TEXT,
        ImageAlign::Left,
    )];
    block(&contents, GridLayout::OneColumn, Some("try"), None)
}

pub fn description(config: &SiteConfig) -> Markup {
    let contents = [content_block(
        config,
        "Description",
        DESCRIPTION_TEXT,
        ImageAlign::Right,
    )];
    block(&contents, GridLayout::OneColumn, None, Some(Background::Dark))
}

// ============================================================================
// Showcase
// ============================================================================

/// Users flagged for the homepage, in configured order.
pub fn pinned_users(users: &[ShowcaseUser]) -> impl Iterator<Item = &ShowcaseUser> {
    users.iter().filter(|user| user.pinned)
}

/// The "who's using this" section.
///
/// Returns `None` when no users are configured at all. A configured list with
/// nothing pinned still renders the header and the link to the full users
/// page, just with no logos.
pub fn showcase(config: &SiteConfig, language: &str) -> Option<Markup> {
    let users = config.users();
    if users.is_empty() {
        return None;
    }
    let more_users = config.urls().page_url("users.html", language);

    Some(html! {
        div.productShowcaseSection.paddingBottom {
            h2 { "Who's Using This?" }
            p { "This project is used by all these people" }
            div.logos {
                @for user in pinned_users(users) {
                    a href=(user.info_link) {
                        img src=(user.image) title=(user.caption);
                    }
                }
            }
            div.more-users {
                a.button href=(more_users) { "More " (config.title) " Users" }
            }
        }
    })
}
