//! Typed props shared by the page blocks and the layout components.

/// One promotional panel in a grid: a title, a markdown body and an image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentBlock {
    pub title: String,
    /// Markdown body. May be empty.
    pub content: String,
    /// Image URL, already resolved against the base URL.
    pub image: String,
    pub image_align: ImageAlign,
}

/// Where a block's image sits relative to its text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageAlign {
    Left,
    Right,
    Top,
}

impl ImageAlign {
    /// Images on the left or top render before the text, others after it.
    pub fn leads(self) -> bool {
        matches!(self, ImageAlign::Left | ImageAlign::Top)
    }

    pub fn css_class(self) -> &'static str {
        match self {
            ImageAlign::Left => "imageAlignSide imageAlignLeft",
            ImageAlign::Right => "imageAlignSide imageAlignRight",
            ImageAlign::Top => "imageAlignTop",
        }
    }
}

/// Column layout of a grid block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridLayout {
    OneColumn,
    FourColumn,
}

impl GridLayout {
    pub fn css_class(self) -> Option<&'static str> {
        match self {
            GridLayout::OneColumn => None,
            GridLayout::FourColumn => Some("fourByGridBlock"),
        }
    }
}

/// Horizontal alignment of the text inside a grid block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
}

impl TextAlign {
    pub fn css_class(self) -> Option<&'static str> {
        match self {
            TextAlign::Left => None,
            TextAlign::Center => Some("alignCenter"),
        }
    }
}

/// Background band behind a container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Background {
    Light,
    Dark,
}

impl Background {
    pub fn css_class(self) -> &'static str {
        match self {
            Background::Light => "lightBackground",
            Background::Dark => "darkBackground",
        }
    }
}

/// Sides of a container that receive padding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Padding {
    Top,
    Bottom,
}

impl Padding {
    pub fn css_class(self) -> &'static str {
        match self {
            Padding::Top => "paddingTop",
            Padding::Bottom => "paddingBottom",
        }
    }
}
