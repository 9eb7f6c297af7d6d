//! Font Awesome icon vocabulary.
//!
//! Icons are a closed set: content files name them in `SCREAMING_SNAKE_CASE`
//! (`icon = "GITHUB"`) and an unknown name fails deserialization, so every
//! `Icon` value that reaches a renderer has a class string.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Icon {
    #[default]
    None,
    Pdf,
    Envelope,
    Archive,
    Book,
    Github,
    Zip,
    Code,
    Copy,
    Globe,
    BackArrow,
    GradCap,
    MapMarker,
    File,
    Linkedin,
    News,
    Download,
}

impl Icon {
    /// CSS class string for the `<i>` element that draws this glyph.
    pub fn css_class(self) -> &'static str {
        match self {
            Icon::None => "",
            Icon::Pdf => "fa fa-fw fa-file-pdf-o",
            Icon::Envelope => "fa fa-fw fa-envelope",
            Icon::Archive => "fa fa-fw fa-archive",
            Icon::Book => "fa fa-fw fa-book",
            Icon::Github => "fa fa-fw fa-github",
            Icon::Zip => "fa fa-fw fa-file-archive-o",
            Icon::Code => "fa fa-fw fa-file-code-o",
            Icon::Copy => "fa fa-fw fa-clipboard",
            Icon::Globe => "fa fa-fw fa-globe",
            Icon::BackArrow => "fa fa-fw fa-long-arrow-left",
            Icon::GradCap => "fa fa-fw fa-graduation-cap",
            Icon::MapMarker => "fa fa-fw fa-map-marker",
            Icon::File => "fa fa-fw fa-file",
            Icon::Linkedin => "fa fa-fw fa-linkedin-square",
            Icon::News => "fa fa-fw fa-newspaper-o",
            Icon::Download => "fa-solid fa-chevron-down",
        }
    }
}
