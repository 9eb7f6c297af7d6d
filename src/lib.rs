//! # Scholar Site
//!
//! A minimal static site generator for academic homepages. One content file
//! describes the person, their publications, teaching, and per-project pages;
//! the generator turns it into plain HTML.
//!
//! # Pipeline
//!
//! ```text
//! content.toml  →  Site           (parse, resolve people, validate)
//! Site          →  Markup         (fragment renderers, page composers)
//! Markup        →  docs/          (index.html + project/<id>/index.html)
//! ```
//!
//! Data flows one way. The [`types::Site`] graph is built once and only read
//! afterwards, so rendering is a pure function of the content and the config:
//! the same inputs always produce byte-identical pages.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`content`] | Loads `content.toml`, resolves author keys, validates ids and joint authors |
//! | [`types`] | Domain model: `Person`, `Publication`, `Course`, `Project`, `Site` |
//! | [`icons`] | Closed Font Awesome icon vocabulary |
//! | [`render`] | Fragment renderers: author lists, resource lists, sections, videos, citations |
//! | [`generate`] | Page composers and the site driver that writes the output tree |
//! | [`config`] | `config.toml` loading with stock defaults, validation |
//! | [`output`] | CLI output formatting for loaded content and generated pages |
//!
//! # Design Decisions
//!
//! ## Maud Over Template Engines
//!
//! HTML is generated with [Maud](https://maud.lambda.xyz/). Every interpolated
//! field is escaped, so a title containing `<` or an author name containing `&`
//! cannot break the markup. Markdown prose (bio, abstract, acknowledgements)
//! may use markdown links and emphasis, but raw HTML in it is escaped too.
//!
//! ## Content By Reference
//!
//! Publications name their authors by key (`authors = ["you", "coauthor"]`).
//! The loader copies each referenced person into the publication, so the
//! renderers never look anything up and a typo in a key is a load error rather
//! than a missing name on the page.
//!
//! ## Fixed Layout
//!
//! The home page lives at the output root and links `assets/`; project pages
//! live at `project/<id>/` and link `../../assets/`. The `assets/` directory
//! is the site author's: the generator only references it.

pub mod config;
pub mod content;
pub mod generate;
pub mod icons;
pub mod output;
pub mod render;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
