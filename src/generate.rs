//! HTML site generation.
//!
//! Composes fragments from [`crate::render`] into full documents and writes
//! them to the output directory.
//!
//! ## Generated Pages
//!
//! - **Home page** (`/index.html`): profile header, bio, publication list,
//!   contribution footnote, teaching list
//! - **Project pages** (`/project/{id}/index.html`): one per `[[projects]]`
//!   entry, titled after the publication with the same id
//!
//! ## Output Structure
//!
//! ```text
//! docs/
//! ├── index.html                 # Home page, links assets/...
//! ├── assets/                    # Maintained by the site author, not generated
//! └── project/
//!     ├── pub1/
//!     │   └── index.html         # Project page, links ../../assets/...
//!     └── pub2/
//!         └── index.html
//! ```
//!
//! ## Ordering and Failure
//!
//! Every project is matched to its publication before anything is written, so
//! a project without a publication aborts the build with no files touched.
//! Project pages render in parallel with rayon but are collected and written in
//! registry order. The first write error aborts the build.

use crate::config::SiteConfig;
use crate::icons::Icon;
use crate::render::{
    render_citation, render_icon, render_markdown, render_publication_authors,
    render_resource_link, render_resource_list, render_section, render_videos,
};
use crate::types::{Course, Project, Publication, Site};
use maud::{DOCTYPE, Markup, html};
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Stylesheets linked from every page, in order, relative to `assets/`.
pub const STYLESHEETS: [&str; 3] = [
    "font-awesome/css/font-awesome.css",
    "bootstrap.min.css",
    "style.css",
];

const INDEX_FILE: &str = "index.html";
const PROJECT_DIR: &str = "project";

/// Asset prefix for the home page, which sits at the output root.
const ROOT_ASSETS: &str = "assets/";
/// Asset prefix for project pages, two directories below the root.
const PROJECT_ASSETS: &str = "../../assets/";
/// Project pages link back to the home page two directories up.
const HOME_LINK: &str = "../../index.html";

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Configuration error: project '{0}' has no publication with the same id")]
    MissingPublication(String),
}

/// What a build wrote, in write order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateReport {
    pub pages: Vec<GeneratedPage>,
}

/// One written page. `path` is relative to the output directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPage {
    pub title: String,
    pub path: PathBuf,
}

/// Path of a project page relative to the output root: `project/<id>/index.html`.
pub fn project_page_path(id: &str) -> PathBuf {
    Path::new(PROJECT_DIR).join(id).join(INDEX_FILE)
}

/// Pair every project with the publication sharing its id.
///
/// Fails on the first project whose id has no publication.
pub fn resolve_projects(site: &Site) -> Result<Vec<(&Project, &Publication)>, GenerateError> {
    site.projects
        .iter()
        .map(|project| {
            site.publication(&project.id)
                .map(|publication| (project, publication))
                .ok_or_else(|| GenerateError::MissingPublication(project.id.clone()))
        })
        .collect()
}

/// Render the whole site into `output_dir`.
pub fn generate(
    site: &Site,
    config: &SiteConfig,
    output_dir: &Path,
) -> Result<GenerateReport, GenerateError> {
    let projects = resolve_projects(site)?;

    fs::create_dir_all(output_dir)?;
    let mut pages = Vec::with_capacity(projects.len() + 1);

    let home_html = render_home(site, config);
    fs::write(output_dir.join(INDEX_FILE), home_html.into_string())?;
    pages.push(GeneratedPage {
        title: site.home.about.name.clone(),
        path: PathBuf::from(INDEX_FILE),
    });

    let rendered: Vec<(&Publication, PathBuf, String)> = projects
        .par_iter()
        .map(|(project, publication)| {
            let html = render_project_page(project, publication, config);
            (*publication, project_page_path(&project.id), html.into_string())
        })
        .collect();

    for (publication, relative, html) in rendered {
        let path = output_dir.join(&relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, html)?;
        pages.push(GeneratedPage {
            title: publication.title.clone(),
            path: relative,
        });
    }

    Ok(GenerateReport { pages })
}

// ============================================================================
// HTML Components
// ============================================================================

/// Renders the base HTML document with the shared stylesheet links.
///
/// The document title is `{page} - {suffix}`.
fn base_document(page: &str, suffix: &str, asset_prefix: &str, content: Markup) -> Markup {
    let title = format!("{page} - {suffix}");
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                @for stylesheet in STYLESHEETS {
                    link rel="stylesheet" type="text/css" href={ (asset_prefix) (stylesheet) };
                }
            }
            body {
                (content)
            }
        }
    }
}

/// Where the home page's publication title links to.
///
/// An explicit `url` wins; otherwise the project page, if the site has one.
fn publication_href(site: &Site, publication: &Publication) -> Option<String> {
    match &publication.url {
        Some(url) => Some(url.clone()),
        None => site.project(&publication.id).map(|_| {
            format!("{PROJECT_DIR}/{}/{INDEX_FILE}", publication.id)
        }),
    }
}

fn profile_header(site: &Site) -> Markup {
    let about = &site.home.about;
    html! {
        div class="d-flex pl-5 pt-5 justify-content-start" {
            div {
                img id="profile-pic" class="float-left" src=(about.image) alt=(about.name);
            }
            div.col {
                div class="d-block profile-row" {
                    h1 { (about.name) }
                }
                @for resource in &about.resources {
                    div class="d-block profile-row" {
                        (render_resource_link(resource))
                    }
                }
            }
        }
    }
}

fn publication_entry(site: &Site, publication: &Publication) -> Markup {
    html! {
        div class="d-flex flex-row pb-4 align-items-center" {
            img class="thumbnail img-responsive" src=(publication.image) alt=(publication.title);
            div class="d-flex flex-column pl-4" {
                span {
                    @if let Some(href) = publication_href(site, publication) {
                        a.item-title href=(href) { (publication.title) }
                    } @else {
                        span.item-title { (publication.title) }
                    }
                }
                div { (render_publication_authors(publication)) }
                div { (publication.venue) }
                @if let Some(award) = publication.award_text() {
                    div.paper-award { (award) }
                }
                @if !publication.resources.is_empty() {
                    div.paper-resources {
                        @for resource in &publication.resources {
                            span class="pr-3" { (render_resource_link(resource)) }
                        }
                    }
                }
            }
        }
    }
}

fn course_entry(course: &Course) -> Markup {
    html! {
        div class="d-flex flex-row pb-4 align-items-center" {
            @if let Some(image) = course.image() {
                img class="thumbnail img-responsive" src=(image) alt=(course.name());
            }
            div class="d-flex flex-column pl-4" {
                @match course {
                    Course::Single(c) => {
                        span { a.item-title href=(c.url) { (c.name) } }
                        div { b { (c.role) } }
                        @if !c.details.is_empty() {
                            div { (c.details) }
                        }
                    }
                    Course::Semesters(c) => {
                        span.item-title { (c.name) }
                        div {
                            @for semester in &c.semesters {
                                span class="pr-3" { (render_resource_link(semester)) }
                            }
                        }
                    }
                }
            }
        }
    }
}

// ============================================================================
// Page Renderers
// ============================================================================

/// Renders the home page.
pub fn render_home(site: &Site, config: &SiteConfig) -> Markup {
    let home = &site.home;
    let content = html! {
        div.container {
            (profile_header(site))
        }
        div.container {
            div class="d-flex flex-column pl-5 pt-3" {
                @if !home.bio.trim().is_empty() {
                    div.bio { (render_markdown(&home.bio)) }
                }
                div {
                    h4 { "Publications" }
                    hr;
                    @for publication in &home.publications {
                        (publication_entry(site, publication))
                    }
                    div class="pb-5" { (config.home.contribution_note) }
                }
                div {
                    h4 { "Teaching" }
                    hr;
                    @for course in &home.courses {
                        (course_entry(course))
                    }
                }
            }
            @if let Some(source_url) = &config.home.source_url {
                br;
                div.text-center {
                    h6.font-weight-light {
                        "Source code for this website is "
                        a href=(source_url) { "available on Github" }
                    }
                }
            }
        }
    };

    base_document(&home.about.name, &config.site.title, ROOT_ASSETS, content)
}

fn abstract_section(project: &Project) -> Option<Markup> {
    project
        .abstract_text()
        .map(|text| render_section("Abstract", render_markdown(text)))
}

fn resources_section(project: &Project) -> Option<Markup> {
    let resources = &project.resources;
    if resources.is_empty() {
        return None;
    }
    Some(render_section(
        "Resources",
        html! {
            @if !resources.publication.is_empty() {
                (render_resource_list("Publication", &resources.publication))
            }
            @if !resources.code.is_empty() {
                (render_resource_list("Code", &resources.code))
            }
        },
    ))
}

fn videos_section(project: &Project) -> Option<Markup> {
    render_videos(&project.videos).map(|videos| render_section("Videos", videos))
}

fn citation_section(project: &Project) -> Option<Markup> {
    project
        .citation()
        .and_then(render_citation)
        .map(|citation| render_section("Cite", citation))
}

fn acknowledgements_section(project: &Project) -> Option<Markup> {
    project
        .acknowledgements()
        .map(|text| render_section("Acknowledgements", render_markdown(text)))
}

/// Renders a project page for `project`, titled after `publication`.
pub fn render_project_page(
    project: &Project,
    publication: &Publication,
    config: &SiteConfig,
) -> Markup {
    let sections = [
        abstract_section(project),
        resources_section(project),
        videos_section(project),
        citation_section(project),
        acknowledgements_section(project),
    ];
    let teaser_alt = format!("{}-teaser", publication.title);

    let content = html! {
        div.container {
            nav class="navbar navbar-expand-lg" {
                div.container-fluid {
                    ul class="navbar-nav ml-auto" {
                        li.nav-item {
                            a href=(HOME_LINK) {
                                (render_icon(Icon::BackArrow))
                                " home"
                            }
                        }
                    }
                }
            }
            h1 class="card-title font-weight-normal" { (publication.title) }
            h4.font-weight-light { (render_publication_authors(publication)) }
            img class="card-img-top mt-3" src=(project.image) alt=(teaser_alt);
            @if !project.image_caption.is_empty() {
                p class="font-italic mt-2" { (project.image_caption) }
            }
            @for section in sections.iter().flatten() {
                (section)
            }
        }
    };

    base_document(
        &publication.title,
        &config.site.title,
        PROJECT_ASSETS,
        content,
    )
}

// ============================================================================
// Tests
// ============================================================================
