//! Content loading and validation.
//!
//! Reads `content.toml` from the source directory and resolves it into the
//! immutable [`Site`] graph that the renderers consume.
//!
//! ## File Shape
//!
//! ```toml
//! bio = "Short biography, markdown allowed."
//!
//! [about]
//! name = "Your Name"
//! image = "data/images/profile.png"
//! [[about.resources]]
//! icon = "ENVELOPE"
//! name = "you@example.com"
//! path = "mailto:you@example.com"
//!
//! [people.you]
//! name = "Your Name"
//! me = true
//!
//! [people.coauthor]
//! name = "Coauthor"
//! website = "https://coauthor.example"
//!
//! [[publications]]
//! id = "pub1"
//! image = "data/images/thumbnails/box.png"
//! title = "Paper Title"
//! authors = ["you", "coauthor"]
//! venue = "SIGGRAPH 2024"
//! [[publications.joint_authors]]
//! marker = "*"
//! authors = ["you", "coauthor"]
//!
//! [[courses]]
//! name = "Course 1"
//! url = "https://example.edu"
//! role = "Teaching Assistant"
//! details = "Spring 2023"
//!
//! [[projects]]
//! id = "pub1"
//! image = "../../data/images/project.png"
//! abstract = "..."
//! ```
//!
//! Publications refer to people by their key in `[people]`; the loader copies
//! the referenced [`Person`] into each publication. Arrays of tables keep the
//! declared order, which is the order publications and projects render in.
//!
//! ## Validation
//!
//! - Unknown keys and unknown icon names are rejected by the parser
//! - Every author key must exist in `[people]`
//! - Every joint author must also be listed in the publication's `authors`
//! - A course with `semesters` takes the semester shape; any other course
//!   needs `url` and `role`. Errors name the offending course
//! - Publication and project ids are unique single path segments
//!
//! Whether each project has a matching publication is checked by
//! [`crate::generate::resolve_projects`] before anything is written.

use crate::types::{
    AboutMe, Course, Home, JointAuthors, Person, Project, Publication, Resource,
    SemesterCourse, SingleCourse, Site,
};
use serde::Deserialize;
use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Name of the content file inside the source directory.
pub const CONTENT_FILE: &str = "content.toml";

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Content file not found: {0}")]
    NotFound(PathBuf),
    #[error("Publication '{publication}' lists unknown person '{person}'")]
    UnknownPerson { publication: String, person: String },
    #[error("Publication '{publication}' marks '{person}' as a joint author but does not list them as an author")]
    JointAuthorNotListed { publication: String, person: String },
    #[error("Course '{course}': {message}")]
    InvalidCourse { course: String, message: String },
    #[error("Duplicate publication id: {0}")]
    DuplicatePublication(String),
    #[error("Duplicate project id: {0}")]
    DuplicateProject(String),
    #[error("Invalid id '{0}': ids must be a single path segment of letters, digits, '-', '_' or '.'")]
    InvalidId(String),
}

/// `content.toml` as written, before person keys are resolved.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ContentFile {
    about: AboutMe,
    #[serde(default)]
    bio: String,
    #[serde(default)]
    people: BTreeMap<String, Person>,
    #[serde(default)]
    publications: Vec<PublicationEntry>,
    #[serde(default)]
    courses: Vec<toml::Value>,
    #[serde(default)]
    projects: Vec<Project>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct PublicationEntry {
    id: String,
    image: String,
    title: String,
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    authors: Vec<String>,
    #[serde(default)]
    joint_authors: Vec<JointAuthorsEntry>,
    #[serde(default)]
    venue: String,
    #[serde(default)]
    award: Option<String>,
    #[serde(default)]
    resources: Vec<Resource>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct JointAuthorsEntry {
    marker: String,
    authors: Vec<String>,
}

/// Load and resolve `content.toml` from `source_dir`.
pub fn load_content(source_dir: &Path) -> Result<Site, ContentError> {
    let path = source_dir.join(CONTENT_FILE);
    if !path.exists() {
        return Err(ContentError::NotFound(path));
    }
    let text = fs::read_to_string(&path)?;
    parse_content(&text)
}

/// Parse and resolve content from TOML text.
pub fn parse_content(text: &str) -> Result<Site, ContentError> {
    let file: ContentFile = toml::from_str(text)?;
    resolve(file)
}

fn resolve(file: ContentFile) -> Result<Site, ContentError> {
    let mut seen = HashSet::new();
    let mut publications = Vec::with_capacity(file.publications.len());
    for entry in file.publications {
        validate_id(&entry.id)?;
        if !seen.insert(entry.id.clone()) {
            return Err(ContentError::DuplicatePublication(entry.id));
        }
        publications.push(resolve_publication(entry, &file.people)?);
    }

    let mut seen = HashSet::new();
    for project in &file.projects {
        validate_id(&project.id)?;
        if !seen.insert(project.id.as_str()) {
            return Err(ContentError::DuplicateProject(project.id.clone()));
        }
    }

    let courses = file
        .courses
        .into_iter()
        .enumerate()
        .map(|(index, entry)| resolve_course(index, entry))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Site {
        home: Home {
            about: file.about,
            bio: file.bio,
            publications,
            courses,
        },
        projects: file.projects,
    })
}

/// Deserialize one `[[courses]]` entry into the shape its keys select.
///
/// Courses without a string `name` are identified by position (`#1`, `#2`...).
fn resolve_course(index: usize, entry: toml::Value) -> Result<Course, ContentError> {
    let course = entry
        .get("name")
        .and_then(toml::Value::as_str)
        .map_or_else(|| format!("#{}", index + 1), str::to_string);
    let parsed = if entry.get("semesters").is_some() {
        SemesterCourse::deserialize(entry).map(Course::Semesters)
    } else {
        SingleCourse::deserialize(entry).map(Course::Single)
    };
    parsed.map_err(|e| ContentError::InvalidCourse {
        course,
        message: e.to_string(),
    })
}

fn resolve_publication(
    entry: PublicationEntry,
    people: &BTreeMap<String, Person>,
) -> Result<Publication, ContentError> {
    let lookup = |key: &str| -> Result<Person, ContentError> {
        people
            .get(key)
            .cloned()
            .ok_or_else(|| ContentError::UnknownPerson {
                publication: entry.id.clone(),
                person: key.to_string(),
            })
    };

    let authors = entry
        .authors
        .iter()
        .map(|key| lookup(key.as_str()))
        .collect::<Result<Vec<_>, _>>()?;

    let mut joint_authors = Vec::with_capacity(entry.joint_authors.len());
    for group in &entry.joint_authors {
        let mut members = Vec::with_capacity(group.authors.len());
        for key in &group.authors {
            if !entry.authors.contains(key) {
                return Err(ContentError::JointAuthorNotListed {
                    publication: entry.id.clone(),
                    person: key.clone(),
                });
            }
            members.push(lookup(key.as_str())?);
        }
        joint_authors.push(JointAuthors {
            marker: group.marker.clone(),
            authors: members,
        });
    }

    Ok(Publication {
        id: entry.id,
        image: entry.image,
        title: entry.title,
        url: entry.url.filter(|u| !u.is_empty()),
        authors,
        joint_authors,
        venue: entry.venue,
        award: entry.award,
        resources: entry.resources,
    })
}

/// Ids become directory names under `project/`, so they must stay inside it.
fn validate_id(id: &str) -> Result<(), ContentError> {
    let valid = !id.is_empty()
        && id != "."
        && id != ".."
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'));
    if valid {
        Ok(())
    } else {
        Err(ContentError::InvalidId(id.to_string()))
    }
}

/// Returns a starter `content.toml` with placeholder content.
///
/// Used by the `gen-content` CLI command.
pub fn stock_content_toml() -> &'static str {
    r#"# Scholar Site Content
# ====================
# Everything on the generated site comes from this file.
# Icons: NONE, PDF, ENVELOPE, ARCHIVE, BOOK, GITHUB, ZIP, CODE, COPY, GLOBE,
#        BACK_ARROW, GRAD_CAP, MAP_MARKER, FILE, LINKEDIN, NEWS, DOWNLOAD

bio = "Add your bio here."

# ---------------------------------------------------------------------------
# Profile header
# ---------------------------------------------------------------------------
[about]
name = "Your Name"
image = "data/images/profile.png"

[[about.resources]]
icon = "MAP_MARKER"
name = "Carnegie Mellon University"
path = "https://www.cs.cmu.edu"

[[about.resources]]
icon = "ENVELOPE"
name = "your-email@gmail.com"
path = "mailto:your-email@gmail.com"

[[about.resources]]
icon = "GITHUB"
name = "Github"
path = "https://github.com"

[[about.resources]]
icon = "GRAD_CAP"
name = "Google Scholar"
path = "https://scholar.google.com"

[[about.resources]]
icon = "FILE"
name = "CV"
path = "data/documents/cv.pdf"

# ---------------------------------------------------------------------------
# People, referenced by key from publications
# ---------------------------------------------------------------------------
[people.your-name]
name = "Your Name"
me = true

[people.coauthor-name]
name = "Coauthor Name"

[people.coauthor-name-other]
name = "Coauthor Other"

# ---------------------------------------------------------------------------
# Publications, listed on the home page in this order
# ---------------------------------------------------------------------------
[[publications]]
id = "pub1"
image = "data/images/thumbnails/box.png"
title = "Your Project Name 1"
authors = ["your-name", "coauthor-name", "coauthor-name-other"]
venue = "ACM Transactions on Graphics (SIGGRAPH), 2024"

[[publications]]
id = "pub2"
image = "data/images/thumbnails/glass.png"
title = "Your Project Name 2"
authors = ["your-name", "coauthor-name"]
venue = "ACM Transactions on Graphics (SIGGRAPH), 2023"

[[publications.joint_authors]]
marker = "*"
authors = ["your-name", "coauthor-name"]

# ---------------------------------------------------------------------------
# Teaching
# ---------------------------------------------------------------------------
[[courses]]
image = "data/images/thumbnails/class.png"
name = "Course 1"
url = "https://www.cmu.edu"
role = "Teaching Assistant"
details = "CMU, Spring 2023, Fall 2024"

[[courses]]
image = "data/images/thumbnails/class.png"
name = "Course 2"

[[courses.semesters]]
icon = "GRAD_CAP"
name = "Spring 2021"
path = "https://www.cmu.edu"

# ---------------------------------------------------------------------------
# Project pages, written to project/<id>/index.html
# ---------------------------------------------------------------------------
[[projects]]
id = "pub1"
image = "../../data/images/project.png"
image_caption = "placeholder caption"
abstract = "placeholder abstract"
acknowledgements = "This work was generously supported by XYZ."
citation = '''
@article{Author:PAPER:2024,
  title={Placeholder Title},
  journal={ACM Transactions on Graphics},
  year={2024}
}'''

[[projects.videos]]
name = "presentation slides"
id = "tjYVcOJONdI"

[[projects.resources.publication]]
icon = "PDF"
name = "Paper"
path = "../../data/papers/pub1.pdf"

[[projects.resources.publication]]
icon = "ARCHIVE"
name = "ArXiv Version"
path = "https://arxiv.org"

[[projects.resources.code]]
icon = "GITHUB"
name = "Github project with full source code"
path = "https://github.com"
"#
}
