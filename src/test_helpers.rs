//! Shared test utilities for the scholar-site test suite.
//!
//! Provides the fixture site plus small builders for the domain types, so
//! renderer tests can describe exactly the authors and resources they need.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let mut publication = publication("pub1", vec![me("Ada"), person("Bob")]);
//! publication.joint_authors = vec![joint("*", vec![me("Ada"), person("Bob")])];
//! ```

use std::path::Path;
use tempfile::TempDir;

use crate::content::parse_content;
use crate::icons::Icon;
use crate::types::{JointAuthors, Person, Project, ProjectResources, Publication, Resource, Site};

const FIXTURE_CONTENT: &str = include_str!("../fixtures/content/content.toml");

// =========================================================================
// Fixture setup
// =========================================================================

/// Copy `fixtures/content/` to a temp directory and return it.
pub fn setup_fixtures() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let fixtures = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/content");
    for entry in std::fs::read_dir(&fixtures).unwrap() {
        let entry = entry.unwrap();
        std::fs::copy(entry.path(), tmp.path().join(entry.file_name())).unwrap();
    }
    tmp
}

/// The fixture site: three publications, two courses, two project pages.
pub fn sample_site() -> Site {
    parse_content(FIXTURE_CONTENT).unwrap_or_else(|e| panic!("fixture content is invalid: {e}"))
}

// =========================================================================
// Builders
// =========================================================================

pub fn person(name: &str) -> Person {
    Person {
        name: name.to_string(),
        website: None,
        is_self: false,
    }
}

/// The site owner.
pub fn me(name: &str) -> Person {
    Person {
        is_self: true,
        ..person(name)
    }
}

pub fn with_website(person: Person, website: &str) -> Person {
    Person {
        website: Some(website.to_string()),
        ..person
    }
}

pub fn joint(marker: &str, authors: Vec<Person>) -> JointAuthors {
    JointAuthors {
        marker: marker.to_string(),
        authors,
    }
}

pub fn resource(icon: Icon, name: &str, path: &str) -> Resource {
    Resource {
        icon,
        path: path.to_string(),
        name: name.to_string(),
    }
}

/// A publication titled `Paper <id>` with no markers, award, or resources.
pub fn publication(id: &str, authors: Vec<Person>) -> Publication {
    Publication {
        id: id.to_string(),
        image: format!("data/images/{id}.png"),
        title: format!("Paper {id}"),
        url: None,
        authors,
        joint_authors: Vec::new(),
        venue: "Venue".to_string(),
        award: None,
        resources: Vec::new(),
    }
}

/// A project page with nothing but an image.
pub fn project(id: &str) -> Project {
    Project {
        id: id.to_string(),
        image: format!("../../data/images/{id}.png"),
        image_caption: String::new(),
        abstract_text: None,
        videos: Vec::new(),
        resources: ProjectResources::default(),
        acknowledgements: None,
        citation: None,
    }
}
