//! Domain model shared by content loading, rendering, and the site driver.
//!
//! Every entity is built once by [`crate::content`] and never mutated. Each
//! value owns its collections outright, so two publications never share a
//! default author list or resource list.

use crate::icons::Icon;
use serde::{Deserialize, Serialize};

const YOUTUBE_EMBED_PREFIX: &str = "https://www.youtube.com/embed/";

/// An author or collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Person {
    pub name: String,
    /// Homepage. Absent and empty both mean "no link".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    /// The site owner; rendered in bold wherever they appear in an author list.
    #[serde(default, rename = "me")]
    pub is_self: bool,
}

impl Person {
    /// The website to link to, if any.
    pub fn website_url(&self) -> Option<&str> {
        self.website.as_deref().filter(|w| !w.trim().is_empty())
    }
}

/// A labelled link with an icon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Resource {
    #[serde(default)]
    pub icon: Icon,
    pub path: String,
    pub name: String,
}

/// Authors sharing a contribution marker, e.g. equal contribution `*`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JointAuthors {
    pub marker: String,
    pub authors: Vec<Person>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Publication {
    /// Page id. Also the directory name of the project page.
    pub id: String,
    pub image: String,
    pub title: String,
    /// Explicit link target for the title on the home page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Authors in citation order.
    pub authors: Vec<Person>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub joint_authors: Vec<JointAuthors>,
    pub venue: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub award: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub resources: Vec<Resource>,
}

impl Publication {
    /// Contribution marker appended to `author`'s name.
    ///
    /// When a person belongs to several groups the last group wins.
    pub fn author_suffix(&self, author: &Person) -> &str {
        self.joint_authors
            .iter()
            .rev()
            .find(|group| group.authors.contains(author))
            .map(|group| group.marker.as_str())
            .unwrap_or("")
    }

    pub fn award_text(&self) -> Option<&str> {
        non_blank(&self.award)
    }
}

/// A course taught with a single role/details line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SingleCourse {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub url: String,
    pub role: String,
    #[serde(default)]
    pub details: String,
}

/// A course listed as one link per semester offered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SemesterCourse {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub semesters: Vec<Resource>,
}

/// A teaching entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Course {
    Semesters(SemesterCourse),
    Single(SingleCourse),
}

impl Course {
    pub fn name(&self) -> &str {
        match self {
            Course::Semesters(c) => &c.name,
            Course::Single(c) => &c.name,
        }
    }

    pub fn image(&self) -> Option<&str> {
        let image = match self {
            Course::Semesters(c) => &c.image,
            Course::Single(c) => &c.image,
        };
        non_blank(image)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Video {
    pub name: String,
    /// YouTube video id.
    pub id: String,
}

impl Video {
    pub fn embed_url(&self) -> String {
        format!("{YOUTUBE_EMBED_PREFIX}{}", self.id)
    }
}

/// Profile header on the home page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AboutMe {
    pub name: String,
    pub image: String,
    #[serde(default)]
    pub resources: Vec<Resource>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProjectResources {
    pub publication: Vec<Resource>,
    pub code: Vec<Resource>,
}

impl ProjectResources {
    pub fn is_empty(&self) -> bool {
        self.publication.is_empty() && self.code.is_empty()
    }
}

/// Detail page for one publication.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Project {
    /// Id of the publication this page belongs to.
    pub id: String,
    pub image: String,
    #[serde(default)]
    pub image_caption: String,
    #[serde(default, rename = "abstract", skip_serializing_if = "Option::is_none")]
    pub abstract_text: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub videos: Vec<Video>,
    #[serde(default)]
    pub resources: ProjectResources,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub acknowledgements: Option<String>,
    /// Pre-formatted citation (usually BibTeX), shown verbatim.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub citation: Option<String>,
}

impl Project {
    pub fn abstract_text(&self) -> Option<&str> {
        non_blank(&self.abstract_text)
    }

    pub fn acknowledgements(&self) -> Option<&str> {
        non_blank(&self.acknowledgements)
    }

    pub fn citation(&self) -> Option<&str> {
        non_blank(&self.citation)
    }
}

/// Content of the home page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Home {
    pub about: AboutMe,
    pub bio: String,
    /// Publications in registry order.
    pub publications: Vec<Publication>,
    pub courses: Vec<Course>,
}

/// The whole content graph: home page plus the project registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Site {
    pub home: Home,
    /// Project pages in registry order.
    pub projects: Vec<Project>,
}

impl Site {
    pub fn publication(&self, id: &str) -> Option<&Publication> {
        self.home.publications.iter().find(|p| p.id == id)
    }

    pub fn project(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}
