//! CLI output formatting.
//!
//! Output is information-first: each entity leads with its positional index
//! and title, with details on indented context lines.
//!
//! ## Content (`check` and `build`)
//!
//! ```text
//! Publications
//! 001 Volumetric Light Transport (3 authors)
//!     Venue: ACM Transactions on Graphics (SIGGRAPH), 2024
//!     Award: Best Paper Award
//! 002 Glass Rendering (2 authors)
//!     Venue: ACM Transactions on Graphics (SIGGRAPH), 2023
//!
//! Courses
//! 001 Computer Graphics
//!
//! Projects
//! 001 pub1: abstract, resources, videos, citation, acknowledgements
//! 002 pub2
//! ```
//!
//! ## Generate
//!
//! ```text
//! Bailey Researcher → index.html
//! 001 Volumetric Light Transport → project/pub1/index.html
//!
//! Generated 1 home page, 1 project page
//! ```
//!
//! Each `format_*` function returns `Vec<String>` and does no I/O; the
//! matching `print_*` wrapper writes the lines to stdout.

use crate::generate::GenerateReport;
use crate::types::{Project, Site};

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

fn plural(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{count} {singular}")
    } else {
        format!("{count} {plural}")
    }
}

/// Names of the optional sections a project page will render.
fn project_sections(project: &Project) -> Vec<&'static str> {
    let mut sections = Vec::new();
    if project.abstract_text().is_some() {
        sections.push("abstract");
    }
    if !project.resources.is_empty() {
        sections.push("resources");
    }
    if !project.videos.is_empty() {
        sections.push("videos");
    }
    if project.citation().is_some() {
        sections.push("citation");
    }
    if project.acknowledgements().is_some() {
        sections.push("acknowledgements");
    }
    sections
}

// ============================================================================
// Content summary
// ============================================================================

/// Format the loaded content as an inventory.
pub fn format_content_output(site: &Site) -> Vec<String> {
    let mut lines = Vec::new();
    let home = &site.home;

    lines.push("Publications".to_string());
    for (i, publication) in home.publications.iter().enumerate() {
        lines.push(format!(
            "{} {} ({})",
            format_index(i + 1),
            publication.title,
            plural(publication.authors.len(), "author", "authors")
        ));
        if !publication.venue.is_empty() {
            lines.push(format!("{}Venue: {}", indent(1), publication.venue));
        }
        if let Some(award) = publication.award_text() {
            lines.push(format!("{}Award: {}", indent(1), award));
        }
    }

    if !home.courses.is_empty() {
        lines.push(String::new());
        lines.push("Courses".to_string());
        for (i, course) in home.courses.iter().enumerate() {
            lines.push(format!("{} {}", format_index(i + 1), course.name()));
        }
    }

    if !site.projects.is_empty() {
        lines.push(String::new());
        lines.push("Projects".to_string());
        for (i, project) in site.projects.iter().enumerate() {
            let sections = project_sections(project);
            if sections.is_empty() {
                lines.push(format!("{} {}", format_index(i + 1), project.id));
            } else {
                lines.push(format!(
                    "{} {}: {}",
                    format_index(i + 1),
                    project.id,
                    sections.join(", ")
                ));
            }
        }
    }

    lines
}

/// Print the content inventory to stdout.
pub fn print_content_output(site: &Site) {
    for line in format_content_output(site) {
        println!("{}", line);
    }
}

// ============================================================================
// Generate output
// ============================================================================

/// Format the pages written by a build, in write order.
pub fn format_generate_output(report: &GenerateReport) -> Vec<String> {
    let mut lines = Vec::new();
    let mut project_count = 0;

    for (i, page) in report.pages.iter().enumerate() {
        if i == 0 {
            lines.push(format!("{} \u{2192} {}", page.title, page.path.display()));
        } else {
            project_count += 1;
            lines.push(format!(
                "{} {} \u{2192} {}",
                format_index(project_count),
                page.title,
                page.path.display()
            ));
        }
    }

    let home_count = report.pages.len().min(1);
    lines.push(String::new());
    lines.push(format!(
        "Generated {}, {}",
        plural(home_count, "home page", "home pages"),
        plural(project_count, "project page", "project pages")
    ));
    lines
}

/// Print generate output to stdout.
pub fn print_generate_output(report: &GenerateReport) {
    for line in format_generate_output(report) {
        println!("{}", line);
    }
}
