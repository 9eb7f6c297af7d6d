//! HTML fragment renderers.
//!
//! Each function maps one piece of the content model to a [`Markup`] value.
//! Page composers in [`crate::generate`] assemble these into documents.
//! All interpolated field values go through maud's escaping; the only
//! pre-escaped HTML comes from [`render_markdown`] and the embedded copy script.
//!
//! Optional blocks (sections, video lists, citations) return `Option<Markup>`
//! so callers can drop them without emitting an empty heading.

use crate::icons::Icon;
use crate::types::{Person, Publication, Resource, Video};
use maud::{Markup, PreEscaped, html};
use pulldown_cmark::{Event, Parser, html as md_html};

const COPY_JS: &str = include_str!("../static/copy.js");

/// Element id of the `<pre>` holding a project's citation.
pub const CITATION_ELEMENT_ID: &str = "citation-to-copy";

/// Separator placed after the author at `index` in a list of `count` authors.
///
/// Produces "A, B and C": commas between authors, " and " before the last.
pub fn author_separator(index: usize, count: usize) -> &'static str {
    if count >= 2 && index == count - 2 {
        " and "
    } else if index + 1 < count {
        ", "
    } else {
        ""
    }
}

fn author_name(author: &Person, suffix: &str) -> Markup {
    let name = format!("{}{}", author.name, suffix);
    if author.is_self {
        html! { b { (name) } }
    } else if let Some(website) = author.website_url() {
        html! { a href=(website) { (name) } }
    } else {
        html! { (name) }
    }
}

/// Render an author list.
///
/// `suffix_of` returns the contribution marker for an author (empty for none).
/// The site owner is bold even when they have a website.
pub fn render_author_list<'a>(
    authors: &[Person],
    suffix_of: impl Fn(&Person) -> &'a str,
) -> Markup {
    let count = authors.len();
    html! {
        @for (i, author) in authors.iter().enumerate() {
            (author_name(author, suffix_of(author)))
            (author_separator(i, count))
        }
    }
}

/// Author list of a publication, with its joint-author markers.
pub fn render_publication_authors(publication: &Publication) -> Markup {
    render_author_list(&publication.authors, |author| {
        publication.author_suffix(author)
    })
}

/// Icon glyph. `Icon::None` renders nothing.
pub fn render_icon(icon: Icon) -> Markup {
    html! {
        @if icon != Icon::None {
            i class=(icon.css_class()) {}
        }
    }
}

/// Icon followed by a link, on one line.
pub fn render_resource_link(resource: &Resource) -> Markup {
    html! {
        (render_icon(resource.icon))
        a class="pl-2" href=(resource.path) { (resource.name) }
    }
}

/// Labelled list of resources, one per line.
///
/// Callers skip empty lists entirely rather than calling this.
pub fn render_resource_list(label: &str, resources: &[Resource]) -> Markup {
    html! {
        div {
            h4 class="mt-4 font-weight-light" { (label) }
            @for resource in resources {
                div class="container mt-1 mb-1" {
                    (render_resource_link(resource))
                }
            }
        }
    }
}

/// Titled, divider-separated block.
pub fn render_section(title: &str, content: Markup) -> Markup {
    html! {
        div {
            h2 class="mt-4 font-weight-normal" { (title) }
            hr;
            (content)
        }
    }
}

/// Embedded players for each video, or `None` when there are no videos.
pub fn render_videos(videos: &[Video]) -> Option<Markup> {
    if videos.is_empty() {
        return None;
    }
    Some(html! {
        div.container {
            @for video in videos {
                div.img-container {
                    h4.font-weight-light { (video.name) }
                    iframe class="embed-responsive-item project-video"
                        src=(video.embed_url())
                        title=(video.name)
                        allowfullscreen {}
                }
            }
        }
    })
}

/// Citation text with a copy-to-clipboard button, or `None` when blank.
pub fn render_citation(citation: &str) -> Option<Markup> {
    if citation.trim().is_empty() {
        return None;
    }
    let onclick = format!("copyCitation('{CITATION_ELEMENT_ID}')");
    Some(html! {
        script { (PreEscaped(COPY_JS)) }
        div.code-background {
            button.code-copy-btn type="button" title="Copy citation" onclick=(onclick) {
                (render_icon(Icon::Copy))
            }
            pre id=(CITATION_ELEMENT_ID) { (citation) }
        }
    })
}

/// Convert markdown prose (bio, abstract, acknowledgements) to HTML.
///
/// Raw HTML in the source is emitted as escaped text; only markdown syntax
/// produces tags.
pub fn render_markdown(text: &str) -> Markup {
    let parser = Parser::new(text).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        other => other,
    });
    let mut body_html = String::new();
    md_html::push_html(&mut body_html, parser);
    PreEscaped(body_html)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::*;

    fn names(authors: &[Person]) -> String {
        render_author_list(authors, |_| "").into_string()
    }

    // =========================================================================
    // Author list
    // =========================================================================

    #[test]
    fn zero_authors_is_empty() {
        assert_eq!(names(&[]), "");
    }

    #[test]
    fn single_author_has_no_separator() {
        assert_eq!(names(&[person("Ada")]), "Ada");
        assert_eq!(names(&[me("Ada")]), "<b>Ada</b>");
        assert_eq!(
            names(&[with_website(person("Ada"), "https://ada.example")]),
            r#"<a href="https://ada.example">Ada</a>"#
        );
    }

    #[test]
    fn two_authors_joined_with_and() {
        assert_eq!(names(&[person("A"), person("B")]), "A and B");
    }

    #[test]
    fn many_authors_commas_then_and() {
        let authors = vec![person("A"), person("B"), person("C"), person("D")];
        let html = names(&authors);
        assert_eq!(html, "A, B, C and D");
        assert_eq!(html.matches(", ").count(), 2);
        assert_eq!(html.matches(" and ").count(), 1);
        assert!(!html.ends_with(' '));
    }

    #[test]
    fn separator_positions() {
        assert_eq!(author_separator(0, 1), "");
        assert_eq!(author_separator(0, 2), " and ");
        assert_eq!(author_separator(1, 2), "");
        assert_eq!(author_separator(0, 3), ", ");
        assert_eq!(author_separator(1, 3), " and ");
        assert_eq!(author_separator(2, 3), "");
    }

    #[test]
    fn blank_website_renders_plain_name() {
        assert_eq!(names(&[with_website(person("Ada"), "  ")]), "Ada");
    }

    #[test]
    fn self_is_bold_even_with_website() {
        let ada = with_website(me("Ada"), "https://ada.example");
        let html = names(&[ada]);
        assert_eq!(html, "<b>Ada</b>");
        assert!(!html.contains("href"));
    }

    #[test]
    fn suffix_is_inside_formatting() {
        let ada = me("Ada");
        let bob = with_website(person("Bob"), "https://bob.example");
        let mut publication = publication("p", vec![ada.clone(), bob.clone()]);
        publication.joint_authors = vec![joint("*", vec![ada, bob])];
        let html = render_publication_authors(&publication).into_string();
        assert_eq!(
            html,
            r#"<b>Ada*</b> and <a href="https://bob.example">Bob*</a>"#
        );
    }

    #[test]
    fn last_marker_group_wins_in_rendering() {
        let a = person("A");
        let b = person("B");
        let mut publication = publication("p", vec![a.clone(), b.clone()]);
        publication.joint_authors = vec![
            joint("*", vec![a.clone()]),
            joint("\u{2020}", vec![a, b]),
        ];
        let html = render_publication_authors(&publication).into_string();
        assert_eq!(html, "A\u{2020} and B\u{2020}");
    }

    #[test]
    fn author_names_are_escaped() {
        let html = names(&[person("<script>alert(1)</script>")]);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    // =========================================================================
    // Resources, sections, videos, citations
    // =========================================================================

    #[test]
    fn resource_list_has_label_icons_and_links() {
        let resources = vec![
            resource(Icon::Pdf, "Paper", "../../data/papers/pub1.pdf"),
            resource(Icon::Github, "Code", "https://github.com/x"),
        ];
        let html = render_resource_list("Publication", &resources).into_string();
        assert!(html.contains("Publication"));
        assert!(html.contains(r#"class="fa fa-fw fa-file-pdf-o""#));
        assert!(html.contains(r#"href="../../data/papers/pub1.pdf""#));
        assert!(html.contains(">Code</a>"));
    }

    #[test]
    fn icon_none_renders_nothing() {
        assert_eq!(render_icon(Icon::None).into_string(), "");
    }

    #[test]
    fn resource_attributes_are_escaped() {
        let r = resource(Icon::None, "x", r#"" onmouseover="alert(1)"#);
        let html = render_resource_link(&r).into_string();
        assert!(html.contains("&quot;"));
        assert!(!html.contains(r#"" onmouseover"#));
    }

    #[test]
    fn section_has_heading_and_divider() {
        let html = render_section("Abstract", html! { p { "text" } }).into_string();
        assert_eq!(
            html,
            r#"<div><h2 class="mt-4 font-weight-normal">Abstract</h2><hr><p>text</p></div>"#
        );
    }

    #[test]
    fn no_videos_no_markup() {
        assert!(render_videos(&[]).is_none());
    }

    #[test]
    fn videos_embed_youtube_ids() {
        let videos = vec![
            Video {
                name: "talk".to_string(),
                id: "abc123".to_string(),
            },
            Video {
                name: "demo".to_string(),
                id: "def456".to_string(),
            },
        ];
        let html = render_videos(&videos).unwrap().into_string();
        assert!(html.contains(r#"src="https://www.youtube.com/embed/abc123""#));
        assert!(html.contains(r#"src="https://www.youtube.com/embed/def456""#));
        assert_eq!(html.matches("<iframe").count(), 2);
    }

    #[test]
    fn blank_citation_is_omitted() {
        assert!(render_citation("").is_none());
        assert!(render_citation("  \n").is_none());
    }

    #[test]
    fn citation_has_copy_button_and_pre() {
        let html = render_citation("@article{x, title={A & B}}")
            .unwrap()
            .into_string();
        assert!(html.contains(r#"<pre id="citation-to-copy">"#));
        assert!(html.contains("copyCitation('citation-to-copy')"));
        assert!(html.contains("function copyCitation"));
        assert!(html.contains("fa-clipboard"));
        assert!(html.contains("A &amp; B"));
    }

    #[test]
    fn markdown_escapes_raw_html() {
        let html =
            render_markdown("We show x<y and <img src=x onerror=alert(1)> results").into_string();
        assert!(!html.contains("<img"));
        assert!(html.contains("&lt;img src=x onerror=alert(1)&gt;"));
        assert!(html.contains("x&lt;y"));
    }

    #[test]
    fn markdown_escapes_html_blocks() {
        let html = render_markdown("<script>alert(1)</script>\n\nSee [site](https://a.example)")
            .into_string();
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains(r#"<a href="https://a.example">site</a>"#));
    }

    #[test]
    fn markdown_renders_paragraphs_and_emphasis() {
        let html = render_markdown("Hello **world**").into_string();
        assert_eq!(html.trim(), "<p>Hello <strong>world</strong></p>");
    }
}
