//! Display-ready view models built from API entities.
//!
//! Components render these directly. Every fallback, label and link target
//! is decided here.

use crate::format::{Synopsis, updated_label};
use crate::models::{Chapter, ChapterRef, ChapterResponse, Novel};
use crate::route::Route;
use crate::sanitize::sanitize_html;

pub const UNKNOWN_CONTRIBUTOR: &str = "Unknown Contributor";
pub const UNKNOWN_AUTHOR: &str = "Unknown Author";
pub const APP_TITLE: &str = "NovelRead";

fn byline(novel: &Novel, fallback: &str) -> String {
    format!("By {}", novel.contributor_name().unwrap_or(fallback))
}

fn document_title(title: &str) -> String {
    if title.is_empty() {
        APP_TITLE.to_string()
    } else {
        format!("{} | {}", title, APP_TITLE)
    }
}

/// A novel as shown in the carousel, the updates grid and the related list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NovelCard {
    pub id: i64,
    pub title: String,
    pub href: String,
    pub thumbnail: String,
    pub byline: String,
    pub description: String,
    pub updated: String,
}

impl NovelCard {
    pub fn from_novel(novel: &Novel) -> Self {
        Self {
            id: novel.id,
            title: novel.title.clone(),
            href: Route::Novel(novel.slug.clone()).url(),
            thumbnail: novel.thumbnail.clone().unwrap_or_default(),
            byline: byline(novel, UNKNOWN_CONTRIBUTOR),
            description: novel.description.clone().unwrap_or_default(),
            updated: updated_label(novel.updated_at.as_deref()),
        }
    }
}

pub fn novel_cards(novels: &[Novel]) -> Vec<NovelCard> {
    novels.iter().map(NovelCard::from_novel).collect()
}

/// Header block of the novel detail page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NovelPage {
    pub title: String,
    pub thumbnail: String,
    pub byline: String,
    pub updated: String,
    pub synopsis: Synopsis,
    pub document_title: String,
}

impl NovelPage {
    pub fn from_novel(novel: &Novel, synopsis_limit: usize) -> Self {
        Self {
            title: novel.title.clone(),
            thumbnail: novel.thumbnail.clone().unwrap_or_default(),
            byline: byline(novel, UNKNOWN_CONTRIBUTOR),
            updated: updated_label(novel.updated_at.as_deref()),
            synopsis: Synopsis::new(novel.description.as_deref().unwrap_or_default(), synopsis_limit),
            document_title: document_title(&novel.title),
        }
    }
}

/// One entry of the chapter list on the novel page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChapterRow {
    pub href: String,
    pub label: String,
    pub title: String,
    pub updated: String,
}

impl ChapterRow {
    pub fn from_chapter(chapter: &Chapter) -> Self {
        Self {
            href: Route::Chapter(chapter.slug.clone()).url(),
            label: format!("Chapter {}", chapter.order),
            title: chapter.title.clone(),
            updated: updated_label(chapter.updated_at.as_deref()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavLink {
    Link { label: &'static str, href: String },
    Placeholder(&'static str),
}

impl NavLink {
    fn new(target: Option<&ChapterRef>, label: &'static str, placeholder: &'static str) -> Self {
        match target {
            Some(target) if !target.slug.is_empty() => NavLink::Link {
                label,
                href: Route::Chapter(target.slug.clone()).url(),
            },
            _ => NavLink::Placeholder(placeholder),
        }
    }

    pub fn prev(target: Option<&ChapterRef>) -> Self {
        Self::new(target, "Previous Chapter", "No previous chapter")
    }

    pub fn next(target: Option<&ChapterRef>) -> Self {
        Self::new(target, "Next Chapter", "No next chapter")
    }
}

/// "About the Novel" card on the reader page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NovelAbout {
    pub title: String,
    pub href: String,
    pub thumbnail: String,
    pub byline: String,
    pub description: String,
    pub updated: String,
}

impl NovelAbout {
    pub fn from_novel(novel: &Novel) -> Self {
        Self {
            title: novel.title.clone(),
            href: Route::Novel(novel.slug.clone()).url(),
            thumbnail: novel.thumbnail.clone().unwrap_or_default(),
            byline: byline(novel, UNKNOWN_AUTHOR),
            description: novel.description.clone().unwrap_or_default(),
            updated: updated_label(novel.updated_at.as_deref()),
        }
    }
}

/// Everything the chapter reader renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChapterView {
    pub heading: String,
    pub title: String,
    pub updated: String,
    pub hero_image: String,
    pub body_html: String,
    pub novel: Option<NovelAbout>,
    pub prev: NavLink,
    pub next: NavLink,
    pub document_title: String,
}

impl ChapterView {
    pub fn from_response(res: &ChapterResponse) -> Self {
        let chapter = &res.chapter;
        let hero_image = chapter
            .image
            .clone()
            .filter(|image| !image.is_empty())
            .or_else(|| chapter.novel.as_ref().and_then(|novel| novel.thumbnail.clone()))
            .unwrap_or_default();

        Self {
            heading: format!("CHAPTER {}", chapter.order),
            title: chapter.title.clone(),
            updated: updated_label(chapter.updated_at.as_deref()),
            hero_image,
            body_html: sanitize_html(chapter.content.as_deref().unwrap_or_default()),
            novel: chapter.novel.as_ref().map(NovelAbout::from_novel),
            prev: NavLink::prev(res.pagination.prev.as_ref()),
            next: NavLink::next(res.pagination.next.as_ref()),
            document_title: document_title(&chapter.title),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::models::{ChapterResponse, NovelsResponse, decode};

    #[test]
    fn test_one_card_per_novel_in_order() {
        let body = r#"{"novels": [
            {"id": 1, "title": "First", "slug": "first", "contributor": {"user": {"name": "Ayu"}}},
            {"id": 2, "title": "Second", "slug": "second"},
            {"id": 3, "title": "Third", "slug": "third", "updated_at": "2024-05-06T00:00:00Z"}
        ]}"#;
        let res: NovelsResponse = decode(body).unwrap();

        let cards = novel_cards(&res.novels);
        assert_eq!(cards.len(), 3);
        assert_eq!(
            cards.iter().map(|c| c.title.as_str()).collect::<Vec<_>>(),
            vec!["First", "Second", "Third"]
        );
        assert_eq!(cards[0].href, "/pages/novels/first");
        assert_eq!(cards[0].byline, "By Ayu");
        assert_eq!(cards[1].byline, "By Unknown Contributor");
        assert_eq!(cards[2].updated, "Updated: 5/6/2024");
    }

    #[test]
    fn test_empty_response_yields_no_cards() {
        assert!(novel_cards(&[]).is_empty());
    }

    #[test]
    fn test_novel_page() {
        let novel = Novel {
            title: "Forest".to_string(),
            slug: "forest".to_string(),
            description: Some("d".repeat(501)),
            ..Default::default()
        };

        let page = NovelPage::from_novel(&novel, 500);
        assert!(page.synopsis.is_truncated());
        assert_eq!(page.document_title, "Forest | NovelRead");
        assert_eq!(page.updated, "Updated: ");
    }

    #[test]
    fn test_chapter_row() {
        let row = ChapterRow::from_chapter(&Chapter {
            order: 3,
            title: "Rain".to_string(),
            slug: "forest-3".to_string(),
            updated_at: Some("2024-01-02 00:00:00".to_string()),
            ..Default::default()
        });

        assert_eq!(row.href, "/pages/chapter/forest-3");
        assert_eq!(row.label, "Chapter 3");
        assert_eq!(row.updated, "Updated: 1/2/2024");
    }

    #[test]
    fn test_chapter_view_end_to_end() {
        let body = r#"{
            "chapter": {
                "id": 12, "order": 12, "title": "The Clearing", "slug": "ch-12",
                "content": "<p>The trees parted.</p><script>alert(1)</script>",
                "image": null,
                "updated_at": "2024-03-01T10:00:00.000000Z",
                "novel": {
                    "id": 1, "title": "Forest", "slug": "forest", "thumbnail": "forest.jpg",
                    "description": "A walk.", "updated_at": "2024-03-02T00:00:00Z",
                    "contributor": null
                }
            },
            "pagination": {"prev": {"id": 11, "slug": "ch-11"}, "next": null}
        }"#;
        let res: ChapterResponse = decode(body).unwrap();

        let view = ChapterView::from_response(&res);
        assert_eq!(view.heading, "CHAPTER 12");
        assert_eq!(view.title, "The Clearing");
        assert_eq!(view.updated, "Updated: 3/1/2024");
        assert_eq!(view.hero_image, "forest.jpg");
        assert_eq!(view.body_html, "<p>The trees parted.</p>");
        assert_eq!(
            view.prev,
            NavLink::Link {
                label: "Previous Chapter",
                href: "/pages/chapter/ch-11".to_string()
            }
        );
        assert_eq!(view.next, NavLink::Placeholder("No next chapter"));

        let novel = view.novel.unwrap();
        assert_eq!(novel.byline, "By Unknown Author");
        assert_eq!(novel.href, "/pages/novels/forest");
    }

    #[test]
    fn test_first_chapter_has_no_previous_link() {
        let res: ChapterResponse = decode(
            r#"{"chapter": {"order": 1, "slug": "ch-1", "image": "cover.png"},
                "pagination": {"prev": null, "next": {"slug": "ch-2"}}}"#,
        )
        .unwrap();

        let view = ChapterView::from_response(&res);
        assert_eq!(view.prev, NavLink::Placeholder("No previous chapter"));
        assert_eq!(
            view.next,
            NavLink::Link {
                label: "Next Chapter",
                href: "/pages/chapter/ch-2".to_string()
            }
        );
        assert_eq!(view.hero_image, "cover.png");
        assert!(view.novel.is_none());
        assert_eq!(view.document_title, APP_TITLE);
    }
}
