mod chapter;
pub use chapter::*;

mod novel;
pub use novel::*;

use serde::{Deserialize, Deserializer, de::DeserializeOwned};

use crate::error::{Error, Result};

/// Treat an explicit JSON `null` like a missing field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Decode a JSON response body into one of the response envelopes.
pub fn decode<T: DeserializeOwned>(body: &str) -> Result<T> {
    serde_json::from_str(body).map_err(|e| Error::Decode(e.to_string()))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_decode_novels_keeps_response_order() {
        let body = r#"{"novels": [
            {"id": 3, "title": "C", "slug": "c"},
            {"id": 1, "title": "A", "slug": "a"},
            {"id": 2, "title": "B", "slug": "b"}
        ]}"#;

        let res: NovelsResponse = decode(body).unwrap();
        let slugs: Vec<&str> = res.novels.iter().map(|n| n.slug.as_str()).collect();
        assert_eq!(slugs, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_decode_missing_collections_default_to_empty() {
        let related: RelatedNovelsResponse = decode("{}").unwrap();
        assert!(related.related_novels.is_empty());

        let chapters: ChaptersResponse = decode(r#"{"status": "ok"}"#).unwrap();
        assert!(chapters.chapters.is_empty());

        let novels: NovelsResponse = decode("{}").unwrap();
        assert!(novels.novels.is_empty());
    }

    #[test]
    fn test_decode_missing_novel_is_an_error() {
        let res = decode::<NovelResponse>("{}");
        assert!(matches!(res, Err(Error::Decode(_))));
    }

    #[test]
    fn test_decode_malformed_body() {
        let res = decode::<NovelsResponse>("<html>502 Bad Gateway</html>");
        assert!(matches!(res, Err(Error::Decode(_))));
    }

    #[test]
    fn test_decode_chapter_with_pagination() {
        let body = r#"{
            "chapter": {
                "id": 12, "order": 12, "title": "The Clearing", "slug": "ch-12",
                "content": "<p>Text</p>", "image": null,
                "updated_at": "2024-03-01T10:00:00.000000Z",
                "novel": {"id": 1, "title": "Forest", "slug": "forest", "thumbnail": "t.jpg"}
            },
            "pagination": {"prev": {"id": 11, "slug": "ch-11"}, "next": null}
        }"#;

        let res: ChapterResponse = decode(body).unwrap();
        assert_eq!(res.chapter.order, 12);
        assert_eq!(res.chapter.novel.as_ref().map(|n| n.slug.as_str()), Some("forest"));
        assert_eq!(res.pagination.prev.map(|p| p.slug), Some("ch-11".to_string()));
        assert!(res.pagination.next.is_none());
    }

    #[test]
    fn test_decode_chapter_without_pagination() {
        let res: ChapterResponse = decode(r#"{"chapter": {"slug": "only"}}"#).unwrap();
        assert_eq!(res.pagination, Pagination::default());
    }

    #[test]
    fn test_decode_null_fields_as_blank() {
        let body = r#"{"novels": [
            {"id": null, "title": null, "slug": null, "thumbnail": null},
            {"id": 2, "title": "Second", "slug": "second"}
        ]}"#;

        let res: NovelsResponse = decode(body).unwrap();
        assert_eq!(res.novels.len(), 2);
        assert_eq!(res.novels[0], Novel::default());
        assert_eq!(res.novels[1].title, "Second");

        let res: ChaptersResponse = decode(
            r#"{"chapters": [{"id": null, "order": null, "title": null, "slug": null}]}"#,
        )
        .unwrap();
        assert_eq!(res.chapters, vec![Chapter::default()]);

        let res: NovelsResponse = decode(r#"{"novels": null}"#).unwrap();
        assert!(res.novels.is_empty());

        let res: ChapterResponse =
            decode(r#"{"chapter": {"slug": "x"}, "pagination": {"prev": {"slug": null}}}"#).unwrap();
        assert_eq!(res.pagination.prev.map(|p| p.slug), Some(String::new()));
    }

    #[test]
    fn test_contributor_name() {
        let body = r#"{"novels": [
            {"slug": "a", "contributor": {"user": {"name": "Rin"}}},
            {"slug": "b", "contributor": {"user": null}},
            {"slug": "c", "contributor": {"user": {"name": "  "}}},
            {"slug": "d"}
        ]}"#;

        let res: NovelsResponse = decode(body).unwrap();
        let names: Vec<Option<&str>> = res.novels.iter().map(|n| n.contributor_name()).collect();
        assert_eq!(names, vec![Some("Rin"), None, None, None]);
    }
}
