use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::format::parse_timestamp;
use crate::models::Chapter;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
pub enum ChapterFilter {
    #[default]
    Latest,
    Oldest,
}

impl ChapterFilter {
    pub fn toggle(self) -> Self {
        match self {
            ChapterFilter::Latest => ChapterFilter::Oldest,
            ChapterFilter::Oldest => ChapterFilter::Latest,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ChapterFilter::Latest => "Latest",
            ChapterFilter::Oldest => "Oldest",
        }
    }
}

fn oldest_first(a: &Chapter, b: &Chapter) -> Ordering {
    // missing timestamps parse to None, which sorts as the earliest instant
    let a_at = a.updated_at.as_deref().and_then(parse_timestamp);
    let b_at = b.updated_at.as_deref().and_then(parse_timestamp);

    a_at.cmp(&b_at)
        .then(a.order.cmp(&b.order))
        .then(a.id.cmp(&b.id))
}

/// Sort by `updated_at`, ties broken by `order` and then `id` in the same
/// direction.
pub fn sort_chapters(chapters: &mut [Chapter], filter: ChapterFilter) {
    chapters.sort_by(|a, b| match filter {
        ChapterFilter::Latest => oldest_first(b, a),
        ChapterFilter::Oldest => oldest_first(a, b),
    });
}

pub fn sorted_chapters(chapters: &[Chapter], filter: ChapterFilter) -> Vec<Chapter> {
    let mut chapters = chapters.to_vec();
    sort_chapters(&mut chapters, filter);
    chapters
}

#[cfg(test)]
mod test {
    use super::*;

    fn chapter(id: i64, order: i64, updated_at: Option<&str>) -> Chapter {
        Chapter {
            id,
            order,
            slug: format!("ch-{}", id),
            updated_at: updated_at.map(str::to_string),
            ..Default::default()
        }
    }

    fn ids(chapters: &[Chapter]) -> Vec<i64> {
        chapters.iter().map(|c| c.id).collect()
    }

    fn fixture() -> Vec<Chapter> {
        vec![
            chapter(1, 1, Some("2024-01-01T00:00:00Z")),
            chapter(2, 2, Some("2024-03-01T00:00:00Z")),
            chapter(3, 3, Some("2024-02-01T00:00:00Z")),
            chapter(4, 4, None),
            chapter(5, 5, Some("2024-02-15 12:00:00")),
        ]
    }

    #[test]
    fn test_latest_sorts_descending() {
        let sorted = sorted_chapters(&fixture(), ChapterFilter::Latest);
        assert_eq!(ids(&sorted), vec![2, 5, 3, 1, 4]);
    }

    #[test]
    fn test_oldest_sorts_ascending() {
        let sorted = sorted_chapters(&fixture(), ChapterFilter::Oldest);
        assert_eq!(ids(&sorted), vec![4, 1, 3, 5, 2]);
    }

    #[test]
    fn test_sort_is_a_permutation() {
        let input = fixture();
        let mut sorted = ids(&sorted_chapters(&input, ChapterFilter::Latest));
        let mut original = ids(&input);
        sorted.sort();
        original.sort();
        assert_eq!(sorted, original);
    }

    #[test]
    fn test_toggling_returns_to_latest_ordering() {
        let latest = sorted_chapters(&fixture(), ChapterFilter::Latest);
        let oldest = sorted_chapters(&latest, ChapterFilter::Oldest);
        let again = sorted_chapters(&oldest, ChapterFilter::Latest);

        assert_eq!(ids(&again), ids(&latest));
        assert_eq!(ChapterFilter::Latest.toggle().toggle(), ChapterFilter::Latest);
    }

    #[test]
    fn test_equal_timestamps_fall_back_to_order() {
        let at = Some("2024-01-01T00:00:00Z");
        let input = vec![chapter(10, 2, at), chapter(11, 1, at), chapter(12, 3, at)];

        assert_eq!(ids(&sorted_chapters(&input, ChapterFilter::Latest)), vec![12, 10, 11]);
        assert_eq!(ids(&sorted_chapters(&input, ChapterFilter::Oldest)), vec![11, 10, 12]);
    }

    #[test]
    fn test_empty_list() {
        assert!(sorted_chapters(&[], ChapterFilter::Latest).is_empty());
    }
}
