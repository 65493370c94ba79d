//! Slide geometry for the featured novels carousel.

/// `(min viewport width in px, slides per view)`, ascending by width.
pub const BREAKPOINTS: [(f64, usize); 4] = [(640.0, 1), (768.0, 2), (1024.0, 3), (1280.0, 6)];

pub fn slides_per_view(viewport_width: f64) -> usize {
    BREAKPOINTS
        .iter()
        .rev()
        .find(|(min_width, _)| viewport_width >= *min_width)
        .map(|(_, per_view)| *per_view)
        .unwrap_or(1)
}

/// Position of a looping carousel. Every slide stays mounted, `index` is the
/// first one in view and never passes `len - per_view`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselState {
    len: usize,
    per_view: usize,
    index: usize,
}

impl CarouselState {
    pub fn new(len: usize, per_view: usize) -> Self {
        Self {
            len,
            per_view: per_view.max(1),
            index: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn per_view(&self) -> usize {
        self.per_view
    }

    /// Whether there are more slides than fit, i.e. whether moving does anything.
    pub fn can_slide(&self) -> bool {
        self.len > self.per_view
    }

    /// Last valid start index.
    pub fn last_index(&self) -> usize {
        self.len.saturating_sub(self.per_view)
    }

    /// Number of distinct start positions, one pagination dot each.
    pub fn positions(&self) -> usize {
        if self.can_slide() { self.last_index() + 1 } else { 1 }
    }

    pub fn with_per_view(self, per_view: usize) -> Self {
        let next = Self {
            per_view: per_view.max(1),
            ..self
        };
        Self {
            index: next.index.min(next.last_index()),
            ..next
        }
    }

    pub fn next(self) -> Self {
        if !self.can_slide() {
            return self;
        }
        let index = if self.index >= self.last_index() { 0 } else { self.index + 1 };
        Self { index, ..self }
    }

    pub fn prev(self) -> Self {
        if !self.can_slide() {
            return self;
        }
        let index = if self.index == 0 { self.last_index() } else { self.index - 1 };
        Self { index, ..self }
    }

    pub fn go_to(self, index: usize) -> Self {
        if !self.can_slide() {
            return self;
        }
        Self {
            index: index.min(self.last_index()),
            ..self
        }
    }

    /// Indices of the slides in view.
    pub fn visible(&self) -> std::ops::Range<usize> {
        self.index..(self.index + self.per_view).min(self.len)
    }

    /// CSS `flex-basis` of a single slide.
    pub fn slide_basis(&self) -> String {
        format!("{:.4}%", 100.0 / self.per_view as f64)
    }

    /// CSS `transform` of the track holding all slides.
    pub fn track_offset(&self) -> String {
        if self.index == 0 {
            return "translateX(0%)".to_string();
        }
        format!(
            "translateX(-{:.4}%)",
            self.index as f64 * 100.0 / self.per_view as f64
        )
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::models::{NovelsResponse, decode};
    use crate::view::novel_cards;

    #[test]
    fn test_slides_per_view_breakpoints() {
        assert_eq!(slides_per_view(320.0), 1);
        assert_eq!(slides_per_view(640.0), 1);
        assert_eq!(slides_per_view(767.9), 1);
        assert_eq!(slides_per_view(768.0), 2);
        assert_eq!(slides_per_view(1024.0), 3);
        assert_eq!(slides_per_view(1279.0), 3);
        assert_eq!(slides_per_view(1280.0), 6);
        assert_eq!(slides_per_view(2560.0), 6);
    }

    #[test]
    fn test_every_novel_gets_a_slide() {
        let body = format!(
            r#"{{"novels": [{}]}}"#,
            (0..10)
                .map(|i| format!(r#"{{"id": {i}, "title": "Novel {i}", "slug": "novel-{i}"}}"#))
                .collect::<Vec<_>>()
                .join(",")
        );
        let res: NovelsResponse = decode(&body).unwrap();
        let cards = novel_cards(&res.novels);
        let state = CarouselState::new(cards.len(), 3);

        assert_eq!(state.len(), 10);
        assert_eq!(
            cards.iter().map(|c| c.href.as_str()).collect::<Vec<_>>(),
            (0..10).map(|i| format!("/pages/novels/novel-{i}")).collect::<Vec<_>>()
        );
        assert_eq!(state.visible(), 0..3);
        assert_eq!(state.go_to(7).visible(), 7..10);
    }

    #[test]
    fn test_next_wraps_around() {
        let mut state = CarouselState::new(4, 2);
        let mut seen = vec![];
        for _ in 0..4 {
            seen.push(state.index());
            state = state.next();
        }
        assert_eq!(seen, vec![0, 1, 2, 0]);
    }

    #[test]
    fn test_prev_wraps_around() {
        let state = CarouselState::new(4, 1).prev();
        assert_eq!(state.index(), 3);
        assert_eq!(state.prev().index(), 2);
    }

    #[test]
    fn test_track_offset_follows_index_and_wraps() {
        let state = CarouselState::new(5, 2);
        assert_eq!(state.track_offset(), "translateX(0%)");
        assert_eq!(state.next().track_offset(), "translateX(-50.0000%)");

        let last = state.go_to(3);
        assert_eq!(last.track_offset(), "translateX(-150.0000%)");
        assert_eq!(last.next().track_offset(), "translateX(0%)");

        let thirds = CarouselState::new(6, 3).go_to(1);
        assert_eq!(thirds.track_offset(), "translateX(-33.3333%)");
    }

    #[test]
    fn test_go_to_clamps_to_last_start() {
        let state = CarouselState::new(5, 3).go_to(4);
        assert_eq!(state.index(), 2);
        assert_eq!(state.positions(), 3);
    }

    #[test]
    fn test_fewer_slides_than_per_view() {
        let state = CarouselState::new(2, 6);
        assert!(!state.can_slide());
        assert_eq!(state.next().index(), 0);
        assert_eq!(state.prev().index(), 0);
        assert_eq!(state.visible(), 0..2);
        assert_eq!(state.positions(), 1);
    }

    #[test]
    fn test_resize_clamps_index() {
        let state = CarouselState::new(4, 1).go_to(3);
        assert_eq!(state.with_per_view(2).index(), 2);
        assert_eq!(state.with_per_view(6).index(), 0);
    }

    #[test]
    fn test_empty_carousel() {
        let state = CarouselState::new(0, 3);
        assert!(state.is_empty());
        assert!(state.visible().is_empty());
        assert_eq!(state.next(), state);
    }

    #[test]
    fn test_slide_basis() {
        assert_eq!(CarouselState::new(10, 2).slide_basis(), "50.0000%");
        assert_eq!(CarouselState::new(10, 3).slide_basis(), "33.3333%");
    }
}
