//! Request bookkeeping for one piece of component state.
//!
//! Every request issued into a slot gets a fresh [`FetchToken`]. Only the
//! most recent token may settle the slot, so a late response to an older
//! request, or to one issued before a [`FetchSlot::cancel`], is dropped.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchToken(u64);

impl FetchToken {
    pub fn id(&self) -> u64 {
        self.0
    }
}

#[derive(Debug, Default)]
pub struct FetchSlot {
    issued: u64,
    current: Option<u64>,
}

impl FetchSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a request, superseding whatever is in flight.
    pub fn begin(&mut self) -> FetchToken {
        self.issued += 1;
        self.current = Some(self.issued);
        FetchToken(self.issued)
    }

    pub fn is_current(&self, token: FetchToken) -> bool {
        self.current == Some(token.0)
    }

    /// Settle a request. Returns whether its result may be applied; if so
    /// the slot is idle afterwards.
    pub fn accept(&mut self, token: FetchToken) -> bool {
        if self.is_current(token) {
            self.current = None;
            true
        } else {
            false
        }
    }

    pub fn cancel(&mut self) {
        self.current = None;
    }

    pub fn is_loading(&self) -> bool {
        self.current.is_some()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::load_state::LoadState;
    use crate::models::{ChapterResponse, decode};
    use crate::view::ChapterView;

    fn chapter(slug: &str, title: &str) -> ChapterView {
        let body = format!(r#"{{"chapter": {{"slug": "{slug}", "title": "{title}"}}}}"#);
        let res: ChapterResponse = decode(&body).unwrap();
        ChapterView::from_response(&res)
    }

    #[test]
    fn test_latest_request_is_accepted() {
        let mut slot = FetchSlot::new();
        let token = slot.begin();

        assert!(slot.is_loading());
        assert!(slot.accept(token));
        assert!(!slot.is_loading());
    }

    #[test]
    fn test_superseded_response_is_rejected() {
        let mut slot = FetchSlot::new();
        let first = slot.begin();
        let second = slot.begin();

        assert!(!slot.accept(first));
        assert!(slot.is_loading());
        assert!(slot.accept(second));
    }

    #[test]
    fn test_response_after_cancel_is_rejected() {
        let mut slot = FetchSlot::new();
        let token = slot.begin();
        slot.cancel();

        assert!(!slot.accept(token));
        assert!(!slot.is_loading());
    }

    #[test]
    fn test_token_settles_once() {
        let mut slot = FetchSlot::new();
        let token = slot.begin();

        assert!(slot.accept(token));
        assert!(!slot.accept(token));
    }

    #[test]
    fn test_slug_change_never_mixes_chapters() {
        let mut slot = FetchSlot::new();
        let mut state = LoadState::Pending;

        let ch11 = slot.begin();
        let ch12 = slot.begin();

        // ch-12 resolves first, then the stale ch-11 response arrives
        if slot.accept(ch12) {
            state = LoadState::Ready(chapter("ch-12", "The Clearing"));
        }
        if slot.accept(ch11) {
            state = LoadState::Ready(chapter("ch-11", "The Path"));
        }

        let view = state.ready().unwrap();
        assert_eq!(view.title, "The Clearing");
        assert_eq!(view.document_title, "The Clearing | NovelRead");
    }
}
