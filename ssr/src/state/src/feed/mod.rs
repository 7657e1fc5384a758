//! Per-view feed state: the loaded items, the pagination cursor, the active
//! slide and in-flight optimistic likes.
//!
//! Every transition is a plain synchronous method on [`FeedState`]. The async
//! side lives in [`driver`], which only ever touches the state between
//! awaits, through a [`driver::FeedStore`].

use std::collections::HashMap;

use consts::LOAD_MORE_LOOKAHEAD;
use utils::api::ApiError;
use utils::feed::{FeedItem, LikeState, Page};

pub mod driver;
mod handle;
pub mod playback;
pub mod viewport;

pub use handle::FeedHandle;

/// A listing failure, as shown to the viewer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct FeedError(pub String);

impl From<ApiError> for FeedError {
    fn from(e: ApiError) -> Self {
        Self(e.to_string())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadKind {
    Initial,
    More,
}

/// A page request handed out by [`FeedState::begin_initial`] or
/// [`FeedState::begin_more`]; its result goes back through
/// [`FeedState::apply_page`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoadRequest {
    pub kind: LoadKind,
    pub cursor: Option<String>,
}

/// What the list area should show.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FeedView {
    Loading,
    Failed(FeedError),
    Empty,
    Items,
}

/// What goes under the last loaded item.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FeedFooter {
    None,
    LoadingMore,
    LoadMoreFailed(FeedError),
    End,
}

/// An optimistic like waiting for the backend.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LikeTicket {
    pub key: String,
    /// Distinguishes this toggle from later ones on the same key.
    pub seq: u64,
    pub before: LikeState,
    pub after: LikeState,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LikeOutcome {
    /// Session still resolving; nothing happened.
    Ignored,
    /// Anonymous viewer; sent to sign in instead.
    SignInRequired,
    /// A like on the same item is still waiting for confirmation.
    InFlight,
    /// No loaded item has that key, or it cannot be liked.
    Missing,
    Confirmed,
    RolledBack,
    /// The request failed but the item was replaced meanwhile; left as is.
    Superseded,
    /// The view was torn down before the request settled.
    Dropped,
}

#[derive(Clone, Debug)]
pub struct FeedState<T> {
    items: Vec<T>,
    cursor: Option<String>,
    has_more: bool,
    loading: bool,
    loaded_once: bool,
    error: Option<FeedError>,
    active: usize,
    /// Sequence number of the unconfirmed like per key.
    pending_likes: HashMap<String, u64>,
    like_seq: u64,
}

impl<T> Default for FeedState<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            cursor: None,
            has_more: false,
            loading: false,
            loaded_once: false,
            error: None,
            active: 0,
            pending_likes: HashMap::new(),
            like_seq: 0,
        }
    }
}

impl<T: FeedItem> FeedState<T> {
    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn cursor(&self) -> Option<&str> {
        self.cursor.as_deref()
    }

    pub fn has_more(&self) -> bool {
        self.has_more
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&FeedError> {
        self.error.as_ref()
    }

    pub fn get(&self, key: &str) -> Option<&T> {
        self.items.iter().find(|item| item.key() == key)
    }

    /// Starts a full reload. `None` while any load is in flight.
    pub fn begin_initial(&mut self) -> Option<LoadRequest> {
        if self.loading {
            return None;
        }
        self.items.clear();
        self.cursor = None;
        self.error = None;
        self.active = 0;
        self.pending_likes.clear();
        self.loading = true;
        Some(LoadRequest {
            kind: LoadKind::Initial,
            cursor: None,
        })
    }

    pub fn can_load_more(&self) -> bool {
        !self.loading && self.has_more
    }

    /// Starts fetching the page after the current cursor. `None` while a load
    /// is in flight or once the listing is exhausted.
    pub fn begin_more(&mut self) -> Option<LoadRequest> {
        if !self.can_load_more() {
            return None;
        }
        self.loading = true;
        Some(LoadRequest {
            kind: LoadKind::More,
            cursor: self.cursor.clone(),
        })
    }

    /// Folds a page result into the state. Returns `false` when no load was
    /// in flight and the result was dropped.
    pub fn apply_page(&mut self, req: LoadRequest, result: Result<Page<T>, FeedError>) -> bool {
        if !self.loading {
            return false;
        }
        self.loading = false;
        self.loaded_once = true;

        match result {
            Ok(page) => {
                match req.kind {
                    LoadKind::Initial => self.items = page.items,
                    LoadKind::More => self.items.extend(page.items),
                }
                self.cursor = page.next_cursor;
                self.has_more = page.has_more;
                self.error = None;
                self.active = self.active.min(self.items.len().saturating_sub(1));
            }
            Err(e) => {
                self.error = Some(e);
                self.has_more = false;
            }
        }
        true
    }

    pub fn view(&self) -> FeedView {
        if !self.items.is_empty() {
            return FeedView::Items;
        }
        if self.loading || !self.loaded_once {
            return FeedView::Loading;
        }
        match &self.error {
            Some(e) => FeedView::Failed(e.clone()),
            None => FeedView::Empty,
        }
    }

    pub fn footer(&self) -> FeedFooter {
        if self.items.is_empty() {
            return FeedFooter::None;
        }
        if self.loading {
            return FeedFooter::LoadingMore;
        }
        if let Some(e) = &self.error {
            return FeedFooter::LoadMoreFailed(e.clone());
        }
        if self.loaded_once && !self.has_more {
            return FeedFooter::End;
        }
        FeedFooter::None
    }

    pub fn active(&self) -> usize {
        self.active
    }

    /// Moves the active slide, clamped into the loaded range. Returns whether
    /// it changed.
    pub fn set_active(&mut self, idx: usize) -> bool {
        let idx = idx.min(self.items.len().saturating_sub(1));
        if idx == self.active {
            return false;
        }
        self.active = idx;
        true
    }

    /// The active slide is close enough to the end to fetch the next page.
    pub fn wants_more(&self) -> bool {
        self.can_load_more()
            && viewport::near_end(self.active, self.items.len(), LOAD_MORE_LOOKAHEAD)
    }

    pub fn like_pending(&self, key: &str) -> bool {
        self.pending_likes.contains_key(key)
    }

    /// Applies a like toggle optimistically to every loaded copy of `key`.
    /// Toggles on one item are serialized: while one waits for confirmation
    /// the next is refused.
    pub fn begin_like(&mut self, key: &str) -> Result<LikeTicket, LikeOutcome> {
        if self.pending_likes.contains_key(key) {
            return Err(LikeOutcome::InFlight);
        }
        let before = self
            .get(key)
            .and_then(FeedItem::like_state)
            .ok_or(LikeOutcome::Missing)?;
        let after = before.toggled();
        for item in self.items.iter_mut().filter(|item| item.key() == key) {
            item.set_like_state(after);
        }
        self.like_seq = self.like_seq.wrapping_add(1);
        self.pending_likes.insert(key.to_string(), self.like_seq);
        Ok(LikeTicket {
            key: key.to_string(),
            seq: self.like_seq,
            before,
            after,
        })
    }

    /// Settles an optimistic like. A failure restores the snapshot taken by
    /// [`Self::begin_like`], unless the item no longer shows the optimistic
    /// value (a reload replaced it).
    ///
    /// Tickets from before a reload are stale: they neither release the key
    /// nor touch the items.
    pub fn settle_like(&mut self, ticket: &LikeTicket, confirmed: bool) -> LikeOutcome {
        if self.pending_likes.get(&ticket.key) != Some(&ticket.seq) {
            return if confirmed {
                LikeOutcome::Confirmed
            } else {
                LikeOutcome::Superseded
            };
        }
        self.pending_likes.remove(&ticket.key);
        if confirmed {
            return LikeOutcome::Confirmed;
        }
        let mut restored = false;
        for item in self.items.iter_mut().filter(|item| item.key() == ticket.key) {
            if item.like_state() == Some(ticket.after) {
                item.set_like_state(ticket.before);
                restored = true;
            }
        }
        if restored {
            LikeOutcome::RolledBack
        } else {
            LikeOutcome::Superseded
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    pub struct Item {
        pub id: String,
        pub like: LikeState,
    }

    impl FeedItem for Item {
        fn key(&self) -> &str {
            &self.id
        }

        fn like_state(&self) -> Option<LikeState> {
            Some(self.like)
        }

        fn set_like_state(&mut self, state: LikeState) {
            self.like = state;
        }
    }

    pub fn item(id: impl ToString) -> Item {
        Item {
            id: id.to_string(),
            like: LikeState::new(false, 5),
        }
    }

    pub fn items(range: std::ops::Range<usize>) -> Vec<Item> {
        range.map(item).collect()
    }

    fn loaded(page: Page<Item>) -> FeedState<Item> {
        let mut state = FeedState::default();
        let req = state.begin_initial().unwrap();
        assert!(state.apply_page(req, Ok(page)));
        state
    }

    #[test]
    fn fresh_state_is_loading_and_cannot_page() {
        let mut state = FeedState::<Item>::default();
        assert_eq!(state.view(), FeedView::Loading);
        assert_eq!(state.begin_more(), None);
    }

    #[test]
    fn initial_load_replaces_items_and_tracks_cursor() {
        let state = loaded(Page::with_cursor(items(0..20), "abc"));
        assert_eq!(state.len(), 20);
        assert_eq!(state.cursor(), Some("abc"));
        assert!(state.has_more());
        assert!(!state.is_loading());
        assert_eq!(state.view(), FeedView::Items);
        assert_eq!(state.footer(), FeedFooter::None);
    }

    #[test]
    fn short_terminal_page_has_no_end_flicker_before_items() {
        let mut state = FeedState::<Item>::default();
        let req = state.begin_initial().unwrap();
        assert_eq!(state.footer(), FeedFooter::None);
        assert_eq!(state.view(), FeedView::Loading);

        state.apply_page(req, Ok(Page::last(items(0..3))));
        assert_eq!(state.len(), 3);
        assert!(!state.wants_more());
        assert_eq!(state.footer(), FeedFooter::End);
    }

    #[test]
    fn begin_initial_clears_previous_items() {
        let mut state = loaded(Page::last(items(0..3)));
        state.set_active(2);
        state.begin_initial().unwrap();
        assert!(state.is_empty());
        assert_eq!(state.active(), 0);
        assert!(state.is_loading());
    }

    #[test]
    fn loads_are_never_concurrent() {
        let mut state = loaded(Page::with_cursor(items(0..3), "c1"));
        let req = state.begin_more().unwrap();
        assert_eq!(req.cursor.as_deref(), Some("c1"));
        assert_eq!(state.begin_more(), None);
        assert_eq!(state.begin_initial(), None);
    }

    #[test]
    fn load_more_appends_and_keeps_duplicates() {
        let mut state = loaded(Page::with_cursor(items(0..3), "c1"));
        let req = state.begin_more().unwrap();
        state.apply_page(req, Ok(Page::last(items(2..4))));
        let ids: Vec<_> = state.items().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, ["0", "1", "2", "2", "3"]);
        assert_eq!(state.cursor(), None);
        assert!(!state.has_more());
    }

    #[test]
    fn load_more_is_a_noop_once_exhausted() {
        let mut state = loaded(Page::last(items(0..3)));
        let before = state.items().to_vec();
        for _ in 0..5 {
            assert_eq!(state.begin_more(), None);
        }
        assert_eq!(state.items(), before.as_slice());
        assert_eq!(state.cursor(), None);
        assert!(!state.is_loading());
    }

    #[test]
    fn initial_failure_shows_retry_state() {
        let mut state = FeedState::<Item>::default();
        let req = state.begin_initial().unwrap();
        state.apply_page(req, Err(FeedError("boom".into())));
        assert_eq!(state.view(), FeedView::Failed(FeedError("boom".into())));
        assert!(!state.has_more());
        assert!(!state.is_loading());

        // retry clears the error
        let req = state.begin_initial().unwrap();
        assert_eq!(state.error(), None);
        state.apply_page(req, Ok(Page::last(vec![])));
        assert_eq!(state.view(), FeedView::Empty);
    }

    #[test]
    fn load_more_failure_keeps_items_and_stops_paging() {
        let mut state = loaded(Page::with_cursor(items(0..3), "c1"));
        let req = state.begin_more().unwrap();
        state.apply_page(req, Err(FeedError("offline".into())));
        assert_eq!(state.len(), 3);
        assert_eq!(state.view(), FeedView::Items);
        assert_eq!(
            state.footer(),
            FeedFooter::LoadMoreFailed(FeedError("offline".into()))
        );
        assert_eq!(state.begin_more(), None);
    }

    #[test]
    fn unsolicited_page_is_dropped() {
        let mut state = loaded(Page::last(items(0..1)));
        let req = LoadRequest {
            kind: LoadKind::More,
            cursor: None,
        };
        assert!(!state.apply_page(req, Ok(Page::last(items(5..9)))));
        assert_eq!(state.len(), 1);
    }

    #[test]
    fn active_index_is_clamped() {
        let mut state = loaded(Page::last(items(0..3)));
        assert!(state.set_active(10));
        assert_eq!(state.active(), 2);
        assert!(!state.set_active(2));

        let mut empty = FeedState::<Item>::default();
        assert!(!empty.set_active(4));
        assert_eq!(empty.active(), 0);
    }

    #[test]
    fn wants_more_within_two_of_the_end() {
        let mut state = loaded(Page::with_cursor(items(0..20), "abc"));
        state.set_active(17);
        assert!(!state.wants_more());
        state.set_active(18);
        assert!(state.wants_more());
        state.begin_more().unwrap();
        assert!(!state.wants_more());
    }

    #[test]
    fn short_first_page_wants_more_before_any_scroll() {
        let mut state = loaded(Page::with_cursor(items(0..2), "c"));
        assert_eq!(state.active(), 0);
        assert!(state.wants_more());

        // still wanted after a short follow-up page while parked on the last slide
        state.set_active(1);
        let req = state.begin_more().unwrap();
        state.apply_page(req, Ok(Page::with_cursor(items(2..3), "d")));
        assert!(state.wants_more());
    }

    #[test]
    fn double_toggle_restores_original() {
        let mut state = loaded(Page::last(items(0..2)));
        let t = state.begin_like("1").unwrap();
        assert_eq!(state.get("1").unwrap().like, LikeState::new(true, 6));
        assert_eq!(state.settle_like(&t, true), LikeOutcome::Confirmed);
        let t = state.begin_like("1").unwrap();
        assert_eq!(state.settle_like(&t, true), LikeOutcome::Confirmed);
        assert_eq!(state.get("1").unwrap().like, LikeState::new(false, 5));
    }

    #[test]
    fn failed_like_rolls_back() {
        let mut state = loaded(Page::last(vec![item("x")]));
        let t = state.begin_like("x").unwrap();
        assert_eq!(t.before, LikeState::new(false, 5));
        assert_eq!(t.after, LikeState::new(true, 6));
        assert_eq!(state.settle_like(&t, false), LikeOutcome::RolledBack);
        assert_eq!(state.get("x").unwrap().like, LikeState::new(false, 5));
        assert!(!state.like_pending("x"));
    }

    #[test]
    fn same_item_toggles_are_serialized() {
        let mut state = loaded(Page::last(vec![item("x"), item("y")]));
        let t = state.begin_like("x").unwrap();
        assert_eq!(state.begin_like("x"), Err(LikeOutcome::InFlight));
        // other items are independent
        assert!(state.begin_like("y").is_ok());
        state.settle_like(&t, true);
        assert!(state.begin_like("x").is_ok());
    }

    #[test]
    fn like_on_unknown_item_is_missing() {
        let mut state = loaded(Page::last(items(0..1)));
        assert_eq!(state.begin_like("nope"), Err(LikeOutcome::Missing));
    }

    #[test]
    fn like_updates_every_copy_of_a_duplicated_item() {
        let mut state = loaded(Page::last(vec![item("d"), item("e"), item("d")]));
        let t = state.begin_like("d").unwrap();
        assert!(state.items().iter().filter(|i| i.id == "d").all(|i| i.like == t.after));
        state.settle_like(&t, false);
        assert!(state.items().iter().all(|i| i.like == LikeState::new(false, 5)));
    }

    #[test]
    fn rollback_skips_items_replaced_by_a_reload() {
        let mut state = loaded(Page::with_cursor(vec![item("x")], "c"));
        let t = state.begin_like("x").unwrap();
        let req = state.begin_initial().unwrap();
        let mut fresh = item("x");
        fresh.like = LikeState::new(true, 40);
        state.apply_page(req, Ok(Page::last(vec![fresh.clone()])));
        assert_eq!(state.settle_like(&t, false), LikeOutcome::Superseded);
        assert_eq!(state.get("x").unwrap(), &fresh);
    }

    #[test]
    fn stale_like_does_not_disturb_a_newer_one() {
        let mut state = loaded(Page::with_cursor(vec![item("x")], "c"));
        let stale = state.begin_like("x").unwrap();
        let req = state.begin_initial().unwrap();
        state.apply_page(req, Ok(Page::last(vec![item("x")])));

        let current = state.begin_like("x").unwrap();
        assert_eq!(state.settle_like(&stale, false), LikeOutcome::Superseded);
        assert_eq!(state.get("x").unwrap().like, LikeState::new(true, 6));
        assert!(state.like_pending("x"));
        assert_eq!(state.begin_like("x"), Err(LikeOutcome::InFlight));

        // a stale confirmation does not release the key either
        assert_eq!(state.settle_like(&stale, true), LikeOutcome::Confirmed);
        assert!(state.like_pending("x"));

        assert_eq!(state.settle_like(&current, false), LikeOutcome::RolledBack);
        assert_eq!(state.get("x").unwrap().like, LikeState::new(false, 5));
        assert!(!state.like_pending("x"));
    }

    #[test]
    fn like_count_never_negative() {
        let mut zero = item("z");
        zero.like = LikeState::new(true, 0);
        let mut state = loaded(Page::last(vec![zero]));
        for _ in 0..4 {
            let t = state.begin_like("z").unwrap();
            state.settle_like(&t, true);
            assert!(state.get("z").unwrap().like.count <= 1);
        }
    }
}
