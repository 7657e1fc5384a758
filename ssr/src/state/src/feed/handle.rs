use leptos::prelude::*;
use utils::feed::FeedItem;

use super::{driver::FeedStore, FeedState};

/// Reactive owner of a view's [`FeedState`]. Stops accepting updates once the
/// owning view is cleaned up.
pub struct FeedHandle<T: Send + Sync + 'static> {
    state: RwSignal<FeedState<T>>,
    alive: StoredValue<bool>,
}

impl<T: Send + Sync + 'static> Clone for FeedHandle<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for FeedHandle<T> {}

impl<T: FeedItem + Send + Sync> FeedHandle<T> {
    pub fn new() -> Self {
        let alive = StoredValue::new(true);
        on_cleanup(move || {
            alive.try_update_value(|alive| *alive = false);
        });

        Self {
            state: RwSignal::new(FeedState::default()),
            alive,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.alive.try_get_value().unwrap_or(false)
    }

    /// Tracked read for views.
    pub fn read<R>(&self, f: impl FnOnce(&FeedState<T>) -> R) -> R {
        self.state.with(f)
    }

    pub fn set_active(&self, idx: usize) {
        if self.is_alive() {
            self.state.maybe_update(|state| state.set_active(idx));
        }
    }
}

impl<T: FeedItem + Send + Sync> Default for FeedHandle<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: FeedItem + Send + Sync> FeedStore for FeedHandle<T> {
    type Item = T;

    fn with_state<R>(&self, f: impl FnOnce(&mut FeedState<T>) -> R) -> Option<R> {
        if !self.is_alive() {
            return None;
        }
        self.state.try_update(f)
    }

    fn peek<R>(&self, f: impl FnOnce(&FeedState<T>) -> R) -> Option<R> {
        if !self.is_alive() {
            return None;
        }
        self.state.try_with_untracked(f)
    }
}
