//! Async steps that move a [`FeedState`] through page loads and likes.
//!
//! The state is only borrowed between awaits. A store that has gone away
//! (view unmounted) makes every step a no-op, so late responses never touch
//! dead state.

use utils::feed::provider::{FeedProvider, LikeProvider};
use utils::feed::FeedItem;
use utils::route::login_redirect;

use super::{FeedError, FeedState, LikeOutcome, LikeTicket, LoadRequest};
use crate::session::SessionStatus;

/// Somewhere a [`FeedState`] lives. `None` once the owner is gone.
pub trait FeedStore {
    type Item: FeedItem;

    fn with_state<R>(&self, f: impl FnOnce(&mut FeedState<Self::Item>) -> R) -> Option<R>;

    fn peek<R>(&self, f: impl FnOnce(&FeedState<Self::Item>) -> R) -> Option<R>;
}

async fn run_load<P, S>(provider: &P, store: &S, req: LoadRequest) -> bool
where
    P: FeedProvider,
    S: FeedStore<Item = P::Item>,
{
    let result = provider
        .fetch_page(req.cursor.as_deref())
        .await
        .map_err(FeedError::from);
    match &result {
        Ok(page) => log::debug!(
            "{:?} page: {} items, has_more={}",
            req.kind,
            page.items.len(),
            page.has_more
        ),
        Err(e) => log::warn!("{:?} page failed: {e}", req.kind),
    }

    match store.with_state(|state| state.apply_page(req, result)) {
        Some(applied) => applied,
        None => {
            log::debug!("feed dropped before page arrived");
            false
        }
    }
}

/// Fetches the first page, replacing whatever was loaded. Ignored while
/// another load is in flight.
pub async fn load_initial<P, S>(provider: &P, store: &S) -> bool
where
    P: FeedProvider,
    S: FeedStore<Item = P::Item>,
{
    let Some(Some(req)) = store.with_state(FeedState::begin_initial) else {
        return false;
    };
    run_load(provider, store, req).await
}

/// Fetches the next page. Ignored while loading or once exhausted.
pub async fn load_more<P, S>(provider: &P, store: &S) -> bool
where
    P: FeedProvider,
    S: FeedStore<Item = P::Item>,
{
    let Some(Some(req)) = store.with_state(FeedState::begin_more) else {
        return false;
    };
    run_load(provider, store, req).await
}

/// [`load_more`], but only once the active slide nears the end.
pub async fn load_more_if_near_end<P, S>(provider: &P, store: &S) -> bool
where
    P: FeedProvider,
    S: FeedStore<Item = P::Item>,
{
    if !store.peek(FeedState::wants_more).unwrap_or(false) {
        return false;
    }
    load_more(provider, store).await
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LikeStep {
    Done(LikeOutcome),
    Pending(LikeTicket),
}

/// Synchronous half of a like tap. Anonymous viewers are sent to sign in
/// with `next` as the return path; signed-in viewers get the optimistic
/// toggle and a ticket for [`confirm_like`].
pub fn begin_like<S: FeedStore>(
    store: &S,
    session: &SessionStatus,
    navigate: impl FnOnce(&str),
    next: &str,
    key: &str,
) -> LikeStep {
    match session {
        SessionStatus::Resolving => LikeStep::Done(LikeOutcome::Ignored),
        SessionStatus::Anonymous => {
            navigate(&login_redirect(next));
            LikeStep::Done(LikeOutcome::SignInRequired)
        }
        SessionStatus::Authenticated(_) => match store.with_state(|s| s.begin_like(key)) {
            None => LikeStep::Done(LikeOutcome::Dropped),
            Some(Err(outcome)) => LikeStep::Done(outcome),
            Some(Ok(ticket)) => LikeStep::Pending(ticket),
        },
    }
}

/// Sends the like to the backend and settles the optimistic value.
pub async fn confirm_like<P, S>(provider: &P, store: &S, ticket: LikeTicket) -> LikeOutcome
where
    P: LikeProvider,
    S: FeedStore,
{
    let confirmed = match provider.toggle_like(&ticket.key).await {
        Ok(()) => true,
        Err(e) => {
            log::warn!("like on {} failed, rolling back: {e}", ticket.key);
            false
        }
    };
    store
        .with_state(|state| state.settle_like(&ticket, confirmed))
        .unwrap_or(LikeOutcome::Dropped)
}

pub async fn toggle_like<P, S>(
    provider: &P,
    store: &S,
    session: &SessionStatus,
    navigate: impl FnOnce(&str),
    next: &str,
    key: &str,
) -> LikeOutcome
where
    P: LikeProvider,
    S: FeedStore,
{
    match begin_like(store, session, navigate, next, key) {
        LikeStep::Done(outcome) => outcome,
        LikeStep::Pending(ticket) => confirm_like(provider, store, ticket).await,
    }
}
