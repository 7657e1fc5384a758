//! Fire-and-forget wrappers that run the feed drivers on the local executor.

use leptos::task::spawn_local;
use state::feed::{
    driver::{self, FeedStore, LikeStep},
    FeedHandle, FeedState,
};
use state::session::SessionStatus;
use utils::feed::provider::{FeedProvider, LikeProvider};

pub fn load_initial<P>(provider: &P, feed: FeedHandle<P::Item>)
where
    P: FeedProvider + Clone + 'static,
    P::Item: Send + Sync,
{
    let provider = provider.clone();
    spawn_local(async move {
        driver::load_initial(&provider, &feed).await;
    });
}

pub fn load_more<P>(provider: &P, feed: FeedHandle<P::Item>)
where
    P: FeedProvider + Clone + 'static,
    P::Item: Send + Sync,
{
    if !feed.peek(FeedState::can_load_more).unwrap_or(false) {
        return;
    }
    let provider = provider.clone();
    spawn_local(async move {
        driver::load_more(&provider, &feed).await;
    });
}

pub fn load_more_if_near_end<P>(provider: &P, feed: FeedHandle<P::Item>)
where
    P: FeedProvider + Clone + 'static,
    P::Item: Send + Sync,
{
    if feed.peek(FeedState::wants_more).unwrap_or(false) {
        load_more(provider, feed);
    }
}

pub fn toggle_like<P>(
    provider: &P,
    feed: FeedHandle<P::Item>,
    session: &SessionStatus,
    navigate: impl FnOnce(&str),
    next: &str,
    key: &str,
) where
    P: FeedProvider + LikeProvider + Clone + 'static,
    P::Item: Send + Sync,
{
    match driver::begin_like(&feed, session, navigate, next, key) {
        LikeStep::Done(outcome) => log::debug!("like on {key}: {outcome:?}"),
        LikeStep::Pending(ticket) => {
            let provider = provider.clone();
            spawn_local(async move {
                let key = ticket.key.clone();
                let outcome = driver::confirm_like(&provider, &feed, ticket).await;
                log::debug!("like on {key}: {outcome:?}");
            });
        }
    }
}
