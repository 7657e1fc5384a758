use std::marker::PhantomData;

use consts::{item_keys, resource};
use serde::de::DeserializeOwned;

use super::{FeedItem, Notification, Page, Post, Reel};
use crate::api::{ApiClient, ApiError};

/// A cursor-paginated source of feed items.
#[allow(async_fn_in_trait)]
pub trait FeedProvider {
    type Item: FeedItem;

    async fn fetch_page(&self, cursor: Option<&str>) -> Result<Page<Self::Item>, ApiError>;
}

/// Confirms a like toggle with the backend.
#[allow(async_fn_in_trait)]
pub trait LikeProvider {
    async fn toggle_like(&self, id: &str) -> Result<(), ApiError>;
}

/// A listing endpoint of the backend API.
pub struct Listing<T> {
    client: ApiClient,
    resource: &'static str,
    item_keys: &'static [&'static str],
    _item: PhantomData<fn() -> T>,
}

impl<T> Clone for Listing<T> {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
            resource: self.resource,
            item_keys: self.item_keys,
            _item: PhantomData,
        }
    }
}

impl<T> Listing<T> {
    pub fn new(
        client: ApiClient,
        resource: &'static str,
        item_keys: &'static [&'static str],
    ) -> Self {
        Self {
            client,
            resource,
            item_keys,
            _item: PhantomData,
        }
    }
}

impl Listing<Reel> {
    pub fn reels(client: ApiClient) -> Self {
        Self::new(client, resource::REELS, item_keys::REELS)
    }
}

impl Listing<Post> {
    pub fn posts(client: ApiClient) -> Self {
        Self::new(client, resource::POSTS, item_keys::POSTS)
    }
}

impl Listing<Notification> {
    pub fn notifications(client: ApiClient) -> Self {
        Self::new(client, resource::NOTIFICATIONS, item_keys::NOTIFICATIONS)
    }
}

impl<T: FeedItem + DeserializeOwned> FeedProvider for Listing<T> {
    type Item = T;

    async fn fetch_page(&self, cursor: Option<&str>) -> Result<Page<T>, ApiError> {
        self.client
            .list(self.resource, cursor, self.item_keys)
            .await
    }
}

impl<T> LikeProvider for Listing<T> {
    async fn toggle_like(&self, id: &str) -> Result<(), ApiError> {
        self.client.like(self.resource, id).await
    }
}
