//! Feed items as they arrive from the listing endpoints.
//!
//! Reels, posts and notifications share one contract, [`FeedItem`]: a stable
//! key, plus an optional viewer-relative like state that the optimistic like
//! protocol reads and writes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

pub mod decode;
mod notification;
mod post;
pub mod provider;
mod reel;

pub use notification::{Notification, NotificationKind};
pub use post::{MediaKind, MediaRef, Post};
pub use reel::Reel;

pub trait FeedItem: Clone + 'static {
    fn key(&self) -> &str;

    /// `None` for items that cannot be liked.
    fn like_state(&self) -> Option<LikeState> {
        None
    }

    fn set_like_state(&mut self, _state: LikeState) {}
}

/// Viewer-relative like flag and the public like counter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LikeState {
    pub liked: bool,
    pub count: u64,
}

impl LikeState {
    pub fn new(liked: bool, count: u64) -> Self {
        Self { liked, count }
    }

    /// Flip the flag and move the counter with it. The counter never drops
    /// below zero.
    pub fn toggled(self) -> Self {
        if self.liked {
            Self {
                liked: false,
                count: self.count.saturating_sub(1),
            }
        } else {
            Self {
                liked: true,
                count: self.count.saturating_add(1),
            }
        }
    }
}

/// One decoded page of a listing.
#[derive(Clone, Debug, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub next_cursor: Option<String>,
    pub has_more: bool,
}

impl<T> Page<T> {
    pub fn last(items: Vec<T>) -> Self {
        Self {
            items,
            next_cursor: None,
            has_more: false,
        }
    }

    pub fn with_cursor(items: Vec<T>, cursor: impl Into<String>) -> Self {
        Self {
            items,
            next_cursor: Some(cursor.into()),
            has_more: true,
        }
    }
}

/// RFC 3339 strings or epoch milliseconds; anything else is dropped rather
/// than failing the whole item.
pub(crate) fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(raw)) => DateTime::parse_from_rfc3339(&raw)
            .ok()
            .map(|t| t.with_timezone(&Utc)),
        Some(Value::Number(n)) => n.as_i64().and_then(DateTime::from_timestamp_millis),
        _ => None,
    })
}
