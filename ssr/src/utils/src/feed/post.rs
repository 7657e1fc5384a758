use chrono::{DateTime, Utc};
use serde::Deserialize;

use super::{lenient_timestamp, FeedItem, LikeState};
use crate::types::{string_or_number, Author};

#[derive(Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    #[default]
    Image,
    Video,
    #[serde(other)]
    Other,
}

/// A media attachment. Older payloads send a bare URL string.
#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(untagged)]
pub enum MediaRef {
    Bare(String),
    Detailed {
        url: String,
        #[serde(default, rename = "type", alias = "kind")]
        kind: MediaKind,
    },
}

impl MediaRef {
    pub fn url(&self) -> &str {
        match self {
            MediaRef::Bare(url) | MediaRef::Detailed { url, .. } => url,
        }
    }

    pub fn kind(&self) -> MediaKind {
        match self {
            MediaRef::Detailed { kind, .. } => *kind,
            MediaRef::Bare(url) => {
                let path = url.split(['?', '#']).next().unwrap_or_default();
                let ext = path.rsplit('.').next().unwrap_or_default();
                match ext.to_ascii_lowercase().as_str() {
                    "mp4" | "webm" | "mov" | "m3u8" => MediaKind::Video,
                    _ => MediaKind::Image,
                }
            }
        }
    }
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, alias = "user")]
    pub author: Author,
    #[serde(default, alias = "text", alias = "body")]
    pub content: String,
    #[serde(default, alias = "images", alias = "attachments")]
    pub media: Vec<MediaRef>,
    #[serde(default, alias = "likes")]
    pub likes_count: u64,
    #[serde(default, alias = "isLiked", alias = "liked")]
    pub viewer_has_liked: bool,
    #[serde(default, alias = "comments")]
    pub comments_count: u64,
}

impl FeedItem for Post {
    fn key(&self) -> &str {
        &self.id
    }

    fn like_state(&self) -> Option<LikeState> {
        Some(LikeState::new(self.viewer_has_liked, self.likes_count))
    }

    fn set_like_state(&mut self, state: LikeState) {
        self.viewer_has_liked = state.liked;
        self.likes_count = state.count;
    }
}
