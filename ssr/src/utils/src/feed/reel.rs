use chrono::{DateTime, Utc};
use serde::Deserialize;

use super::{lenient_timestamp, FeedItem, LikeState};
use crate::types::{string_or_number, Author};

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Reel {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, alias = "user")]
    pub author: Author,
    #[serde(alias = "url", alias = "mediaUrl")]
    pub video_url: String,
    #[serde(default, alias = "thumbnail", alias = "posterUrl")]
    pub thumbnail_url: Option<String>,
    #[serde(default, alias = "description")]
    pub caption: String,
    #[serde(default, alias = "likes")]
    pub likes_count: u64,
    #[serde(default, alias = "isLiked", alias = "liked")]
    pub viewer_has_liked: bool,
    #[serde(default, alias = "comments")]
    pub comments_count: u64,
}

impl FeedItem for Reel {
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

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_minimal_reel() {
        let reel: Reel = serde_json::from_value(json!({
            "id": 7,
            "url": "/v/7.mp4",
        }))
        .unwrap();
        assert_eq!(reel.id, "7");
        assert_eq!(reel.video_url, "/v/7.mp4");
        assert_eq!(reel.like_state(), Some(LikeState::new(false, 0)));
        assert!(reel.created_at.is_none());
    }

    #[test]
    fn decodes_full_reel() {
        let reel: Reel = serde_json::from_value(json!({
            "id": "r1",
            "createdAt": "2024-05-01T10:00:00Z",
            "author": { "id": "u1", "username": "ana" },
            "videoUrl": "https://cdn/v.mp4",
            "thumbnailUrl": "/t.jpg",
            "caption": "hello",
            "likesCount": 3,
            "viewerHasLiked": true,
            "commentsCount": 2,
        }))
        .unwrap();
        assert_eq!(reel.author.username, "ana");
        assert!(reel.created_at.is_some());
        assert_eq!(reel.like_state(), Some(LikeState::new(true, 3)));
        assert_eq!(reel.comments_count, 2);
    }

    #[test]
    fn set_like_state_writes_both_fields() {
        let mut reel: Reel =
            serde_json::from_value(json!({ "id": "r", "videoUrl": "v" })).unwrap();
        reel.set_like_state(LikeState::new(true, 9));
        assert!(reel.viewer_has_liked);
        assert_eq!(reel.likes_count, 9);
    }
}
