use chrono::{DateTime, Utc};
use serde::Deserialize;

use super::{lenient_timestamp, FeedItem};
use crate::route;
use crate::types::{option_string_or_number, string_or_number, Author};

#[derive(Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Like,
    Comment,
    Follow,
    Mention,
    #[default]
    #[serde(other)]
    Other,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, rename = "type", alias = "kind")]
    pub kind: NotificationKind,
    #[serde(default, alias = "user", alias = "from")]
    pub actor: Option<Author>,
    #[serde(default, alias = "text", alias = "body")]
    pub message: Option<String>,
    #[serde(default, deserialize_with = "option_string_or_number")]
    pub reel_id: Option<String>,
    #[serde(default, deserialize_with = "option_string_or_number")]
    pub post_id: Option<String>,
    #[serde(default, alias = "isRead")]
    pub read: bool,
}

impl Notification {
    /// The server-provided text, or one derived from the kind and actor.
    pub fn summary(&self) -> String {
        if let Some(message) = self.message.as_deref().filter(|m| !m.trim().is_empty()) {
            return message.to_string();
        }
        let who = self
            .actor
            .as_ref()
            .map(|a| a.display_name().to_string())
            .unwrap_or_else(|| "Someone".to_string());
        let target = if self.reel_id.is_some() { "reel" } else { "post" };
        match self.kind {
            NotificationKind::Like => format!("{who} liked your {target}"),
            NotificationKind::Comment => format!("{who} commented on your {target}"),
            NotificationKind::Follow => format!("{who} started following you"),
            NotificationKind::Mention => format!("{who} mentioned you"),
            NotificationKind::Other => "You have a new notification".to_string(),
        }
    }

    /// Where tapping the notification leads.
    pub fn target_path(&self) -> Option<String> {
        if let Some(id) = &self.reel_id {
            return Some(route::reel_path(id));
        }
        if let Some(id) = &self.post_id {
            return Some(route::post_path(id));
        }
        self.actor
            .as_ref()
            .filter(|a| !a.username.is_empty())
            .map(|a| route::profile_path(&a.username))
    }
}

impl FeedItem for Notification {
    fn key(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn notif(value: serde_json::Value) -> Notification {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn like_on_reel_targets_the_reel() {
        let n = notif(json!({
            "id": 1,
            "type": "like",
            "actor": { "id": "u", "username": "ana" },
            "reelId": 99,
        }));
        assert_eq!(n.summary(), "ana liked your reel");
        assert_eq!(n.target_path().as_deref(), Some("/reels/99"));
        assert!(!n.read);
    }

    #[test]
    fn follow_targets_actor_profile() {
        let n = notif(json!({
            "id": "n2",
            "kind": "follow",
            "user": { "id": "u", "username": "bo" },
            "isRead": true,
        }));
        assert_eq!(n.target_path().as_deref(), Some("/profile/bo"));
        assert!(n.read);
    }

    #[test]
    fn unknown_kind_and_message_passthrough() {
        let n = notif(json!({ "id": "n3", "type": "promo", "text": "Sale!" }));
        assert_eq!(n.kind, NotificationKind::Other);
        assert_eq!(n.summary(), "Sale!");
        assert_eq!(n.target_path(), None);
    }
}
