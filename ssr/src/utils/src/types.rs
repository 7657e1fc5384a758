use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Identity reported by the session endpoint.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SessionUser {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

/// Attribution attached to reels, posts and notifications.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct Author {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub username: String,
    #[serde(alias = "name")]
    pub display_name: Option<String>,
    #[serde(alias = "avatar", alias = "profilePic")]
    pub avatar_url: Option<String>,
}

impl Author {
    pub fn display_name(&self) -> &str {
        match self.display_name.as_deref() {
            Some(name) if !name.trim().is_empty() => name,
            _ if !self.username.is_empty() => &self.username,
            _ => "Unknown",
        }
    }
}

/// Identifiers show up both as JSON strings and as numbers.
pub fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        Value::Null => Ok(String::new()),
        other => Err(D::Error::custom(format!(
            "expected string or number id, got {other}"
        ))),
    }
}

pub fn option_string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let id = string_or_number(deserializer)?;
    Ok(Some(id).filter(|id| !id.is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn author_accepts_numeric_id_and_aliases() {
        let author: Author = serde_json::from_value(serde_json::json!({
            "id": 42,
            "username": "sam",
            "name": "Sam",
            "avatar": "/a.png"
        }))
        .unwrap();
        assert_eq!(author.id, "42");
        assert_eq!(author.display_name(), "Sam");
        assert_eq!(author.avatar_url.as_deref(), Some("/a.png"));
    }

    #[test]
    fn display_name_falls_back_to_username() {
        let author = Author {
            username: "sam".into(),
            display_name: Some("  ".into()),
            ..Default::default()
        };
        assert_eq!(author.display_name(), "sam");
        assert_eq!(Author::default().display_name(), "Unknown");
    }
}
