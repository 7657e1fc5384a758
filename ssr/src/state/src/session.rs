use consts::resource;
use leptos::prelude::*;
use utils::{api::ApiClient, types::SessionUser};

/// Who is looking at the feed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SessionStatus {
    #[default]
    Resolving,
    Anonymous,
    Authenticated(SessionUser),
}

impl SessionStatus {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }

    /// Media and interactions are locked for viewers known to be signed out.
    /// Nothing is locked while the session is still resolving.
    pub fn gates_content(&self) -> bool {
        matches!(self, Self::Anonymous)
    }
}

impl From<Option<SessionUser>> for SessionStatus {
    fn from(user: Option<SessionUser>) -> Self {
        user.map_or(Self::Anonymous, Self::Authenticated)
    }
}

#[derive(Clone, Copy)]
pub struct AuthState {
    pub status: RwSignal<SessionStatus>,
}

impl AuthState {
    /// Provides the session context and starts resolving it.
    pub fn register_global() -> Self {
        let this = Self {
            status: RwSignal::new(SessionStatus::Resolving),
        };
        provide_context(this);

        Effect::new(move |_| {
            leptos::task::spawn_local(async move {
                let status = match ApiClient::default().session(resource::SESSION).await {
                    Ok(user) => SessionStatus::from(user),
                    Err(e) => {
                        log::warn!("failed to resolve session, treating viewer as anonymous: {e}");
                        SessionStatus::Anonymous
                    }
                };
                this.status.try_set(status);
            });
        });

        this
    }

    pub fn get() -> Self {
        match use_context() {
            Some(this) => this,
            None => Self::register_global(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_anonymous_viewers_are_gated() {
        assert!(!SessionStatus::Resolving.gates_content());
        assert!(SessionStatus::Anonymous.gates_content());
        let user = SessionUser {
            id: "1".into(),
            username: "sam".into(),
            avatar_url: None,
        };
        let status = SessionStatus::from(Some(user.clone()));
        assert!(!status.gates_content());
        assert_eq!(status, SessionStatus::Authenticated(user));
    }

    #[test]
    fn missing_user_is_anonymous() {
        assert_eq!(SessionStatus::from(None), SessionStatus::Anonymous);
    }
}
