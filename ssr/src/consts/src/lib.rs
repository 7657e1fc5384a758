#[cfg(any(feature = "local-bin", feature = "local-lib"))]
mod local;
#[cfg(any(feature = "local-bin", feature = "local-lib"))]
pub use local::*;

#[cfg(not(any(feature = "local-bin", feature = "local-lib")))]
mod remote;
#[cfg(not(any(feature = "local-bin", feature = "local-lib")))]
pub use remote::*;

pub mod limits;

pub use limits::*;

pub const APP_NAME: &str = "Reels";

pub const LOGIN_PATH: &str = "/login";
pub const REELS_PATH: &str = "/reels";
pub const POSTS_PATH: &str = "/posts";
pub const PROFILE_PATH: &str = "/profile";
pub const NOTIFICATIONS_PATH: &str = "/notifications";

/// Listing resources, relative to [`API_BASE_URL`].
pub mod resource {
    pub const REELS: &str = "reels";
    pub const POSTS: &str = "posts";
    pub const NOTIFICATIONS: &str = "notifications";
    pub const SESSION: &str = "auth/session";
}

/// Field names tried, in order, when a listing response wraps its items.
pub mod item_keys {
    pub const REELS: &[&str] = &["reels", "items", "data", "results"];
    pub const POSTS: &[&str] = &["posts", "items", "data", "results"];
    pub const NOTIFICATIONS: &[&str] = &["notifications", "items", "data", "results"];
}
