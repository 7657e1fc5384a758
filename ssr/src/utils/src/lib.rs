pub mod api;
pub mod feed;
pub mod media;
pub mod route;
pub mod time;
pub mod types;
