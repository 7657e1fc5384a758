mod feed_tasks;
pub mod notification;
pub mod posts;
pub mod reels;
