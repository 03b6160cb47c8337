pub mod bookmarks;
pub mod core;
pub mod types;
