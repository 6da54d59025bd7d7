pub mod common;
pub mod feed;
pub mod health;

pub use feed::get_feed;
pub use health::{health, ready};
