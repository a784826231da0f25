//! User preferences kept in Redis.

pub mod handlers;
pub mod store;
