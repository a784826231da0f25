//! Saved texts: validation, storage, and the history endpoints.

pub mod handlers;
pub mod models;
pub mod store;
pub mod validation;
