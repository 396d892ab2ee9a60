//! Menu Domain Module
//!
//! The menu provider: seeded catalog of dishes and its read-only endpoints.

pub mod handlers;
pub mod models;
pub mod store;

pub use handlers::routes;
pub use models::MenuItem;
pub use store::MenuStore;
