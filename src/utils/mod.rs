pub mod database;
pub mod fallback;
pub mod id;
pub mod json;
pub mod validation;
