pub mod api;
pub mod error;
pub mod fallback;
pub mod model;
