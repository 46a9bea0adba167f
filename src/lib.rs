pub mod calendar;
pub mod catalog;
pub mod config;
pub mod events;
pub mod projects;
pub mod render;
pub mod site;
pub mod tracing;
