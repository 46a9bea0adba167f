pub mod defaults;
pub mod detail;
pub mod dto;
pub mod filter;
pub mod model;
pub mod view;
