pub mod app;
pub mod config;
pub mod feed;
pub mod handler;
pub mod store;
pub mod synthesis;
