pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod models;
pub mod render;
pub mod view;
