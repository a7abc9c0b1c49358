pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod guard;
pub mod models;
pub mod nutrition;
pub mod session;
