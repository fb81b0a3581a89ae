pub mod commands;
pub mod config;
pub mod download;
pub mod error;
pub mod github;
pub mod http;
pub mod platform;
pub mod release;
pub mod resolver;
pub mod runtime;
pub mod settings;
