pub mod config;
pub mod node;
pub mod service;
pub mod snapshot;
pub mod validate;
