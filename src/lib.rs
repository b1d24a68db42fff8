// Library interface for svcreg - exposes modules for testing
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod service;
