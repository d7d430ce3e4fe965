// File: crates/dashboard-shell/src/lib.rs
// Summary: Shell entry point; hub data sources and client-list / client-detail navigation.

pub mod client;
pub mod config;
pub mod error;
pub mod navigation;
pub mod source;

pub use client::Client;
pub use config::ShellConfig;
pub use error::ShellError;
pub use navigation::{Shell, ShellState, View};
pub use source::{DataSource, HttpDataSource, MemoryDataSource};
