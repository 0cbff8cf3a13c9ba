pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use adapters::{EphemeralJournal, FileJournal, InMemoryRepository, JournalLayout, LineConsole};
pub use app::{Runtime, Session};
pub use config::Settings;
pub use crate::core::{Command, CommandOutcome, Dispatcher};
pub use utils::error::{Result, StudentMarkError};
