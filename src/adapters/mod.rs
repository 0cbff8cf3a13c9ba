// Adapters layer: concrete implementations of the domain ports plus on-disk packing.

pub mod archive;
pub mod console;
pub mod journal;
pub mod repository;

pub use console::LineConsole;
pub use journal::{EphemeralJournal, FileJournal, JournalLayout, ReplayReport};
pub use repository::InMemoryRepository;
