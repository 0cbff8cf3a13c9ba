pub mod dispatcher;
pub mod handlers;

pub use crate::domain::commands::{Command, CommandKind};
pub use crate::domain::ports::{Console, Journal, Repository};
pub use crate::utils::error::Result;
pub use dispatcher::Dispatcher;
pub use handlers::CommandOutcome;
