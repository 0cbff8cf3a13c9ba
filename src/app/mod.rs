// Application layer: the console menu, rendering, and the session lifecycle.

pub mod menu;
pub mod render;
pub mod runtime;
pub mod session;

pub use runtime::{RunSummary, Runtime};
pub use session::{Session, SessionStats};
