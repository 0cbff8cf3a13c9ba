use crate::domain::commands::Command;
use crate::domain::model::Student;
use crate::utils::error::Result;

/// Owner of every student for the lifetime of a session.
///
/// `add` never rejects a duplicate id; lookups resolve to the first student
/// inserted under that id. Mutation goes through `get_mut` in place.
pub trait Repository {
    fn add(&mut self, student: Student);
    fn get(&self, id: &str) -> Option<&Student>;
    fn get_mut(&mut self, id: &str) -> Option<&mut Student>;
    /// All students in insertion order.
    fn list(&self) -> Vec<&Student>;

    fn len(&self) -> usize {
        self.list().len()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Line-oriented terminal access.
pub trait Console {
    /// Next input line without its terminator, or `None` once input is exhausted.
    fn read_line(&mut self) -> Result<Option<String>>;
    fn write_line(&mut self, line: &str) -> Result<()>;
}

/// Durable record of successful mutating commands.
pub trait Journal {
    /// Called before the command is applied; an error means it could not be stored.
    fn check(&self, _command: &Command) -> Result<()> {
        Ok(())
    }

    /// Called after the command has been applied. Non-mutating commands are ignored.
    fn record(&mut self, command: &Command) -> Result<()>;
}
