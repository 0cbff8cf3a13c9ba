use crate::core::handlers::{self, CommandOutcome};
use crate::domain::commands::{Command, CommandKind};
use crate::domain::ports::Repository;
use crate::utils::error::{Result, StudentMarkError};
use std::collections::HashMap;

pub type Handler<R> = fn(&Command, &mut R) -> Result<CommandOutcome>;

/// Registers `$handler` for `Command::$variant`, unwrapping the payload on the way in.
macro_rules! route {
    ($table:ident, $variant:ident, $handler:path) => {
        $table.insert(
            CommandKind::$variant,
            |command: &Command, repo: &mut R| match command {
                Command::$variant(cmd) => $handler(cmd, repo),
                other => Err(StudentMarkError::UnroutableCommand {
                    kind: CommandKind::$variant,
                    received: other.kind(),
                }),
            },
        );
    };
}

/// Static routing table from command kind to handler, built once per session.
pub struct Dispatcher<R: Repository> {
    handlers: HashMap<CommandKind, Handler<R>>,
}

impl<R: Repository> Dispatcher<R> {
    pub fn new() -> Self {
        let mut table: HashMap<CommandKind, Handler<R>> = HashMap::new();
        route!(table, CreateStudent, handlers::create_student);
        route!(table, AddCourse, handlers::add_course);
        route!(table, ListStudentCourses, handlers::list_student_courses);
        route!(table, UpdateCourseMark, handlers::update_course_mark);
        route!(table, CalculateGpa, handlers::calculate_gpa);
        Self { handlers: table }
    }

    pub fn dispatch(&self, command: &Command, repo: &mut R) -> Result<CommandOutcome> {
        let kind = command.kind();
        let handler = self
            .handlers
            .get(&kind)
            .ok_or(StudentMarkError::UnroutableCommand {
                kind,
                received: kind,
            })?;

        tracing::debug!("Dispatching {:?}", kind);
        handler(command, repo)
    }

    pub fn handles(&self, kind: CommandKind) -> bool {
        self.handlers.contains_key(&kind)
    }
}

impl<R: Repository> Default for Dispatcher<R> {
    fn default() -> Self {
        Self::new()
    }
}
