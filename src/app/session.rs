use crate::app::menu::{self, MenuChoice, MENU};
use crate::app::render;
use crate::core::dispatcher::Dispatcher;
use crate::core::handlers::{self, CommandOutcome};
use crate::domain::commands::Command;
use crate::domain::ports::{Console, Journal, Repository};
use crate::utils::error::{Result, StudentMarkError};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    pub commands_executed: usize,
    pub errors_reported: usize,
}

/// One read-evaluate-print session over a repository it owns.
pub struct Session<R: Repository, J: Journal> {
    repo: R,
    dispatcher: Dispatcher<R>,
    journal: J,
    stats: SessionStats,
}

impl<R: Repository, J: Journal> Session<R, J> {
    pub fn new(repo: R, journal: J) -> Self {
        Self::with_dispatcher(repo, Dispatcher::new(), journal)
    }

    pub fn with_dispatcher(repo: R, dispatcher: Dispatcher<R>, journal: J) -> Self {
        Self {
            repo,
            dispatcher,
            journal,
            stats: SessionStats::default(),
        }
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    pub fn stats(&self) -> SessionStats {
        self.stats
    }

    pub fn into_parts(self) -> (R, J) {
        (self.repo, self.journal)
    }

    /// Runs a command and, when it changed state, appends it to the journal.
    pub fn execute(&mut self, command: &Command) -> Result<CommandOutcome> {
        self.journal.check(command)?;
        let outcome = self.dispatcher.dispatch(command, &mut self.repo)?;
        if command.is_mutating() {
            self.journal.record(command)?;
        }
        self.stats.commands_executed += 1;
        Ok(outcome)
    }

    /// Menu loop until the user exits or input ends. Recoverable errors are
    /// shown and the menu comes back; anything else ends the session.
    pub fn run<C: Console + ?Sized>(&mut self, console: &mut C) -> Result<SessionStats> {
        loop {
            console.write_line(MENU)?;
            let raw = match console.read_line() {
                Ok(Some(raw)) => raw,
                Ok(None) => break,
                Err(e) => {
                    self.report(console, e)?;
                    continue;
                }
            };

            let choice = match raw.parse::<MenuChoice>() {
                Ok(choice) => choice,
                Err(e) => {
                    self.report(console, e)?;
                    continue;
                }
            };

            match choice {
                MenuChoice::Exit => break,
                MenuChoice::ListStudents => {
                    let ranked = handlers::list_students(&self.repo);
                    for line in render::student_lines(&ranked) {
                        console.write_line(&line)?;
                    }
                }
                other => {
                    let command = match menu::read_command(other, console) {
                        Ok(Some(command)) => command,
                        Ok(None) => break,
                        Err(e) => {
                            self.report(console, e)?;
                            continue;
                        }
                    };

                    match self.execute(&command) {
                        Ok(outcome) => {
                            for line in render::outcome_lines(&outcome) {
                                console.write_line(&line)?;
                            }
                        }
                        Err(e) => self.report(console, e)?,
                    }
                }
            }
        }

        console.write_line("Ending program...")?;
        tracing::info!(
            "Session ended after {} commands ({} errors reported)",
            self.stats.commands_executed,
            self.stats.errors_reported
        );
        Ok(self.stats)
    }

    fn report<C: Console + ?Sized>(
        &mut self,
        console: &mut C,
        error: StudentMarkError,
    ) -> Result<()> {
        if !error.is_recoverable() {
            tracing::error!("Fatal error: {}", error);
            return Err(error);
        }

        tracing::debug!("Reporting recoverable error: {}", error);
        self.stats.errors_reported += 1;
        console.write_line(&error.user_friendly_message())
    }
}
