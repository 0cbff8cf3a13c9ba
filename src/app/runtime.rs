use crate::adapters::archive;
use crate::adapters::journal::{EphemeralJournal, FileJournal, ReplayReport};
use crate::adapters::repository::InMemoryRepository;
use crate::app::session::{Session, SessionStats};
use crate::config::Settings;
use crate::core::dispatcher::Dispatcher;
use crate::domain::ports::Console;
use crate::utils::error::Result;
use std::fs;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub restored_files: usize,
    pub replay: ReplayReport,
    pub session: SessionStats,
    pub packed_files: usize,
}

/// Startup, menu loop and shutdown around one session.
pub struct Runtime {
    settings: Settings,
}

impl Runtime {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn run<C: Console + ?Sized>(&self, console: &mut C) -> Result<RunSummary> {
        if self.settings.ephemeral {
            tracing::info!("Running in-memory only; nothing will be saved");
            let mut session = Session::new(InMemoryRepository::new(), EphemeralJournal);
            let stats = session.run(console)?;
            return Ok(RunSummary {
                session: stats,
                ..RunSummary::default()
            });
        }

        let (mut session, restored_files, replay) = self.open()?;
        let outcome = session.run(console);

        // Records are appended as they happen, so pack even when the loop failed.
        let packed = self.close();
        let stats = outcome?;
        let packed_files = packed?;

        Ok(RunSummary {
            restored_files,
            replay,
            session: stats,
            packed_files,
        })
    }

    /// Unpacks the archive and replays the journal into a fresh repository.
    pub fn open(&self) -> Result<(Session<InMemoryRepository, FileJournal>, usize, ReplayReport)> {
        let data_dir = &self.settings.data_dir;
        fs::create_dir_all(data_dir)?;
        tracing::info!("Using data directory {}", data_dir.display());

        let restored = archive::unpack(&self.settings.archive_path(), data_dir)?;

        let journal = FileJournal::new(data_dir.clone(), self.settings.layout.clone());
        let dispatcher = Dispatcher::new();
        let mut repo = InMemoryRepository::new();
        let replay = journal.replay_into(&dispatcher, &mut repo)?;

        Ok((
            Session::with_dispatcher(repo, dispatcher, journal),
            restored,
            replay,
        ))
    }

    /// Packs the record files into the archive.
    pub fn close(&self) -> Result<usize> {
        archive::pack(
            &self.settings.data_dir,
            &self.settings.layout.file_names(),
            &self.settings.archive_path(),
        )
    }
}
