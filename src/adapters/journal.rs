use crate::core::dispatcher::Dispatcher;
use crate::domain::commands::{AddCourse, Command, CreateStudent, UpdateCourseMark};
use crate::domain::ports::{Journal, Repository};
use crate::utils::error::{Result, StudentMarkError};
use crate::utils::validation::{parse_mark, validate_token};
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};

pub const DEFAULT_STUDENTS_FILE: &str = "students.txt";
pub const DEFAULT_COURSES_FILE: &str = "courses.txt";
pub const DEFAULT_MARKS_FILE: &str = "marks.txt";

/// Names of the three record files inside the data directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JournalLayout {
    pub students_file: String,
    pub courses_file: String,
    pub marks_file: String,
}

impl Default for JournalLayout {
    fn default() -> Self {
        Self {
            students_file: DEFAULT_STUDENTS_FILE.to_string(),
            courses_file: DEFAULT_COURSES_FILE.to_string(),
            marks_file: DEFAULT_MARKS_FILE.to_string(),
        }
    }
}

impl JournalLayout {
    /// Replay order: a course needs its student, a mark needs its course.
    pub fn file_names(&self) -> [&str; 3] {
        [
            self.students_file.as_str(),
            self.courses_file.as_str(),
            self.marks_file.as_str(),
        ]
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplayReport {
    pub applied: usize,
    pub skipped: usize,
}

/// Append-only, space-delimited record files, one per mutating command kind.
#[derive(Debug, Clone)]
pub struct FileJournal {
    data_dir: PathBuf,
    layout: JournalLayout,
}

impl FileJournal {
    pub fn new(data_dir: impl Into<PathBuf>, layout: JournalLayout) -> Self {
        Self {
            data_dir: data_dir.into(),
            layout,
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn layout(&self) -> &JournalLayout {
        &self.layout
    }

    /// Rebuilds repository state by dispatching every stored record, students first,
    /// then courses, then marks. Records the handlers reject are skipped with a warning;
    /// records that cannot be parsed abort the replay.
    pub fn replay_into<R: Repository>(
        &self,
        dispatcher: &Dispatcher<R>,
        repo: &mut R,
    ) -> Result<ReplayReport> {
        let mut report = ReplayReport::default();

        let sources: [(&str, RecordParser); 3] = [
            (&self.layout.students_file, parse_student),
            (&self.layout.courses_file, parse_course),
            (&self.layout.marks_file, parse_mark_record),
        ];

        for (file, parse) in sources {
            for (line, command) in self.read_commands(file, parse)? {
                match dispatcher.dispatch(&command, repo) {
                    Ok(_) => report.applied += 1,
                    Err(e) if e.is_recoverable() => {
                        tracing::warn!("Skipping {} line {}: {}", file, line, e);
                        report.skipped += 1;
                    }
                    Err(e) => return Err(e),
                }
            }
        }

        tracing::info!(
            "Replayed {} records ({} skipped) from {}",
            report.applied,
            report.skipped,
            self.data_dir.display()
        );
        Ok(report)
    }

    fn read_commands(&self, file: &str, parse: RecordParser) -> Result<Vec<(u64, Command)>> {
        let path = self.data_dir.join(file);
        if !path.exists() {
            tracing::debug!("No record file at {}, nothing to replay", path.display());
            return Ok(Vec::new());
        }

        let mut reader = csv::ReaderBuilder::new()
            .delimiter(b' ')
            .has_headers(false)
            .flexible(true)
            .quoting(false)
            .from_path(&path)?;

        let mut commands = Vec::new();
        for record in reader.records() {
            let record = record?;
            let line = record.position().map(|p| p.line()).unwrap_or(0);
            let fields: Vec<&str> = record.iter().filter(|f| !f.is_empty()).collect();
            if fields.is_empty() {
                continue;
            }

            let command = parse(&fields).map_err(|reason| StudentMarkError::CorruptRecord {
                file: file.to_string(),
                line,
                reason,
            })?;
            commands.push((line, command));
        }

        Ok(commands)
    }

    /// Record file and fields for a mutating command. Every field must be a single
    /// space-free token, otherwise the line could not be read back.
    fn target_file(&self, command: &Command) -> Result<Option<(&str, Vec<String>)>> {
        let (file, fields): (&str, Vec<(&str, String)>) = match command {
            Command::CreateStudent(cmd) => (
                self.layout.students_file.as_str(),
                vec![
                    ("id", cmd.id.clone()),
                    ("name", cmd.name.clone()),
                    ("date_of_birth", cmd.date_of_birth.clone()),
                ],
            ),
            Command::AddCourse(cmd) => (
                self.layout.courses_file.as_str(),
                vec![
                    ("student_id", cmd.student_id.clone()),
                    ("id", cmd.id.clone()),
                    ("name", cmd.name.clone()),
                    ("credit", cmd.credit.to_string()),
                ],
            ),
            Command::UpdateCourseMark(cmd) => (
                self.layout.marks_file.as_str(),
                vec![
                    ("student_id", cmd.student_id.clone()),
                    ("id", cmd.id.clone()),
                    ("mark", cmd.mark.to_string()),
                ],
            ),
            Command::ListStudentCourses(_) | Command::CalculateGpa(_) => return Ok(None),
        };

        for (name, value) in &fields {
            validate_token(name, value)?;
        }
        Ok(Some((file, fields.into_iter().map(|(_, value)| value).collect())))
    }
}

impl Journal for FileJournal {
    fn check(&self, command: &Command) -> Result<()> {
        self.target_file(command).map(|_| ())
    }

    fn record(&mut self, command: &Command) -> Result<()> {
        let Some((file, fields)) = self.target_file(command)? else {
            return Ok(());
        };

        fs::create_dir_all(&self.data_dir)?;
        let path = self.data_dir.join(file);
        let handle = OpenOptions::new().create(true).append(true).open(&path)?;

        let mut writer = csv::WriterBuilder::new()
            .delimiter(b' ')
            .has_headers(false)
            .quote_style(csv::QuoteStyle::Never)
            .from_writer(handle);
        writer.write_record(&fields)?;
        writer.flush()?;

        tracing::debug!("Appended {:?} record to {}", command.kind(), path.display());
        Ok(())
    }
}

/// Journal for sessions that keep everything in memory.
#[derive(Debug, Clone, Copy, Default)]
pub struct EphemeralJournal;

impl Journal for EphemeralJournal {
    fn record(&mut self, _command: &Command) -> Result<()> {
        Ok(())
    }
}

type RecordParser = fn(&[&str]) -> std::result::Result<Command, String>;

fn expect_fields<'a>(
    fields: &'a [&'a str],
    names: &[&str],
) -> std::result::Result<&'a [&'a str], String> {
    if fields.len() != names.len() {
        return Err(format!(
            "expected {} fields ({}), found {}",
            names.len(),
            names.join(" "),
            fields.len()
        ));
    }
    Ok(fields)
}

fn parse_student(fields: &[&str]) -> std::result::Result<Command, String> {
    let f = expect_fields(fields, &["id", "name", "date_of_birth"])?;
    Ok(CreateStudent {
        id: f[0].to_string(),
        name: f[1].to_string(),
        date_of_birth: f[2].to_string(),
    }
    .into())
}

fn parse_course(fields: &[&str]) -> std::result::Result<Command, String> {
    let f = expect_fields(fields, &["student_id", "id", "name", "credit"])?;
    let credit = f[3]
        .parse::<u32>()
        .map_err(|_| format!("credit '{}' is not a whole number", f[3]))?;
    Ok(AddCourse {
        student_id: f[0].to_string(),
        id: f[1].to_string(),
        name: f[2].to_string(),
        credit,
    }
    .into())
}

fn parse_mark_record(fields: &[&str]) -> std::result::Result<Command, String> {
    let f = expect_fields(fields, &["student_id", "id", "mark"])?;
    let mark = parse_mark("mark", f[2]).map_err(|e| e.to_string())?;
    Ok(UpdateCourseMark {
        student_id: f[0].to_string(),
        id: f[1].to_string(),
        mark,
    }
    .into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::repository::InMemoryRepository;
    use tempfile::TempDir;

    #[test]
    fn test_replay_of_empty_directory() {
        let dir = TempDir::new().unwrap();
        let journal = FileJournal::new(dir.path(), JournalLayout::default());
        let mut repo = InMemoryRepository::new();

        let report = journal.replay_into(&Dispatcher::new(), &mut repo).unwrap();
        assert_eq!(report, ReplayReport::default());
        assert!(repo.is_empty());
    }

    #[test]
    fn test_reads_files_with_trailing_spaces() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("students.txt"), "s1 Ada 1815-12-10 \n\ns2  Alan 1912-06-23 \n").unwrap();
        fs::write(dir.path().join("courses.txt"), "s1 c1 Maths 3 \n").unwrap();
        fs::write(dir.path().join("marks.txt"), "s1 c1 8.7 \n").unwrap();

        let journal = FileJournal::new(dir.path(), JournalLayout::default());
        let mut repo = InMemoryRepository::new();
        let report = journal.replay_into(&Dispatcher::new(), &mut repo).unwrap();

        assert_eq!(report.applied, 4);
        assert_eq!(repo.len(), 2);
        assert_eq!(repo.get("s2").unwrap().name, "Alan");
        assert_eq!(repo.get("s1").unwrap().course("c1").unwrap().mark, 8);
    }

    #[test]
    fn test_orphan_records_are_skipped() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("students.txt"), "s1 Ada 1815-12-10\n").unwrap();
        fs::write(dir.path().join("courses.txt"), "s9 c1 Maths 3\ns1 c2 Logic 2\n").unwrap();
        fs::write(dir.path().join("marks.txt"), "s1 c1 5\n").unwrap();

        let journal = FileJournal::new(dir.path(), JournalLayout::default());
        let mut repo = InMemoryRepository::new();
        let report = journal.replay_into(&Dispatcher::new(), &mut repo).unwrap();

        assert_eq!(report, ReplayReport { applied: 2, skipped: 2 });
        assert_eq!(repo.get("s1").unwrap().courses.len(), 1);
    }

    #[test]
    fn test_malformed_record_is_corrupt() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("students.txt"), "s1 Ada 1815-12-10\n").unwrap();
        fs::write(dir.path().join("courses.txt"), "s1 c1 Maths\n").unwrap();

        let journal = FileJournal::new(dir.path(), JournalLayout::default());
        let mut repo = InMemoryRepository::new();
        let err = journal.replay_into(&Dispatcher::new(), &mut repo).unwrap_err();

        match err {
            StudentMarkError::CorruptRecord { file, line, .. } => {
                assert_eq!(file, "courses.txt");
                assert_eq!(line, 1);
            }
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn test_record_ignores_queries() {
        let dir = TempDir::new().unwrap();
        let mut journal = FileJournal::new(dir.path(), JournalLayout::default());
        journal
            .record(&Command::CalculateGpa(crate::domain::commands::CalculateGpa {
                id: "s1".into(),
            }))
            .unwrap();

        assert!(fs::read_dir(dir.path()).unwrap().next().is_none());
    }

    #[test]
    fn test_record_rejects_fields_with_spaces() {
        let dir = TempDir::new().unwrap();
        let mut journal = FileJournal::new(dir.path(), JournalLayout::default());
        let command = Command::from(CreateStudent {
            id: "s1".into(),
            name: "Ada Lovelace".into(),
            date_of_birth: "1815-12-10".into(),
        });

        assert!(journal.check(&command).is_err());
        let err = journal.record(&command).unwrap_err();
        assert!(matches!(err, StudentMarkError::InvalidInput { ref field, .. } if field == "name"));
        assert!(!dir.path().join("students.txt").exists());

        let mut repo = InMemoryRepository::new();
        journal.replay_into(&Dispatcher::new(), &mut repo).unwrap();
        assert!(repo.is_empty());
    }

    #[test]
    fn test_record_appends_lines() {
        let dir = TempDir::new().unwrap();
        let mut journal = FileJournal::new(dir.path(), JournalLayout::default());
        journal
            .record(&Command::from(UpdateCourseMark {
                student_id: "s1".into(),
                id: "c1".into(),
                mark: 7.5,
            }))
            .unwrap();
        journal
            .record(&Command::from(UpdateCourseMark {
                student_id: "s1".into(),
                id: "c1".into(),
                mark: 9.0,
            }))
            .unwrap();

        let content = fs::read_to_string(dir.path().join("marks.txt")).unwrap();
        assert_eq!(content, "s1 c1 7.5\ns1 c1 9\n");
    }
}
