#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::adapters::archive::DEFAULT_ARCHIVE_NAME;
use crate::adapters::journal::JournalLayout;
use crate::utils::error::{Result, StudentMarkError};
use crate::utils::logger::LogFormat;
use crate::utils::validation::{validate_file_name, validate_path, Validate};
use std::path::PathBuf;

pub const DEFAULT_DATA_DIR: &str = "./data";

/// Resolved settings the runtime works from, whatever the source.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub data_dir: PathBuf,
    pub archive: String,
    pub layout: JournalLayout,
    /// Keep everything in memory: no replay, no journal, no archive.
    pub ephemeral: bool,
    pub verbose: bool,
    pub log_format: LogFormat,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            archive: DEFAULT_ARCHIVE_NAME.to_string(),
            layout: JournalLayout::default(),
            ephemeral: false,
            verbose: false,
            log_format: LogFormat::default(),
        }
    }
}

impl Settings {
    pub fn archive_path(&self) -> PathBuf {
        self.data_dir.join(&self.archive)
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_path("data_dir", &self.data_dir.to_string_lossy())?;
        validate_file_name("archive", &self.archive)?;
        validate_file_name("students_file", &self.layout.students_file)?;
        validate_file_name("courses_file", &self.layout.courses_file)?;
        validate_file_name("marks_file", &self.layout.marks_file)?;

        let names = self.layout.file_names();
        if names.contains(&self.archive.as_str())
            || names[0] == names[1]
            || names[1] == names[2]
            || names[0] == names[2]
        {
            return Err(StudentMarkError::config(
                "archive and record files must all have distinct names",
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.archive_path(), PathBuf::from("./data/student.dat"));
    }

    #[test]
    fn test_clashing_file_names_are_rejected() {
        let mut settings = Settings::default();
        settings.layout.marks_file = "students.txt".to_string();
        assert!(settings.validate().is_err());

        let mut settings = Settings::default();
        settings.archive = "courses.txt".to_string();
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_nested_archive_name_is_rejected() {
        let settings = Settings {
            archive: "backup/student.dat".to_string(),
            ..Settings::default()
        };
        assert!(settings.validate().is_err());
    }
}
