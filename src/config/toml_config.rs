use crate::config::Settings;
use crate::utils::error::{Result, StudentMarkError};
use crate::utils::logger::LogFormat;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Optional configuration file. Every key may be left out.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    pub storage: Option<StorageConfig>,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StorageConfig {
    pub data_dir: Option<PathBuf>,
    pub archive: Option<String>,
    pub students_file: Option<String>,
    pub courses_file: Option<String>,
    pub marks_file: Option<String>,
    pub ephemeral: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    pub format: Option<String>,
    pub verbose: Option<bool>,
}

impl TomlConfig {
    /// Loads and parses a TOML configuration file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;
        Ok(toml::from_str(&processed_content)?)
    }

    /// Replaces `${VAR}` with the environment value; unknown variables are left as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}")
            .map_err(|e| StudentMarkError::config(format!("bad substitution pattern: {}", e)))?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// Layers the file's values over `settings`.
    pub fn apply_to(&self, settings: &mut Settings) -> Result<()> {
        if let Some(storage) = &self.storage {
            if let Some(dir) = &storage.data_dir {
                settings.data_dir = dir.clone();
            }
            if let Some(archive) = &storage.archive {
                settings.archive = archive.clone();
            }
            if let Some(name) = &storage.students_file {
                settings.layout.students_file = name.clone();
            }
            if let Some(name) = &storage.courses_file {
                settings.layout.courses_file = name.clone();
            }
            if let Some(name) = &storage.marks_file {
                settings.layout.marks_file = name.clone();
            }
            if let Some(ephemeral) = storage.ephemeral {
                settings.ephemeral = ephemeral;
            }
        }

        if let Some(logging) = &self.logging {
            if let Some(format) = &logging.format {
                settings.log_format = format
                    .parse::<LogFormat>()
                    .map_err(StudentMarkError::config)?;
            }
            if let Some(verbose) = logging.verbose {
                settings.verbose = verbose;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::validation::Validate;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[storage]
data_dir = "/var/lib/student-mark"
archive = "backup.dat"
students_file = "s.txt"
courses_file = "c.txt"
marks_file = "m.txt"

[logging]
format = "json"
verbose = true
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        let mut settings = Settings::default();
        config.apply_to(&mut settings).unwrap();

        assert_eq!(settings.data_dir, PathBuf::from("/var/lib/student-mark"));
        assert_eq!(settings.archive, "backup.dat");
        assert_eq!(settings.layout.file_names(), ["s.txt", "c.txt", "m.txt"]);
        assert_eq!(settings.log_format, LogFormat::Json);
        assert!(settings.verbose);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_empty_config_keeps_defaults() {
        let config = TomlConfig::from_toml_str("").unwrap();
        let mut settings = Settings::default();
        config.apply_to(&mut settings).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("STUDENT_MARK_TEST_DIR", "/tmp/marks");

        let config = TomlConfig::from_toml_str(
            r#"
[storage]
data_dir = "${STUDENT_MARK_TEST_DIR}/data"
"#,
        )
        .unwrap();
        assert_eq!(
            config.storage.unwrap().data_dir,
            Some(PathBuf::from("/tmp/marks/data"))
        );

        std::env::remove_var("STUDENT_MARK_TEST_DIR");
    }

    #[test]
    fn test_unknown_keys_and_formats_are_errors() {
        assert!(TomlConfig::from_toml_str("[storage]\nfolder = \"x\"\n").is_err());

        let config = TomlConfig::from_toml_str("[logging]\nformat = \"xml\"\n").unwrap();
        assert!(config.apply_to(&mut Settings::default()).is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[storage]\nephemeral = true\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        let mut settings = Settings::default();
        config.apply_to(&mut settings).unwrap();
        assert!(settings.ephemeral);
    }
}
