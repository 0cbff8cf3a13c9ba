use crate::config::toml_config::TomlConfig;
use crate::config::Settings;
use crate::utils::error::Result;
use crate::utils::logger::LogFormat;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "student-mark")]
#[command(about = "Track students, their courses and marks, and calculate GPAs")]
pub struct CliConfig {
    /// Directory holding the record files and the archive [default: ./data]
    #[arg(long)]
    pub data_dir: Option<PathBuf>,

    /// Archive file name inside the data directory [default: student.dat]
    #[arg(long)]
    pub archive: Option<String>,

    /// Optional TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Keep everything in memory; nothing is loaded or saved
    #[arg(long)]
    pub ephemeral: bool,

    /// Log format written to stderr (compact or json)
    #[arg(long)]
    pub log_format: Option<LogFormat>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Defaults, then the config file, then explicit command-line flags.
    pub fn resolve(&self) -> Result<Settings> {
        let mut settings = Settings::default();

        if let Some(path) = &self.config {
            TomlConfig::from_file(path)?.apply_to(&mut settings)?;
        }

        if let Some(dir) = &self.data_dir {
            settings.data_dir = dir.clone();
        }
        if let Some(archive) = &self.archive {
            settings.archive = archive.clone();
        }
        if let Some(format) = self.log_format {
            settings.log_format = format;
        }
        settings.ephemeral |= self.ephemeral;
        settings.verbose |= self.verbose;

        Ok(settings)
    }
}
