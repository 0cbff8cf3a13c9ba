use crate::utils::error::Result;
use std::fs::{self, File};
use std::io;
use std::path::{Component, Path};
use zip::write::{FileOptions, ZipWriter};
use zip::ZipArchive;

pub const DEFAULT_ARCHIVE_NAME: &str = "student.dat";

/// Packs the named files from `source_dir` into a zip at `archive_path`.
/// Missing files are left out. Returns how many files went in.
pub fn pack(source_dir: &Path, file_names: &[&str], archive_path: &Path) -> Result<usize> {
    let staging = archive_path.with_extension("partial");
    let mut packed = 0;

    {
        let mut zip = ZipWriter::new(File::create(&staging)?);
        for name in file_names {
            let path = source_dir.join(name);
            if !path.exists() {
                tracing::debug!("Skipping {} (not present)", path.display());
                continue;
            }

            zip.start_file::<_, ()>(*name, FileOptions::default())?;
            io::copy(&mut File::open(&path)?, &mut zip)?;
            packed += 1;
        }
        zip.finish()?;
    }

    fs::rename(&staging, archive_path)?;
    tracing::info!("Packed {} files into {}", packed, archive_path.display());
    Ok(packed)
}

/// Extracts every file entry of the archive into `target_dir`, replacing existing files.
/// A missing archive is not an error. Returns how many files were written.
pub fn unpack(archive_path: &Path, target_dir: &Path) -> Result<usize> {
    if !archive_path.exists() {
        tracing::debug!("No archive at {}, starting fresh", archive_path.display());
        return Ok(0);
    }

    fs::create_dir_all(target_dir)?;
    let mut archive = ZipArchive::new(File::open(archive_path)?)?;
    let mut restored = 0;

    for i in 0..archive.len() {
        let mut entry = archive.by_index(i)?;
        if entry.is_dir() {
            continue;
        }

        let Some(name) = entry.enclosed_name().filter(|n| is_bare_name(n)) else {
            tracing::warn!("Ignoring archive entry '{}' outside the data directory", entry.name());
            continue;
        };

        let target = target_dir.join(name);
        if target.exists() {
            fs::remove_file(&target)?;
        }
        io::copy(&mut entry, &mut File::create(&target)?)?;
        restored += 1;
    }

    tracing::info!("Restored {} files from {}", restored, archive_path.display());
    Ok(restored)
}

fn is_bare_name(path: &Path) -> bool {
    let mut components = path.components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}
