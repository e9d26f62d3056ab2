// src/export/mod.rs
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use chrono::Local;
use tempfile::NamedTempFile;
use thiserror::Error;

use crate::models::Password;
use crate::utils::export_filename;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("{}: {}", .path.display(), .source)]
    Failed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, ExportError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    Saved { path: PathBuf, count: usize },
    NothingToSave,
}

/// Writes password lists to plain text files, one per line.
#[derive(Debug, Clone)]
pub struct Exporter {
    directory: PathBuf,
}

impl Exporter {
    /// `directory` is where timestamped files land when no filename is given.
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Exports `passwords` to `filename`, or to a fresh `passwords_<timestamp>.txt` in the
    /// exporter's directory. An empty list touches nothing.
    pub fn export(&self, passwords: &[Password], filename: Option<&Path>) -> Result<ExportOutcome> {
        if passwords.is_empty() {
            log::debug!("Export requested with no passwords; nothing written");
            return Ok(ExportOutcome::NothingToSave);
        }

        let path = match filename {
            Some(name) => name.to_path_buf(),
            None => self.directory.join(export_filename(&Local::now())),
        };

        match write_lines(&path, passwords) {
            Ok(()) => {
                log::info!("Exported {} password(s) to {}", passwords.len(), path.display());
                Ok(ExportOutcome::Saved {
                    path,
                    count: passwords.len(),
                })
            }
            Err(source) => {
                log::error!("Failed to export passwords to {}: {}", path.display(), source);
                Err(ExportError::Failed { path, source })
            }
        }
    }
}

impl Default for Exporter {
    fn default() -> Self {
        Self::new(".")
    }
}

// Write to a sibling temp file and rename over the target, so a failed write never
// truncates what was there before.
fn write_lines(path: &Path, passwords: &[Password]) -> io::Result<()> {
    let parent = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };

    // The temp file is created owner-only (0600 on Unix) and keeps that mode once renamed,
    // so exports are private and a replaced file does not inherit the old permissions.
    let mut temp_file = NamedTempFile::new_in(parent)?;
    {
        let file = temp_file.as_file_mut();
        let mut contents = String::new();
        for pwd in passwords {
            contents.push_str(pwd.as_str());
            contents.push('\n');
        }
        file.write_all(contents.as_bytes())?;
        file.flush()?;
        file.sync_all()?;
    }

    temp_file.persist(path).map_err(|e| e.error)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn passwords(values: &[&str]) -> Vec<Password> {
        values.iter().map(|v| Password::from(*v)).collect()
    }

    #[test]
    fn empty_list_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("never.txt");
        let exporter = Exporter::new(dir.path());

        let outcome = exporter.export(&[], Some(&target)).unwrap();
        assert_eq!(outcome, ExportOutcome::NothingToSave);
        assert!(!target.exists());

        let outcome = exporter.export(&[], None).unwrap();
        assert_eq!(outcome, ExportOutcome::NothingToSave);
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn writes_one_password_per_line() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("out.txt");

        let outcome = Exporter::default()
            .export(&passwords(&["p1", "p2"]), Some(&target))
            .unwrap();

        assert_eq!(
            outcome,
            ExportOutcome::Saved {
                path: target.clone(),
                count: 2
            }
        );
        assert_eq!(fs::read_to_string(&target).unwrap(), "p1\np2\n");
    }

    #[test]
    fn replaces_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("out.txt");
        fs::write(&target, "old contents that are longer\n").unwrap();

        Exporter::default()
            .export(&passwords(&["new"]), Some(&target))
            .unwrap();

        assert_eq!(fs::read_to_string(&target).unwrap(), "new\n");
    }

    #[cfg(unix)]
    #[test]
    fn exported_file_is_owner_only() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("out.txt");
        fs::write(&target, "old\n").unwrap();
        fs::set_permissions(&target, fs::Permissions::from_mode(0o644)).unwrap();

        Exporter::default()
            .export(&passwords(&["p1"]), Some(&target))
            .unwrap();

        let mode = fs::metadata(&target).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }

    #[test]
    fn missing_directory_is_reported_not_panicked() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("missing").join("out.txt");

        let err = Exporter::default()
            .export(&passwords(&["p1"]), Some(&target))
            .unwrap_err();

        let ExportError::Failed { path, .. } = &err;
        assert_eq!(path, &target);
        assert!(err.to_string().contains("out.txt"));
        assert!(!target.exists());
    }
}
