//! Append-only log of successful moves.
//!
//! One line per move, `[YYYY-MM-DD HH:mm:ss] <filename> → <category>`, in
//! local time. The file is opened, appended to and closed for every entry.

use crate::file_category::Category;
use chrono::{DateTime, Local};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use thiserror::Error;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Error)]
pub enum MoveLogError {
    #[error("could not create log directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Formats the console/log message for a move.
pub fn move_message(file_name: &str, category: Category) -> String {
    format!("{} → {}", file_name, category.dir_name())
}

/// Formats a complete log line (without the trailing newline).
pub fn format_entry(file_name: &str, category: Category, at: DateTime<Local>) -> String {
    format!(
        "[{}] {}",
        at.format(TIMESTAMP_FORMAT),
        move_message(file_name, category)
    )
}

/// Writer for the move log at a fixed path.
#[derive(Debug, Clone)]
pub struct MoveLog {
    path: PathBuf,
}

impl MoveLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Appends one entry stamped with the current local time.
    pub fn append(&self, file_name: &str, category: Category) -> Result<(), MoveLogError> {
        self.append_at(file_name, category, Local::now())
    }

    /// Appends one entry with an explicit timestamp, creating the parent directory if needed.
    pub fn append_at(
        &self,
        file_name: &str,
        category: Category,
        at: DateTime<Local>,
    ) -> Result<(), MoveLogError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|source| MoveLogError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let write_err = |source| MoveLogError::Write {
            path: self.path.clone(),
            source,
        };

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(write_err)?;
        writeln!(file, "{}", format_entry(file_name, category, at)).map_err(write_err)
    }
}
