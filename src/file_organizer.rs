//! Directory traversal and file moving.
//!
//! `FileOrganizer` walks a root directory depth-first and moves every regular
//! file into a category folder created directly under that root. Failures are
//! reported per file and never stop the walk.

use crate::config::{CompiledFilters, RunConfig};
use crate::file_category::{Category, ExtensionTable};
use crate::move_log::{MoveLog, move_message};
use crate::output::OutputFormatter;
use log::{debug, warn};
use std::collections::BTreeMap;
use std::fs::{self, DirEntry};
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Entries with this name are never moved or descended into.
pub const LOG_DIR_NAME: &str = "logs";

/// Errors that can occur while organizing.
#[derive(Debug, Error)]
pub enum OrganizeError {
    /// The root cannot be used at all. This is the only error that ends a run.
    #[error("Invalid directory {}: {source}", path.display())]
    InvalidRoot { path: PathBuf, source: io::Error },

    /// The root exists but is not a directory.
    #[error("Not a directory: {}", path.display())]
    NotADirectory { path: PathBuf },

    #[error("Failed to create directory {}: {source}", path.display())]
    DirectoryCreationFailed { path: PathBuf, source: io::Error },

    #[error("Failed to move {} to {}: {source}", source_path.display(), destination.display())]
    FileMoveFailed {
        source_path: PathBuf,
        destination: PathBuf,
        source: io::Error,
    },

    #[error("Path has no file name: {}", path.display())]
    MissingFileName { path: PathBuf },
}

/// Result type for file organization operations.
pub type OrganizeResult<T> = Result<T, OrganizeError>;

/// A single successful (or, in dry-run mode, planned) move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveRecord {
    pub file_name: String,
    pub category: Category,
    pub source: PathBuf,
    pub destination: PathBuf,
}

/// Totals collected over one run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrganizeReport {
    /// Moved files per category.
    pub moved: BTreeMap<Category, usize>,
    /// Files whose move failed.
    pub failed: usize,
    /// Files left in place because an exclusion rule matched.
    pub skipped: usize,
}

impl OrganizeReport {
    pub fn total_moved(&self) -> usize {
        self.moved.values().sum()
    }

    fn record_move(&mut self, category: Category) {
        *self.moved.entry(category).or_insert(0) += 1;
    }
}

/// Walks a directory tree and moves files into root-level category folders.
///
/// # Examples
///
/// ```no_run
/// use fileorg::config::RunConfig;
/// use fileorg::file_category::ExtensionTable;
/// use fileorg::file_organizer::FileOrganizer;
///
/// let table = ExtensionTable::default();
/// let config = RunConfig::new("/home/user/Downloads").recursive(true);
/// let report = FileOrganizer::new(&table, &config).organize()?;
/// println!("moved {} files", report.total_moved());
/// # Ok::<(), fileorg::file_organizer::OrganizeError>(())
/// ```
pub struct FileOrganizer<'a> {
    table: &'a ExtensionTable,
    config: &'a RunConfig,
    filters: CompiledFilters,
    move_log: Option<MoveLog>,
    report: OrganizeReport,
}

impl<'a> FileOrganizer<'a> {
    pub fn new(table: &'a ExtensionTable, config: &'a RunConfig) -> Self {
        let move_log = (config.logging && !config.dry_run).then(|| MoveLog::new(&config.log_file));
        Self {
            table,
            config,
            filters: CompiledFilters::default(),
            move_log,
            report: OrganizeReport::default(),
        }
    }

    /// Applies exclusion rules on top of the built-in hidden/`logs` skipping.
    pub fn with_filters(mut self, filters: CompiledFilters) -> Self {
        self.filters = filters;
        self
    }

    /// Organizes `config.root` and returns the totals.
    ///
    /// Only an unusable root is an error; every per-file problem is reported
    /// and counted in the returned report instead.
    pub fn organize(mut self) -> OrganizeResult<OrganizeReport> {
        let config = self.config;
        let root = config.root.as_path();
        let metadata = fs::metadata(root).map_err(|source| OrganizeError::InvalidRoot {
            path: root.to_path_buf(),
            source,
        })?;
        if !metadata.is_dir() {
            return Err(OrganizeError::NotADirectory {
                path: root.to_path_buf(),
            });
        }

        self.walk(root, root);
        Ok(self.report)
    }

    /// Depth-first, pre-order walk of `current`. Category folders always go under `root`.
    fn walk(&mut self, current: &Path, root: &Path) {
        let mut entries: Vec<DirEntry> = match fs::read_dir(current) {
            Ok(entries) => entries.flatten().collect(),
            Err(e) => {
                debug!("cannot list {}, skipping: {}", current.display(), e);
                return;
            }
        };
        entries.sort_by_key(|entry| entry.file_name());

        for entry in entries {
            let name = entry.file_name();
            let name = name.to_string_lossy();
            if name.starts_with('.') || name == LOG_DIR_NAME {
                continue;
            }

            let path = entry.path();
            match EntryKind::of(&entry) {
                EntryKind::Dir => {
                    if !self.config.recursive {
                        continue;
                    }
                    if current == root && self.table.is_category_dir(&name) {
                        debug!("not descending into category folder {}", path.display());
                        continue;
                    }
                    self.walk(&path, root);
                }
                EntryKind::File => {
                    let relative = path.strip_prefix(root).unwrap_or(path.as_path());
                    if self.filters.is_excluded(relative) {
                        debug!("excluded by filters: {}", relative.display());
                        self.report.skipped += 1;
                        continue;
                    }
                    self.process_file(&path, root);
                }
                EntryKind::Other => {
                    debug!("skipping {}", path.display());
                }
            }
        }
    }

    /// Moves one file and reports the outcome; never fails.
    fn process_file(&mut self, file: &Path, root: &Path) {
        match self.move_file(file, root) {
            Ok(record) => {
                let message = move_message(&record.file_name, record.category);
                if self.config.dry_run {
                    OutputFormatter::plain(&format!("{message} (dry run)"));
                } else {
                    OutputFormatter::plain(&message);
                }
                self.report.record_move(record.category);

                if let Some(move_log) = &self.move_log
                    && let Err(e) = move_log.append(&record.file_name, record.category)
                {
                    OutputFormatter::error(&format!("Log error: {e}"));
                }
            }
            Err(e) => {
                self.report.failed += 1;
                let name = file
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| file.display().to_string());
                OutputFormatter::error(&format!("Error moving {name}: {e}"));
            }
        }
    }

    /// Moves `file` into `root/<category>/`, replacing any file already there.
    ///
    /// In dry-run mode the destination is computed but nothing is touched.
    pub fn move_file(&self, file: &Path, root: &Path) -> OrganizeResult<MoveRecord> {
        let file_name = file
            .file_name()
            .ok_or_else(|| OrganizeError::MissingFileName {
                path: file.to_path_buf(),
            })?;
        let display_name = file_name.to_string_lossy().into_owned();
        let category = self.table.classify(&display_name);

        let category_dir = root.join(category.dir_name());
        let destination = category_dir.join(file_name);

        if !self.config.dry_run {
            ensure_dir(&category_dir)?;
            if destination.is_file() && destination != file {
                warn!("replacing existing {}", destination.display());
            }
            fs::rename(file, &destination).map_err(|source| OrganizeError::FileMoveFailed {
                source_path: file.to_path_buf(),
                destination: destination.clone(),
                source,
            })?;
        }

        Ok(MoveRecord {
            file_name: display_name,
            category,
            source: file.to_path_buf(),
            destination,
        })
    }
}

/// Creates a single directory level; an existing directory is fine.
fn ensure_dir(path: &Path) -> OrganizeResult<()> {
    match fs::create_dir(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists && path.is_dir() => Ok(()),
        Err(source) => Err(OrganizeError::DirectoryCreationFailed {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// How the walk treats a directory entry.
enum EntryKind {
    Dir,
    File,
    Other,
}

impl EntryKind {
    /// Symlinks to files count as files; symlinked directories are not followed.
    fn of(entry: &DirEntry) -> Self {
        let Ok(file_type) = entry.file_type() else {
            return EntryKind::Other;
        };
        if file_type.is_dir() {
            EntryKind::Dir
        } else if file_type.is_file() {
            EntryKind::File
        } else if file_type.is_symlink() {
            match fs::metadata(entry.path()) {
                Ok(target) if target.is_file() => EntryKind::File,
                _ => EntryKind::Other,
            }
        } else {
            EntryKind::Other
        }
    }
}
