//! fileorg - organize a directory by file extension
//!
//! This library classifies files by extension, walks a directory (optionally
//! recursively) and moves every file into a category folder created directly
//! under the root, optionally appending each move to a timestamped log.

pub mod cli;
pub mod config;
pub mod file_category;
pub mod file_organizer;
pub mod move_log;
pub mod output;

pub use config::{CompiledFilters, ConfigError, FilterConfig, RunConfig};
pub use file_category::{Category, ExtensionTable};
pub use file_organizer::{FileOrganizer, MoveRecord, OrganizeError, OrganizeReport};
pub use move_log::MoveLog;

pub use cli::{Cli, run_cli};
