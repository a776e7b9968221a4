//! Extension-based file categorization.
//!
//! Maps a file's lowercase extension to one of a fixed set of categories.
//! The category name doubles as the folder name created under the root.
//!
//! # Examples
//!
//! ```
//! use fileorg::file_category::{Category, ExtensionTable};
//!
//! let table = ExtensionTable::default();
//! assert_eq!(table.classify("photo.PNG"), Category::Images);
//! assert_eq!(table.classify("notes.txt"), Category::Documents);
//! assert_eq!(table.classify(".bashrc"), Category::Others);
//! ```

use std::collections::{HashMap, HashSet};
use std::fmt;

/// A classification bucket, also used as the literal folder name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    /// jpg, jpeg, png, gif, bmp, svg
    Images,
    /// pdf, doc(x), txt, xls(x), ppt(x)
    Documents,
    /// mp3, wav, flac, aac
    Music,
    /// mp4, avi, mkv, mov
    Videos,
    /// zip, rar, 7z, tar, gz
    Archives,
    /// java, py, js, html, css, cpp, c
    Code,
    /// Fallback for unknown or missing extensions
    Others,
}

impl Category {
    /// Returns the folder name for this category.
    ///
    /// ```
    /// use fileorg::file_category::Category;
    ///
    /// assert_eq!(Category::Music.dir_name(), "Music");
    /// assert_eq!(Category::Others.dir_name(), "Others");
    /// ```
    pub fn dir_name(&self) -> &'static str {
        match self {
            Category::Images => "Images",
            Category::Documents => "Documents",
            Category::Music => "Music",
            Category::Videos => "Videos",
            Category::Archives => "Archives",
            Category::Code => "Code",
            Category::Others => "Others",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dir_name())
    }
}

/// Returns the lowercase extension of `file_name`, if it has one.
///
/// The extension is whatever follows the last '.', unless that '.' is the
/// first character of the name (dotfiles have no extension).
///
/// ```
/// use fileorg::file_category::extension_of;
///
/// assert_eq!(extension_of("archive.tar.GZ").as_deref(), Some("gz"));
/// assert_eq!(extension_of(".env"), None);
/// assert_eq!(extension_of("Makefile"), None);
/// ```
pub fn extension_of(file_name: &str) -> Option<String> {
    match file_name.rfind('.') {
        Some(dot) if dot > 0 => Some(file_name[dot + 1..].to_lowercase()),
        _ => None,
    }
}

/// Immutable extension-to-category lookup table.
///
/// Built once at startup and shared by reference with the organizer.
/// Besides the extension map it keeps the set of category names that the
/// table can produce, used to recognise folders a previous run created.
#[derive(Debug, Clone)]
pub struct ExtensionTable {
    extension_map: HashMap<&'static str, Category>,
    category_names: HashSet<&'static str>,
}

const STANDARD_MAPPINGS: &[(Category, &[&str])] = &[
    (Category::Images, &["jpg", "jpeg", "png", "gif", "bmp", "svg"]),
    (
        Category::Documents,
        &["pdf", "doc", "docx", "txt", "xls", "xlsx", "ppt", "pptx"],
    ),
    (Category::Music, &["mp3", "wav", "flac", "aac"]),
    (Category::Videos, &["mp4", "avi", "mkv", "mov"]),
    (Category::Archives, &["zip", "rar", "7z", "tar", "gz"]),
    (
        Category::Code,
        &["java", "py", "js", "html", "css", "cpp", "c"],
    ),
];

impl ExtensionTable {
    /// Creates the table with the standard mappings.
    pub fn new() -> Self {
        let mut extension_map = HashMap::new();
        for (category, extensions) in STANDARD_MAPPINGS {
            for ext in *extensions {
                extension_map.insert(*ext, *category);
            }
        }

        // Only names the table can map to; the fallback is not one of them.
        let category_names = extension_map.values().map(|c| c.dir_name()).collect();

        Self {
            extension_map,
            category_names,
        }
    }

    /// Maps an extension (without the dot) to a category.
    ///
    /// ```
    /// use fileorg::file_category::{Category, ExtensionTable};
    ///
    /// let table = ExtensionTable::default();
    /// assert_eq!(table.extension_to_category("MKV"), Some(Category::Videos));
    /// assert_eq!(table.extension_to_category("rs"), None);
    /// ```
    pub fn extension_to_category(&self, ext: &str) -> Option<Category> {
        self.extension_map.get(ext.to_lowercase().as_str()).copied()
    }

    /// Classifies a file by its name, falling back to `Category::Others`.
    pub fn classify(&self, file_name: &str) -> Category {
        extension_of(file_name)
            .and_then(|ext| self.extension_to_category(&ext))
            .unwrap_or(Category::Others)
    }

    /// Returns true if `name` exactly matches a category this table maps to.
    pub fn is_category_dir(&self, name: &str) -> bool {
        self.category_names.contains(name)
    }

    /// Number of known extensions.
    pub fn len(&self) -> usize {
        self.extension_map.len()
    }

    /// Returns true if the table maps no extensions.
    pub fn is_empty(&self) -> bool {
        self.extension_map.is_empty()
    }
}

impl Default for ExtensionTable {
    fn default() -> Self {
        Self::new()
    }
}
