//! Console output and styling.
//!
//! All user-facing text goes through `OutputFormatter` so the look of the
//! tool can be changed in one place. Errors go to stderr, everything else to
//! stdout.

use crate::config::RunConfig;
use crate::file_organizer::OrganizeReport;
use colored::*;

/// Manages all CLI output with consistent styling.
pub struct OutputFormatter;

impl OutputFormatter {
    /// Prints a success message in green with a checkmark.
    pub fn success(message: &str) {
        println!("{} {}", "✓".green(), message);
    }

    /// Prints an error message to stderr in red with an X mark.
    pub fn error(message: &str) {
        eprintln!("{} {}", "✗".red(), message.red());
    }

    /// Prints a warning message in yellow.
    pub fn warning(message: &str) {
        println!("{} {}", "⚠".yellow(), message);
    }

    pub fn plain(message: &str) {
        println!("{}", message);
    }

    pub fn header(header: &str) {
        println!("\n{}", header.bold());
    }

    pub fn banner() {
        println!("╔════════════════════════════════════════════╗");
        println!(
            "║      {:<38}║",
            format!("File Organizer v{}", env!("CARGO_PKG_VERSION"))
        );
        println!("╚════════════════════════════════════════════╝\n");
    }

    /// Prints the directory and flags of this run.
    pub fn run_settings(config: &RunConfig) {
        let yes_no = |flag: bool| if flag { "Yes" } else { "No" };
        println!("Directory: {}", config.root.display());
        println!("Recursive: {}", yes_no(config.recursive));
        println!("Logging:   {}", yes_no(config.logging));
        if config.dry_run {
            Self::dry_run_notice("No files will be moved.");
        }
        println!("\nStarting organization...\n");
    }

    pub fn dry_run_notice(message: &str) {
        println!("{}", format!("[DRY RUN] {}", message).yellow());
    }

    /// Prints a per-category table of the moves in `report`.
    pub fn summary_table(report: &OrganizeReport) {
        Self::header("SUMMARY");

        let max_category_len = report
            .moved
            .keys()
            .map(|category| category.dir_name().len())
            .max()
            .unwrap_or(0)
            .max(8);

        println!(
            "{:<width$} | {}",
            "Category".bold(),
            "Files".bold(),
            width = max_category_len
        );
        println!("{}", "-".repeat(max_category_len + 10));

        for (category, count) in &report.moved {
            println!(
                "{:<width$} | {} {}",
                category.dir_name(),
                count.to_string().green(),
                file_word(*count),
                width = max_category_len
            );
        }

        let total = report.total_moved();
        println!("{}", "-".repeat(max_category_len + 10));
        println!(
            "{:<width$} | {} {}",
            "Total".bold(),
            total.to_string().green().bold(),
            file_word(total),
            width = max_category_len
        );

        if report.skipped > 0 {
            println!("Excluded by filters: {}", report.skipped);
        }
        if report.failed > 0 {
            Self::warning(&format!(
                "{} {} could not be moved. See errors above.",
                report.failed,
                file_word(report.failed)
            ));
        }
    }
}

fn file_word(count: usize) -> &'static str {
    if count == 1 { "file" } else { "files" }
}
