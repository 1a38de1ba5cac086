use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use crate::models::Category;

/// Application-level constants
pub const APP_NAME: &str = "SymptomJournal";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default tracing filter when `RUST_LOG` is not set.
pub fn default_log_filter() -> &'static str {
    "info,symptom_journal=debug"
}

/// Get the application data directory
/// ~/SymptomJournal/ on all platforms; the current directory when no home exists.
pub fn app_data_dir() -> PathBuf {
    match dirs::home_dir() {
        Some(home) => home.join(APP_NAME),
        None => PathBuf::from(APP_NAME),
    }
}

/// Well-known file locations for one journal data directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorePaths {
    /// Ordered entry collection.
    pub entries: PathBuf,
    /// Single in-progress draft.
    pub draft: PathBuf,
    /// Quarantine copy of an unreadable collection. Never read back.
    pub backup: PathBuf,
    /// Saved CSV/PDF exports.
    pub exports: PathBuf,
}

impl StorePaths {
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            entries: dir.join("entries.json"),
            draft: dir.join("draft.json"),
            backup: dir.join("entries.corrupt.json"),
            exports: dir.join("exports"),
        }
    }

    /// Paths under [`app_data_dir`].
    pub fn default_location() -> Self {
        Self::in_dir(&app_data_dir())
    }
}

/// Page geometry and layout rules shared by every report.
///
/// All measurements are PDF points with the origin at the top-left corner
/// of the page; the PDF backend flips the y axis when drawing.
#[derive(Debug, Clone)]
pub struct ReportConfig {
    pub page_width: f32,
    pub page_height: f32,
    pub margin: f32,
    /// Cursor position past which the next block starts a new page.
    pub break_threshold: f32,
    /// Line height as a multiple of the font size.
    pub line_spacing: f32,
    /// Sections that always start on a fresh page when they are rendered.
    pub break_before: BTreeSet<Category>,
    /// Most recent entries plotted in the summary chart.
    pub chart_entry_limit: usize,
    pub chart_height: f32,
}

impl ReportConfig {
    /// Usable width between the left and right margins.
    pub fn content_width(&self) -> f32 {
        self.page_width - 2.0 * self.margin
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            page_width: 612.0,
            page_height: 792.0,
            margin: 50.0,
            break_threshold: 700.0,
            line_spacing: 1.3,
            break_before: BTreeSet::from([Category::Musculoskeletal]),
            chart_entry_limit: 10,
            chart_height: 200.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_data_dir_named_after_app() {
        assert!(app_data_dir().ends_with("SymptomJournal"));
    }

    #[test]
    fn store_paths_are_siblings() {
        let paths = StorePaths::in_dir(Path::new("/tmp/journal"));
        assert_eq!(paths.entries.parent(), paths.backup.parent());
        assert_eq!(paths.entries.parent(), paths.draft.parent());
        assert_ne!(paths.entries, paths.draft);
        assert!(paths.exports.ends_with("exports"));
    }

    #[test]
    fn default_report_config_is_us_letter() {
        let config = ReportConfig::default();
        assert_eq!(config.page_width, 612.0);
        assert_eq!(config.page_height, 792.0);
        assert_eq!(config.content_width(), 512.0);
        assert!(config.break_before.contains(&Category::Musculoskeletal));
    }

    #[test]
    fn app_version_matches_cargo() {
        assert_eq!(APP_VERSION, "0.1.0");
    }
}
