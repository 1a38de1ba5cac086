//! Document Report Builder.
//!
//! Reports are laid out into a page model first (`layout`) and then drawn
//! to PDF (`pdf`). Each report is a single top-to-bottom pass; the only
//! state is the vertical cursor and the current page.

pub mod chart;
pub mod entry;
pub mod layout;
pub mod pdf;
pub mod summary;

use chrono::{DateTime, Utc};

use crate::config::ReportConfig;
use crate::export::ExportError;
use crate::models::SymptomEntry;
use crate::trends::PeriodSummary;

use self::layout::Page;

/// A laid-out report, ready to render.
#[derive(Debug, Clone)]
pub struct Report {
    pub title: String,
    pub pages: Vec<Page>,
}

impl Report {
    pub fn contains_text(&self, needle: &str) -> bool {
        self.pages.iter().any(|p| p.contains_text(needle))
    }

    pub fn to_pdf(&self, config: &ReportConfig) -> Result<Vec<u8>, ExportError> {
        let bytes = pdf::render(&self.title, config, &self.pages)?;
        tracing::info!(
            title = %self.title,
            pages = self.pages.len(),
            bytes = bytes.len(),
            "Generated PDF report"
        );
        Ok(bytes)
    }
}

/// Single-entry report as PDF bytes.
pub fn entry_report_pdf(entry: &SymptomEntry, config: &ReportConfig) -> Result<Vec<u8>, ExportError> {
    entry::entry_report(entry, config).to_pdf(config)
}

/// Period summary with trend chart as PDF bytes.
pub fn summary_report_pdf(
    summary: &PeriodSummary,
    generated: DateTime<Utc>,
    config: &ReportConfig,
) -> Result<Vec<u8>, ExportError> {
    summary::summary_report(summary, generated, config).to_pdf(config)
}

/// One page per entry as PDF bytes.
pub fn detailed_report_pdf(
    entries: &[SymptomEntry],
    generated: DateTime<Utc>,
    config: &ReportConfig,
) -> Result<Vec<u8>, ExportError> {
    entry::detailed_report(entries, generated, config).to_pdf(config)
}
