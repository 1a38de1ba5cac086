//! Summary report for one period: headline averages, trend chart, and a
//! newest-first list of entries.

use chrono::{DateTime, Utc};

use super::chart::trend_chart;
use super::layout::{Font, PageLayout};
use super::Report;
use crate::config::ReportConfig;
use crate::dates;
use crate::models::{SymptomEntry, HEADLINE_FIELDS};
use crate::trends::PeriodSummary;

const HEADING: f32 = 16.0;
const BODY: f32 = 12.0;
const LIST_BODY: f32 = 11.0;

pub fn summary_report(
    summary: &PeriodSummary,
    generated: DateTime<Utc>,
    config: &ReportConfig,
) -> Report {
    let title = format!("{} Symptom Summary", summary.period.label());
    let mut layout = PageLayout::new(config);

    layout.text_line(title.as_str(), 24.0, Font::Bold);
    layout.text_line(
        format!(
            "Period: {} - {}",
            dates::long_date(summary.window.start),
            dates::long_date(summary.window.end)
        ),
        BODY,
        Font::Regular,
    );
    layout.text_line(format!("Generated: {}", dates::date_time(generated)), BODY, Font::Regular);
    layout.text_line(format!("Total Entries: {}", summary.entries.len()), BODY, Font::Bold);
    layout.gap(14.0);

    if summary.entries.is_empty() {
        layout.text_line("No entries recorded for this period.", BODY, Font::Regular);
        return Report {
            title,
            pages: layout.finish(),
        };
    }

    layout.text_line("Average Severity", HEADING, Font::Bold);
    for field in HEADLINE_FIELDS {
        let line = format!("{}: {}/10", field.label(), summary.averages.get(field));
        layout.paragraph(&line, BODY, Font::Regular, 15.0);
    }
    layout.gap(14.0);

    layout.text_line("Symptom Trends", HEADING, Font::Bold);
    layout.gap(6.0);
    trend_chart(&mut layout, &summary.entries);
    layout.gap(14.0);

    layout.text_line("Entries", HEADING, Font::Bold);
    for entry in &summary.entries {
        let lead = layout.line_height(BODY) + layout.line_height(LIST_BODY);
        layout.ensure_space(lead);
        layout.text_line(dates::date_time(entry.date), BODY, Font::Bold);
        layout.paragraph(&headline_line(entry), LIST_BODY, Font::Regular, 15.0);
        layout.gap(6.0);
    }

    Report {
        title,
        pages: layout.finish(),
    }
}

/// `Headache: 5, Back Pain: 2` for the headline symptoms above zero.
pub fn headline_line(entry: &SymptomEntry) -> String {
    let parts: Vec<String> = HEADLINE_FIELDS
        .iter()
        .filter(|f| entry.severity(**f) > 0)
        .map(|f| format!("{}: {}", f.label(), entry.severity(*f)))
        .collect();
    if parts.is_empty() {
        "No headline symptoms reported".to_string()
    } else {
        parts.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SeverityField;
    use crate::trends::{summarize, Period};
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 20, 12, 0, 0).unwrap()
    }

    fn logged(days_ago: i64, headache: i32, fatigue: i32) -> SymptomEntry {
        SymptomEntry::new(now() - Duration::days(days_ago))
            .with_severity(SeverityField::Headache, headache)
            .with_severity(SeverityField::Fatigue, fatigue)
    }

    #[test]
    fn headline_line_lists_only_positive_values() {
        let entry = logged(0, 5, 0).with_severity(SeverityField::Mood, 3);
        assert_eq!(headline_line(&entry), "Headache: 5, Mood: 3");
        assert_eq!(headline_line(&SymptomEntry::now()), "No headline symptoms reported");
    }

    #[test]
    fn summary_shows_counts_and_truncated_averages() {
        let entries = vec![logged(1, 3, 1), logged(2, 4, 0), logged(3, 4, 0)];
        let summary = summarize(&entries, Period::Week, now());
        let report = summary_report(&summary, now(), &ReportConfig::default());

        assert_eq!(report.title, "Weekly Symptom Summary");
        assert!(report.contains_text("Weekly Symptom Summary"));
        assert!(report.contains_text("Total Entries: 3"));
        assert!(report.contains_text("Headache: 3/10"));
        assert!(report.contains_text("Fatigue: 0/10"));
        assert!(report.contains_text("Back Pain: 0/10"));
        assert!(report.contains_text("Mood: 0/10"));
        assert!(report.contains_text("Symptom Trends"));
    }

    #[test]
    fn entry_list_is_newest_first() {
        let entries = vec![logged(5, 1, 0), logged(1, 7, 0), logged(3, 4, 0)];
        let summary = summarize(&entries, Period::Week, now());
        let report = summary_report(&summary, now(), &ReportConfig::default());

        let lines: Vec<&str> = report
            .pages
            .iter()
            .flat_map(|p| p.texts())
            .filter(|t| t.starts_with("Headache: ") && !t.ends_with("/10"))
            .collect();
        assert_eq!(lines, vec!["Headache: 7", "Headache: 4", "Headache: 1"]);
    }

    #[test]
    fn empty_period_degrades_to_placeholder() {
        let summary = summarize(&[logged(90, 5, 5)], Period::Month, now());
        let report = summary_report(&summary, now(), &ReportConfig::default());
        assert_eq!(report.pages.len(), 1);
        assert!(report.contains_text("Total Entries: 0"));
        assert!(report.contains_text("No entries recorded for this period."));
        assert!(!report.contains_text("Symptom Trends"));
    }

    #[test]
    fn long_lists_paginate() {
        let entries: Vec<_> = (0..60).map(|i| logged(i % 28, 2, 3)).collect();
        let summary = summarize(&entries, Period::Month, now());
        let config = ReportConfig::default();
        let report = summary_report(&summary, now(), &config);
        assert!(report.pages.len() > 2);
        assert!(!report.pages[1].contains_text("Monthly Symptom Summary"));
    }
}
