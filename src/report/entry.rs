//! Single-entry and detailed multi-entry reports. Both render category
//! blocks from the category table; the detailed report just uses smaller
//! type and gives each entry its own page.

use chrono::{DateTime, Utc};

use super::layout::{Font, PageLayout};
use super::Report;
use crate::config::ReportConfig;
use crate::dates;
use crate::models::{Category, SymptomEntry};
use crate::trends::{sort_by_date, SortOrder};

/// Type sizes for category blocks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlockStyle {
    pub heading: f32,
    pub body: f32,
    pub indent: f32,
    pub section_gap: f32,
}

pub const SINGLE_ENTRY_STYLE: BlockStyle = BlockStyle {
    heading: 16.0,
    body: 12.0,
    indent: 15.0,
    section_gap: 12.0,
};

pub const DETAILED_STYLE: BlockStyle = BlockStyle {
    heading: 13.0,
    body: 10.0,
    indent: 12.0,
    section_gap: 8.0,
};

pub fn entry_report(entry: &SymptomEntry, config: &ReportConfig) -> Report {
    let title = "Symptom Report";
    let mut layout = PageLayout::new(config);
    layout.text_line(title, 24.0, Font::Bold);
    layout.text_line(format!("Date: {}", dates::date_time(entry.date)), 14.0, Font::Regular);
    layout.gap(16.0);

    category_blocks(&mut layout, entry, SINGLE_ENTRY_STYLE);

    Report {
        title: title.to_string(),
        pages: layout.finish(),
    }
}

/// Every entry newest first, one entry per page. Title and generation time
/// appear once, above the first entry.
pub fn detailed_report(
    entries: &[SymptomEntry],
    generated: DateTime<Utc>,
    config: &ReportConfig,
) -> Report {
    let title = "Detailed Symptom Report";
    let mut sorted = entries.to_vec();
    sort_by_date(&mut sorted, SortOrder::NewestFirst);

    let mut layout = PageLayout::new(config);
    layout.text_line(title, 22.0, Font::Bold);
    layout.text_line(format!("Generated: {}", dates::date_time(generated)), 11.0, Font::Regular);
    layout.text_line(format!("Entries: {}", sorted.len()), 11.0, Font::Regular);
    layout.gap(14.0);

    if sorted.is_empty() {
        layout.text_line("No entries to report.", 12.0, Font::Regular);
    }

    for (i, entry) in sorted.iter().enumerate() {
        if i > 0 {
            layout.page_break();
        }
        layout.text_line(format!("Entry: {}", dates::date_time(entry.date)), 14.0, Font::Bold);
        layout.gap(6.0);
        if category_blocks(&mut layout, entry, DETAILED_STYLE) == 0 {
            layout.paragraph("No symptoms reported.", DETAILED_STYLE.body, Font::Regular, DETAILED_STYLE.indent);
        }
    }

    Report {
        title: title.to_string(),
        pages: layout.finish(),
    }
}

/// Lays out every reported category in table order; returns how many were shown.
///
/// A category with nothing reported is skipped entirely. Inside a shown
/// block, severity lines appear only when > 0 and notes only when non-empty.
pub fn category_blocks(layout: &mut PageLayout<'_>, entry: &SymptomEntry, style: BlockStyle) -> usize {
    let mut shown = 0;
    for category in Category::ALL {
        if !category.is_reported(entry) {
            continue;
        }
        if layout.config().break_before.contains(&category) {
            layout.page_break();
        }

        // Keep the heading with its first line.
        let lead = layout.line_height(style.heading) + layout.line_height(style.body);
        layout.ensure_space(lead);
        layout.text_line(category.title(), style.heading, Font::Bold);

        for line in category.lines() {
            if let Some(field) = line.severity {
                let value = entry.severity(field);
                if value > 0 {
                    let text = format!("{} Severity: {}/10", field.label(), value);
                    layout.paragraph(&text, style.body, Font::Regular, style.indent);
                }
            }
            if let Some(field) = line.notes {
                let notes = entry.text(field);
                if !notes.is_empty() {
                    let (label, indent) = match line.severity {
                        Some(_) => ("Notes", style.indent * 2.0),
                        None => (field.label(), style.indent),
                    };
                    layout.paragraph(&format!("{label}: {notes}"), style.body, Font::Regular, indent);
                }
            }
        }

        layout.gap(style.section_gap);
        shown += 1;
    }
    shown
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{SeverityField, TextField};
    use crate::report::layout::DrawOp;
    use chrono::{Duration, TimeZone};
    use std::collections::BTreeSet;

    fn midday() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 1, 5, 12, 0, 0).unwrap()
    }

    fn all_text(report: &Report) -> Vec<String> {
        report
            .pages
            .iter()
            .flat_map(|p| p.texts().map(str::to_string).collect::<Vec<_>>())
            .collect()
    }

    #[test]
    fn empty_entry_renders_only_title_and_date() {
        let report = entry_report(&SymptomEntry::new(midday()), &ReportConfig::default());
        assert_eq!(report.pages.len(), 1);
        let texts = all_text(&report);
        assert_eq!(texts.len(), 2);
        assert_eq!(texts[0], "Symptom Report");
        assert!(texts[1].starts_with("Date: January 5, 2026"));
        for category in Category::ALL {
            assert!(!report.contains_text(category.title()));
        }
    }

    #[test]
    fn only_reported_lines_render() {
        let entry = SymptomEntry::new(midday())
            .with_severity(SeverityField::Headache, 6)
            .with_text(TextField::HeadacheNotes, "behind the eyes");
        let report = entry_report(&entry, &ReportConfig::default());

        assert!(report.contains_text("Head / Neurological"));
        assert!(report.contains_text("Headache Severity: 6/10"));
        assert!(report.contains_text("Notes: behind the eyes"));
        assert!(!report.contains_text("Migraine"));
        assert!(!report.contains_text("Respiratory"));
    }

    #[test]
    fn notes_without_severity_show_category() {
        let entry = SymptomEntry::new(midday()).with_text(TextField::HeadacheNotes, "mild aura");
        let report = entry_report(&entry, &ReportConfig::default());
        assert!(report.contains_text("Head / Neurological"));
        assert!(report.contains_text("Notes: mild aura"));
        assert!(!report.contains_text("Headache Severity"));
    }

    #[test]
    fn text_only_fields_use_their_label() {
        let entry = SymptomEntry::new(midday())
            .with_text(TextField::BloodPressure, "128/84")
            .with_text(TextField::WorkDaysMissed, "1");
        let report = entry_report(&entry, &ReportConfig::default());
        assert!(report.contains_text("Blood Pressure: 128/84"));
        assert!(report.contains_text("Overall Impact"));
        assert!(report.contains_text("Work Days Missed: 1"));
    }

    #[test]
    fn musculoskeletal_starts_new_page() {
        let entry = SymptomEntry::new(midday())
            .with_severity(SeverityField::Headache, 3)
            .with_severity(SeverityField::BackPain, 4);
        let report = entry_report(&entry, &ReportConfig::default());
        assert_eq!(report.pages.len(), 2);
        assert!(report.pages[0].contains_text("Head / Neurological"));
        assert!(report.pages[1].contains_text("Musculoskeletal"));
        assert!(report.pages[1].contains_text("Back Pain Severity: 4/10"));
    }

    #[test]
    fn section_breaks_are_configurable() {
        let config = ReportConfig {
            break_before: BTreeSet::new(),
            ..ReportConfig::default()
        };
        let entry = SymptomEntry::new(midday())
            .with_severity(SeverityField::Headache, 3)
            .with_severity(SeverityField::BackPain, 4);
        assert_eq!(entry_report(&entry, &config).pages.len(), 1);

        let config = ReportConfig {
            break_before: BTreeSet::from([Category::Skin]),
            ..ReportConfig::default()
        };
        let entry = entry.with_severity(SeverityField::Rash, 2);
        let report = entry_report(&entry, &config);
        assert_eq!(report.pages.len(), 2);
        assert!(report.pages[1].contains_text("Skin"));
        assert!(report.pages[1].contains_text("Musculoskeletal"));
    }

    #[test]
    fn suppressed_break_section_adds_no_page() {
        let entry = SymptomEntry::new(midday()).with_severity(SeverityField::Nausea, 2);
        let report = entry_report(&entry, &ReportConfig::default());
        assert_eq!(report.pages.len(), 1);
    }

    #[test]
    fn long_notes_overflow_onto_new_pages() {
        let long = "Sharp pain after lifting groceries, eased with heat. ".repeat(120);
        let entry = SymptomEntry::new(midday())
            .with_severity(SeverityField::Headache, 5)
            .with_text(TextField::HeadacheNotes, long);
        let config = ReportConfig::default();
        let report = entry_report(&entry, &config);
        assert!(report.pages.len() >= 2);
        assert!(report.pages[1].texts().any(|t| !t.is_empty()));
    }

    #[test]
    fn detailed_report_puts_each_entry_on_its_own_page() {
        let entries: Vec<_> = (0..3)
            .map(|i| {
                SymptomEntry::new(midday() - Duration::days(i))
                    .with_severity(SeverityField::Fatigue, (i + 1) as i32)
            })
            .collect();
        let report = detailed_report(&entries, midday(), &ReportConfig::default());

        assert_eq!(report.pages.len(), 3);
        assert!(report.pages[0].contains_text("Detailed Symptom Report"));
        assert!(report.pages[0].contains_text("Generated: "));
        assert!(!report.pages[1].contains_text("Detailed Symptom Report"));
        assert!(!report.pages[2].contains_text("Generated: "));

        // Newest first.
        assert!(report.pages[0].contains_text("Fatigue Severity: 1/10"));
        assert!(report.pages[2].contains_text("Fatigue Severity: 3/10"));
    }

    #[test]
    fn detailed_report_of_nothing_has_placeholder() {
        let report = detailed_report(&[], midday(), &ReportConfig::default());
        assert_eq!(report.pages.len(), 1);
        assert!(report.contains_text("No entries to report."));
    }

    #[test]
    fn detailed_report_marks_empty_entries() {
        let report = detailed_report(&[SymptomEntry::new(midday())], midday(), &ReportConfig::default());
        assert!(report.contains_text("No symptoms reported."));
    }

    #[test]
    fn detailed_report_uses_smaller_type() {
        let entry = SymptomEntry::new(midday()).with_severity(SeverityField::Cough, 2);
        let report = detailed_report(&[entry], midday(), &ReportConfig::default());
        let size = report.pages[0].ops.iter().find_map(|op| match op {
            DrawOp::Text { text, size, .. } if text.starts_with("Cough") => Some(*size),
            _ => None,
        });
        assert_eq!(size, Some(DETAILED_STYLE.body));
    }
}
