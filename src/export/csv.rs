//! CSV export: one fixed header row, then one row per entry in store order.
//!
//! Column order comes from the category table: `Date`, then for every
//! symptom line its severity column (if rated) followed by its text column
//! (if any). That yields 49 columns. Severities are bare integers; every
//! text value, the date included, is wrapped in double quotes with embedded
//! quotes doubled.

use crate::dates;
use crate::models::{Category, SeverityField, SymptomEntry, TextField};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Date,
    Severity(SeverityField),
    Text(TextField),
}

impl Column {
    pub fn header(self) -> String {
        match self {
            Self::Date => "Date".to_string(),
            Self::Severity(field) => format!("{} Severity", field.label()),
            Self::Text(field) => field.label().to_string(),
        }
    }

    fn value(self, entry: &SymptomEntry) -> String {
        match self {
            Self::Date => quote(&dates::short_date(entry.date)),
            Self::Severity(field) => entry.severity(field).to_string(),
            Self::Text(field) => quote(entry.text(field)),
        }
    }
}

/// The stable column schema.
pub fn columns() -> Vec<Column> {
    let mut columns = vec![Column::Date];
    for category in Category::ALL {
        for line in category.lines() {
            if let Some(field) = line.severity {
                columns.push(Column::Severity(field));
            }
            if let Some(field) = line.notes {
                columns.push(Column::Text(field));
            }
        }
    }
    columns
}

/// Header plus one row per entry, unsorted.
pub fn to_csv(entries: &[SymptomEntry]) -> String {
    let columns = columns();
    let mut out = String::new();

    let header: Vec<String> = columns.iter().map(|c| c.header()).collect();
    out.push_str(&header.join(","));
    out.push('\n');

    for entry in entries {
        let row: Vec<String> = columns.iter().map(|c| c.value(entry)).collect();
        out.push_str(&row.join(","));
        out.push('\n');
    }

    tracing::debug!(rows = entries.len(), "Exported journal CSV");
    out
}

fn quote(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}
