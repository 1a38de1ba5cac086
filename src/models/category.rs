//! Body-system categories and the symptom lines each one groups.
//!
//! This table is the single source for section order, section visibility,
//! and CSV column order, so every report and export stays consistent with it.

use serde::{Deserialize, Serialize};

use super::entry::SymptomEntry;
use super::enums::{SeverityField, TextField};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    HeadNeuro,
    MentalHealthSleep,
    Respiratory,
    CardioRenal,
    Gastrointestinal,
    Skin,
    Musculoskeletal,
    OverallImpact,
}

/// One rendered line of a category block: a rated symptom with optional
/// notes, or a free-text field with no severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SymptomLine {
    pub severity: Option<SeverityField>,
    pub notes: Option<TextField>,
}

impl SymptomLine {
    const fn rated(field: SeverityField) -> Self {
        Self { severity: Some(field), notes: None }
    }

    const fn rated_with_notes(field: SeverityField, notes: TextField) -> Self {
        Self { severity: Some(field), notes: Some(notes) }
    }

    const fn text(field: TextField) -> Self {
        Self { severity: None, notes: Some(field) }
    }

    pub fn label(&self) -> &'static str {
        match (self.severity, self.notes) {
            (Some(field), _) => field.label(),
            (None, Some(field)) => field.label(),
            (None, None) => "",
        }
    }

    /// Severity > 0 or non-empty notes.
    pub fn is_reported(&self, entry: &SymptomEntry) -> bool {
        self.severity.is_some_and(|f| entry.severity(f) > 0)
            || self.notes.is_some_and(|f| !entry.text(f).is_empty())
    }
}

const HEAD_NEURO: &[SymptomLine] = &[
    SymptomLine::rated_with_notes(SeverityField::Headache, TextField::HeadacheNotes),
    SymptomLine::rated(SeverityField::Migraine),
    SymptomLine::rated(SeverityField::Dizziness),
    SymptomLine::rated(SeverityField::BrainFog),
    SymptomLine::rated(SeverityField::VisionChanges),
    SymptomLine::rated_with_notes(SeverityField::Numbness, TextField::NumbnessNotes),
];

const MENTAL_HEALTH_SLEEP: &[SymptomLine] = &[
    SymptomLine::rated_with_notes(SeverityField::Mood, TextField::MoodNotes),
    SymptomLine::rated(SeverityField::Anxiety),
    SymptomLine::rated(SeverityField::Depression),
    SymptomLine::rated_with_notes(SeverityField::SleepProblems, TextField::SleepNotes),
    SymptomLine::rated(SeverityField::Fatigue),
];

const RESPIRATORY: &[SymptomLine] = &[
    SymptomLine::rated_with_notes(SeverityField::ShortnessOfBreath, TextField::BreathingNotes),
    SymptomLine::rated(SeverityField::Cough),
    SymptomLine::rated(SeverityField::Wheezing),
    SymptomLine::rated(SeverityField::ChestTightness),
];

const CARDIO_RENAL: &[SymptomLine] = &[
    SymptomLine::rated(SeverityField::Palpitations),
    SymptomLine::rated(SeverityField::ChestPain),
    SymptomLine::rated_with_notes(SeverityField::UrinaryIssues, TextField::UrinaryNotes),
    SymptomLine::text(TextField::Swelling),
    SymptomLine::text(TextField::BloodPressure),
];

const GASTROINTESTINAL: &[SymptomLine] = &[
    SymptomLine::rated_with_notes(SeverityField::Nausea, TextField::NauseaNotes),
    SymptomLine::rated(SeverityField::AbdominalPain),
    SymptomLine::rated(SeverityField::Bloating),
    SymptomLine::rated(SeverityField::Diarrhea),
    SymptomLine::rated(SeverityField::Constipation),
    SymptomLine::rated_with_notes(SeverityField::AcidReflux, TextField::RefluxNotes),
];

const SKIN: &[SymptomLine] = &[
    SymptomLine::rated(SeverityField::Rash),
    SymptomLine::rated(SeverityField::Itching),
    SymptomLine::text(TextField::SkinConditions),
];

const MUSCULOSKELETAL: &[SymptomLine] = &[
    SymptomLine::rated_with_notes(SeverityField::BackPain, TextField::BackPainNotes),
    SymptomLine::rated_with_notes(SeverityField::JointPain, TextField::JointPainNotes),
    SymptomLine::rated_with_notes(SeverityField::MusclePain, TextField::MusclePainNotes),
    SymptomLine::rated(SeverityField::Stiffness),
];

const OVERALL_IMPACT: &[SymptomLine] = &[
    SymptomLine::text(TextField::WorkDaysMissed),
    SymptomLine::text(TextField::ActivitiesMissed),
    SymptomLine::text(TextField::TreatmentsUsed),
    SymptomLine::text(TextField::OtherNotes),
];

impl Category {
    /// Report section order.
    pub const ALL: [Category; 8] = [
        Category::HeadNeuro,
        Category::MentalHealthSleep,
        Category::Respiratory,
        Category::CardioRenal,
        Category::Gastrointestinal,
        Category::Skin,
        Category::Musculoskeletal,
        Category::OverallImpact,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Self::HeadNeuro => "Head / Neurological",
            Self::MentalHealthSleep => "Mental Health / Sleep",
            Self::Respiratory => "Respiratory",
            Self::CardioRenal => "Cardiovascular / Renal",
            Self::Gastrointestinal => "Gastrointestinal",
            Self::Skin => "Skin",
            Self::Musculoskeletal => "Musculoskeletal",
            Self::OverallImpact => "Overall Impact",
        }
    }

    pub fn lines(self) -> &'static [SymptomLine] {
        match self {
            Self::HeadNeuro => HEAD_NEURO,
            Self::MentalHealthSleep => MENTAL_HEALTH_SLEEP,
            Self::Respiratory => RESPIRATORY,
            Self::CardioRenal => CARDIO_RENAL,
            Self::Gastrointestinal => GASTROINTESTINAL,
            Self::Skin => SKIN,
            Self::Musculoskeletal => MUSCULOSKELETAL,
            Self::OverallImpact => OVERALL_IMPACT,
        }
    }

    /// A block is shown when any line in it is reported; otherwise the
    /// whole block, title included, is suppressed.
    pub fn is_reported(self, entry: &SymptomEntry) -> bool {
        self.lines().iter().any(|line| line.is_reported(entry))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn every_field_appears_exactly_once() {
        let mut severities = HashSet::new();
        let mut texts = HashSet::new();
        for category in Category::ALL {
            for line in category.lines() {
                if let Some(f) = line.severity {
                    assert!(severities.insert(f), "duplicate {f:?}");
                }
                if let Some(f) = line.notes {
                    assert!(texts.insert(f), "duplicate {f:?}");
                }
            }
        }
        assert_eq!(severities.len(), SeverityField::ALL.len());
        assert_eq!(texts.len(), TextField::ALL.len());
    }

    #[test]
    fn empty_entry_reports_no_category() {
        let entry = SymptomEntry::default();
        assert!(Category::ALL.iter().all(|c| !c.is_reported(&entry)));
    }

    #[test]
    fn single_note_makes_category_visible() {
        let entry = SymptomEntry::default().with_text(TextField::BloodPressure, "135/90");
        assert!(Category::CardioRenal.is_reported(&entry));
        assert!(!Category::HeadNeuro.is_reported(&entry));
    }

    #[test]
    fn single_severity_makes_category_visible() {
        let entry = SymptomEntry::default().with_severity(SeverityField::Stiffness, 2);
        assert!(Category::Musculoskeletal.is_reported(&entry));
        assert!(!Category::Skin.is_reported(&entry));
    }

    #[test]
    fn line_labels_prefer_symptom_name() {
        assert_eq!(HEAD_NEURO[0].label(), "Headache");
        assert_eq!(OVERALL_IMPACT[0].label(), "Work Days Missed");
    }
}
