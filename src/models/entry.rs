use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::enums::{SeverityField, TextField};

/// One dated symptom record.
///
/// Severities are 0–10 by convention only; the input screens clamp them.
/// A severity of 0 or an empty note means "not reported", which is what
/// report sections key their visibility on. Missing members default when
/// reading older files, so new optional fields can be added freely.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SymptomEntry {
    pub id: Uuid,
    pub date: DateTime<Utc>,

    // Head / neuro
    pub headache: i32,
    pub headache_notes: String,
    pub migraine: i32,
    pub dizziness: i32,
    pub brain_fog: i32,
    pub vision_changes: i32,
    pub numbness: i32,
    pub numbness_notes: String,

    // Mental health / sleep
    pub mood: i32,
    pub mood_notes: String,
    pub anxiety: i32,
    pub depression: i32,
    pub sleep_problems: i32,
    pub sleep_notes: String,
    pub fatigue: i32,

    // Respiratory
    pub shortness_of_breath: i32,
    pub breathing_notes: String,
    pub cough: i32,
    pub wheezing: i32,
    pub chest_tightness: i32,

    // Cardio / renal
    pub palpitations: i32,
    pub chest_pain: i32,
    pub urinary_issues: i32,
    pub urinary_notes: String,
    pub swelling: String,
    pub blood_pressure: String,

    // GI
    pub nausea: i32,
    pub nausea_notes: String,
    pub abdominal_pain: i32,
    pub bloating: i32,
    pub diarrhea: i32,
    pub constipation: i32,
    pub acid_reflux: i32,
    pub reflux_notes: String,

    // Skin
    pub rash: i32,
    pub itching: i32,
    pub skin_conditions: String,

    // Musculoskeletal
    pub back_pain: i32,
    pub back_pain_notes: String,
    pub joint_pain: i32,
    pub joint_pain_notes: String,
    pub muscle_pain: i32,
    pub muscle_pain_notes: String,
    pub stiffness: i32,

    // Overall impact
    pub work_days_missed: String,
    pub activities_missed: String,
    pub treatments_used: String,
    pub other_notes: String,
}

impl SymptomEntry {
    /// Empty entry with a fresh id.
    pub fn new(date: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            date,
            ..Self::default()
        }
    }

    /// Empty entry stamped with the current time, as the logging screen creates it.
    pub fn now() -> Self {
        Self::new(Utc::now())
    }

    pub fn severity(&self, field: SeverityField) -> i32 {
        *field.get(self)
    }

    pub fn set_severity(&mut self, field: SeverityField, value: i32) {
        *field.get_mut(self) = value;
    }

    pub fn text(&self, field: TextField) -> &str {
        field.get(self)
    }

    pub fn set_text(&mut self, field: TextField, value: impl Into<String>) {
        *field.get_mut(self) = value.into();
    }

    /// Builder-style severity setter.
    pub fn with_severity(mut self, field: SeverityField, value: i32) -> Self {
        self.set_severity(field, value);
        self
    }

    /// Builder-style text setter.
    pub fn with_text(mut self, field: TextField, value: impl Into<String>) -> Self {
        self.set_text(field, value);
        self
    }

    /// Whether anything at all was reported.
    pub fn has_any_data(&self) -> bool {
        SeverityField::ALL.iter().any(|f| self.severity(*f) > 0)
            || TextField::ALL.iter().any(|f| !self.text(*f).is_empty())
    }
}
