use serde::{Deserialize, Serialize};

use super::entry::SymptomEntry;

/// Generates a field-key enum over `SymptomEntry` members: `ALL` in
/// declaration order, a display label, the serialized key, and typed
/// accessors into an entry.
macro_rules! field_enum {
    ($name:ident : $ty:ty { $($variant:ident => $field:ident, $label:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "snake_case")]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$(Self::$variant),+];

            pub fn label(self) -> &'static str {
                match self {
                    $(Self::$variant => $label),+
                }
            }

            /// Key used in the persisted entry schema.
            pub fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => stringify!($field)),+
                }
            }

            pub fn get(self, entry: &SymptomEntry) -> &$ty {
                match self {
                    $(Self::$variant => &entry.$field),+
                }
            }

            pub fn get_mut(self, entry: &mut SymptomEntry) -> &mut $ty {
                match self {
                    $(Self::$variant => &mut entry.$field),+
                }
            }
        }
    };
}

field_enum!(SeverityField: i32 {
    Headache => headache, "Headache",
    Migraine => migraine, "Migraine",
    Dizziness => dizziness, "Dizziness",
    BrainFog => brain_fog, "Brain Fog",
    VisionChanges => vision_changes, "Vision Changes",
    Numbness => numbness, "Numbness/Tingling",
    Mood => mood, "Mood",
    Anxiety => anxiety, "Anxiety",
    Depression => depression, "Depression",
    SleepProblems => sleep_problems, "Sleep Problems",
    Fatigue => fatigue, "Fatigue",
    ShortnessOfBreath => shortness_of_breath, "Shortness of Breath",
    Cough => cough, "Cough",
    Wheezing => wheezing, "Wheezing",
    ChestTightness => chest_tightness, "Chest Tightness",
    Palpitations => palpitations, "Heart Palpitations",
    ChestPain => chest_pain, "Chest Pain",
    UrinaryIssues => urinary_issues, "Urinary Issues",
    Nausea => nausea, "Nausea",
    AbdominalPain => abdominal_pain, "Abdominal Pain",
    Bloating => bloating, "Bloating",
    Diarrhea => diarrhea, "Diarrhea",
    Constipation => constipation, "Constipation",
    AcidReflux => acid_reflux, "Acid Reflux",
    Rash => rash, "Rash",
    Itching => itching, "Itching",
    BackPain => back_pain, "Back Pain",
    JointPain => joint_pain, "Joint Pain",
    MusclePain => muscle_pain, "Muscle Pain",
    Stiffness => stiffness, "Stiffness",
});

field_enum!(TextField: String {
    HeadacheNotes => headache_notes, "Headache Notes",
    NumbnessNotes => numbness_notes, "Numbness/Tingling Notes",
    MoodNotes => mood_notes, "Mood Notes",
    SleepNotes => sleep_notes, "Sleep Notes",
    BreathingNotes => breathing_notes, "Breathing Notes",
    UrinaryNotes => urinary_notes, "Urinary Notes",
    Swelling => swelling, "Swelling",
    BloodPressure => blood_pressure, "Blood Pressure",
    NauseaNotes => nausea_notes, "Nausea Notes",
    RefluxNotes => reflux_notes, "Acid Reflux Notes",
    SkinConditions => skin_conditions, "Skin Conditions",
    BackPainNotes => back_pain_notes, "Back Pain Notes",
    JointPainNotes => joint_pain_notes, "Joint Pain Notes",
    MusclePainNotes => muscle_pain_notes, "Muscle Pain Notes",
    WorkDaysMissed => work_days_missed, "Work Days Missed",
    ActivitiesMissed => activities_missed, "Activities Missed",
    TreatmentsUsed => treatments_used, "Treatments Used",
    OtherNotes => other_notes, "Other Notes",
});

/// Symptoms shown in summary headlines and list lines.
pub const HEADLINE_FIELDS: [SeverityField; 4] = [
    SeverityField::Headache,
    SeverityField::Fatigue,
    SeverityField::BackPain,
    SeverityField::Mood,
];

/// Series plotted in the summary trend chart.
pub const CHART_FIELDS: [SeverityField; 3] = [
    SeverityField::Headache,
    SeverityField::Fatigue,
    SeverityField::BackPain,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_fields_cover_thirty_symptoms() {
        assert_eq!(SeverityField::ALL.len(), 30);
    }

    #[test]
    fn text_fields_include_overall_impact() {
        assert_eq!(TextField::ALL.len(), 18);
        assert!(TextField::ALL.contains(&TextField::WorkDaysMissed));
        assert!(TextField::ALL.contains(&TextField::OtherNotes));
    }

    #[test]
    fn accessors_address_the_named_member() {
        let mut entry = SymptomEntry::default();
        *SeverityField::BackPain.get_mut(&mut entry) = 7;
        *TextField::BloodPressure.get_mut(&mut entry) = "120/80".into();
        assert_eq!(entry.back_pain, 7);
        assert_eq!(entry.blood_pressure, "120/80");
        assert_eq!(*SeverityField::BackPain.get(&entry), 7);
    }

    #[test]
    fn serialized_keys_match_entry_schema() {
        let json = serde_json::to_value(SymptomEntry::default()).unwrap();
        let obj = json.as_object().unwrap();
        for field in SeverityField::ALL {
            assert!(obj.contains_key(field.as_str()), "{}", field.as_str());
        }
        for field in TextField::ALL {
            assert!(obj.contains_key(field.as_str()), "{}", field.as_str());
        }
    }

    #[test]
    fn field_enum_serializes_snake_case() {
        let json = serde_json::to_string(&SeverityField::ShortnessOfBreath).unwrap();
        assert_eq!(json, "\"shortness_of_breath\"");
    }
}
