//! Sections shared by every physiotherapy assessment type.
//!
//! Field keys here are part of the persisted record contract; renaming one
//! changes the record shape for every form that uses the section.

use physio_core::models::field::FieldSpec;
use physio_core::models::section::Section;

pub fn history_of_present_illness() -> Section {
    Section::new(
        "history_of_present_illness",
        "History of Present Illness",
        vec![
            FieldSpec::text("historyOnset", "Onset (sudden / gradual)"),
            FieldSpec::text("historyMode", "Mode of onset"),
            FieldSpec::text("historyProgression", "Progression of symptoms"),
            FieldSpec::text("historyAggravating", "Aggravating factors"),
            FieldSpec::text("historyRelieving", "Relieving factors"),
            FieldSpec::text("historyDiurnal", "Diurnal variation"),
        ],
    )
}

pub fn past_history() -> Section {
    Section::new(
        "past_history",
        "Past History",
        vec![
            FieldSpec::text("pastMedical", "Medical history"),
            FieldSpec::text("pastSurgical", "Surgical history"),
            FieldSpec::text("pastPhysio", "Previous physiotherapy treatment"),
            FieldSpec::text("pastMedications", "Medications"),
            FieldSpec::text("pastFamily", "Family history"),
        ],
    )
}

pub fn social_history() -> Section {
    Section::new(
        "social_history",
        "Personal / Social History",
        vec![
            FieldSpec::text("socialDiet", "Diet"),
            FieldSpec::text("socialSleep", "Sleep"),
            FieldSpec::text("socialBowelBladder", "Bowel & bladder"),
            FieldSpec::text("socialAddiction", "Addiction (if any)"),
            FieldSpec::text(
                "socialFunctionalIndependence",
                "Functional independence level",
            ),
        ],
    )
}

pub fn vital_parameters(title: &str) -> Section {
    Section::new(
        "vital_parameters",
        title,
        vec![
            FieldSpec::text("vitalPulse", "Pulse"),
            FieldSpec::text("vitalBloodPressure", "Blood Pressure"),
            FieldSpec::text("vitalRespiratoryRate", "Respiratory Rate"),
            FieldSpec::text("vitalSpo2", "SpO2"),
            FieldSpec::text("vitalTemperature", "Temperature"),
        ],
    )
}

/// Bed mobility, transfers and ADLs, followed by any form-specific fields.
pub fn functional_assessment(extra: Vec<FieldSpec>) -> Section {
    let mut fields = vec![
        FieldSpec::text("functionalBedMobility", "Bed mobility"),
        FieldSpec::text("functionalTransfers", "Transfers"),
        FieldSpec::text("functionalAdls", "ADLs"),
    ];
    fields.extend(extra);
    Section::new("functional_assessment", "Functional Assessment", fields)
}

pub fn problem_list() -> Section {
    Section::new(
        "problem_list",
        "Problem List",
        vec![
            FieldSpec::text("problemImpairments", "Impairments"),
            FieldSpec::text("problemActivityLimitations", "Activity limitations"),
            FieldSpec::text(
                "problemParticipationRestrictions",
                "Participation restrictions",
            ),
            FieldSpec::text("physiotherapyDiagnosis", "Physiotherapy Diagnosis").full_width(),
        ],
    )
}

pub fn goals() -> Section {
    Section::new(
        "goals",
        "Goals",
        vec![
            FieldSpec::text("goalsShortTerm", "Short Term Goals"),
            FieldSpec::text("goalsLongTerm", "Long Term Goals"),
        ],
    )
}

pub fn reassessment() -> Section {
    Section::new(
        "reassessment",
        "Reassessment & Progress Notes",
        vec![
            FieldSpec::text(
                "physiotherapistSignature",
                "Physiotherapist's Name & Signature",
            ),
            FieldSpec::date("reassessmentDate", "Date"),
            FieldSpec::multiline("reassessmentNotes", "Notes"),
        ],
    )
}
