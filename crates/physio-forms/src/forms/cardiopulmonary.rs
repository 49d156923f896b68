use std::sync::LazyLock;

use physio_core::models::field::FieldSpec;
use physio_core::models::record::AssessmentRecord;
use physio_core::models::section::Section;

use super::common;
use crate::AssessmentForm;

/// Cardiopulmonary physiotherapy assessment.
/// 61 fields across 12 sections, including chest and exercise-tolerance findings.
pub struct Cardiopulmonary;

static SECTIONS: LazyLock<Vec<Section>> = LazyLock::new(|| {
    vec![
        Section::new(
            "patient_identification",
            "Patient Identification Details",
            vec![
                FieldSpec::text("patientName", "Name"),
                FieldSpec::text("patientAge", "Age"),
                FieldSpec::text("patientGender", "Gender"),
                FieldSpec::text("patientAddress", "Address"),
                FieldSpec::text("patientOccupation", "Occupation"),
                FieldSpec::text("patientHeight", "Height"),
                FieldSpec::text("patientWeight", "Weight"),
                FieldSpec::text("patientBmi", "BMI"),
                FieldSpec::text("patientOpdIpdNo", "OPD / IPD No."),
                FieldSpec::date("assessmentDate", "Date of Assessment"),
                FieldSpec::date("admissionDate", "Date of Admission"),
                FieldSpec::text("referringDoctor", "Referring Doctor"),
                FieldSpec::text("diagnosis", "Diagnosis"),
                FieldSpec::multiline("chiefComplaints", "Chief Complaints (Patient's Words)"),
            ],
        ),
        common::history_of_present_illness(),
        common::past_history(),
        common::social_history(),
        Section::new(
            "observation",
            "Observation",
            vec![
                FieldSpec::text("observationPosture", "Posture"),
                FieldSpec::text("observationGait", "Gait / functional posture"),
                FieldSpec::text("observationAssistiveDevices", "Assistive devices"),
            ],
        ),
        common::vital_parameters("Vital Parameters"),
        Section::new(
            "cardiopulmonary_assessment",
            "Cardiopulmonary Assessment",
            vec![
                FieldSpec::text("cardioChestExpansion", "Chest expansion"),
                FieldSpec::text("cardioBreathSounds", "Breath sounds"),
                FieldSpec::text("cardioDyspnoeaGrade", "Dyspnoea grade"),
                FieldSpec::text("cardioCoughSputum", "Cough & sputum"),
                FieldSpec::text("cardioExerciseTolerance", "Exercise tolerance"),
                FieldSpec::text(
                    "cardioFunctionalCapacity",
                    "Functional capacity (6MWT / METs)",
                ),
            ],
        ),
        common::functional_assessment(Vec::new()),
        common::problem_list(),
        common::goals(),
        Section::new(
            "treatment_plan",
            "Treatment Plan",
            vec![
                FieldSpec::text("treatmentElectrotherapy", "Electrotherapy"),
                FieldSpec::text("treatmentExerciseTherapy", "Exercise therapy"),
                FieldSpec::text(
                    "treatmentCardiopulmonaryRehab",
                    "Cardiopulmonary rehabilitation",
                ),
                FieldSpec::text("treatmentHomeExercise", "Home exercise program"),
                FieldSpec::text("outcomeMeasures", "Outcome Measures (6MWT / METs)").full_width(),
            ],
        ),
        common::reassessment(),
    ]
});

static DEFAULTS: LazyLock<AssessmentRecord> =
    LazyLock::new(|| AssessmentRecord::empty_for(&SECTIONS));

impl AssessmentForm for Cardiopulmonary {
    fn id(&self) -> &str {
        "cardiopulmonary"
    }

    fn name(&self) -> &str {
        "Cardiopulmonary"
    }

    fn title(&self) -> &str {
        "Cardiopulmonary Physiotherapy Assessment"
    }

    fn sections(&self) -> &[Section] {
        &SECTIONS
    }

    fn default_record(&self) -> &AssessmentRecord {
        &DEFAULTS
    }
}
