use std::sync::LazyLock;

use physio_core::models::field::FieldSpec;
use physio_core::models::record::AssessmentRecord;
use physio_core::models::section::Section;

use super::common;
use crate::AssessmentForm;

/// Paediatric physiotherapy assessment.
/// 68 fields across 15 sections. Adds birth and developmental history,
/// ROM, muscle strength and developmental tests; complaints are recorded in
/// the parent's words.
pub struct Paediatric;

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
                FieldSpec::text("patientHeight", "Height"),
                FieldSpec::text("patientWeight", "Weight"),
                FieldSpec::text("patientBmi", "BMI"),
                FieldSpec::text("patientOpdIpdNo", "OPD / IPD No."),
                FieldSpec::date("assessmentDate", "Date of Assessment"),
                FieldSpec::text("referringDoctor", "Referring Doctor"),
                FieldSpec::text("diagnosis", "Diagnosis"),
                FieldSpec::multiline("chiefComplaints", "Chief Complaints (Parent's Words)"),
            ],
        ),
        common::history_of_present_illness(),
        common::past_history(),
        common::social_history(),
        Section::new(
            "birth_developmental_history",
            "Birth & Developmental History",
            vec![
                FieldSpec::text(
                    "birthAntenatalNatalPostnatal",
                    "Antenatal / Natal / Postnatal history",
                ),
                FieldSpec::text("birthWeightDelivery", "Birth weight & type of delivery"),
                FieldSpec::text("birthNicuStay", "NICU stay (if any)"),
                FieldSpec::text("birthMilestones", "Developmental milestones"),
                FieldSpec::text("birthImmunization", "Immunization history"),
            ],
        ),
        Section::new(
            "observation",
            "Observation",
            vec![
                FieldSpec::text("observationPosture", "Posture"),
                FieldSpec::text("observationDeformity", "Deformity"),
                FieldSpec::text("observationMuscleWasting", "Muscle wasting / hypertrophy"),
                FieldSpec::text("observationGait", "Gait / functional posture"),
                FieldSpec::text("observationAssistiveDevices", "Assistive devices"),
                FieldSpec::text("observationBehaviour", "Behaviour & cooperation"),
            ],
        ),
        common::vital_parameters("Vital Parameters (If Required)"),
        Section::new(
            "range_of_motion",
            "Range of Motion (ROM)",
            vec![
                FieldSpec::text("romActive", "Active ROM"),
                FieldSpec::text("romPassive", "Passive ROM"),
                FieldSpec::text("romEndFeel", "End feel"),
            ],
        ),
        Section::new(
            "muscle_strength",
            "Muscle Strength",
            vec![
                FieldSpec::text("strengthMmt", "MMT Grade"),
                FieldSpec::text("strengthFunctional", "Functional strength"),
            ],
        ),
        Section::new(
            "special_tests",
            "Special Tests",
            vec![FieldSpec::multiline(
                "specialDevelopmentalTests",
                "Developmental tests",
            )],
        ),
        common::functional_assessment(vec![FieldSpec::text(
            "functionalPlayActivities",
            "Play activities",
        )]),
        common::problem_list(),
        common::goals(),
        Section::new(
            "treatment_plan",
            "Treatment Plan",
            vec![
                FieldSpec::text("treatmentExerciseTherapy", "Exercise therapy"),
                FieldSpec::text("treatmentManualTherapy", "Manual therapy"),
                FieldSpec::text("treatmentPlayTherapy", "Play therapy"),
                FieldSpec::text("treatmentHomeExercise", "Home exercise program"),
                FieldSpec::text("outcomeMeasures", "Outcome Measures (GMFM)").full_width(),
            ],
        ),
        common::reassessment(),
    ]
});

static DEFAULTS: LazyLock<AssessmentRecord> =
    LazyLock::new(|| AssessmentRecord::empty_for(&SECTIONS));

impl AssessmentForm for Paediatric {
    fn id(&self) -> &str {
        "paediatric"
    }

    fn name(&self) -> &str {
        "Paediatric"
    }

    fn title(&self) -> &str {
        "Paediatric Physiotherapy Assessment"
    }

    fn sections(&self) -> &[Section] {
        &SECTIONS
    }

    fn default_record(&self) -> &AssessmentRecord {
        &DEFAULTS
    }
}
