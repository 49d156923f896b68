//! physio-forms
//!
//! Physiotherapy assessment form schemas. Pure data — no rendering
//! dependency. Declares, per assessment type, the complete field set, each
//! field's editor kind, and the section grouping used for display order.

pub mod error;
pub mod forms;

use physio_core::models::field::FieldSpec;
use physio_core::models::record::AssessmentRecord;
use physio_core::models::section::Section;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use error::FormError;

/// Trait implemented by each assessment form schema.
pub trait AssessmentForm: Send + Sync {
    /// Unique identifier for this form (e.g., "cardiopulmonary").
    fn id(&self) -> &str;

    /// Short human-readable name (e.g., "Cardiopulmonary").
    fn name(&self) -> &str;

    /// Heading shown above the rendered form.
    fn title(&self) -> &str;

    /// Sections in display order. The single source of truth for which
    /// fields this assessment type has.
    fn sections(&self) -> &[Section];

    /// The constant all-empty record for this form.
    fn default_record(&self) -> &AssessmentRecord;

    fn fields(&self) -> Vec<&FieldSpec> {
        self.sections().iter().flat_map(|s| &s.fields).collect()
    }

    fn field(&self, key: &str) -> Option<&FieldSpec> {
        self.sections().iter().find_map(|s| s.field(key))
    }

    fn require_field(&self, key: &str) -> Result<&FieldSpec, FormError> {
        self.field(key).ok_or_else(|| FormError::UnknownField {
            form_id: self.id().to_string(),
            field: key.to_string(),
        })
    }

    fn field_count(&self) -> usize {
        self.sections().iter().map(|s| s.fields.len()).sum()
    }

    /// Defaults merged with the caller's (possibly partial) record.
    fn effective_record(&self, value: Option<&AssessmentRecord>) -> AssessmentRecord {
        AssessmentRecord::merge(self.default_record(), value)
    }

    /// Keys in `record` that this form does not declare. They are kept in
    /// the record but never rendered.
    fn unknown_keys(&self, record: &AssessmentRecord) -> Vec<String> {
        record
            .keys()
            .filter(|k| !self.default_record().contains_key(k))
            .map(str::to_string)
            .collect()
    }

    /// Plain-text summary of the filled-in fields, grouped by section.
    /// Empty fields and empty sections are left out.
    fn to_structured_text(&self, record: &AssessmentRecord) -> String {
        let mut output = format!("## {}\n\n", self.title());
        for section in self.sections() {
            let filled: Vec<_> = section
                .fields
                .iter()
                .filter(|f| !record.value(&f.key).is_empty())
                .collect();
            if filled.is_empty() {
                continue;
            }
            output.push_str(&format!("### {}\n", section.title));
            for field in filled {
                output.push_str(&format!("- {}: {}\n", field.label, record.value(&field.key)));
            }
            output.push('\n');
        }
        output
    }
}

/// Listing entry for a registered form.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FormSummary {
    pub id: String,
    pub name: String,
    pub title: String,
    pub field_count: usize,
}

impl FormSummary {
    pub fn of(form: &dyn AssessmentForm) -> Self {
        Self {
            id: form.id().to_string(),
            name: form.name().to_string(),
            title: form.title().to_string(),
            field_count: form.field_count(),
        }
    }
}

/// Return all registered assessment forms.
pub fn all_forms() -> Vec<Box<dyn AssessmentForm>> {
    vec![
        Box::new(forms::cardiopulmonary::Cardiopulmonary),
        Box::new(forms::paediatric::Paediatric),
    ]
}

/// Look up a form by ID.
pub fn get_form(id: &str) -> Option<Box<dyn AssessmentForm>> {
    all_forms().into_iter().find(|f| f.id() == id)
}

pub fn require_form(id: &str) -> Result<Box<dyn AssessmentForm>, FormError> {
    get_form(id).ok_or_else(|| FormError::UnknownForm(id.to_string()))
}
