use physio_core::models::field::{FieldKind, FieldLayout, FieldSpec};
use physio_core::models::record::AssessmentRecord;
use physio_forms::AssessmentForm;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Everything a front end needs to draw one form: the schema with the
/// effective value filled into every field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FormView {
    pub form_id: String,
    pub title: String,
    pub sections: Vec<SectionView>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SectionView {
    pub id: String,
    pub title: String,
    pub fields: Vec<FieldView>,
}

/// One input control.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FieldView {
    pub key: String,
    pub label: String,
    pub kind: FieldKind,
    pub layout: FieldLayout,
    /// Text-area height; only set for multi-line fields.
    pub rows: Option<u32>,
    pub value: String,
}

impl FieldView {
    fn of(spec: &FieldSpec, record: &AssessmentRecord) -> Self {
        Self {
            key: spec.key.clone(),
            label: spec.label.clone(),
            kind: spec.kind,
            layout: spec.layout,
            rows: spec.kind.rows(),
            value: record.value(&spec.key).to_string(),
        }
    }
}

impl FormView {
    /// Build the view by walking the form's sections in order. Keys in
    /// `record` that the form does not declare produce no field.
    pub fn build(form: &dyn AssessmentForm, record: &AssessmentRecord) -> Self {
        let sections = form
            .sections()
            .iter()
            .map(|section| SectionView {
                id: section.id.clone(),
                title: section.title.clone(),
                fields: section
                    .fields
                    .iter()
                    .map(|spec| FieldView::of(spec, record))
                    .collect(),
            })
            .collect();

        Self {
            form_id: form.id().to_string(),
            title: form.title().to_string(),
            sections,
        }
    }

    pub fn fields(&self) -> impl Iterator<Item = &FieldView> {
        self.sections.iter().flat_map(|s| &s.fields)
    }

    pub fn field(&self, key: &str) -> Option<&FieldView> {
        self.fields().find(|f| f.key == key)
    }
}
