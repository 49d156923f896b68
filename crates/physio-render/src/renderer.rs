use physio_core::models::record::AssessmentRecord;
use physio_forms::AssessmentForm;
use tracing::{debug, trace};

use crate::error::RenderError;
use crate::html;
use crate::view::FormView;

/// Callback receiving the complete next record after an edit.
pub type ChangeHandler<'a> = Box<dyn FnMut(AssessmentRecord) + 'a>;

/// A controlled assessment form.
///
/// Displays `defaults` merged with the caller's record. Edits are reported
/// to the change handler as whole-record replacements and are not retained:
/// to show an edit, the caller builds a new renderer with the record it was
/// handed.
pub struct FormRenderer<'a> {
    form: &'a dyn AssessmentForm,
    record: AssessmentRecord,
    on_change: Option<ChangeHandler<'a>>,
}

impl<'a> FormRenderer<'a> {
    /// `value` may be partial, empty or absent; it is only read.
    pub fn new(form: &'a dyn AssessmentForm, value: Option<&AssessmentRecord>) -> Self {
        let record = form.effective_record(value);

        let unknown = form.unknown_keys(&record);
        if !unknown.is_empty() {
            debug!(form = %form.id(), keys = ?unknown, "record has fields this form does not render");
        }

        Self {
            form,
            record,
            on_change: None,
        }
    }

    pub fn on_change(mut self, handler: impl FnMut(AssessmentRecord) + 'a) -> Self {
        self.on_change = Some(Box::new(handler));
        self
    }

    /// The record currently displayed.
    pub fn effective(&self) -> &AssessmentRecord {
        &self.record
    }

    pub fn view(&self) -> FormView {
        FormView::build(self.form, &self.record)
    }

    /// Report an edit of `field` to the change handler.
    ///
    /// The handler is called exactly once with the effective record plus
    /// the new value. Without a handler the edit is dropped. Editing a field
    /// the form does not declare is an error and notifies nobody.
    pub fn edit(&mut self, field: &str, value: impl Into<String>) -> Result<(), RenderError> {
        self.form.require_field(field)?;

        let Some(handler) = self.on_change.as_mut() else {
            trace!(form = %self.form.id(), field, "no change handler; edit dropped");
            return Ok(());
        };

        let next = self.record.with_field(field, value);
        debug!(form = %self.form.id(), field, "field edited");
        handler(next);
        Ok(())
    }

    pub fn to_html(&self) -> Result<String, RenderError> {
        html::render_form(&self.view())
    }

    pub fn to_text(&self) -> String {
        self.form.to_structured_text(&self.record)
    }
}
