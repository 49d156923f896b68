//! Command implementations. Each returns the text the binary prints on
//! stdout; the CLI plays the caller that owns the record.

use std::path::Path;

use physio_core::models::record::AssessmentRecord;
use physio_forms::{FormSummary, all_forms, require_form};
use physio_render::renderer::FormRenderer;
use tracing::info;

use crate::config::{OutputFormat, PhysioConfig};

/// Read a record from a JSON file.
pub fn read_record(path: &Path) -> eyre::Result<AssessmentRecord> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read record at {}: {e}", path.display()))?;
    let record = AssessmentRecord::from_json_str(&contents)?;
    Ok(record)
}

pub fn list_forms() -> Vec<FormSummary> {
    all_forms()
        .iter()
        .map(|form| FormSummary::of(form.as_ref()))
        .collect()
}

pub fn format_form_list(forms: &[FormSummary]) -> String {
    let width = forms.iter().map(|f| f.id.len()).max().unwrap_or(0);
    forms
        .iter()
        .map(|f| format!("{:<width$}  {} ({} fields)\n", f.id, f.title, f.field_count))
        .collect()
}

pub fn schema(form_id: &str) -> eyre::Result<String> {
    let form = require_form(form_id)?;
    Ok(serde_json::to_string_pretty(form.sections())?)
}

pub fn defaults(form_id: &str) -> eyre::Result<String> {
    let form = require_form(form_id)?;
    Ok(serde_json::to_string_pretty(form.default_record())?)
}

pub fn render(
    form_id: &str,
    record: Option<&AssessmentRecord>,
    format: OutputFormat,
) -> eyre::Result<String> {
    let form = require_form(form_id)?;
    let renderer = FormRenderer::new(form.as_ref(), record);

    let output = match format {
        OutputFormat::Json => serde_json::to_string_pretty(&renderer.view())?,
        OutputFormat::Html => renderer.to_html()?,
        OutputFormat::Text => renderer.to_text(),
    };
    Ok(output)
}

/// Apply one field edit and return the record the renderer reported.
pub fn edit(
    form_id: &str,
    record: Option<&AssessmentRecord>,
    field: &str,
    value: &str,
) -> eyre::Result<AssessmentRecord> {
    let form = require_form(form_id)?;

    let mut delivered = None;
    FormRenderer::new(form.as_ref(), record)
        .on_change(|next| delivered = Some(next))
        .edit(field, value)?;

    let next = delivered.ok_or_else(|| eyre::eyre!("edit of '{field}' produced no record"))?;
    info!(form = %form_id, field, "record updated");
    Ok(next)
}

pub fn show_config(config: &PhysioConfig) -> eyre::Result<String> {
    Ok(serde_json::to_string_pretty(config)?)
}
