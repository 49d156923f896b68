//! HTML markup for a form view.
//!
//! Every section gets a heading, a grid of its grid-layout controls, then
//! its full-width controls. Labels and values are HTML-escaped by Tera's
//! autoescaping (the template name ends in `.html`).

use tera::{Context, Tera};
use tracing::debug;

use crate::error::RenderError;
use crate::view::FormView;

const TEMPLATE_NAME: &str = "assessment_form.html";

const TEMPLATE: &str = r#"<div class="assessment-block" data-form="{{ form_id }}">
  <div class="section-title">
    <h3>{{ title }}</h3>
  </div>
{% for section in sections %}
  <h4 class="assessment-heading" id="{{ section.id }}">{{ section.title }}</h4>
{%- set grid = section.fields | filter(attribute="layout", value="grid") %}
{%- set full = section.fields | filter(attribute="layout", value="full_width") %}
{%- if grid | length > 0 %}
  <div class="assessment-grid">
{%- for field in grid %}
    <div class="form-group">
      <label for="{{ field.key }}">{{ field.label }}</label>
{%- if field.kind == "multiline" %}
      <textarea id="{{ field.key }}" name="{{ field.key }}" rows="{{ field.rows }}">{{ field.value }}</textarea>
{%- else %}
      <input type="{% if field.kind == "date" %}date{% else %}text{% endif %}" id="{{ field.key }}" name="{{ field.key }}" value="{{ field.value }}" />
{%- endif %}
    </div>
{%- endfor %}
  </div>
{%- endif %}
{%- for field in full %}
  <div class="form-group">
    <label for="{{ field.key }}">{{ field.label }}</label>
{%- if field.kind == "multiline" %}
    <textarea id="{{ field.key }}" name="{{ field.key }}" rows="{{ field.rows }}">{{ field.value }}</textarea>
{%- else %}
    <input type="{% if field.kind == "date" %}date{% else %}text{% endif %}" id="{{ field.key }}" name="{{ field.key }}" value="{{ field.value }}" />
{%- endif %}
  </div>
{%- endfor %}
{% endfor %}
</div>
"#;

/// Render a form view as HTML.
pub fn render_form(view: &FormView) -> Result<String, RenderError> {
    let mut tera = Tera::default();
    tera.add_raw_template(TEMPLATE_NAME, TEMPLATE)
        .map_err(|e| RenderError::TemplateParse(e.to_string()))?;

    // Convert the view to a Tera context via serde_json
    let value = serde_json::to_value(view)?;
    let context =
        Context::from_value(value).map_err(|e| RenderError::TemplateRender(e.to_string()))?;

    let rendered = tera.render(TEMPLATE_NAME, &context)?;
    debug!(form = %view.form_id, bytes = rendered.len(), "rendered form html");
    Ok(rendered)
}
