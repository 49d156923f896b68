use physio_core::models::record::AssessmentRecord;
use physio_forms::forms::cardiopulmonary::Cardiopulmonary;
use physio_forms::forms::paediatric::Paediatric;
use physio_render::renderer::FormRenderer;

#[test]
fn html_wraps_form_in_assessment_block() {
    let html = FormRenderer::new(&Cardiopulmonary, None).to_html().unwrap();
    assert!(html.starts_with(r#"<div class="assessment-block" data-form="cardiopulmonary">"#));
    assert!(html.contains("<h3>Cardiopulmonary Physiotherapy Assessment</h3>"));
    assert_eq!(html.matches(r#"<h4 class="assessment-heading""#).count(), 12);
}

#[test]
fn html_has_one_control_per_field() {
    let html = FormRenderer::new(&Paediatric, None).to_html().unwrap();
    let inputs = html.matches("<input ").count();
    let textareas = html.matches("<textarea ").count();
    assert_eq!(inputs + textareas, 68);
    // complaints, developmental tests, reassessment notes
    assert_eq!(textareas, 3);
}

#[test]
fn html_uses_date_and_text_inputs() {
    let html = FormRenderer::new(&Cardiopulmonary, None).to_html().unwrap();
    assert!(html.contains(
        r#"<input type="date" id="admissionDate" name="admissionDate" value="" />"#
    ));
    assert!(html.contains(r#"<input type="text" id="patientBmi" name="patientBmi" value="" />"#));
    assert!(html.contains(
        r#"<textarea id="chiefComplaints" name="chiefComplaints" rows="2"></textarea>"#
    ));
}

#[test]
fn html_shows_effective_values() {
    let value: AssessmentRecord = [("patientName", "Asha Rao"), ("assessmentDate", "2024-03-01")]
        .into_iter()
        .collect();
    let html = FormRenderer::new(&Cardiopulmonary, Some(&value))
        .to_html()
        .unwrap();
    assert!(html.contains(r#"name="patientName" value="Asha Rao""#));
    assert!(html.contains(r#"name="assessmentDate" value="2024-03-01""#));
}

#[test]
fn html_escapes_values() {
    let value: AssessmentRecord = [("diagnosis", "<script>alert(1)</script>")]
        .into_iter()
        .collect();
    let html = FormRenderer::new(&Cardiopulmonary, Some(&value))
        .to_html()
        .unwrap();
    assert!(!html.contains("<script>"));
    assert!(html.contains("&lt;script&gt;"));
}

#[test]
fn html_places_full_width_fields_after_grid() {
    let html = FormRenderer::new(&Cardiopulmonary, None).to_html().unwrap();
    let grid_field = html.find(r#"id="treatmentHomeExercise""#).unwrap();
    let full_field = html.find(r#"id="outcomeMeasures""#).unwrap();
    let next_heading = html.find(r#"id="reassessment""#).unwrap();
    assert!(grid_field < full_field);
    assert!(full_field < next_heading);
}

#[test]
fn section_without_grid_fields_has_no_grid() {
    let html = FormRenderer::new(&Paediatric, None).to_html().unwrap();
    let start = html.find(r#"id="special_tests""#).unwrap();
    let end = html.find(r#"id="functional_assessment""#).unwrap();
    let section = &html[start..end];
    assert!(!section.contains("assessment-grid"));
    assert!(section.contains(r#"id="specialDevelopmentalTests""#));
}

#[test]
fn unknown_keys_do_not_reach_markup() {
    let value: AssessmentRecord = [("legacyNotes", "from v0")].into_iter().collect();
    let html = FormRenderer::new(&Paediatric, Some(&value))
        .to_html()
        .unwrap();
    assert!(!html.contains("legacyNotes"));
    assert!(!html.contains("from v0"));
}
