use physio_core::models::field::{FieldKind, FieldLayout};
use physio_core::models::record::AssessmentRecord;
use physio_forms::error::FormError;
use physio_forms::forms::cardiopulmonary::Cardiopulmonary;
use physio_forms::forms::paediatric::Paediatric;
use physio_forms::AssessmentForm;
use physio_render::error::RenderError;
use physio_render::renderer::FormRenderer;

fn record(pairs: &[(&str, &str)]) -> AssessmentRecord {
    pairs.iter().copied().collect()
}

#[test]
fn cardiopulmonary_edit_scenario() {
    let value = record(&[("patientName", "Asha Rao")]);
    let mut received = Vec::new();

    {
        let mut renderer = FormRenderer::new(&Cardiopulmonary, Some(&value))
            .on_change(|next| received.push(next));

        let view = renderer.view();
        assert_eq!(view.field("patientName").unwrap().value, "Asha Rao");
        assert!(
            view.fields()
                .filter(|f| f.key != "patientName")
                .all(|f| f.value.is_empty())
        );

        renderer.edit("patientAge", "34").unwrap();
    }

    assert_eq!(received.len(), 1);
    let next = &received[0];
    assert_eq!(next.value("patientName"), "Asha Rao");
    assert_eq!(next.value("patientAge"), "34");
    assert_eq!(next.len(), 61);
    assert!(
        next.iter()
            .filter(|(k, _)| !matches!(*k, "patientName" | "patientAge"))
            .all(|(_, v)| v.is_empty())
    );
}

#[test]
fn paediatric_without_value_shows_empty_fields_and_stays_quiet() {
    let mut calls = 0;
    {
        let renderer = FormRenderer::new(&Paediatric, None).on_change(|_| calls += 1);
        let view = renderer.view();
        assert_eq!(view.fields().count(), 68);
        assert!(view.fields().all(|f| f.value.is_empty()));
    }
    assert_eq!(calls, 0);
}

#[test]
fn each_edit_invokes_handler_once_with_full_record() {
    let mut received = Vec::new();
    {
        let mut renderer =
            FormRenderer::new(&Paediatric, None).on_change(|next| received.push(next));
        renderer.edit("romActive", "Full").unwrap();
        renderer.edit("romPassive", "Full").unwrap();
    }

    assert_eq!(received.len(), 2);
    for next in &received {
        assert_eq!(next.len(), Paediatric.field_count());
    }
    // edits are not retained: the second record is built from the same effective record
    assert_eq!(received[1].value("romActive"), "");
    assert_eq!(received[1].value("romPassive"), "Full");
}

#[test]
fn edit_isolation() {
    let value = record(&[
        ("patientName", "Meera"),
        ("vitalPulse", "82"),
        ("assessmentDate", "2024-05-02"),
    ]);
    let mut received = Vec::new();
    let effective;
    {
        let mut renderer =
            FormRenderer::new(&Cardiopulmonary, Some(&value)).on_change(|next| received.push(next));
        effective = renderer.effective().clone();
        renderer.edit("vitalPulse", "90").unwrap();
    }

    let next = &received[0];
    assert_eq!(next.value("vitalPulse"), "90");
    for (key, value) in effective.iter().filter(|(k, _)| *k != "vitalPulse") {
        assert_eq!(next.value(key), value, "{key}");
    }
}

#[test]
fn edit_without_handler_is_a_silent_no_op() {
    let value = record(&[("patientName", "Asha Rao")]);
    let before = value.clone();

    let mut renderer = FormRenderer::new(&Cardiopulmonary, Some(&value));
    renderer.edit("patientAge", "34").unwrap();

    assert_eq!(value, before);
    assert_eq!(renderer.effective().value("patientAge"), "");
}

#[test]
fn caller_record_is_never_mutated() {
    let value = record(&[("patientName", "Asha Rao")]);
    let before = value.clone();
    let mut received = Vec::new();
    {
        let mut renderer =
            FormRenderer::new(&Cardiopulmonary, Some(&value)).on_change(|next| received.push(next));
        renderer.edit("patientName", "A. Rao").unwrap();
    }

    assert_eq!(value, before);
    assert_eq!(received[0].value("patientName"), "A. Rao");
}

#[test]
fn unknown_field_edit_is_rejected_without_notifying() {
    let mut calls = 0;
    let result;
    {
        let mut renderer = FormRenderer::new(&Cardiopulmonary, None).on_change(|_| calls += 1);
        result = renderer.edit("romActive", "Full");
    }

    assert!(matches!(
        result,
        Err(RenderError::Form(FormError::UnknownField { ref field, .. })) if field == "romActive"
    ));
    assert_eq!(calls, 0);
}

#[test]
fn unknown_caller_keys_are_kept_but_not_rendered() {
    let value = record(&[("patientName", "Asha Rao"), ("legacyNotes", "from v0")]);
    let mut received = Vec::new();
    {
        let mut renderer =
            FormRenderer::new(&Cardiopulmonary, Some(&value)).on_change(|next| received.push(next));
        assert!(renderer.view().field("legacyNotes").is_none());
        assert_eq!(renderer.view().fields().count(), 61);
        renderer.edit("diagnosis", "COPD").unwrap();
    }

    assert_eq!(received[0].value("legacyNotes"), "from v0");
    assert_eq!(received[0].len(), 62);
}

#[test]
fn rerendering_with_delivered_record_displays_the_edit() {
    let mut store: Option<AssessmentRecord> = None;

    {
        let mut renderer =
            FormRenderer::new(&Paediatric, store.as_ref()).on_change(|next| store = Some(next));
        renderer.edit("birthNicuStay", "2 weeks").unwrap();
    }

    let renderer = FormRenderer::new(&Paediatric, store.as_ref());
    assert_eq!(
        renderer.view().field("birthNicuStay").unwrap().value,
        "2 weeks"
    );
}

#[test]
fn view_carries_kind_layout_and_rows() {
    let renderer = FormRenderer::new(&Paediatric, None);
    let view = renderer.view();

    assert_eq!(view.form_id, "paediatric");
    assert_eq!(view.title, "Paediatric Physiotherapy Assessment");
    assert_eq!(view.sections.len(), 15);

    let complaints = view.field("chiefComplaints").unwrap();
    assert_eq!(complaints.kind, FieldKind::Multiline);
    assert_eq!(complaints.layout, FieldLayout::FullWidth);
    assert_eq!(complaints.rows, Some(2));

    let date = view.field("reassessmentDate").unwrap();
    assert_eq!(date.kind, FieldKind::Date);
    assert_eq!(date.rows, None);
}

#[test]
fn text_summary_uses_effective_record() {
    let value = record(&[("goalsShortTerm", "Walk 50m unaided")]);
    let renderer = FormRenderer::new(&Cardiopulmonary, Some(&value));
    let text = renderer.to_text();
    assert!(text.contains("### Goals\n- Short Term Goals: Walk 50m unaided\n"));
}
