use super::*;
use crate::services::registration::RegistrationForm;

fn submit(form: &mut RegistrationForm, name: &str, email: &str, course: &str) {
    form.update_field(Field::Name, name);
    form.update_field(Field::Email, email);
    form.update_field(Field::Course, course);
    form.submit().unwrap();
}

#[test]
fn empty_log_renders_form_without_table() {
    let html = render(DraftRecord::default(), Vec::new(), None);
    assert!(html.contains("Course Registration"));
    assert!(html.contains("action=\"/register\""));
    assert!(!html.contains("<table"));
    assert!(!html.contains("role=\"alert\""));
}

#[test]
fn every_input_is_required_and_named() {
    let html = render(DraftRecord::default(), Vec::new(), None);
    for field in Field::ALL {
        assert!(html.contains(&format!("name=\"{}\"", field.as_str())));
    }
    assert_eq!(html.matches(" required").count(), 3);
    assert!(html.contains("type=\"email\""));
}

#[test]
fn inputs_are_bound_to_draft_values() {
    let draft = DraftRecord { name: "Ada".into(), email: "a@x.com".into(), course: String::new() };
    let html = render(draft, Vec::new(), None);
    assert!(html.contains("value=\"Ada\""));
    assert!(html.contains("value=\"a@x.com\""));
}

#[test]
fn table_lists_rows_in_submission_order() {
    let mut form = RegistrationForm::new();
    submit(&mut form, "Ada", "a@x.com", "CS101");
    submit(&mut form, "Brian", "b@y.org", "MA201");

    let html = render(form.draft().clone(), form.log().to_vec(), None);
    assert!(html.contains("<table"));
    assert_eq!(html.matches("<tr data-seq").count(), 2);

    let ada = html.find("Ada").unwrap();
    let brian = html.find("Brian").unwrap();
    assert!(ada < brian);
    assert!(html.find("CS101").unwrap() < html.find("MA201").unwrap());
}

#[test]
fn table_header_has_three_columns() {
    let mut form = RegistrationForm::new();
    submit(&mut form, "Ada", "a@x.com", "CS101");
    let html = render(DraftRecord::default(), form.log().to_vec(), None);
    assert_eq!(html.matches("<th>").count(), 3);
    assert_eq!(html.matches("<td>").count(), 3);
}

#[test]
fn error_notice_flags_offending_fields() {
    let draft = DraftRecord { name: "Ada".into(), ..DraftRecord::default() };
    let err = SubmitError::MissingFields(vec![Field::Email, Field::Course]);
    let html = render(draft, Vec::new(), Some(err));
    assert!(html.contains("role=\"alert\""));
    assert!(html.contains("missing required fields: email, course"));
    assert_eq!(html.matches("aria-invalid=\"true\"").count(), 2);
}

#[test]
fn user_text_is_escaped() {
    let mut form = RegistrationForm::new();
    submit(&mut form, "<script>x</script>", "a@x.com", "CS101");
    let html = render(DraftRecord::default(), form.log().to_vec(), None);
    assert!(!html.contains("<script>"));
    assert!(html.contains("&lt;script&gt;"));
}
