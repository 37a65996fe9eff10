use super::*;
use crate::services::registration::Field;

#[tokio::test]
async fn new_state_starts_with_empty_form() {
    let state = AppState::new();
    let form = state.form.read().await;
    assert!(form.is_empty());
    assert!(form.draft().is_blank());
}

#[tokio::test]
async fn clones_share_the_same_form() {
    let state = AppState::new();
    let other = state.clone();
    other.form.write().await.update_field(Field::Name, "Ada");
    assert_eq!(state.form.read().await.draft().name, "Ada");
}

#[tokio::test]
async fn with_form_keeps_seeded_submissions() {
    let mut form = RegistrationForm::new();
    form.update_field(Field::Name, "Ada");
    form.update_field(Field::Email, "a@x.com");
    form.update_field(Field::Course, "CS101");
    form.submit().unwrap();

    let state = AppState::with_form(form);
    assert_eq!(state.form.read().await.len(), 1);
}
