//! Registration routes: the HTML form and the JSON API over the same state.
//!
//! ERROR HANDLING
//! ==============
//! A rejected submit is a user error, not a server fault: the HTML form is
//! re-rendered with `422` and the user's values intact, and the JSON API
//! answers `422` with a structured error body. Unknown field names on the
//! draft endpoint are `400`.

use axum::Form;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Json, Redirect, Response};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::{ErrorBody, ErrorCode};
use crate::pages;
use crate::services::registration::{DraftRecord, Field, FormPhase, RegistrationForm, SubmitError, SubmittedRecord};
use crate::state::AppState;

/// Urlencoded body posted by the registration form. Missing inputs count as
/// empty so the precondition check reports them.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RegistrationFormBody {
    pub name: String,
    pub email: String,
    pub course: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateFieldBody {
    pub field: String,
    pub value: String,
}

#[derive(Debug, Serialize)]
pub struct DraftResponse {
    pub draft: DraftRecord,
    pub phase: FormPhase,
}

impl DraftResponse {
    fn from_form(form: &RegistrationForm) -> Self {
        Self { draft: form.draft().clone(), phase: form.phase() }
    }
}

fn submit_error_body(err: &SubmitError) -> ErrorBody {
    ErrorBody::from_error(err).with_fields(err.fields().into_iter().map(Field::as_str))
}

/// Commit the draft, logging the outcome. Caller holds the write lock.
fn commit(form: &mut RegistrationForm) -> Result<SubmittedRecord, SubmitError> {
    match form.submit() {
        Ok(record) => {
            info!(seq = record.seq(), course = %record.course(), "registration submitted");
            Ok(record.clone())
        }
        Err(err) => {
            warn!(code = err.error_code(), error = %err, "registration rejected");
            Err(err)
        }
    }
}

// =============================================================================
// HTML FORM
// =============================================================================

/// `GET /register` — form bound to the draft plus the submissions table.
pub async fn show_form(State(state): State<AppState>) -> Html<String> {
    let (draft, records) = {
        let form = state.form.read().await;
        (form.draft().clone(), form.log().to_vec())
    };
    Html(pages::registration::render(draft, records, None))
}

/// `POST /register` — apply the posted values to the draft and submit.
///
/// The updates and the submit run under one write lock, so other requests
/// see either the old state or the committed one.
pub async fn submit_form(State(state): State<AppState>, Form(body): Form<RegistrationFormBody>) -> Response {
    let mut form = state.form.write().await;
    form.update_field(Field::Name, body.name);
    form.update_field(Field::Email, body.email);
    form.update_field(Field::Course, body.course);

    match commit(&mut form) {
        Ok(_) => Redirect::to("/register").into_response(),
        Err(err) => {
            let html = pages::registration::render(form.draft().clone(), form.log().to_vec(), Some(err));
            (StatusCode::UNPROCESSABLE_ENTITY, Html(html)).into_response()
        }
    }
}

/// `POST /register/clear` — discard the draft.
pub async fn clear_form(State(state): State<AppState>) -> Redirect {
    state.form.write().await.reset_draft();
    debug!("registration draft cleared");
    Redirect::to("/register")
}

// =============================================================================
// JSON API
// =============================================================================

/// `GET /api/registrations` — submitted records in submission order.
pub async fn list_submissions(State(state): State<AppState>) -> Json<Vec<SubmittedRecord>> {
    Json(state.form.read().await.log().to_vec())
}

/// `GET /api/registrations/draft` — current draft and phase.
pub async fn get_draft(State(state): State<AppState>) -> Json<DraftResponse> {
    Json(DraftResponse::from_form(&*state.form.read().await))
}

/// `PATCH /api/registrations/draft` — set one draft field.
pub async fn update_draft(
    State(state): State<AppState>,
    Json(body): Json<UpdateFieldBody>,
) -> Result<Json<DraftResponse>, (StatusCode, Json<ErrorBody>)> {
    let field: Field = body.field.parse().map_err(|err| {
        let error = ErrorBody::from_error(&err).with_fields([body.field.clone()]);
        (StatusCode::BAD_REQUEST, Json(error))
    })?;

    let mut form = state.form.write().await;
    form.update_field(field, body.value);
    Ok(Json(DraftResponse::from_form(&form)))
}

/// `POST /api/registrations` — submit the current draft.
pub async fn submit_json(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<SubmittedRecord>), (StatusCode, Json<ErrorBody>)> {
    let mut form = state.form.write().await;
    commit(&mut form)
        .map(|record| (StatusCode::CREATED, Json(record)))
        .map_err(|err| (StatusCode::UNPROCESSABLE_ENTITY, Json(submit_error_body(&err))))
}

#[cfg(test)]
#[path = "registration_test.rs"]
mod tests;
