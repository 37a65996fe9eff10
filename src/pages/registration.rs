//! Course registration page: the form bound to the draft, and the table of
//! submissions below it once there is at least one.

use leptos::prelude::*;

use super::layout::PageShell;
use super::{Page, render_document};
use crate::services::registration::{DraftRecord, Field, SubmitError, SubmittedRecord};

#[component]
fn FormField(field: Field, value: String, invalid: bool) -> impl IntoView {
    let input_type = if field == Field::Email { "email" } else { "text" };
    view! {
        <div class="field">
            <label for={field.as_str()}>{field.label()}</label>
            <input
                type=input_type
                id={field.as_str()}
                name={field.as_str()}
                value=value
                required=true
                aria-invalid={invalid.then_some("true")}
            />
        </div>
    }
}

#[component]
fn SubmissionsTable(records: Vec<SubmittedRecord>) -> impl IntoView {
    let header = Field::ALL.into_iter().map(|field| view! { <th>{field.label()}</th> }).collect_view();
    let rows = records
        .into_iter()
        .map(|record| {
            let cells = Field::ALL
                .into_iter()
                .map(|field| view! { <td>{record.get(field).to_owned()}</td> })
                .collect_view();
            view! { <tr data-seq={record.seq().to_string()}>{cells}</tr> }
        })
        .collect_view();

    view! {
        <table class="submissions">
            <thead>
                <tr>{header}</tr>
            </thead>
            <tbody>{rows}</tbody>
        </table>
    }
}

/// The registration form plus, when non-empty, the submissions table.
#[component]
pub fn RegistrationFormTable(
    draft: DraftRecord,
    records: Vec<SubmittedRecord>,
    #[prop(optional_no_strip)] error: Option<SubmitError>,
) -> impl IntoView {
    let invalid = error.as_ref().map(SubmitError::fields).unwrap_or_default();
    let fields = Field::ALL
        .into_iter()
        .map(|field| {
            view! { <FormField field=field value={draft.get(field).to_owned()} invalid={invalid.contains(&field)}/> }
        })
        .collect_view();
    let notice = error.map(|err| view! { <p class="notice" role="alert">{err.to_string()}</p> });
    let table = (!records.is_empty()).then(move || view! { <SubmissionsTable records=records/> });

    view! {
        <div class="registration">
            <form class="registration__form" method="post" action="/register">
                <h2 class="registration__title">"Course Registration"</h2>
                {notice}
                {fields}
                <div class="actions">
                    <button type="submit">"Submit"</button>
                    <button type="submit" formaction="/register/clear" formnovalidate=true>"Clear"</button>
                </div>
            </form>
            {table}
        </div>
    }
}

/// Render the registration page as a full HTML document.
#[must_use]
pub fn render(draft: DraftRecord, records: Vec<SubmittedRecord>, error: Option<SubmitError>) -> String {
    render_document("Course Registration", move || {
        view! {
            <PageShell current={Some(Page::Register)}>
                <RegistrationFormTable draft=draft records=records error=error/>
            </PageShell>
        }
    })
}

#[cfg(test)]
#[path = "registration_test.rs"]
mod tests;
