//! Registration form — draft record plus append-only submission log.
//!
//! DESIGN
//! ======
//! `RegistrationForm` owns two pieces of state: the draft the user is
//! editing and the log of committed submissions. `update_field` mutates the
//! draft; `submit` is the only transition that touches the log. It checks
//! the required-field precondition, appends a frozen snapshot, and clears
//! the draft in one `&mut self` call, so callers never observe the append
//! without the reset.
//!
//! ERROR HANDLING
//! ==============
//! A rejected submit leaves both draft and log untouched. The caller gets
//! the list of missing fields (or an email-shape error) and can re-render
//! the form with the user's values intact.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ErrorCode;

// =============================================================================
// FIELDS
// =============================================================================

/// One of the three inputs on the registration form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Email,
    Course,
}

impl Field {
    /// All fields in form order.
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Course];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Course => "course",
        }
    }

    /// Human-readable label used on the form and table header.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Course => "Course",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("unknown field: {0}")]
    UnknownField(String),
}

impl ErrorCode for FieldError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownField(_) => "E_UNKNOWN_FIELD",
        }
    }
}

impl FromStr for Field {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(Self::Name),
            "email" => Ok(Self::Email),
            "course" => Ok(Self::Course),
            other => Err(FieldError::UnknownField(other.to_owned())),
        }
    }
}

// =============================================================================
// RECORDS
// =============================================================================

/// The in-progress, unsubmitted entry. All three fields are always present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftRecord {
    pub name: String,
    pub email: String,
    pub course: String,
}

impl DraftRecord {
    #[must_use]
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Course => &self.course,
        }
    }

    fn slot(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Course => &mut self.course,
        }
    }

    /// True when every field is the empty string.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        Field::ALL.iter().all(|f| self.get(*f).is_empty())
    }

    /// Fields that are empty or whitespace-only, in form order.
    #[must_use]
    pub fn missing_fields(&self) -> Vec<Field> {
        Field::ALL
            .into_iter()
            .filter(|f| self.get(*f).trim().is_empty())
            .collect()
    }
}

/// Immutable snapshot of a draft taken at submission time.
///
/// Fields are private; the log hands out shared references only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmittedRecord {
    seq: u64,
    name: String,
    email: String,
    course: String,
}

impl SubmittedRecord {
    fn freeze(seq: u64, draft: DraftRecord) -> Self {
        Self { seq, name: draft.name, email: draft.email, course: draft.course }
    }

    /// 1-based position in the submission log.
    #[must_use]
    pub fn seq(&self) -> u64 {
        self.seq
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    #[must_use]
    pub fn course(&self) -> &str {
        &self.course
    }

    #[must_use]
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Course => &self.course,
        }
    }
}

// =============================================================================
// ERRORS
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    #[error("missing required fields: {}", join_fields(.0))]
    MissingFields(Vec<Field>),
    #[error("email address is not valid")]
    InvalidEmail,
}

impl ErrorCode for SubmitError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::MissingFields(_) => "E_MISSING_FIELDS",
            Self::InvalidEmail => "E_INVALID_EMAIL",
        }
    }
}

impl SubmitError {
    /// Fields the user needs to fix.
    #[must_use]
    pub fn fields(&self) -> Vec<Field> {
        match self {
            Self::MissingFields(fields) => fields.clone(),
            Self::InvalidEmail => vec![Field::Email],
        }
    }
}

fn join_fields(fields: &[Field]) -> String {
    fields.iter().map(|f| f.as_str()).collect::<Vec<_>>().join(", ")
}

/// Same shape check an `<input type="email">` applies: one `@` with
/// non-empty text on both sides and no whitespace.
fn looks_like_email(raw: &str) -> bool {
    let value = raw.trim();
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    match value.split_once('@') {
        Some((local, domain)) => !local.is_empty() && !domain.is_empty() && !domain.contains('@'),
        None => false,
    }
}

// =============================================================================
// FORM
// =============================================================================

/// Whether the draft carries unsaved edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FormPhase {
    Idle,
    Editing,
}

#[derive(Debug, Clone, Default)]
pub struct RegistrationForm {
    draft: DraftRecord,
    log: Vec<SubmittedRecord>,
}

impl RegistrationForm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set one draft field. Always succeeds; empty values are allowed.
    pub fn update_field(&mut self, field: Field, value: impl Into<String>) {
        *self.draft.slot(field) = value.into();
    }

    /// Commit the draft to the log and clear it.
    ///
    /// # Errors
    ///
    /// Returns `MissingFields` when any field is blank and `InvalidEmail`
    /// when the email has no `local@domain` shape. Nothing changes on error.
    pub fn submit(&mut self) -> Result<&SubmittedRecord, SubmitError> {
        let missing = self.draft.missing_fields();
        if !missing.is_empty() {
            return Err(SubmitError::MissingFields(missing));
        }
        if !looks_like_email(&self.draft.email) {
            return Err(SubmitError::InvalidEmail);
        }

        let seq = self.log.len() as u64 + 1;
        let draft = std::mem::take(&mut self.draft);
        self.log.push(SubmittedRecord::freeze(seq, draft));
        Ok(&self.log[self.log.len() - 1])
    }

    /// Discard the draft without touching the log.
    pub fn reset_draft(&mut self) {
        self.draft = DraftRecord::default();
    }

    #[must_use]
    pub fn phase(&self) -> FormPhase {
        if self.draft.is_blank() { FormPhase::Idle } else { FormPhase::Editing }
    }

    #[must_use]
    pub fn draft(&self) -> &DraftRecord {
        &self.draft
    }

    /// Submitted records in submission order.
    #[must_use]
    pub fn log(&self) -> &[SubmittedRecord] {
        &self.log
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.log.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.log.is_empty()
    }
}

#[cfg(test)]
#[path = "registration_test.rs"]
mod tests;
