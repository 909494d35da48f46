//! The student record and its loose form-input counterpart.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::field::{Field, FieldValue, Subject};
use crate::constants::ENROLL_DATE_FORMAT;
use crate::errors::RecordError;

/// Loose field input as it arrives from a form submission or JSON body:
/// column name to value. Every value must be a JSON string.
pub type FieldMap = BTreeMap<String, serde_json::Value>;

/// One row of the student table.
///
/// Text columns hold the empty string when absent. Scores are `None` when the
/// row was imported without a usable value for that subject.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Student {
    #[serde(rename = "ID")]
    pub id: String,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Gender")]
    pub gender: String,
    #[serde(rename = "Enroll_Date")]
    pub enroll_date: String,
    #[serde(rename = "English")]
    pub english: Option<i64>,
    #[serde(rename = "Math")]
    pub math: Option<i64>,
    #[serde(rename = "History")]
    pub history: Option<i64>,
    #[serde(rename = "Science")]
    pub science: Option<i64>,
    #[serde(rename = "Arts")]
    pub arts: Option<i64>,
}

impl Student {
    /// An otherwise empty record carrying only its identifier.
    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    pub fn score(&self, subject: Subject) -> Option<i64> {
        match subject {
            Subject::English => self.english,
            Subject::Math => self.math,
            Subject::History => self.history,
            Subject::Science => self.science,
            Subject::Arts => self.arts,
        }
    }

    pub fn set_score(&mut self, subject: Subject, value: Option<i64>) {
        let slot = match subject {
            Subject::English => &mut self.english,
            Subject::Math => &mut self.math,
            Subject::History => &mut self.history,
            Subject::Science => &mut self.science,
            Subject::Arts => &mut self.arts,
        };
        *slot = value;
    }

    /// Render one field the way it is stored; missing scores render empty.
    pub fn text(&self, field: Field) -> String {
        match field {
            Field::Id => self.id.clone(),
            Field::Name => self.name.clone(),
            Field::Gender => self.gender.clone(),
            Field::EnrollDate => self.enroll_date.clone(),
            _ => field
                .subject()
                .and_then(|s| self.score(s))
                .map(|n| n.to_string())
                .unwrap_or_default(),
        }
    }

    /// Store a parsed value into the matching field. A text value aimed at a
    /// score column is ignored.
    pub fn apply(&mut self, field: Field, value: FieldValue) {
        match (field, value) {
            (Field::Id, FieldValue::Text(s)) => self.id = s,
            (Field::Name, FieldValue::Text(s)) => self.name = s,
            (Field::Gender, FieldValue::Text(s)) => self.gender = s,
            (Field::EnrollDate, FieldValue::Text(s)) => self.enroll_date = s,
            (field, FieldValue::Score(n)) => {
                if let Some(subject) = field.subject() {
                    self.set_score(subject, Some(n));
                }
            }
            _ => {}
        }
    }

    /// Parsed enrollment date, `None` when empty or not in `%m-%d-%Y` form.
    pub fn enrollment_date(&self) -> Option<NaiveDate> {
        if self.enroll_date.is_empty() {
            return None;
        }
        NaiveDate::parse_from_str(&self.enroll_date, ENROLL_DATE_FORMAT).ok()
    }

    /// Validate loose form input and build a complete record.
    ///
    /// Every value must be a string (no coercion from numbers or booleans),
    /// every field must be present, unknown names are rejected, scores must
    /// parse as integers and the identifier must be non-empty.
    /// `Enroll_Date` is stored as given.
    pub fn from_field_map(fields: &FieldMap) -> Result<Self, RecordError> {
        let mut student = Student::default();
        let mut seen = Vec::with_capacity(Field::ALL.len());

        for (name, value) in fields {
            let field = Field::from_name(name)
                .ok_or_else(|| RecordError::validation(name.as_str(), "unknown field"))?;
            let raw = value.as_str().ok_or_else(|| {
                RecordError::validation(
                    field.column(),
                    format!("expected a string, got {}", json_kind(value)),
                )
            })?;
            student.apply(field, field.parse_value(raw)?);
            seen.push(field);
        }

        if let Some(missing) = Field::ALL.into_iter().find(|f| !seen.contains(f)) {
            return Err(RecordError::validation(missing.column(), "missing value"));
        }
        student.validate_id()?;
        Ok(student)
    }

    /// Check a typed record before it is stored: the identifier must be
    /// present and no text field may contain a tab or line break.
    pub fn validate(&self) -> Result<(), RecordError> {
        self.validate_id()?;
        for field in [Field::Id, Field::Name, Field::Gender, Field::EnrollDate] {
            field.check_text(&self.text(field))?;
        }
        Ok(())
    }

    /// The identifier must contain something other than whitespace.
    pub fn validate_id(&self) -> Result<(), RecordError> {
        if self.id.trim().is_empty() {
            return Err(RecordError::validation(Field::Id.column(), "must not be empty"));
        }
        Ok(())
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "bool",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
