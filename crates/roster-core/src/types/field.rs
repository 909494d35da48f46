//! Field and subject allow-lists.
//!
//! Every column name that reaches SQL comes from [`Field::column`], never from
//! caller input. Caller-supplied names are resolved through [`Field::from_name`]
//! and [`Subject::from_name`].

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::RecordError;

/// One column of the student table, in table-declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Field {
    #[serde(rename = "ID")]
    Id,
    Name,
    Gender,
    #[serde(rename = "Enroll_Date")]
    EnrollDate,
    English,
    Math,
    History,
    Science,
    Arts,
}

impl Field {
    pub const ALL: [Field; 9] = [
        Field::Id,
        Field::Name,
        Field::Gender,
        Field::EnrollDate,
        Field::English,
        Field::Math,
        Field::History,
        Field::Science,
        Field::Arts,
    ];

    /// Column name as declared in the schema.
    pub const fn column(self) -> &'static str {
        match self {
            Field::Id => "ID",
            Field::Name => "Name",
            Field::Gender => "Gender",
            Field::EnrollDate => "Enroll_Date",
            Field::English => "English",
            Field::Math => "Math",
            Field::History => "History",
            Field::Science => "Science",
            Field::Arts => "Arts",
        }
    }

    /// Resolve a caller-supplied column name. Matching ignores ASCII case
    /// and surrounding whitespace.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|f| f.column().eq_ignore_ascii_case(name))
    }

    /// The subject this field scores, if it is a score column.
    pub const fn subject(self) -> Option<Subject> {
        match self {
            Field::English => Some(Subject::English),
            Field::Math => Some(Subject::Math),
            Field::History => Some(Subject::History),
            Field::Science => Some(Subject::Science),
            Field::Arts => Some(Subject::Arts),
            Field::Id | Field::Name | Field::Gender | Field::EnrollDate => None,
        }
    }

    pub const fn is_score(self) -> bool {
        self.subject().is_some()
    }

    /// Parse a raw string into the value stored for this field.
    /// Score fields must hold an integer; text fields must not contain the
    /// TSV cell or line separators.
    pub fn parse_value(self, raw: &str) -> Result<FieldValue, RecordError> {
        if !self.is_score() {
            self.check_text(raw)?;
            return Ok(FieldValue::Text(raw.to_string()));
        }
        raw.trim()
            .parse::<i64>()
            .map(FieldValue::Score)
            .map_err(|_| {
                RecordError::validation(
                    self.column(),
                    format!("expected an integer score, got {raw:?}"),
                )
            })
    }
}

impl Field {
    /// Reject text that cannot be written as a single TSV cell.
    pub fn check_text(self, raw: &str) -> Result<(), RecordError> {
        if raw.contains(['\t', '\n', '\r']) {
            return Err(RecordError::validation(
                self.column(),
                "must not contain tabs or line breaks",
            ));
        }
        Ok(())
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}

/// One of the five scored subjects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Subject {
    English,
    Math,
    History,
    Science,
    Arts,
}

impl Subject {
    pub const ALL: [Subject; 5] = [
        Subject::English,
        Subject::Math,
        Subject::History,
        Subject::Science,
        Subject::Arts,
    ];

    pub const fn field(self) -> Field {
        match self {
            Subject::English => Field::English,
            Subject::Math => Field::Math,
            Subject::History => Field::History,
            Subject::Science => Field::Science,
            Subject::Arts => Field::Arts,
        }
    }

    pub const fn column(self) -> &'static str {
        self.field().column()
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Field::from_name(name).and_then(Field::subject)
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}

/// A value parsed for a specific field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Score(i64),
}

impl FieldValue {
    /// Canonical string form, used when comparing against stored values.
    pub fn render(&self) -> String {
        match self {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Score(n) => n.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_name_ignores_case() {
        assert_eq!(Field::from_name("enroll_date"), Some(Field::EnrollDate));
        assert_eq!(Field::from_name(" MATH "), Some(Field::Math));
        assert_eq!(Field::from_name("id"), Some(Field::Id));
        assert_eq!(Field::from_name("Name; DROP TABLE student"), None);
    }

    #[test]
    fn subject_only_for_score_columns() {
        assert_eq!(Subject::from_name("Arts"), Some(Subject::Arts));
        assert_eq!(Subject::from_name("Name"), None);
        assert!(!Field::Gender.is_score());
        for subject in Subject::ALL {
            assert_eq!(subject.field().subject(), Some(subject));
        }
    }

    #[test]
    fn parse_value_rejects_tsv_separators_in_text() {
        for raw in ["Ann\tLee", "Ann\nLee", "Ann\r"] {
            assert!(matches!(
                Field::Name.parse_value(raw),
                Err(RecordError::Validation { ref field, .. }) if field == "Name"
            ));
        }
        assert!(Field::Gender.parse_value("Ann Lee").is_ok());
    }

    #[test]
    fn parse_value_rejects_non_integer_scores() {
        assert_eq!(Field::Math.parse_value(" 85 ").unwrap(), FieldValue::Score(85));
        assert!(matches!(
            Field::Math.parse_value("InvalidGrade"),
            Err(RecordError::Validation { ref field, .. }) if field == "Math"
        ));
        assert_eq!(
            Field::Name.parse_value("Walt").unwrap(),
            FieldValue::Text("Walt".to_string())
        );
    }
}
