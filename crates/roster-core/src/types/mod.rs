//! Domain types: the student record, the field allow-list, write outcomes.

pub mod field;
pub mod outcome;
pub mod student;

pub use field::{Field, FieldValue, Subject};
pub use outcome::{DeleteOutcome, UpdateOutcome};
pub use student::{FieldMap, Student};
