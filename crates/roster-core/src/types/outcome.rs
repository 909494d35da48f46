//! Outcomes of update and delete. Absent targets and unchanged values are
//! reported here rather than as errors.

/// Result of an update request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// At least one field changed and the row was written.
    Updated,
    /// Every proposed value equals the stored value; nothing was written.
    NoChange,
    /// No student has the given identifier.
    NotFound,
}

impl UpdateOutcome {
    pub fn is_updated(self) -> bool {
        matches!(self, Self::Updated)
    }
}

/// Result of a delete request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    NotFound,
}

impl DeleteOutcome {
    pub fn is_deleted(self) -> bool {
        matches!(self, Self::Deleted)
    }
}
