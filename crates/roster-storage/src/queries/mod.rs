//! Query modules for the student table.

pub mod students;
