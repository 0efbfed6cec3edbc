//! Small shared helpers.

pub mod grouping;
