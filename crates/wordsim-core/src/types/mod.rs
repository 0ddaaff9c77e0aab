//! Shared data model.

pub mod collections;
pub mod judgment;
pub mod metric;
pub mod pos;
pub mod precision;
pub mod sense;
