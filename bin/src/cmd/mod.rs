//! Command implementations.

pub(crate) mod screen;
pub(crate) mod universe;
