//! Command implementations for the admin surface

pub mod project;
