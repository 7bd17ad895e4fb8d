//! SeaORM entity models for the student registry.

pub mod prelude;

pub mod student;
