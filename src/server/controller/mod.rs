//! HTTP request handlers.
//!
//! Controllers extract path and body, convert DTOs into service parameters and map
//! service results back into DTOs with the matching status code.

pub mod student;
