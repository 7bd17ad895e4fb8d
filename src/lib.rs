//! Student registry backend.
//!
//! CRUD API over a single `student` table, served with Axum and backed by SeaORM.
//! See [`server`] for the layered architecture and [`model`] for the wire DTOs.

pub mod model;
pub mod server;
