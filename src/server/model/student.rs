//! Student domain models and parameters.
//!
//! Provides the domain model for a student record and the parameter types used by the
//! create, update and upsert operations. Entities are converted at the repository boundary
//! and DTOs at the controller boundary, so the password hash never leaves the data layer.

use chrono::{DateTime, Utc};

use crate::model::student::{CreateStudentDto, StudentDto, UpdateStudentDto};

/// Student record with its storage-assigned id and timestamps.
#[derive(Debug, Clone, PartialEq)]
pub struct Student {
    /// Auto-assigned identifier, immutable once set.
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    /// Unique across all students.
    pub username: String,
    /// Unique across all students.
    pub email: String,
    /// Set on insert, never changed afterwards.
    pub created_at: DateTime<Utc>,
    /// Refreshed on every update.
    pub updated_at: DateTime<Utc>,
}

impl Student {
    /// Converts an entity model to a student domain model at the repository boundary.
    ///
    /// The stored password hash is dropped here.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Student` - The converted domain model
    pub fn from_entity(entity: entity::student::Model) -> Self {
        Self {
            id: entity.id,
            first_name: entity.first_name,
            last_name: entity.last_name,
            username: entity.username,
            email: entity.email,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    /// Converts the student domain model to a DTO for API responses.
    ///
    /// Timestamps are rendered as RFC 3339 strings.
    ///
    /// # Returns
    /// - `StudentDto` - The converted student DTO
    pub fn into_dto(self) -> StudentDto {
        StudentDto {
            id: self.id,
            first_name: self.first_name,
            last_name: self.last_name,
            username: self.username,
            email: self.email,
            created_at: self.created_at.to_rfc3339(),
            updated_at: self.updated_at.to_rfc3339(),
        }
    }
}

/// Parameters for creating a new student.
///
/// `password` holds the plaintext as received from the client until the service
/// replaces it with a hash; the repository only ever receives the hashed form.
#[derive(Debug, Clone)]
pub struct CreateStudentParams {
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub email: String,
    pub password: String,
}

impl CreateStudentParams {
    pub fn from_dto(dto: CreateStudentDto) -> Self {
        Self {
            first_name: dto.first_name,
            last_name: dto.last_name,
            username: dto.username,
            email: dto.email,
            password: dto.password,
        }
    }
}

/// Parameters for overwriting the mutable fields of an existing student.
#[derive(Debug, Clone)]
pub struct UpdateStudentParams {
    /// Id of the student to update.
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub email: String,
}

impl UpdateStudentParams {
    pub fn from_dto(id: i32, dto: UpdateStudentDto) -> Self {
        Self {
            id,
            first_name: dto.first_name,
            last_name: dto.last_name,
            username: dto.username,
            email: dto.email,
        }
    }
}

/// Parameters for an insert-or-update keyed by id.
///
/// `id: None` inserts a new row. `id: Some` overwrites every column except
/// `created_at` on the existing row.
#[derive(Debug, Clone)]
pub struct UpsertStudentParams {
    pub id: Option<i32>,
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub email: String,
    /// Already-hashed password.
    pub password: String,
}
