//! Student factory for creating test student entities.
//!
//! This module provides factory methods for creating student rows with sensible
//! defaults. The factory writes entities directly and does not hash the password,
//! so the stored value is a placeholder unless overridden.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test students with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::student::StudentFactory;
///
/// let student = StudentFactory::new(&db)
///     .first_name("Ana")
///     .username("ana1")
///     .email("ana@x.com")
///     .build()
///     .await?;
/// ```
pub struct StudentFactory<'a> {
    db: &'a DatabaseConnection,
    first_name: String,
    last_name: String,
    username: String,
    email: String,
    password: String,
}

impl<'a> StudentFactory<'a> {
    /// Creates a new StudentFactory with default values.
    ///
    /// Defaults:
    /// - first_name: `"First {id}"`
    /// - last_name: `"Last {id}"`
    /// - username: `"student_{id}"`
    /// - email: `"student_{id}@example.com"`
    /// - password: `"not-a-real-hash"`
    ///
    /// where id is auto-incremented per factory.
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `StudentFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            first_name: format!("First {}", id),
            last_name: format!("Last {}", id),
            username: format!("student_{}", id),
            email: format!("student_{}@example.com", id),
            password: "not-a-real-hash".to_string(),
        }
    }

    /// Sets the first name for the student.
    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = first_name.into();
        self
    }

    /// Sets the last name for the student.
    pub fn last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = last_name.into();
        self
    }

    /// Sets the username for the student.
    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    /// Sets the email for the student.
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Sets the stored password value verbatim.
    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = password.into();
        self
    }

    /// Builds and inserts the student entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::student::Model)` - Created student entity
    /// - `Err(DbErr)` - Database error during insert (including unique violations)
    pub async fn build(self) -> Result<entity::student::Model, DbErr> {
        let now = Utc::now();
        entity::student::ActiveModel {
            first_name: ActiveValue::Set(self.first_name),
            last_name: ActiveValue::Set(self.last_name),
            username: ActiveValue::Set(self.username),
            email: ActiveValue::Set(self.email),
            password: ActiveValue::Set(self.password),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a student with default values.
///
/// Shorthand for `StudentFactory::new(db).build().await`.
///
/// # Example
///
/// ```rust,ignore
/// let student = create_student(&db).await?;
/// ```
pub async fn create_student(db: &DatabaseConnection) -> Result<entity::student::Model, DbErr> {
    StudentFactory::new(db).build().await
}
