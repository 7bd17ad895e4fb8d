//! Student data repository for database operations.
//!
//! This module provides the `StudentRepository` for managing student records in the database.
//! Every operation touches exactly one row, except `get_all`, and absence is reported as
//! `Ok(None)` or `Ok(false)` rather than an error. Entities are converted to the `Student`
//! domain model here so the stored password hash never leaves this layer.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, TryIntoModel,
};

use crate::server::model::student::{
    CreateStudentParams, Student, UpdateStudentParams, UpsertStudentParams,
};

/// Repository providing database operations for student management.
///
/// Holds a reference to the database connection passed in by the caller.
pub struct StudentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StudentRepository<'a> {
    /// Creates a new StudentRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `StudentRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every student, ordered by id.
    ///
    /// # Returns
    /// - `Ok(Vec<Student>)` - All students (empty if none exist)
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all(&self) -> Result<Vec<Student>, DbErr> {
        let entities = entity::prelude::Student::find()
            .order_by_asc(entity::student::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Student::from_entity).collect())
    }

    /// Finds a student by id.
    ///
    /// # Returns
    /// - `Ok(Some(Student))` - Student found
    /// - `Ok(None)` - No student with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Student>, DbErr> {
        let entity = entity::prelude::Student::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(Student::from_entity))
    }

    /// Finds a student by exact username.
    ///
    /// # Returns
    /// - `Ok(Some(Student))` - A student already uses this username
    /// - `Ok(None)` - Username is free
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_username(&self, username: &str) -> Result<Option<Student>, DbErr> {
        let entity = entity::prelude::Student::find()
            .filter(entity::student::Column::Username.eq(username))
            .one(self.db)
            .await?;

        Ok(entity.map(Student::from_entity))
    }

    /// Finds a student by exact email.
    ///
    /// # Returns
    /// - `Ok(Some(Student))` - A student already uses this email
    /// - `Ok(None)` - Email is free
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_email(&self, email: &str) -> Result<Option<Student>, DbErr> {
        let entity = entity::prelude::Student::find()
            .filter(entity::student::Column::Email.eq(email))
            .one(self.db)
            .await?;

        Ok(entity.map(Student::from_entity))
    }

    /// Checks whether a student with the given id exists.
    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Student::find_by_id(id)
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Inserts a new student.
    ///
    /// Sets `created_at` and `updated_at` to the current time. `params.password` is
    /// stored as given and must already be hashed.
    ///
    /// # Returns
    /// - `Ok(Student)` - The inserted student with its assigned id
    /// - `Err(DbErr)` - Database error, including unique constraint violations on
    ///   username or email
    pub async fn create(&self, params: CreateStudentParams) -> Result<Student, DbErr> {
        let now = Utc::now();

        let entity = entity::student::ActiveModel {
            first_name: ActiveValue::Set(params.first_name),
            last_name: ActiveValue::Set(params.last_name),
            username: ActiveValue::Set(params.username),
            email: ActiveValue::Set(params.email),
            password: ActiveValue::Set(params.password),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Student::from_entity(entity))
    }

    /// Overwrites the mutable fields of an existing student.
    ///
    /// Replaces first name, last name, username and email and refreshes `updated_at`.
    /// `id`, `created_at` and the stored password are left untouched.
    ///
    /// # Returns
    /// - `Ok(Student)` - The updated student
    /// - `Err(DbErr::RecordNotFound)` - No student exists with `params.id`
    /// - `Err(DbErr)` - Other database error, including unique constraint violations
    pub async fn update(&self, params: UpdateStudentParams) -> Result<Student, DbErr> {
        let student = entity::prelude::Student::find_by_id(params.id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Student {} not found",
                params.id
            )))?;

        let mut active_model: entity::student::ActiveModel = student.into();

        active_model.first_name = ActiveValue::Set(params.first_name);
        active_model.last_name = ActiveValue::Set(params.last_name);
        active_model.username = ActiveValue::Set(params.username);
        active_model.email = ActiveValue::Set(params.email);
        active_model.updated_at = ActiveValue::Set(Utc::now());

        let entity = active_model.update(self.db).await?;

        Ok(Student::from_entity(entity))
    }

    /// Inserts or updates a student keyed by id.
    ///
    /// With `params.id` unset a new row is inserted and both timestamps are set. With an id
    /// every column except `created_at` is overwritten on the matching row.
    ///
    /// # Returns
    /// - `Ok(Student)` - The inserted or updated student
    /// - `Err(DbErr::RecordNotUpdated)` - An id was given but no row matched it
    /// - `Err(DbErr)` - Other database error
    pub async fn upsert(&self, params: UpsertStudentParams) -> Result<Student, DbErr> {
        let now = Utc::now();

        let mut active_model = entity::student::ActiveModel {
            first_name: ActiveValue::Set(params.first_name),
            last_name: ActiveValue::Set(params.last_name),
            username: ActiveValue::Set(params.username),
            email: ActiveValue::Set(params.email),
            password: ActiveValue::Set(params.password),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        match params.id {
            Some(id) => active_model.id = ActiveValue::Unchanged(id),
            None => active_model.created_at = ActiveValue::Set(now),
        }

        let entity = active_model.save(self.db).await?.try_into_model()?;

        Ok(Student::from_entity(entity))
    }

    /// Deletes a student by id.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows removed (0 when no student matched)
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Student::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
