use sea_orm::{DatabaseConnection, DbErr, SqlErr};

use crate::server::{
    data::student::StudentRepository,
    error::{student::StudentError, AppError},
    model::student::{CreateStudentParams, Student, UpdateStudentParams},
    util::password::hash_password,
};

pub struct StudentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StudentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every student ordered by ID
    pub async fn get_all(&self) -> Result<Vec<Student>, AppError> {
        let repo = StudentRepository::new(self.db);

        Ok(repo.get_all().await?)
    }

    /// Gets a student by ID, failing with `StudentError::NotFound` when absent
    pub async fn get_by_id(&self, id: i32) -> Result<Student, AppError> {
        let repo = StudentRepository::new(self.db);

        repo.find_by_id(id)
            .await?
            .ok_or_else(|| StudentError::NotFound(id).into())
    }

    /// Creates a new student after checking username and email are unused.
    ///
    /// The password is hashed before it reaches the repository. Two concurrent creates can
    /// both pass the pre-checks; the loser then trips the table's unique constraint, which
    /// is mapped to the same `AlreadyExists` error.
    ///
    /// # Returns
    /// - `Ok(Student)` - The created student
    /// - `Err(StudentError::UsernameAlreadyExists)` - Username is taken
    /// - `Err(StudentError::EmailAlreadyExists)` - Email is taken
    /// - `Err(AppError)` - Database or hashing failure
    pub async fn create(&self, params: CreateStudentParams) -> Result<Student, AppError> {
        let repo = StudentRepository::new(self.db);

        if repo.find_by_username(&params.username).await?.is_some() {
            return Err(StudentError::UsernameAlreadyExists.into());
        }

        if repo.find_by_email(&params.email).await?.is_some() {
            return Err(StudentError::EmailAlreadyExists.into());
        }

        let params = CreateStudentParams {
            password: hash_password(&params.password)?,
            ..params
        };

        let student = repo.create(params).await.map_err(map_unique_violation)?;

        tracing::info!("Created student {} ({})", student.id, student.username);

        Ok(student)
    }

    /// Overwrites the mutable fields of an existing student.
    ///
    /// Uniqueness is not pre-checked on update; a username or email already held by
    /// another student is rejected by the unique constraint and mapped to the matching
    /// `AlreadyExists` error.
    ///
    /// # Returns
    /// - `Ok(Student)` - The updated student, including timestamps
    /// - `Err(StudentError::NotFound)` - No student exists with `params.id`
    /// - `Err(AppError)` - Uniqueness or database failure
    pub async fn update(&self, params: UpdateStudentParams) -> Result<Student, AppError> {
        let repo = StudentRepository::new(self.db);
        let id = params.id;

        let student = repo.update(params).await.map_err(|err| match err {
            DbErr::RecordNotFound(_) => StudentError::NotFound(id).into(),
            err => map_unique_violation(err),
        })?;

        tracing::info!("Updated student {}", student.id);

        Ok(student)
    }

    /// Deletes a student, failing with `StudentError::NotFound` when absent
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = StudentRepository::new(self.db);

        if !repo.exists(id).await? {
            return Err(StudentError::NotFound(id).into());
        }

        // Row may have been removed between the check and the delete
        if repo.delete(id).await? == 0 {
            return Err(StudentError::NotFound(id).into());
        }

        tracing::info!("Deleted student {}", id);

        Ok(())
    }
}

/// Maps a unique constraint violation on username or email to its `StudentError`.
///
/// The constraint message names the offending column on both SQLite
/// (`UNIQUE constraint failed: student.username`) and Postgres
/// (`... constraint "student_username_key"`). Any other error is passed through.
fn map_unique_violation(err: DbErr) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(msg)) if msg.contains("username") => {
            StudentError::UsernameAlreadyExists.into()
        }
        Some(SqlErr::UniqueConstraintViolation(msg)) if msg.contains("email") => {
            StudentError::EmailAlreadyExists.into()
        }
        _ => err.into(),
    }
}
