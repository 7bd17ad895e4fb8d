use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        student::{CreateStudentDto, StudentDto, UpdateStudentDto},
    },
    server::{
        error::AppError,
        model::student::{CreateStudentParams, UpdateStudentParams},
        service::student::StudentService,
        state::AppState,
        util::parse::parse_id_from_path,
    },
};

/// Tag for grouping student endpoints in OpenAPI documentation
pub static STUDENT_TAG: &str = "student";

/// List all students.
///
/// Returns every student record ordered by ID.
///
/// # Arguments
/// - `state` - Application state containing the database connection
///
/// # Returns
/// - `200 OK` - List of students
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/student",
    tag = STUDENT_TAG,
    responses(
        (status = 200, description = "Successfully retrieved students", body = Vec<StudentDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_students(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let service = StudentService::new(&state.db);

    let students: Vec<StudentDto> = service
        .get_all()
        .await?
        .into_iter()
        .map(|s| s.into_dto())
        .collect();

    Ok((StatusCode::OK, Json(students)))
}

/// Get a student by ID.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - Raw path segment, parsed as the student ID
///
/// # Returns
/// - `200 OK` - Student details
/// - `400 Bad Request` - ID is not a well-formed integer
/// - `404 Not Found` - No student with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/student/{id}",
    tag = STUDENT_TAG,
    params(
        ("id" = i32, Path, description = "Student ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved student", body = StudentDto),
        (status = 400, description = "Malformed student ID", body = ErrorDto),
        (status = 404, description = "Student not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_student_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id_from_path(&id)?;

    let service = StudentService::new(&state.db);

    let student = service.get_by_id(id).await?;

    Ok((StatusCode::OK, Json(student.into_dto())))
}

/// Create a new student.
///
/// Rejects the request when the username or email is already used by another student.
/// The password is hashed before storage and never returned.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Student fields including the plaintext password
///
/// # Returns
/// - `201 Created` - Successfully created student
/// - `400 Bad Request` - Body is not a valid student payload
/// - `409 Conflict` - Username or email already exists
/// - `500 Internal Server Error` - Database or hashing error
#[utoipa::path(
    post,
    path = "/student",
    tag = STUDENT_TAG,
    request_body = CreateStudentDto,
    responses(
        (status = 201, description = "Successfully created student", body = StudentDto),
        (status = 400, description = "Malformed request body", body = ErrorDto),
        (status = 409, description = "Username or email already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_student(
    State(state): State<AppState>,
    payload: Result<Json<CreateStudentDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;

    let service = StudentService::new(&state.db);

    let params = CreateStudentParams::from_dto(payload);

    let student = service.create(params).await?;

    Ok((StatusCode::CREATED, Json(student.into_dto())))
}

/// Update a student.
///
/// Overwrites first name, last name, username and email. The ID, creation time and
/// password are never changed by this endpoint.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - Raw path segment, parsed as the student ID
/// - `payload` - New field values
///
/// # Returns
/// - `200 OK` - Successfully updated student
/// - `400 Bad Request` - ID is not a well-formed integer or body is malformed
/// - `404 Not Found` - No student with that ID
/// - `409 Conflict` - Username or email belongs to another student
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/student/{id}",
    tag = STUDENT_TAG,
    params(
        ("id" = i32, Path, description = "Student ID")
    ),
    request_body = UpdateStudentDto,
    responses(
        (status = 200, description = "Successfully updated student", body = StudentDto),
        (status = 400, description = "Malformed student ID or request body", body = ErrorDto),
        (status = 404, description = "Student not found", body = ErrorDto),
        (status = 409, description = "Username or email already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_student(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateStudentDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id_from_path(&id)?;
    let Json(payload) = payload?;

    let service = StudentService::new(&state.db);

    let params = UpdateStudentParams::from_dto(id, payload);

    let student = service.update(params).await?;

    Ok((StatusCode::OK, Json(student.into_dto())))
}

/// Delete a student.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - Raw path segment, parsed as the student ID
///
/// # Returns
/// - `204 No Content` - Successfully deleted student
/// - `400 Bad Request` - ID is not a well-formed integer
/// - `404 Not Found` - No student with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/student/{id}",
    tag = STUDENT_TAG,
    params(
        ("id" = i32, Path, description = "Student ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted student"),
        (status = 400, description = "Malformed student ID", body = ErrorDto),
        (status = 404, description = "Student not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_student(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id_from_path(&id)?;

    let service = StudentService::new(&state.db);

    service.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
