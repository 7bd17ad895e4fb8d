use crate::server::error::AppError;

/// Parses a student id from a raw path segment.
///
/// # Arguments
/// - `value` - The path segment to attempt to parse into `i32`
///
/// # Returns
/// - `Ok(i32)` - Successfully parsed id
/// - `Err(AppError::BadRequest)` - The segment is not a well-formed integer
pub fn parse_id_from_path(value: &str) -> Result<i32, AppError> {
    value
        .parse::<i32>()
        .map_err(|e| AppError::BadRequest(format!("Invalid student ID '{}': {}", value, e)))
}
