use super::*;

/// Tests finding an existing student by id.
///
/// Expected: Ok(Some(Student)) with matching fields
#[tokio::test]
async fn finds_existing_student() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::student::StudentFactory::new(db)
        .username("ana1")
        .build()
        .await?;

    let repo = StudentRepository::new(db);
    let result = repo.find_by_id(created.id).await?;

    assert!(result.is_some());
    let student = result.unwrap();
    assert_eq!(student.id, created.id);
    assert_eq!(student.username, "ana1");
    assert_eq!(student.created_at, created.created_at);

    Ok(())
}

/// Tests finding a student that does not exist.
///
/// Absence is not an error at the repository level.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = StudentRepository::new(db);
    let result = repo.find_by_id(999).await?;

    assert!(result.is_none());

    Ok(())
}
