use super::*;

/// Tests finding a student by an existing email.
///
/// Expected: Ok(Some(Student))
#[tokio::test]
async fn finds_student_by_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::student::StudentFactory::new(db)
        .email("ana@x.com")
        .build()
        .await?;

    let repo = StudentRepository::new(db);
    let result = repo.find_by_email("ana@x.com").await?;

    assert_eq!(result.map(|s| s.id), Some(created.id));

    Ok(())
}

/// Tests that email lookup does not match on username.
///
/// Expected: Ok(None)
#[tokio::test]
async fn does_not_match_username_value() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::student::StudentFactory::new(db)
        .username("ana1")
        .email("ana@x.com")
        .build()
        .await?;

    let repo = StudentRepository::new(db);
    let result = repo.find_by_email("ana1").await?;

    assert!(result.is_none());

    Ok(())
}
