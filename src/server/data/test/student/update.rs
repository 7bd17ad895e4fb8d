use super::*;

fn update_params(id: i32) -> UpdateStudentParams {
    UpdateStudentParams {
        id,
        first_name: "Anna".to_string(),
        last_name: "Leigh".to_string(),
        username: "anna2".to_string(),
        email: "anna@y.com".to_string(),
    }
}

/// Tests updating the mutable fields of an existing student.
///
/// Verifies that names, username and email are overwritten while id and
/// created_at are preserved and updated_at moves forward.
///
/// Expected: Ok with updated fields
#[tokio::test]
async fn updates_mutable_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let original = factory::create_student(db).await?;

    let repo = StudentRepository::new(db);
    let updated = repo.update(update_params(original.id)).await?;

    assert_eq!(updated.id, original.id);
    assert_eq!(updated.first_name, "Anna");
    assert_eq!(updated.last_name, "Leigh");
    assert_eq!(updated.username, "anna2");
    assert_eq!(updated.email, "anna@y.com");
    assert_eq!(updated.created_at, original.created_at);
    assert!(updated.updated_at > original.updated_at);

    Ok(())
}

/// Tests that updating leaves the stored password alone.
///
/// Expected: Ok with password unchanged
#[tokio::test]
async fn preserves_password() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let original = factory::student::StudentFactory::new(db)
        .password("$argon2id$stored")
        .build()
        .await?;

    let repo = StudentRepository::new(db);
    repo.update(update_params(original.id)).await?;

    let stored = entity::prelude::Student::find_by_id(original.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.password, "$argon2id$stored");

    Ok(())
}

/// Tests updating a student that does not exist.
///
/// Expected: Err(DbErr::RecordNotFound) and no rows created
#[tokio::test]
async fn fails_for_missing_student() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = StudentRepository::new(db);
    let result = repo.update(update_params(42)).await;

    match result {
        Err(DbErr::RecordNotFound(_)) => (),
        other => panic!("expected RecordNotFound, got {:?}", other),
    }
    assert_eq!(entity::prelude::Student::find().count(db).await?, 0);

    Ok(())
}

/// Tests that the unique constraint applies to updates as well as inserts.
///
/// Expected: Err with a unique constraint violation and the row unchanged
#[tokio::test]
async fn rejects_username_taken_by_another_student() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::student::StudentFactory::new(db)
        .username("anna2")
        .build()
        .await?;
    let target = factory::create_student(db).await?;

    let repo = StudentRepository::new(db);
    let result = repo.update(update_params(target.id)).await;

    assert!(matches!(
        result.unwrap_err().sql_err(),
        Some(sea_orm::SqlErr::UniqueConstraintViolation(_))
    ));
    let stored = repo.find_by_id(target.id).await?.unwrap();
    assert_eq!(stored.username, target.username);

    Ok(())
}
