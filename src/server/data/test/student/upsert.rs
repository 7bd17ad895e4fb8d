use super::*;

fn upsert_params(id: Option<i32>, username: &str) -> UpsertStudentParams {
    UpsertStudentParams {
        id,
        first_name: "Ana".to_string(),
        last_name: "Lee".to_string(),
        username: username.to_string(),
        email: format!("{}@x.com", username),
        password: "hashed".to_string(),
    }
}

/// Tests that an upsert without an id inserts a new row.
///
/// Expected: Ok with a freshly assigned id
#[tokio::test]
async fn inserts_when_id_is_unset() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = StudentRepository::new(db);
    let student = repo.upsert(upsert_params(None, "ana1")).await?;

    assert!(student.id > 0);
    assert_eq!(student.username, "ana1");
    assert_eq!(student.created_at, student.updated_at);
    assert_eq!(entity::prelude::Student::find().count(db).await?, 1);

    Ok(())
}

/// Tests that an upsert with an existing id updates that row in place.
///
/// Verifies that no new row is created and created_at is preserved.
///
/// Expected: Ok with the same id and overwritten fields
#[tokio::test]
async fn updates_when_id_exists() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let original = factory::create_student(db).await?;

    let repo = StudentRepository::new(db);
    let student = repo
        .upsert(upsert_params(Some(original.id), "renamed"))
        .await?;

    assert_eq!(student.id, original.id);
    assert_eq!(student.username, "renamed");
    assert_eq!(student.created_at, original.created_at);
    assert_eq!(entity::prelude::Student::find().count(db).await?, 1);

    Ok(())
}

/// Tests that repeating the same upsert leaves a single row.
///
/// Expected: Ok with one row holding the submitted values
#[tokio::test]
async fn is_idempotent_for_same_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = StudentRepository::new(db);
    let inserted = repo.upsert(upsert_params(None, "ana1")).await?;

    repo.upsert(upsert_params(Some(inserted.id), "ana1")).await?;
    let again = repo.upsert(upsert_params(Some(inserted.id), "ana1")).await?;

    assert_eq!(again.id, inserted.id);
    assert_eq!(entity::prelude::Student::find().count(db).await?, 1);

    Ok(())
}

/// Tests that an upsert with an unknown id does not create a row.
///
/// Expected: Err(DbErr::RecordNotUpdated)
#[tokio::test]
async fn fails_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = StudentRepository::new(db);
    let result = repo.upsert(upsert_params(Some(7), "ghost")).await;

    match result {
        Err(DbErr::RecordNotUpdated) => (),
        other => panic!("expected RecordNotUpdated, got {:?}", other),
    }
    assert_eq!(entity::prelude::Student::find().count(db).await?, 0);

    Ok(())
}
