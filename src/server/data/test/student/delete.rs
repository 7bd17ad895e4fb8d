use super::*;

/// Tests deleting an existing student.
///
/// Verifies that exactly one row is removed and the other rows survive.
///
/// Expected: Ok(1) with the student gone
#[tokio::test]
async fn deletes_existing_student() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let doomed = factory::create_student(db).await?;
    let survivor = factory::create_student(db).await?;

    let repo = StudentRepository::new(db);
    let removed = repo.delete(doomed.id).await?;

    assert_eq!(removed, 1);
    assert!(repo.find_by_id(doomed.id).await?.is_none());
    assert!(repo.find_by_id(survivor.id).await?.is_some());

    Ok(())
}

/// Tests deleting a student that does not exist.
///
/// Expected: Ok(0) with existing rows untouched
#[tokio::test]
async fn deletes_nothing_for_missing_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let student = factory::create_student(db).await?;

    let repo = StudentRepository::new(db);
    let removed = repo.delete(student.id + 100).await?;

    assert_eq!(removed, 0);
    assert_eq!(entity::prelude::Student::find().count(db).await?, 1);

    Ok(())
}
