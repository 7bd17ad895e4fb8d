use super::*;

/// Tests getting all students from an empty table.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_when_no_students() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = StudentRepository::new(db);
    let students = repo.get_all().await?;

    assert!(students.is_empty());

    Ok(())
}

/// Tests getting all students in id order.
///
/// Expected: Ok with every student, ordered by id ascending
#[tokio::test]
async fn returns_all_students_ordered_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_student(db).await?;
    let second = factory::create_student(db).await?;
    let third = factory::create_student(db).await?;

    let repo = StudentRepository::new(db);
    let students = repo.get_all().await?;

    let ids: Vec<i32> = students.iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![first.id, second.id, third.id]);

    Ok(())
}
