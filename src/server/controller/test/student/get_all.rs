use super::*;

/// Tests listing students when none exist.
///
/// Expected: 200 OK with an empty array
#[tokio::test]
async fn returns_empty_list() {
    let (_test, app) = setup().await;

    let (status, body) = send(&app, Method::GET, "/student", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

/// Tests listing several students.
///
/// Expected: 200 OK with one entry per student, in id order
#[tokio::test]
async fn returns_all_students() {
    let (test, app) = setup().await;
    let db = test.db.as_ref().unwrap();

    let first = factory::create_student(db).await.unwrap();
    let second = factory::create_student(db).await.unwrap();

    let (status, body) = send(&app, Method::GET, "/student", None).await;

    assert_eq!(status, StatusCode::OK);
    let entries = body.as_array().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["id"], first.id);
    assert_eq!(entries[1]["id"], second.id);
    assert_eq!(entries[0]["username"], first.username.as_str());
}
