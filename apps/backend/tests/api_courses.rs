//! Course API tests.

mod common;

use axum::http::StatusCode;

use common::fixtures;
use common::TestContext;

/// Test health check.
#[tokio::test]
async fn test_health() {
    let ctx = TestContext::new();
    let server = ctx.server();

    let response = server.get("/health").await;

    response.assert_status_ok();
    assert_eq!(response.text(), "OK");
}

/// Test list courses is empty for a fresh store.
#[tokio::test]
async fn test_list_courses_empty() {
    let ctx = TestContext::new();
    let server = ctx.server();

    let response = server.get("/api/courses").await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert!(body["courses"].as_array().unwrap().is_empty());
}

/// Test create and fetch a course.
#[tokio::test]
async fn test_create_and_get_course() {
    let ctx = TestContext::new();
    let server = ctx.server();
    let course_id = ctx.create_test_course(&server, "Introduction to Computer Science").await;

    let response = server.get(&format!("/api/courses/{}", course_id)).await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["title"], "Introduction to Computer Science");
    assert_eq!(body["color"], "#FFD93D");
    assert_eq!(body["credits"], 4);
    assert!(body["videos"].as_array().unwrap().is_empty());
    assert!(body["resources"].as_array().unwrap().is_empty());
}

/// Test a course needs a title.
#[tokio::test]
async fn test_create_course_requires_title() {
    let ctx = TestContext::new();
    let server = ctx.server();

    let response = server
        .post("/api/courses")
        .json(&serde_json::json!({ "title": "   " }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

/// Test list summarizes attached content.
#[tokio::test]
async fn test_list_courses_summary() {
    let ctx = TestContext::new();
    let server = ctx.server();
    let course_id = ctx.create_test_course(&server, "Data Structures").await;
    ctx.create_test_course(&server, "Physics").await;

    server
        .post(&format!("/api/courses/{}/resources", course_id))
        .json(&fixtures::flashcard_resource_request(
            "Arrays",
            &fixtures::sample_csv(4),
        ))
        .await
        .assert_status_ok();
    server
        .post(&format!("/api/courses/{}/videos", course_id))
        .json(&fixtures::video_request("Arrays Explained", "QJNwK2uJyGs"))
        .await
        .assert_status_ok();

    let response = server.get("/api/courses").await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    let courses = body["courses"].as_array().unwrap();
    assert_eq!(courses.len(), 2);

    let summary = courses.iter().find(|c| c["id"] == course_id.as_str()).unwrap();
    assert_eq!(summary["video_count"], 1);
    assert_eq!(summary["resource_count"], 1);
    assert_eq!(summary["flashcard_count"], 4);
}

/// Test get for a missing course.
#[tokio::test]
async fn test_get_course_not_found() {
    let ctx = TestContext::new();
    let server = ctx.server();

    let response = server.get("/api/courses/course_missing").await;

    response.assert_status(StatusCode::NOT_FOUND);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "not_found");
}

/// Test delete course.
#[tokio::test]
async fn test_delete_course() {
    let ctx = TestContext::new();
    let server = ctx.server();
    let course_id = ctx.create_test_course(&server, "Electronics").await;

    let response = server.delete(&format!("/api/courses/{}", course_id)).await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["deleted"], true);
    assert!(ctx.stored_course(&course_id).await.is_none());

    let response = server.delete(&format!("/api/courses/{}", course_id)).await;
    let body: serde_json::Value = response.json();
    assert_eq!(body["deleted"], false);
}
