//! API-level tests for the students resource.
//!
//! Students mirror the course surface: list/filter, create, update, delete.
//! The enrollment-facing behavior (rosters shrinking when a student is
//! deleted) is also exercised end to end.

mod common;

use axum::http::StatusCode;
use serde_json::{Value, json};

use common::create_test_server;
use common::fixtures::{random_name, seed_course, seed_student, seed_students};

#[tokio::test]
async fn test_list_students() {
    let (server, backend) = create_test_server();
    let ids = seed_students(&backend, 4).await;

    let response = server.get("/students/").await;

    response.assert_status_ok();
    let body: Vec<Value> = response.json();
    assert_eq!(body.len(), ids.len());

    let listed_ids: Vec<i64> = body.iter().map(|s| s["id"].as_i64().unwrap()).collect();
    assert_eq!(listed_ids, ids, "Students are listed in creation order");
}

#[tokio::test]
async fn test_filter_students_by_name() {
    let (server, backend) = create_test_server();
    seed_students(&backend, 3).await;
    let student = seed_student(&backend).await;

    let response = server
        .get(&format!("/students/?name={}", student.name))
        .await;

    response.assert_status_ok();
    let body: Vec<Value> = response.json();
    assert_eq!(body.len(), 1);
    assert_eq!(body[0]["id"], student.id);
    assert_eq!(body[0]["name"], student.name.as_str());
}

#[tokio::test]
async fn test_filter_students_by_id() {
    let (server, backend) = create_test_server();
    let ids = seed_students(&backend, 3).await;

    let response = server.get(&format!("/students/?id={}", ids[1])).await;

    response.assert_status_ok();
    let body: Vec<Value> = response.json();
    assert_eq!(body.len(), 1);
    assert_eq!(body[0]["id"], ids[1]);
}

#[tokio::test]
async fn test_create_student_returns_201() {
    let (server, _backend) = create_test_server();
    let name = random_name("student");

    let response = server.post("/students/").json(&json!({"name": name})).await;

    response.assert_status(StatusCode::CREATED);
    let body: Value = response.json();
    assert!(body["id"].as_i64().expect("id should be assigned") > 0);
    assert_eq!(body["name"], name.as_str());
}

#[tokio::test]
async fn test_create_student_form_encoded() {
    let (server, _backend) = create_test_server();

    let response = server
        .post("/students/")
        .form(&[("name", "form_student")])
        .await;

    response.assert_status(StatusCode::CREATED);
    let body: Value = response.json();
    assert_eq!(body["name"], "form_student");
}

#[tokio::test]
async fn test_read_student() {
    let (server, backend) = create_test_server();
    let student = seed_student(&backend).await;

    let response = server.get(&format!("/students/{}/", student.id)).await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["id"], student.id);
    assert_eq!(body["name"], student.name.as_str());
}

#[tokio::test]
async fn test_read_missing_student_returns_404() {
    let (server, _backend) = create_test_server();

    let response = server.get("/students/404/").await;

    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_patch_student_name() {
    let (server, backend) = create_test_server();
    let student = seed_student(&backend).await;

    let response = server
        .patch(&format!("/students/{}/", student.id))
        .json(&json!({"name": "renamed"}))
        .await;
    let get_response = server.get(&format!("/students/{}/", student.id)).await;

    response.assert_status_ok();
    get_response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["id"], student.id);
    assert_eq!(body["name"], "renamed");

    let get_body: Value = get_response.json();
    assert_eq!(get_body["name"], "renamed");
}

#[tokio::test]
async fn test_put_student() {
    let (server, backend) = create_test_server();
    let student = seed_student(&backend).await;

    let response = server
        .put(&format!("/students/{}/", student.id))
        .json(&json!({"name": "replaced"}))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["name"], "replaced");
}

#[tokio::test]
async fn test_delete_student_returns_204() {
    let (server, backend) = create_test_server();
    let student = seed_student(&backend).await;

    let response = server.delete(&format!("/students/{}/", student.id)).await;
    let get_response = server.get(&format!("/students/{}/", student.id)).await;

    response.assert_status(StatusCode::NO_CONTENT);
    get_response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_student_shrinks_course_roster() {
    let (server, backend) = create_test_server();
    let students = seed_students(&backend, 3).await;
    let course = seed_course(&backend, &students).await;

    server
        .delete(&format!("/students/{}/", students[1]))
        .await
        .assert_status(StatusCode::NO_CONTENT);

    let response = server.get(&format!("/courses/{}/", course.id)).await;
    response.assert_status_ok();

    let body: Value = response.json();
    let roster: Vec<i64> = body["students"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_i64().unwrap())
        .collect();
    assert_eq!(roster, vec![students[0], students[2]]);
}
