use std::sync::Arc;

use dioxus::prelude::*;
use storage::repository::{KeyValueStore, Storage, StorageError};
use upskill_core::model::{Catalog, CourseId};

use super::test_harness::{
    ViewKind, drive_dom, seed_gap_skills, setup_view_harness, setup_view_harness_with_catalog,
};
use crate::vm::CoursesIntent;

const COURSE_TITLES: [&str; 4] = [
    "JavaScript Fundamentals",
    "React Component Architecture",
    "RESTful API Development",
    "Database Design Principles",
];

#[tokio::test(flavor = "current_thread")]
async fn courses_view_without_gaps_lists_full_catalog() {
    let mut harness = setup_view_harness(ViewKind::Courses, Storage::in_memory());
    harness.mount().await;
    let html = harness.render();

    assert!(html.contains("Recommended Courses"), "missing title in {html}");
    let mut last = 0;
    for title in COURSE_TITLES {
        let at = html.find(title).unwrap_or_else(|| panic!("missing {title} in {html}"));
        assert!(at >= last, "{title} out of catalog order");
        last = at;
    }
    assert!(html.contains("0/4 Completed"), "missing badge in {html}");
    assert!(html.contains("0% of recommended courses completed"));
    assert!(!html.contains("Focus Areas"), "focus areas should be hidden: {html}");
    assert!(!html.contains("Finish and View Summary"));
    assert_eq!(html.matches("Start Course").count(), 4);
}

#[tokio::test(flavor = "current_thread")]
async fn courses_view_narrows_to_matching_gap() {
    let storage = Storage::in_memory();
    seed_gap_skills(&storage, &["Node.js & Express"]).await;
    let mut harness = setup_view_harness(ViewKind::Courses, storage);
    harness.mount().await;
    let html = harness.render();

    assert!(html.contains("RESTful API Development"), "missing course 3 in {html}");
    assert!(!html.contains("JavaScript Fundamentals"));
    assert!(!html.contains("Database Design Principles"));
    assert!(html.contains("Focus Areas"), "missing focus areas in {html}");
    assert!(html.contains("0/1 Completed"), "missing badge in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn completing_the_only_course_reveals_finish() {
    let storage = Storage::in_memory();
    seed_gap_skills(&storage, &["Node.js & Express"]).await;
    let mut harness = setup_view_harness(ViewKind::Courses, storage);
    harness.mount().await;

    let handles = harness.courses_handles.clone().expect("courses handles");
    handles
        .dispatch()
        .call(CoursesIntent::StartCourse(CourseId::new("3")));
    drive_dom(&mut harness.dom);
    let html = harness.render();

    assert!(html.contains("1/1 Completed"), "missing badge in {html}");
    assert!(html.contains("100% of recommended courses completed"));
    assert!(html.contains("✓ Completed"), "missing completed badge in {html}");
    assert!(!html.contains("Start Course"));
    assert!(html.contains("Finish and View Summary"), "missing finish in {html}");

    let vm = handles.vm();
    let guard = vm.read();
    let page = guard.as_ref().expect("page loaded");
    assert!(page.show_finish());
}

#[tokio::test(flavor = "current_thread")]
async fn unknown_course_intent_changes_nothing() {
    let mut harness = setup_view_harness(ViewKind::Courses, Storage::in_memory());
    harness.mount().await;
    let handles = harness.courses_handles.clone().expect("courses handles");

    handles
        .dispatch()
        .call(CoursesIntent::StartCourse(CourseId::new("missing")));
    drive_dom(&mut harness.dom);
    let html = harness.render();
    assert!(html.contains("0/4 Completed"), "unexpected progress in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn focus_areas_collapse_after_six() {
    let storage = Storage::in_memory();
    seed_gap_skills(
        &storage,
        &["S1", "S2", "S3", "S4", "S5", "S6", "S7", "S8"],
    )
    .await;
    let mut harness = setup_view_harness(ViewKind::Courses, storage);
    harness.mount().await;
    let html = harness.render();

    assert!(html.contains("Focus Areas"));
    assert!(html.contains("S6"), "missing sixth skill in {html}");
    assert!(!html.contains("S7"), "seventh skill should be collapsed: {html}");
    assert!(html.contains("+2 more"), "missing overflow in {html}");
    // No match, so every course is shown.
    assert!(html.contains("0/4 Completed"));
}

#[tokio::test(flavor = "current_thread")]
async fn empty_catalog_renders_empty_state() {
    let catalog = Catalog::new(Vec::new()).expect("empty catalog");
    let mut harness =
        setup_view_harness_with_catalog(ViewKind::Courses, Storage::in_memory(), catalog);
    harness.mount().await;
    let html = harness.render();

    assert!(html.contains("No Courses Available"), "missing empty state in {html}");
    assert!(html.contains("0/0 Completed"));
    assert!(!html.contains("Finish and View Summary"));
}

struct FailingStore;

#[async_trait::async_trait]
impl KeyValueStore for FailingStore {
    async fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Connection("fail".to_string()))
    }

    async fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Connection("fail".to_string()))
    }

    async fn remove(&self, _key: &str) -> Result<(), StorageError> {
        Err(StorageError::Connection("fail".to_string()))
    }
}

#[tokio::test(flavor = "current_thread")]
async fn courses_view_renders_error_state() {
    let storage = Storage {
        local: Arc::new(FailingStore),
    };
    let mut harness = setup_view_harness(ViewKind::Courses, storage);
    harness.mount().await;
    let html = harness.render();
    assert!(html.contains("Something went wrong"), "missing error in {html}");
    assert!(html.contains("Retry"), "missing retry in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn malformed_gap_list_shows_full_catalog() {
    let storage = Storage::in_memory();
    storage
        .local
        .set(services::UNKNOWN_SKILLS_KEY, "{oops")
        .await
        .expect("seed raw value");
    let mut harness = setup_view_harness(ViewKind::Courses, storage);
    harness.mount().await;
    let html = harness.render();
    assert!(html.contains("0/4 Completed"), "expected fallback catalog in {html}");
    assert!(!html.contains("Focus Areas"));
}

#[tokio::test(flavor = "current_thread")]
async fn completion_view_smoke_renders_summary() {
    let mut harness = setup_view_harness(ViewKind::Completion, Storage::in_memory());
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Learning Summary"), "missing title in {html}");
    assert!(html.contains("Back to Courses"), "missing link in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn finishing_navigates_to_learning_summary() {
    let storage = Storage::in_memory();
    seed_gap_skills(&storage, &["Node.js & Express"]).await;
    let mut harness = setup_view_harness(ViewKind::Routed, storage);
    harness.mount().await;

    let html = harness.render();
    assert!(html.contains("Recommended Courses"), "missing courses page in {html}");
    assert!(!html.contains("Learning Summary"));

    let handles = harness.courses_handles.clone().expect("courses handles");
    let dispatch = handles.dispatch();
    harness
        .dom
        .in_runtime(|| dispatch.call(CoursesIntent::StartCourse(CourseId::new("3"))));
    drive_dom(&mut harness.dom);
    assert!(harness.render().contains("Finish and View Summary"));

    harness.dom.in_runtime(|| dispatch.call(CoursesIntent::Finish));
    drive_dom(&mut harness.dom);
    harness.drive_async().await;
    let html = harness.render();

    assert!(html.contains("Learning Summary"), "missing summary page in {html}");
    assert!(!html.contains("Recommended Courses"), "courses page still mounted: {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn repeated_gap_skill_survives_rerender() {
    let storage = Storage::in_memory();
    seed_gap_skills(&storage, &["Rust", "Rust", "Node.js & Express"]).await;
    let mut harness = setup_view_harness(ViewKind::Courses, storage);
    harness.mount().await;
    assert_eq!(harness.render().matches(">Rust<").count(), 2);

    let handles = harness.courses_handles.clone().expect("courses handles");
    handles
        .dispatch()
        .call(CoursesIntent::StartCourse(CourseId::new("3")));
    drive_dom(&mut harness.dom);
    let html = harness.render();
    assert!(html.contains("1/1 Completed"), "missing badge in {html}");
    assert_eq!(html.matches(">Rust<").count(), 2);
}
