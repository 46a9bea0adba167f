use showcase::catalog::api::CatalogLoader;
use showcase::catalog::fallback::{fallback_events, fallback_projects};
use showcase::catalog::model::CatalogOrigin;
use showcase::events::model::EventStatus;
use showcase::projects::model::ProjectStatus;

const EVENTS_FIXTURE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/events.json");
const PROJECTS_FIXTURE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/projects.json");
const INVALID_FIXTURE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/invalid.json");
// Nothing listens on the discard port
const UNREACHABLE_URL: &str = "http://127.0.0.1:9/data/events.json";

#[test_log::test(tokio::test)]
async fn should_load_events_from_a_local_file() {
    let catalog = CatalogLoader::new(0).load_events(EVENTS_FIXTURE).await;

    assert_eq!(catalog.origin, CatalogOrigin::Source);
    assert_eq!(catalog.records.len(), 3);
    assert_eq!(catalog.records[1].date.day, "2");
    assert_eq!(catalog.records[2].status, EventStatus::Past);
}

#[test_log::test(tokio::test)]
async fn should_load_projects_from_a_local_file() {
    let catalog = CatalogLoader::new(0).load_projects(PROJECTS_FIXTURE).await;

    assert_eq!(catalog.origin, CatalogOrigin::Source);
    assert_eq!(catalog.records[1].status, ProjectStatus::Research);
}

#[test_log::test(tokio::test)]
async fn unlisted_project_status_should_keep_the_source() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("projects.json");
    std::fs::write(
        &path,
        r#"{ "projects": [
          { "id": "rover", "title": "Rover", "description": "d", "status": "active",
            "category": "Robotics", "detailPage": "project-rover.html" },
          { "id": "old-bot", "title": "Old Bot", "description": "d", "status": "archived",
            "category": "Robotics", "detailPage": "project-old-bot.html" }
        ] }"#,
    )
    .unwrap();

    let catalog = CatalogLoader::new(0)
        .load_projects(&path.display().to_string())
        .await;

    assert_eq!(catalog.origin, CatalogOrigin::Source);
    assert_eq!(catalog.records[1].status.long_label(), "archived");
}

#[test_log::test(tokio::test)]
async fn malformed_document_should_fall_back() {
    let catalog = CatalogLoader::new(0).load_events(INVALID_FIXTURE).await;

    assert!(catalog.is_fallback());
    assert_eq!(catalog.records, fallback_events());
}

#[test_log::test(tokio::test)]
async fn missing_file_should_fall_back() {
    let catalog = CatalogLoader::new(0)
        .load_projects("does/not/exist/projects.json")
        .await;

    assert!(catalog.is_fallback());
    assert_eq!(catalog.records, fallback_projects());
}

#[test_log::test(tokio::test)]
async fn unreachable_url_should_fall_back() {
    let catalog = CatalogLoader::new(0).load_events(UNREACHABLE_URL).await;

    assert!(catalog.is_fallback());
}

#[test_log::test(tokio::test)]
async fn disabled_fallback_should_yield_unavailable_catalog() {
    let catalog = CatalogLoader::new(0)
        .with_fallback(false)
        .load_events(INVALID_FIXTURE)
        .await;

    assert!(catalog.is_unavailable());
    assert!(catalog.records.is_empty());
}

#[test_log::test(tokio::test)]
async fn fetch_should_report_the_failure() {
    let result = CatalogLoader::new(0).fetch_events(INVALID_FIXTURE).await;

    assert!(result.is_err());
}
