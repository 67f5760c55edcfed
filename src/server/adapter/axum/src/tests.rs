/* src/server/adapter/axum/src/tests.rs */

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use h5p_server::h5p_engine::{ContentRecord, LibraryIdentifier, LibraryRecord};
use h5p_server::{InMemoryContents, InMemoryLibraries, parse_config};
use tower::ServiceExt;

use super::*;

fn router() -> axum::Router {
  let config = parse_config(
    r#"
[site]
url = "https://learn.example.org"

[assets]
cache_buster = "v1"
"#,
  )
  .unwrap();
  let library = LibraryRecord {
    library_id: 3,
    identifier: LibraryIdentifier::new("H5P.TrueFalse", 1, 8),
    embed_types: LibraryRecord::parse_embed_types("iframe"),
    supports_fullscreen: false,
    scripts: vec!["scripts/true-false.js".into()],
    styles: vec![],
  };
  let content = ContentRecord {
    id: 42,
    library_id: 3,
    title: "Is Oslo the capital?".into(),
    parameters: r#"{"correct":"true"}"#.into(),
    filtered_parameters: String::new(),
    disabled_features: 0,
  };
  H5pIntegration::new(&config)
    .libraries(Arc::new(InMemoryLibraries::new().with(library)))
    .contents(Arc::new(InMemoryContents::new().with(content)))
    .into_axum_router()
}

async fn get(uri: &str) -> (StatusCode, String) {
  let request = Request::builder()
    .uri(uri)
    .header(header::ACCEPT_LANGUAGE, "nb-NO")
    .body(Body::empty())
    .unwrap();
  let response = router().oneshot(request).await.unwrap();
  let status = response.status();
  let bytes = response.into_body().collect().await.unwrap().to_bytes();
  (status, String::from_utf8(bytes.to_vec()).unwrap())
}

async fn get_json(uri: &str) -> (StatusCode, serde_json::Value) {
  let (status, body) = get(uri).await;
  (status, serde_json::from_str(&body).unwrap())
}

#[tokio::test]
async fn embed_page_is_html() {
  let (status, body) = get("/h5p/embed/42").await;
  assert_eq!(status, StatusCode::OK);
  assert!(body.starts_with("<!doctype html>"));
  assert!(body.contains(r#"<html lang="nb""#));
  assert!(body.contains(r#"data-content-id="42""#));
  assert!(body.contains(r#"{"content":{"cid-42":{"libraryName":"H5P.TrueFalse 1.8""#));
  assert!(body.contains("/modules/h5p/libraries/H5P.TrueFalse-1.8/scripts/true-false.js?v1"));
}

#[tokio::test]
async fn embed_unknown_content_is_404_json() {
  let (status, body) = get_json("/h5p/embed/7").await;
  assert_eq!(status, StatusCode::NOT_FOUND);
  assert_eq!(body["ok"], false);
  assert_eq!(body["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn content_settings_json() {
  let (status, body) = get_json("/h5p/settings/42").await;
  assert_eq!(status, StatusCode::OK);
  let settings = &body["content"]["cid-42"];
  assert_eq!(settings["libraryName"], "H5P.TrueFalse 1.8");
  assert_eq!(settings["jsonContent"], r#"{"correct":"true"}"#);
  assert_eq!(settings["fullScreen"], "0");
  assert_eq!(settings["exportUrl"], "");
  assert_eq!(settings["url"], "https://learn.example.org/h5p/embed/42");
  assert!(settings["resizeCode"].as_str().unwrap().contains(
    "https://learn.example.org/vendor/h5p/h5p-core/js/h5p-resizer.js"
  ));
  assert_eq!(body["libraryPath"], "modules/h5p/libraries/");
  assert_eq!(body["jsonContentPath"], "/sites/default/files/h5p/content/");
}

#[tokio::test]
async fn editor_settings_for_new_content() {
  let (status, body) = get_json("/h5peditor/settings/0?lang=en").await;
  assert_eq!(status, StatusCode::OK);
  let editor = &body["h5peditor"];
  assert_eq!(editor["filesPath"], "/sites/default/files/h5p/editor");
  assert!(editor["ajaxPath"].as_str().unwrap().starts_with("/h5peditor/"));
  assert!(editor["ajaxPath"].as_str().unwrap().ends_with("/0/"));
  let scripts = editor["assets"]["scripts"].as_array().unwrap();
  assert_eq!(scripts.last().unwrap(), "/vendor/h5p/h5p-editor/language/en.js?v1");
}

#[tokio::test]
async fn editor_language_region_is_dropped() {
  let (_, body) = get_json("/h5peditor/settings/0?lang=en-GB").await;
  let scripts = body["h5peditor"]["assets"]["scripts"].as_array().unwrap();
  assert_eq!(scripts.last().unwrap(), "/vendor/h5p/h5p-editor/language/en.js?v1");
}

#[tokio::test]
async fn editor_settings_for_existing_content() {
  let (_, body) = get_json("/h5peditor/settings/7").await;
  assert_eq!(body["h5peditor"]["filesPath"], "/sites/default/files/h5p/content/7");
}

#[tokio::test]
async fn resolve_library_found() {
  let (status, body) = get_json("/h5p/libraries/resolve?name=H5P.TrueFalse%201.8").await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(body["machineName"], "H5P.TrueFalse");
  assert_eq!(body["libraryId"], 3);
}

#[tokio::test]
async fn resolve_library_not_installed() {
  let (status, body) = get_json("/h5p/libraries/resolve?name=H5P.TrueFalse%202.0").await;
  assert_eq!(status, StatusCode::OK);
  assert!(body["libraryId"].is_null());
}

#[tokio::test]
async fn resolve_library_malformed() {
  let (status, body) = get_json("/h5p/libraries/resolve?name=H5P.TrueFalse").await;
  assert_eq!(status, StatusCode::BAD_REQUEST);
  assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn resolve_library_missing_name() {
  let (status, _) = get_json("/h5p/libraries/resolve").await;
  assert_eq!(status, StatusCode::BAD_REQUEST);
}
