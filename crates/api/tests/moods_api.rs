//! HTTP tests for the mood catalog and mood path parsing.
//!
//! Unknown moods are rejected before any query runs, so these need no
//! database.

mod common;

use axum::http::StatusCode;
use common::{body_json, get};

#[tokio::test]
async fn mood_types_lists_all_twelve_moods() {
    let app = common::build_offline_app();
    let response = get(app, "/mood-types").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let moods = json["data"].as_array().unwrap();
    assert_eq!(moods.len(), 12);
    assert_eq!(moods[0]["name"], "Depression");
    assert_eq!(moods[0]["value"], 1);
    assert_eq!(moods[9]["name"], "LowSelfEsteem");
    assert_eq!(moods[9]["display_name"], "Low Self-Esteem");
}

#[tokio::test]
async fn random_quote_for_unknown_mood_returns_404() {
    let app = common::build_offline_app();
    let response = get(app, "/quotes/mood/Euphoria/random?clientId=abc").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["code"], "INVALID_MOOD");
    assert_eq!(json["error"], "Unknown mood type: Euphoria");
}

#[tokio::test]
async fn random_quote_for_out_of_range_mood_value_returns_404() {
    let app = common::build_offline_app();
    let response = get(app, "/quotes/mood/13/random").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["code"], "INVALID_MOOD");
}

#[tokio::test]
async fn list_by_unknown_mood_returns_404() {
    let app = common::build_offline_app();
    let response = get(app, "/quotes/mood/0").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["code"], "INVALID_MOOD");
}
