//! Integration tests for the HTTP handlers, against an in-process actix app.

use actix_web::http::StatusCode;
use actix_web::{test, web::Data, App};
use padel_display_web::api::{self, DisplayState};
use padel_display_web::BracketConfig;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde_json::Value;

fn state() -> Data<DisplayState> {
    let state =
        DisplayState::build(&BracketConfig::default(), &mut StdRng::seed_from_u64(31)).unwrap();
    Data::new(state)
}

#[actix_web::test]
async fn health_reports_ok() {
    let app = test::init_service(App::new().app_data(state()).configure(api::configure)).await;
    let req = test::TestRequest::get().uri("/api/health").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["ok"], true);
    assert_eq!(body["service"], "padel-display-web");
}

#[actix_web::test]
async fn bracket_endpoint_returns_every_round() {
    let app = test::init_service(App::new().app_data(state()).configure(api::configure)).await;
    let req = test::TestRequest::get().uri("/api/bracket").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let rounds = body["bracket"]["rounds"].as_array().unwrap();
    assert_eq!(rounds.len(), 6);
    assert_eq!(rounds[0]["matches"][0]["participant_1"], "Team 1");
    assert_eq!(rounds[0]["matches"][0]["status"], "finished");
    assert_eq!(rounds[5]["matches"][0]["status"], "scheduled");
    assert!(body["champion"].is_null());
}

#[actix_web::test]
async fn layout_endpoint_includes_margins_and_edges() {
    let app = test::init_service(App::new().app_data(state()).configure(api::configure)).await;
    let req = test::TestRequest::get().uri("/api/bracket/layout").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["layout"]["container_height"], 4800.0);
    assert_eq!(body["layout"]["rounds"][1]["matches"][0]["margin_top"], 50.0);
    assert_eq!(body["edges"].as_array().unwrap().len(), 62);
}

#[actix_web::test]
async fn round_and_match_lookups() {
    let app = test::init_service(App::new().app_data(state()).configure(api::configure)).await;

    let req = test::TestRequest::get().uri("/api/bracket/rounds/4").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["title"], "SEMI FINAL");
    assert_eq!(body["matches"].as_array().unwrap().len(), 2);

    let req = test::TestRequest::get().uri("/api/bracket/matches/r0-m3").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["participant_1"], "Team 7");
    assert_eq!(body["participant_2"], "Team 8");
}

#[actix_web::test]
async fn unknown_round_or_match_is_not_found() {
    let app = test::init_service(App::new().app_data(state()).configure(api::configure)).await;

    let req = test::TestRequest::get().uri("/api/bracket/rounds/6").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::get().uri("/api/bracket/matches/r9-m0").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn scoreboard_has_live_match_and_ticker() {
    let app = test::init_service(App::new().app_data(state()).configure(api::configure)).await;
    let req = test::TestRequest::get().uri("/api/scoreboard").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["live_match"]["court"], "Center Court");
    assert_eq!(body["live_match"]["server"], "one");
    assert_eq!(body["sets_won"], serde_json::json!([1, 1]));
    assert_eq!(body["ticker"].as_array().unwrap().len(), 18);
}

#[actix_web::test]
async fn index_serves_html() {
    let app = test::init_service(App::new().app_data(state()).configure(api::configure)).await;
    let req = test::TestRequest::get().uri("/").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let content_type = resp.headers().get("content-type").unwrap().to_str().unwrap();
    assert!(content_type.starts_with("text/html"));
}

#[actix_web::test]
async fn static_assets_are_served_without_directory_listing() {
    let app = test::init_service(
        App::new()
            .app_data(state())
            .configure(api::configure)
            .service(api::static_files("static")),
    )
    .await;

    let req = test::TestRequest::get().uri("/static/style.css").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = test::TestRequest::get().uri("/static/").to_request();
    let resp = test::call_service(&app, req).await;
    assert_ne!(resp.status(), StatusCode::OK);
}
