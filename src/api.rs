//! HTTP surface: read-only JSON views of the bracket and scoreboard, plus the HTML page.
//!
//! The state is built once at startup and shared immutably; there are no write endpoints.

use crate::logic::{
    compute_layout, demo_live_match, demo_sponsors, generate_bracket, sponsor_ticker,
    BracketConfig, BracketLayout, Edge, LayoutConstants, TICKER_REPEATS,
};
use crate::models::{Bracket, BracketError, LiveMatch, Sponsor};
use actix_files::Files;
use actix_web::{
    get,
    web::{self, Data, Path},
    HttpResponse, Responder,
};
use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Everything the display shows, generated once.
#[derive(Clone, Debug)]
pub struct DisplayState {
    pub bracket: Bracket,
    pub layout_constants: LayoutConstants,
    pub sponsors: Vec<Sponsor>,
    pub live_match: LiveMatch,
    pub generated_at: DateTime<Utc>,
}

impl DisplayState {
    pub fn build<R: Rng>(config: &BracketConfig, rng: &mut R) -> Result<Self, BracketError> {
        Ok(Self {
            bracket: generate_bracket(config, rng)?,
            layout_constants: LayoutConstants::default(),
            sponsors: demo_sponsors(),
            live_match: demo_live_match(),
            generated_at: Utc::now(),
        })
    }
}

type AppState = Data<DisplayState>;

#[derive(Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[derive(Serialize)]
struct BracketResponse<'a> {
    generated_at: DateTime<Utc>,
    champion: Option<&'a str>,
    bracket: &'a Bracket,
}

#[derive(Serialize)]
struct LayoutResponse {
    layout: BracketLayout,
    edges: Vec<Edge>,
}

#[derive(Serialize)]
struct ScoreboardResponse<'a> {
    live_match: &'a LiveMatch,
    sets_won: (usize, usize),
    ticker: Vec<String>,
}

/// Path segment: round index (e.g. /api/bracket/rounds/{round})
#[derive(Deserialize)]
struct RoundPath {
    round: usize,
}

/// Path segment: match id (e.g. /api/bracket/matches/r0-m3)
#[derive(Deserialize)]
struct MatchPath {
    match_id: String,
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "padel-display-web",
    })
}

/// Avoid 404 in browser tab: favicon not required for the display.
#[get("/favicon.ico")]
async fn favicon() -> HttpResponse {
    HttpResponse::NoContent().finish()
}

#[get("/api/bracket")]
async fn api_bracket(state: AppState) -> HttpResponse {
    HttpResponse::Ok().json(BracketResponse {
        generated_at: state.generated_at,
        champion: state.bracket.champion(),
        bracket: &state.bracket,
    })
}

/// Layout is recomputed per request from the stored bracket.
#[get("/api/bracket/layout")]
async fn api_bracket_layout(state: AppState) -> HttpResponse {
    let layout = compute_layout(&state.bracket, &state.layout_constants);
    let edges = layout.edges();
    HttpResponse::Ok().json(LayoutResponse { layout, edges })
}

#[get("/api/bracket/rounds/{round}")]
async fn api_bracket_round(state: AppState, path: Path<RoundPath>) -> HttpResponse {
    match state.bracket.round(path.round) {
        Some(round) => HttpResponse::Ok().json(round),
        None => HttpResponse::NotFound().json(serde_json::json!({ "error": "No such round" })),
    }
}

#[get("/api/bracket/matches/{match_id}")]
async fn api_bracket_match(state: AppState, path: Path<MatchPath>) -> HttpResponse {
    match state.bracket.find_match(&path.match_id) {
        Some(m) => HttpResponse::Ok().json(m),
        None => HttpResponse::NotFound().json(serde_json::json!({ "error": "No such match" })),
    }
}

#[get("/api/scoreboard")]
async fn api_scoreboard(state: AppState) -> HttpResponse {
    HttpResponse::Ok().json(ScoreboardResponse {
        live_match: &state.live_match,
        sets_won: state.live_match.sets_won(),
        ticker: sponsor_ticker(&state.sponsors, TICKER_REPEATS),
    })
}

#[get("/")]
async fn index() -> HttpResponse {
    let html = include_str!("../templates/index.html");
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(html)
}

/// Stylesheet and other assets under `/static`, served from `dir`. Directories are not listed.
pub fn static_files(dir: &str) -> Files {
    Files::new("/static", dir)
}

/// Register every display route. Static files are mounted by the binary.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(index)
        .service(api_health)
        .service(favicon)
        .service(api_bracket)
        .service(api_bracket_layout)
        .service(api_bracket_round)
        .service(api_bracket_match)
        .service(api_scoreboard);
}
