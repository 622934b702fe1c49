//! Single binary web server: bracket + scoreboard display, static from /static, JSON API.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default so TV screens on the venue network can reach it.
//! Override with env: HOST, PORT. Bracket: FIELD_SIZE, PLAYED_ROUNDS, BRACKET_SEED,
//! TIE_BREAK (first_side | redraw), WINNER_LABELS (placeholder | propagate).

use actix_web::{web::Data, App, HttpServer};
use padel_display_web::{api, api::DisplayState, ServerConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = ServerConfig::from_env()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;

    let state = match config.seed {
        Some(seed) => DisplayState::build(&config.bracket, &mut StdRng::seed_from_u64(seed)),
        None => DisplayState::build(&config.bracket, &mut rand::thread_rng()),
    }
    .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;

    log::info!(
        "Generated {}-team bracket: {} rounds, {} played (seed: {:?})",
        state.bracket.field_size,
        state.bracket.round_count(),
        state.bracket.played_rounds,
        config.seed
    );

    let bind = (config.host.as_str(), config.port);
    log::info!("Starting server at http://{}:{}", bind.0, bind.1);

    let state = Data::new(state);

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .configure(api::configure)
            .service(api::static_files("static"))
    })
    .bind(bind)?
    .run()
    .await
}
