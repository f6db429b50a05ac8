#![allow(dead_code)]

use actix_http::Request;
use actix_web::body::BoxBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::{test, web, App, Error};
use mancala_backend::config::game::GameConfig;
use mancala_backend::infra::state::build_state;
use mancala_backend::middleware::{RequestContext, StructuredLogger};
use mancala_backend::routes;
use mancala_backend::routes::games::GameBody;
use mancala_backend::state::app_state::AppState;
use serde_json::Value;

#[ctor::ctor]
fn init_logging() {
    backend_test_support::logging::init();
}

/// Fresh state over a private, migrated in-memory database.
pub async fn memory_state(game_config: GameConfig) -> AppState {
    build_state()
        .with_db_url("sqlite::memory:")
        .with_game_config(game_config)
        .build()
        .await
        .expect("build in-memory state")
}

/// The production route table and middleware over `state`.
pub async fn create_test_app(
    state: AppState,
) -> impl Service<Request, Response = ServiceResponse<BoxBody>, Error = Error> {
    test::init_service(
        App::new()
            .wrap(StructuredLogger)
            .wrap(RequestContext)
            .app_data(web::Data::new(state))
            .configure(routes::configure),
    )
    .await
}

pub async fn default_app() -> impl Service<Request, Response = ServiceResponse<BoxBody>, Error = Error>
{
    create_test_app(memory_state(GameConfig::default()).await).await
}

pub async fn post_game<S>(app: &S, body: Option<Value>) -> ServiceResponse<BoxBody>
where
    S: Service<Request, Response = ServiceResponse<BoxBody>, Error = Error>,
{
    let req = test::TestRequest::post().uri("/api/games");
    let req = match body {
        Some(json) => req.set_json(json),
        None => req,
    };
    test::call_service(app, req.to_request()).await
}

/// Create a game and return its body; panics unless the server answers 201.
pub async fn create_game<S>(app: &S, body: Option<Value>) -> GameBody
where
    S: Service<Request, Response = ServiceResponse<BoxBody>, Error = Error>,
{
    let resp = post_game(app, body).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    test::read_body_json(resp).await
}

pub async fn put_move<S>(app: &S, game_id: &str, pit: &str) -> ServiceResponse<BoxBody>
where
    S: Service<Request, Response = ServiceResponse<BoxBody>, Error = Error>,
{
    let req = test::TestRequest::put()
        .uri(&format!("/api/games/{game_id}/pits/{pit}"))
        .to_request();
    test::call_service(app, req).await
}

/// Play a move that must succeed and return the updated game.
pub async fn play<S>(app: &S, game_id: &str, pit: u32) -> GameBody
where
    S: Service<Request, Response = ServiceResponse<BoxBody>, Error = Error>,
{
    let resp = put_move(app, game_id, &pit.to_string()).await;
    assert_eq!(resp.status(), StatusCode::OK, "move on pit {pit} rejected");
    test::read_body_json(resp).await
}

pub async fn get_game<S>(app: &S, game_id: &str) -> ServiceResponse<BoxBody>
where
    S: Service<Request, Response = ServiceResponse<BoxBody>, Error = Error>,
{
    let req = test::TestRequest::get()
        .uri(&format!("/api/games/{game_id}"))
        .to_request();
    test::call_service(app, req).await
}

pub async fn get_status<S>(app: &S, game_id: &str) -> ServiceResponse<BoxBody>
where
    S: Service<Request, Response = ServiceResponse<BoxBody>, Error = Error>,
{
    let req = test::TestRequest::get()
        .uri(&format!("/api/games/{game_id}/status"))
        .to_request();
    test::call_service(app, req).await
}

/// Sum of stones in pits and both stores.
pub fn total_stones(game: &GameBody) -> u64 {
    game.pits.iter().map(|p| u64::from(p.stones)).sum::<u64>()
        + u64::from(game.score_one)
        + u64::from(game.score_two)
}

/// First non-empty pit owned by the player to move, if any.
pub fn first_playable_pit(game: &GameBody) -> Option<u32> {
    let mover = game.turn.player()?;
    game.pits
        .iter()
        .find(|p| p.owner == mover && p.stones > 0)
        .map(|p| p.position)
}
