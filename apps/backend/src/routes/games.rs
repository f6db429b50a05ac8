//! Game HTTP routes: create, read, move and status.

use actix_web::http::header::ETAG;
use actix_web::http::StatusCode;
use actix_web::{web, HttpRequest, HttpResponse, Result};
use serde::{Deserialize, Serialize};

use crate::db::txn::with_txn;
use crate::domain::board::{Pit, Turn};
use crate::error::AppError;
use crate::extractors::{PitPath, ValidatedJson};
use crate::http::etag::{game_etag, not_modified};
use crate::repos::games::GameRecord;
use crate::services::games::{GameService, NewGame};
use crate::state::app_state::AppState;

/// Optional creation parameters; omitted fields use the configured defaults.
#[derive(Debug, Default, Deserialize)]
pub struct CreateGameRequest {
    pub little_pits_per_player: Option<i64>,
    pub stones_per_pit: Option<i64>,
}

/// Wire representation of a game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameBody {
    pub id: String,
    pub turn: Turn,
    pub score_one: u32,
    pub score_two: u32,
    pub little_pits_per_player: u32,
    pub stones_per_pit: u32,
    pub pits: Vec<Pit>,
}

impl From<&GameRecord> for GameBody {
    fn from(record: &GameRecord) -> Self {
        let game = &record.game;
        GameBody {
            id: game.id.clone(),
            turn: game.turn,
            score_one: game.score_one,
            score_two: game.score_two,
            little_pits_per_player: game.little_pits_per_player(),
            stones_per_pit: game.stones_per_pit,
            pits: game.pits().to_vec(),
        }
    }
}

fn game_response(status: StatusCode, record: &GameRecord) -> HttpResponse {
    HttpResponse::build(status)
        .insert_header((ETAG, game_etag(&record.game.id, record.version)))
        .json(GameBody::from(record))
}

/// POST /api/games
async fn create_game(
    body: ValidatedJson<CreateGameRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let body = body.into_inner();
    let params = NewGame {
        little_pits_per_player: body.little_pits_per_player,
        stones_per_pit: body.stones_per_pit,
    };
    let service = GameService::new(app_state.game_config);

    let record = with_txn(&app_state, move |txn| {
        Box::pin(async move { service.create_game(txn, params).await })
    })
    .await?;

    Ok(game_response(StatusCode::CREATED, &record))
}

/// GET /api/games/{game_id}
///
/// Honors `If-None-Match`: a matching ETag answers `304 Not Modified`.
async fn get_game(
    http_req: HttpRequest,
    path: web::Path<String>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let game_id = path.into_inner();
    let service = GameService::new(app_state.game_config);

    let record = with_txn(&app_state, move |txn| {
        Box::pin(async move { service.get_game(txn, &game_id).await })
    })
    .await?;

    let etag = game_etag(&record.game.id, record.version);
    if not_modified(http_req.headers(), &etag) {
        return Ok(HttpResponse::build(StatusCode::NOT_MODIFIED)
            .insert_header((ETAG, etag))
            .finish());
    }

    Ok(game_response(StatusCode::OK, &record))
}

/// PUT /api/games/{game_id}/pits/{pit}
///
/// The per-game lock is held across the whole transaction, commit included.
async fn make_move(
    path: PitPath,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let PitPath { game_id, pit } = path;
    let _guard = app_state.game_locks.acquire(&game_id).await;

    let service = GameService::new(app_state.game_config);
    let id = game_id.clone();
    let (record, _) = with_txn(&app_state, move |txn| {
        Box::pin(async move { service.make_move(txn, &id, pit).await })
    })
    .await?;

    Ok(game_response(StatusCode::OK, &record))
}

/// GET /api/games/{game_id}/status
async fn get_status(
    path: web::Path<String>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let game_id = path.into_inner();
    let service = GameService::new(app_state.game_config);

    let status = with_txn(&app_state, move |txn| {
        Box::pin(async move { service.status(txn, &game_id).await })
    })
    .await?;

    Ok(HttpResponse::Ok().json(status))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("").route(web::post().to(create_game)))
        .service(web::resource("/{game_id}").route(web::get().to(get_game)))
        .service(web::resource("/{game_id}/status").route(web::get().to(get_status)))
        .service(web::resource("/{game_id}/pits/{pit}").route(web::put().to(make_move)));
}
