use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};
use futures_util::future::{ready, Ready};

use crate::error::AppError;
use crate::errors::ErrorCode;

/// `{game_id}` and `{pit}` from a move route.
///
/// The pit is parsed as a signed integer only; range and ownership checks
/// belong to move validation so that an unknown game still answers 404.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PitPath {
    pub game_id: String,
    pub pit: i64,
}

impl FromRequest for PitPath {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(parse(req))
    }
}

fn parse(req: &HttpRequest) -> Result<PitPath, AppError> {
    let game_id = req
        .match_info()
        .get("game_id")
        .ok_or_else(|| AppError::bad_request(ErrorCode::BadRequest, "Missing game_id parameter"))?;
    let raw_pit = req.match_info().get("pit").ok_or_else(|| {
        AppError::bad_request(ErrorCode::InvalidPitParameter, "Missing pit parameter")
    })?;

    let pit = raw_pit.trim().parse::<i64>().map_err(|_| {
        AppError::bad_request(
            ErrorCode::InvalidPitParameter,
            format!("Pit must be an integer, got: {raw_pit}"),
        )
    })?;

    Ok(PitPath {
        game_id: game_id.to_string(),
        pit,
    })
}
