use actix_web::web;

pub mod games;
pub mod health;

/// Mount every route. Shared by `main.rs` and the integration tests so both
/// exercise the same paths.
pub fn configure(cfg: &mut web::ServiceConfig) {
    // /health
    cfg.service(web::scope("/health").configure(health::configure_routes));

    // /api/games/**
    cfg.service(web::scope("/api/games").configure(games::configure_routes));
}
