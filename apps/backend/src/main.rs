use actix_web::{web, App, HttpServer};
use mancala_backend::config::db::{db_url, redact};
use mancala_backend::config::game::GameConfig;
use mancala_backend::config::server::bind_addr;
use mancala_backend::infra::state::build_state;
use mancala_backend::middleware::{RequestContext, StructuredLogger};
use mancala_backend::routes;
use mancala_backend::telemetry;

fn exit_with(message: &str, err: impl std::fmt::Display) -> ! {
    eprintln!("❌ {message}: {err}");
    std::process::exit(1);
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    let (host, port) = bind_addr().unwrap_or_else(|e| exit_with("Invalid server address", e));
    let game_config =
        GameConfig::from_env().unwrap_or_else(|e| exit_with("Invalid game defaults", e));
    let database_url = db_url().unwrap_or_else(|e| exit_with("Invalid database URL", e));

    println!("🚀 Starting Mancala Backend on http://{host}:{port}");

    let app_state = match build_state()
        .with_db_url(database_url.clone())
        .with_game_config(game_config)
        .build()
        .await
    {
        Ok(state) => state,
        Err(e) => exit_with("Failed to build application state", e),
    };

    println!("✅ Database connected ({})", redact(&database_url));

    let data = web::Data::new(app_state);

    HttpServer::new(move || {
        App::new()
            .wrap(StructuredLogger)
            .wrap(RequestContext)
            .app_data(data.clone())
            .configure(routes::configure)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
