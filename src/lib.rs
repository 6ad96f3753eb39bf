use actix_web::{dev::Server, middleware::NormalizePath, web, App, HttpServer};
use sqlx::SqlitePool;
use std::net::TcpListener;
use tracing_actix_web::TracingLogger;

mod domain;
mod interfaces;
mod infrastructure;
pub mod errors;
pub mod settings;
pub mod constants;
pub mod graceful_shutdown;
pub mod background_task;

pub use domain::{entities, use_cases};
pub use interfaces::{handlers, repositories, middlewares, routes, views};
pub use infrastructure::{db, session, telemetry, utils};

use middlewares::session::SessionMiddleware;
use session::flash::FlashMailbox;

pub struct AppState {
    pub pool: SqlitePool,
    pub flash: FlashMailbox,
    pub site_owner: String,
}

impl AppState {
    pub fn new(config: &settings::AppConfig, pool: SqlitePool) -> Self {
        AppState {
            pool,
            flash: FlashMailbox::new(),
            site_owner: config.site_owner.clone(),
        }
    }
}

/// Builds the HTTP server on an already bound listener. The returned server
/// does nothing until awaited or spawned.
pub fn build_server(
    state: web::Data<AppState>,
    listener: TcpListener,
    workers: usize,
) -> std::io::Result<Server> {
    let server = HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(SessionMiddleware)
            .wrap(NormalizePath::trim())
            .wrap(TracingLogger::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .disable_signals()
    .listen(listener)?
    .run();

    Ok(server)
}
