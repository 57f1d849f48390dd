use crate::app::App;
use crate::config::AppConfig;
use crate::responses::html_error_response;
use crate::router::handle;
use astra::Server;
use tracing::{error, info};

mod app;
mod catalog;
mod config;
mod domain;
mod errors;
mod logging;
mod responses;
mod router;
mod templates;


fn main() {
    logging::init_logger();

    // 1️⃣ Configuration from the environment
    let config = match AppConfig::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("❌ Invalid configuration: {e}");
            std::process::exit(1);
        }
    };

    // 2️⃣ Shared app state + HTTP client
    let app = match App::new(config) {
        Ok(app) => app,
        Err(e) => {
            eprintln!("❌ Startup failed: {e}");
            std::process::exit(1);
        }
    };

    // 3️⃣ First catalog fetch runs while the server comes up
    app.spawn_load();

    // 4️⃣ Start the server
    let addr = app.config.bind_addr;
    info!(%addr, endpoint = app.endpoint(), "starting server");

    let server = Server::bind(&addr).max_workers(app.config.max_workers);

    let result = server.serve(move |req, _info| match handle(req, &app) {
        Ok(resp) => resp,
        Err(err) => html_error_response(err),
    });

    if let Err(e) = result {
        error!(error = %e, "server ended with error");
    }

    info!("server shut down cleanly");
}
