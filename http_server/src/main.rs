use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use anyhow::Context;
use tracing_actix_web::TracingLogger;

use crate::app_container::Application;

mod app_container;
mod errors;
mod routes;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    shared_kernel::tracing::config_telemetry();

    HttpServer::new(move || {
        let application = Application::new();
        App::new()
            .wrap(TracingLogger::default())
            .wrap(Cors::permissive())
            .configure(routes::config)
            .app_data(web::Data::new(application))
    })
    .bind("127.0.0.1:8080")?
    .run()
    .await
    .context("Server failed to run")
}
