use std::sync::Arc;

use actix_web::middleware::DefaultHeaders;
use actix_web::{App, HttpServer, web};
use tracing::info;

use news_server::application::news_service::NewsService;
use news_server::data::news_repository::SqliteNewsRepository;
use news_server::infrastructure::config::AppConfig;
use news_server::infrastructure::database::{create_pool, run_migrations};
use news_server::infrastructure::logging::init_logging;
use news_server::infrastructure::templates::load_templates;
use news_server::presentation::middleware::RequestTrace;
use news_server::presentation::routes;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    init_logging();

    let config = AppConfig::from_env().expect("failed to load configuration");
    let pool = create_pool(&config.database_url)
        .await
        .expect("failed to connect to the database");
    run_migrations(&pool).await.expect("failed to run migrations");

    let repository = SqliteNewsRepository::new(pool);
    let service = NewsService::new(Arc::new(repository));
    let templates =
        web::Data::new(load_templates(&config.template_glob).expect("failed to load templates"));

    info!(host = %config.host, port = config.port, "starting news server");

    HttpServer::new(move || {
        App::new()
            .wrap(RequestTrace)
            .wrap(
                DefaultHeaders::new()
                    .add(("X-Content-Type-Options", "nosniff"))
                    .add(("X-Frame-Options", "DENY"))
                    .add(("Referrer-Policy", "strict-origin-when-cross-origin")),
            )
            .app_data(web::Data::new(service.clone()))
            .app_data(templates.clone())
            .configure(routes::configure)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
