use actix_web::{App, HttpServer, middleware, web};
use dotenvy::dotenv;

use promotions_service::config::ServerConfig;
use promotions_service::db::{establish_connection_pool, run_migrations};
use promotions_service::repository::DieselRepository;
use promotions_service::routes;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok(); // Load .env file
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = ServerConfig::from_env();

    let pool = match establish_connection_pool(&config.database_url) {
        Ok(pool) => pool,
        Err(e) => {
            log::error!("Failed to establish database connection: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = run_migrations(&pool) {
        log::error!("Failed to prepare database: {e}");
        std::process::exit(1);
    }

    let repo = DieselRepository::new(pool);

    log::info!(
        "Starting promotions service on {}:{}",
        config.address,
        config.port
    );

    let result = HttpServer::new(move || {
        App::new()
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .app_data(web::Data::new(repo.clone()))
            .configure(routes::configure)
    })
    .bind((config.address.as_str(), config.port))?
    .run()
    .await;

    log::info!("Promotions service stopped, database pool closed");
    result
}
