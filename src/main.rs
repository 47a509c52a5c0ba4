use actix_web::{
    http::KeepAlive,
    middleware::Logger,
    web::{self, Data},
    App, HttpServer,
};
use navarro_posts_api::{
    config::{
        api_doc::api_doc,
        cors::cors,
        error_handlers::{error_handlers, not_found},
        settings::Settings,
    },
    infra::postgres::Postgres,
    modules::post::{
        post_controllers::{post_controllers_module, user_posts_controllers_module},
        post_models::{PostModel, PostgresPostModel},
    },
};
use std::{net::Ipv4Addr, sync::Arc};

/// The main function that starts the server
///
/// It reads the settings, creates the Postgres connection pool and starts the
/// server with the post listing routes and the API documentation.
///
/// # Internal Variables
///
/// - `settings`: Environment configuration (port, database, listing shape).
/// - `post_model`: The post model shared by every worker.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    dotenv::dotenv().ok();
    env_logger::init();

    let settings = Settings::from_env();
    log::info!(
        "listening on port {} (posts listing shape: {:?})",
        settings.http_port,
        settings.listing_shape
    );

    let postgres_pool = Postgres::pool(&settings).map_err(|e| e.to_string())?;
    let post_model: Arc<dyn PostModel> = Arc::new(PostgresPostModel::new(postgres_pool));
    let listing_shape = settings.listing_shape;
    let http_port = settings.http_port;

    HttpServer::new(move || {
        App::new()
            .wrap(error_handlers())
            .wrap(cors(http_port))
            .wrap(Logger::default())
            .app_data(Data::from(post_model.clone()))
            .app_data(Data::new(listing_shape))
            .service(user_posts_controllers_module())
            .service(post_controllers_module())
            .service(api_doc())
            .default_service(web::to(not_found))
    })
    .keep_alive(KeepAlive::Os)
    .bind((Ipv4Addr::UNSPECIFIED, http_port))?
    .run()
    .await?;

    Ok(())
}
