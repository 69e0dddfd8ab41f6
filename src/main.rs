use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;

mod config;
mod controllers;
mod repository;
mod views;

use config::Config;
use repository::FileRepository;

pub struct AppState {
    pub repository: FileRepository,
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init();

    let config = Config::from_env();
    log::info!("lanshare v{}", env!("CARGO_PKG_VERSION"));
    log::info!("Upload directory: {:?}", config.upload_dir);

    let repository =
        FileRepository::open(&config.upload_dir).expect("Failed to open upload directory");

    let port = config.port;
    log::info!("Listening on http://0.0.0.0:{}", port);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(AppState {
                repository: repository.clone(),
            }))
            .wrap(Logger::default())
            .configure(controllers::files::config)
            .configure(controllers::notes::config)
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await
}
