use actix_web::{web, App, HttpServer};
use fitness_tracker::api::{self, AppState};
use fitness_tracker::config::ConfigLoader;
use fitness_tracker::predictor::Predictor;
use fitness_tracker::users::UserStore;
use std::error::Error;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[actix_web::main]
async fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = ConfigLoader::load()?;
    info!("Configuration loaded");

    let store = UserStore::open(&config.storage.users_file)?;
    let predictor = Predictor::new(&config.data, &config.model);
    info!(
        "Predictor will train {} trees (depth {}, {} features per split) from {} and {}",
        config.model.n_trees,
        config.model.max_depth,
        config.model.max_features,
        config.data.exercise_file.display(),
        config.data.calories_file.display()
    );

    let state = web::Data::new(AppState::new(store, predictor));

    info!(
        "Starting Personal Fitness Tracker API on http://{}:{}",
        config.server.host, config.server.port
    );
    HttpServer::new(move || App::new().app_data(state.clone()).configure(api::configure))
        .bind((config.server.host.as_str(), config.server.port))?
        .run()
        .await?;

    Ok(())
}
