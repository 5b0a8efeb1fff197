use lift_scoreboard::args;
use lift_scoreboard::controller::board::{AppState, configure};

use actix_files::Files;
use actix_web::web::Data;
use actix_web::{App, HttpServer};

#[actix_web::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = args::args_checks()?;
    let labels = args.label_catalog()?;
    let state = Data::new(AppState::new(
        args.scoreboard_config(),
        labels,
        args.title.clone(),
    ));

    log::info!(
        "serving scoreboard on {}:{} (theme {}, density {})",
        args.bind,
        args.port,
        args.theme,
        args.density
    );

    let static_dir = args.static_dir.clone();
    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .configure(configure)
            .service(Files::new("/static", static_dir.clone()))
    })
    .bind((args.bind.as_str(), args.port))?
    .run()
    .await?;
    Ok(())
}
