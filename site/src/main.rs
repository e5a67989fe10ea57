mod config;

use std::path::PathBuf;

use actix_files::{Files, NamedFile};
use actix_web::{App, HttpServer, middleware::Logger, web};
use anyhow::Context;

use crate::config::ServerConfig;

struct Paths {
    index: PathBuf,
    resume: PathBuf,
}

/// Any path the bundle does not have goes to the SPA; the router shows 404.
async fn spa(paths: web::Data<Paths>) -> actix_web::Result<NamedFile> {
    Ok(NamedFile::open(&paths.index)?)
}

async fn resume(paths: web::Data<Paths>) -> actix_web::Result<NamedFile> {
    Ok(NamedFile::open(&paths.resume)?)
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = ServerConfig::from_env()?;
    if !config.dist_dir.join("index.html").is_file() {
        log::warn!("{} has no index.html, run `trunk build` in ui/", config.dist_dir.display());
    }
    log::info!("serving {} on http://{}:{}", config.dist_dir.display(), config.host, config.port);

    let paths = web::Data::new(Paths {
        index: config.dist_dir.join("index.html"),
        resume: config.resume_path(),
    });
    let dist = config.dist_dir.clone();
    let assets = config.assets_dir.clone();

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(paths.clone())
            .route("/resume.pdf", web::get().to(resume))
            .service(Files::new("/assets", &assets))
            .service(
                Files::new("/", &dist)
                    .index_file("index.html")
                    .default_handler(web::get().to(spa)),
            )
            .default_service(web::get().to(spa))
    })
    .bind((config.host.as_str(), config.port))
    .with_context(|| format!("cannot bind {}:{}", config.host, config.port))?
    .run()
    .await
    .context("server stopped with an error")
}
