use axum_server::tls_rustls::RustlsConfig;
use clap::Parser;
use std::path::PathBuf;

use app::{AppState, create_app};
use config::{Config, Overrides};
use error::ServerError;

mod app;
mod config;
mod error;
mod forecast;
mod sources;
mod weather;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(long, env = "WEATHERFORECAST_CONFIG")]
    config: Option<PathBuf>,

    #[arg(short, long, env = "PORT")]
    port: Option<u16>,

    #[arg(short, long, env = "KEY_FILE_PATH")]
    key_file_path: Option<PathBuf>,

    #[arg(short, long, env = "CERT_FILE_PATH")]
    cert_file_path: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    env_logger::init();

    let args = Args::parse();

    let config = Config::load(args.config.as_deref())?.with_overrides(Overrides {
        port: args.port,
        key_file_path: args.key_file_path,
        cert_file_path: args.cert_file_path,
    })?;

    let app = create_app(AppState::system());
    let addr = config.socket_addr();

    log::info!("listening on {}", addr);
    if let Some(tls) = config.tls {
        log::info!(
            "using tls with key file {} and cert file {}",
            tls.key_file_path.display(),
            tls.cert_file_path.display()
        );
        let tls = RustlsConfig::from_pem_file(tls.cert_file_path, tls.key_file_path)
            .await
            .map_err(ServerError::Tls)?;
        axum_server::bind_rustls(addr, tls)
            .serve(app.into_make_service())
            .await
            .map_err(ServerError::Serve)
    } else {
        axum_server::bind(addr)
            .serve(app.into_make_service())
            .await
            .map_err(ServerError::Serve)
    }
}
