use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("failed to read config from '{}'", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse toml from '{}'", path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("tls needs both a key file and a cert file")]
    IncompleteTls,
    #[error("could not load tls key or certificate")]
    Tls(#[source] io::Error),
    #[error("server stopped unexpectedly")]
    Serve(#[source] io::Error),
}
