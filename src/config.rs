use serde::Deserialize;
use std::fs::read_to_string;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};

use crate::error::ServerError;

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct TlsConfig {
    pub cert_file_path: PathBuf,
    pub key_file_path: PathBuf,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub bind_address: IpAddr,
    pub port: u16,
    pub tls: Option<TlsConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            bind_address: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            tls: None,
        }
    }
}

/// Command line values that take precedence over the config file.
#[derive(Debug, Default)]
pub struct Overrides {
    pub port: Option<u16>,
    pub key_file_path: Option<PathBuf>,
    pub cert_file_path: Option<PathBuf>,
}

impl Config {
    pub fn from_file(path: &Path) -> Result<Config, ServerError> {
        let contents = read_to_string(path).map_err(|source| ServerError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&contents).map_err(|source| ServerError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn load(path: Option<&Path>) -> Result<Config, ServerError> {
        match path {
            Some(path) => Config::from_file(path),
            None => Ok(Config::default()),
        }
    }

    pub fn with_overrides(mut self, overrides: Overrides) -> Result<Config, ServerError> {
        if let Some(port) = overrides.port {
            self.port = port;
        }
        self.tls = match (overrides.key_file_path, overrides.cert_file_path, self.tls) {
            (Some(key_file_path), Some(cert_file_path), _) => Some(TlsConfig {
                cert_file_path,
                key_file_path,
            }),
            (Some(key_file_path), None, Some(tls)) => Some(TlsConfig {
                key_file_path,
                ..tls
            }),
            (None, Some(cert_file_path), Some(tls)) => Some(TlsConfig {
                cert_file_path,
                ..tls
            }),
            (None, None, tls) => tls,
            _ => return Err(ServerError::IncompleteTls),
        };
        Ok(self)
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_address, self.port)
    }
}
