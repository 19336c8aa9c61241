use color_eyre::eyre::{Result, WrapErr};
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

const DEFAULT_DATA_FILE: &str = "workouts.json";
const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 5000;

pub struct AppConfig {
    pub data_file: PathBuf,
    pub addr: SocketAddr,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let data_file = lookup("WORKOUTS_DATA_FILE")
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_DATA_FILE.to_string());

        let host = lookup("HOST")
            .unwrap_or_else(|| DEFAULT_HOST.to_string())
            .parse::<IpAddr>()
            .wrap_err("HOST must be an IP address")?;

        let port = match lookup("PORT") {
            Some(port) => port.parse::<u16>().wrap_err("PORT must be a number between 0 and 65535")?,
            None => DEFAULT_PORT,
        };

        Ok(AppConfig {
            data_file: PathBuf::from(data_file),
            addr: SocketAddr::new(host, port),
        })
    }
}
