use std::env::VarError;

use anyhow::anyhow;

pub const REQUIRED_VARIABLES: &[&str] = &["DATABASE_URL"];

const DEFAULT_LISTEN_PORT: u16 = 8080;

pub struct Config {
    pub database_url: String,
    pub listen_port: u16,
}

impl Config {
    pub fn env() -> anyhow::Result<Self> {
        let database_url = env("DATABASE_URL")?;

        let listen_port = match env("LISTEN_PORT") {
            Ok(value) => value
                .parse()
                .map_err(|_| anyhow!("LISTEN_PORT is not a valid port number: {value}"))?,
            Err(_) => DEFAULT_LISTEN_PORT,
        };

        Ok(Self {
            database_url,
            listen_port,
        })
    }

    pub fn log(&self) {
        log::info!("config: DATABASE_URL={}", self.database_url);
        log::info!("config: LISTEN_PORT={}", self.listen_port);
    }
}

fn env(name: &str) -> anyhow::Result<String> {
    std::env::var(name).map_err(|e| match e {
        VarError::NotPresent => anyhow!("{name} not set"),
        VarError::NotUnicode(_) => anyhow!("{name} value is not valid unicode"),
    })
}
