use anyhow::{Context, Result};
use serde::Deserialize;
use std::env;

use crate::dictionary::DEFAULT_LANGUAGE;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub game: GameConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub frontend_dir: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GameConfig {
    /// Newline-delimited list of root word candidates
    pub root_words_path: String,
    pub dictionary_path: String,
    pub language: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let server = ServerConfig {
            host: env::var("HOST")
                .unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .context("PORT must be a number")?,
            frontend_dir: env::var("FRONTEND_DIR")
                .unwrap_or_else(|_| "./frontend".to_string()),
        };

        let game = GameConfig {
            root_words_path: env::var("ROOT_WORDS_PATH")
                .unwrap_or_else(|_| "./start.txt".to_string()),
            dictionary_path: env::var("DICTIONARY_PATH")
                .unwrap_or_else(|_| "./dictionary.txt".to_string()),
            language: env::var("DICTIONARY_LANGUAGE")
                .unwrap_or_else(|_| DEFAULT_LANGUAGE.to_string()),
        };

        Ok(Config { server, game })
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
