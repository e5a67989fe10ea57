use std::path::PathBuf;

use anyhow::{Context, Result};

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 3000;

/// Where to listen and what to serve. Read from `FOLIO_*` variables, with a
/// `.env` file in the working directory taken into account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Trunk output: `index.html` plus the wasm bundle.
    pub dist_dir: PathBuf,
    /// Portrait, project images and `resume.pdf`.
    pub assets_dir: PathBuf,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self> {
        if let Err(e) = dotenvy::dotenv() {
            if !e.not_found() {
                return Err(e).context("failed to load .env");
            }
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let root = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(".."); // = workspace root

        let port = match get("FOLIO_PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("FOLIO_PORT is not a port number: {raw:?}"))?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            host: get("FOLIO_HOST").unwrap_or_else(|| DEFAULT_HOST.to_owned()),
            port,
            dist_dir: get("FOLIO_DIST")
                .map(PathBuf::from)
                .unwrap_or_else(|| root.join("dist")),
            assets_dir: get("FOLIO_ASSETS")
                .map(PathBuf::from)
                .unwrap_or_else(|| root.join("assets")),
        })
    }

    pub fn resume_path(&self) -> PathBuf {
        self.assets_dir.join("resume.pdf")
    }
}
