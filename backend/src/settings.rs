//! Server settings loaded via OrthoConfig.
//!
//! Every value may come from the command line, a config file or a
//! `QUILL_`-prefixed environment variable; unset values fall back to the
//! defaults below.

use std::path::PathBuf;

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::domain::NEWS_COUNT_ON_HOME_PAGE;

const DEFAULT_HOST: &str = "0.0.0.0";

/// Process-wide server settings.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "QUILL")]
pub struct ServerSettings {
    /// Interface to bind.
    pub host: Option<String>,
    /// Port to bind.
    #[ortho_config(default = 8080)]
    pub port: u16,
    /// News items shown on the home page.
    pub news_per_page: Option<usize>,
    /// JSON fixture of news items loaded at startup.
    pub seed_path: Option<PathBuf>,
}

impl ServerSettings {
    pub fn host(&self) -> &str {
        self.host.as_deref().unwrap_or(DEFAULT_HOST)
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// Home page size; zero is treated as unset.
    pub fn news_per_page(&self) -> usize {
        self.news_per_page
            .filter(|count| *count > 0)
            .unwrap_or(NEWS_COUNT_ON_HOME_PAGE)
    }
}
