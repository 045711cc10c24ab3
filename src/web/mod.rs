//! Browser-facing layer: the landing page and its static assets.
//!
//! The landing page is a plain HTML form posting to `/api/shorturl`; there is
//! no templating.
//!
//! # Modules
//!
//! - [`routes`] - Landing page and asset route configuration

pub mod routes;

use std::path::PathBuf;

use crate::config::Config;

/// Locations of the files served to browsers.
#[derive(Debug, Clone)]
pub struct StaticAssets {
    /// Directory holding `index.html`.
    pub views_dir: PathBuf,
    /// Directory served under `/public`.
    pub public_dir: PathBuf,
}

impl StaticAssets {
    pub fn new(views_dir: impl Into<PathBuf>, public_dir: impl Into<PathBuf>) -> Self {
        Self {
            views_dir: views_dir.into(),
            public_dir: public_dir.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.views_dir, &config.public_dir)
    }

    /// Path of the landing page.
    pub fn index_page(&self) -> PathBuf {
        self.views_dir.join("index.html")
    }
}

impl Default for StaticAssets {
    /// `views/` and `public/`, relative to the working directory.
    fn default() -> Self {
        Self::new("views", "public")
    }
}
