//! Static asset serving.
//!
//! The page shell (`index.html`, `style.css`, `script.js`) is served from fixed
//! root-level routes, and everything under the asset directory is also
//! reachable below `/static`. Missing files produce a plain 404.

use std::path::{Path, PathBuf};

use tower_http::services::{ServeDir, ServeFile};

use crate::config::AssetsConfig;

/// Main HTML page served at `/`
pub const INDEX_FILE: &str = "index.html";

/// Stylesheet served at `/style.css`
pub const STYLE_FILE: &str = "style.css";

/// Script served at `/script.js`
pub const SCRIPT_FILE: &str = "script.js";

impl AssetsConfig {
    /// Path of a named asset inside the configured directory
    pub fn asset_path(&self, name: &str) -> PathBuf {
        Path::new(&self.dir).join(name)
    }
}

/// Serve one fixed asset. Content type is derived from the file extension.
pub fn create_asset_service(assets: &AssetsConfig, name: &str) -> ServeFile {
    ServeFile::new(assets.asset_path(name))
}

/// Serve the whole asset directory (mounted at `/static`).
pub fn create_static_service(assets: &AssetsConfig) -> ServeDir {
    ServeDir::new(&assets.dir)
}
