//! App Core for Saved.io.
//!
//! Holds the database and the settings engine for the lifetime of the process.

use tracing::{info, warn};

use crate::database::connection::Database;
use crate::services::settings_engine::{SettingsEngine, SettingsEngineTrait};

/// Central application struct.
///
/// `BookmarkManager` borrows the connection, so it is created on demand via
/// `BookmarkManager::new(app.db.connection())`.
pub struct App {
    pub db: Database,
    pub settings_engine: SettingsEngine,
}

impl App {
    /// Opens the database at `db_path` and loads settings from
    /// `settings_path` (or the platform config dir when `None`).
    ///
    /// Unreadable settings are logged and replaced by defaults.
    pub fn new(db_path: &str, settings_path: Option<String>) -> Result<Self, Box<dyn std::error::Error>> {
        let db = Database::open(db_path)?;

        let mut settings_engine = SettingsEngine::new(settings_path);
        if let Err(e) = settings_engine.load() {
            warn!(error = %e, path = settings_engine.get_config_path(), "using default settings");
        }

        info!(db_path, "savedio initialized");
        Ok(Self { db, settings_engine })
    }
}
