//! Quick Share Core Library
//!
//! Core functionality for the Quick Share AI helper: pick some files, let
//! Gemini write a friendly caption for them, and copy the caption together
//! with a cosmetic share link.
//!
//! # Overview
//!
//! - **File selection**: metadata for picked files via [`files`]
//! - **Session state**: the Idle/Loading/Result/Error machine in [`session`]
//! - **AI integration**: caption prompts and the Gemini client via
//!   [`prompt`] and [`gemini`]
//! - **Sharing**: payloads, links and the clipboard via [`share`] and
//!   [`clipboard`]
//! - **User interface**: the share window via [`ui`]
//!
//! Nothing is uploaded or stored. The only network traffic is one Gemini
//! request per generated caption.
//!
//! # Quick Start
//!
//! ```ignore
//! use quick_share_core::QuickShare;
//!
//! let app = QuickShare::new()?;
//! app.run_interactive(Vec::new())?;
//! ```

pub mod clipboard;
pub mod config;
pub mod error;
pub mod files;
pub mod gemini;
pub mod prompt;
pub mod session;
pub mod share;
pub mod ui;

// Re-export primary types for convenience
pub use clipboard::{ClipboardSink, SystemClipboard};
pub use config::Config;
pub use error::{AppError, Result};
pub use files::SelectedFile;
pub use gemini::{CaptionService, GeminiClient};
pub use session::{Session, SessionPhase};
pub use share::SharePayload;

use std::sync::Arc;

/// Main entry point for the Quick Share application.
///
/// Holds the configuration and the caption client and creates sessions
/// wired to them.
pub struct QuickShare {
    config: Config,
    client: Arc<GeminiClient>,
}

impl QuickShare {
    /// Creates an instance from environment configuration (including `.env`).
    ///
    /// A missing API key does not fail here; generation reports it later.
    pub fn new() -> Result<Self> {
        Self::with_config(Config::load()?)
    }

    /// Creates an instance with custom configuration.
    pub fn with_config(config: Config) -> Result<Self> {
        let client = Arc::new(GeminiClient::new(&config)?);
        Ok(Self { config, client })
    }

    /// A fresh, empty session using the configured link host.
    pub fn new_session(&self) -> Session {
        Session::new(self.config.link_host.clone())
    }

    /// Opens the share window with `files` already selected.
    ///
    /// # Errors
    ///
    /// Returns an error if the window cannot be created.
    pub fn run_interactive(&self, files: Vec<SelectedFile>) -> Result<()> {
        let mut session = self.new_session();
        session.select_files(files)?;
        ui::run_share_ui(session, self.client.clone(), Box::new(SystemClipboard))
    }

    /// Generates a share payload for `files` without opening a window.
    pub async fn generate(&self, files: Vec<SelectedFile>) -> Result<SharePayload> {
        let mut session = self.new_session();
        session.select_files(files)?;
        session.generate(self.client.as_ref()).await
    }

    /// Returns a reference to the current configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }
}

/// Loads `.env` files if present.
///
/// Call this once at application startup before reading configuration.
pub fn init() {
    let _ = dotenvy::dotenv();
}
