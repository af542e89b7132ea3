//! User interface for quick-share.
//!
//! A single window where files are dropped or added by path, a caption is
//! generated, and the resulting message and link can be copied.
//!
//! # Architecture
//!
//! - [`state`]: actions raised by widgets and background task events
//! - [`rendering`]: drawing helpers for each part of the window
//! - [`app`]: the `eframe::App` that owns the session
//!
//! # Usage
//!
//! ```ignore
//! use std::sync::Arc;
//! use quick_share_core::{ui, Config, GeminiClient, Session, SystemClipboard};
//!
//! let config = Config::load()?;
//! let client = GeminiClient::new(&config)?;
//! ui::run_share_ui(Session::new(&config.link_host), Arc::new(client), Box::new(SystemClipboard))?;
//! ```

mod app;
mod rendering;
mod state;

pub use app::QuickShareApp;
pub use state::ShareAction;

use crate::clipboard::ClipboardSink;
use crate::error::Result;
use crate::gemini::CaptionService;
use crate::session::Session;
use std::sync::Arc;

/// Opens the share window and blocks until the user closes it.
///
/// # Errors
/// Returns [`AppError::Ui`](crate::AppError::Ui) if the window cannot be created.
pub fn run_share_ui(
    session: Session,
    service: Arc<dyn CaptionService>,
    clipboard: Box<dyn ClipboardSink>,
) -> Result<()> {
    app::run(session, service, clipboard)
}
