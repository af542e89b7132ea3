//! Actions passed from the drawing helpers back to the window.

use std::path::PathBuf;

/// A user request raised while rendering a frame.
///
/// Render helpers only read the session; the window applies the action once
/// drawing is done.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ShareAction {
    None,
    AddPath(String),
    /// Open the native file picker.
    Browse,
    /// Add several files as one batch.
    AddPaths(Vec<PathBuf>),
    RemoveFile(usize),
    Generate,
    Copy,
    Reset,
}

impl ShareAction {
    /// Keeps the first non-empty action of a frame.
    pub fn or(self, other: ShareAction) -> ShareAction {
        match self {
            ShareAction::None => other,
            action => action,
        }
    }
}
