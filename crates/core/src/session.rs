//! The file-selection session state machine.
//!
//! A [`Session`] owns the pending file list and the single active phase:
//!
//! `Idle` -> `Loading` (generate) -> `Result` (caption received, files cleared)
//!                                \-> `Error` (request failed, files kept)
//!
//! `Result` and `Error` return to `Idle` on [`Session::reset`] or when new
//! files are selected. The share payload and the error message live inside
//! the phase, so they can never both be present.

use crate::error::{AppError, Result};
use crate::files::SelectedFile;
use crate::gemini::CaptionService;
use crate::share::SharePayload;
use tracing::{error, info, warn};

/// Shown when generation is requested with an empty file list.
pub const NO_FILES_MESSAGE: &str = "Please select at least one file.";

/// Shown for any failed caption request (missing key, network, empty answer).
pub const GENERATION_FAILED_MESSAGE: &str = "Failed to generate message. Please try again.";

/// The message to show a user for a failed [`Session::generate`].
///
/// Validation failures keep their own text; everything else collapses into
/// [`GENERATION_FAILED_MESSAGE`].
pub fn user_message(err: &AppError) -> &str {
    match err {
        AppError::Validation(message) => message,
        _ => GENERATION_FAILED_MESSAGE,
    }
}

/// Phase of a session, without its data.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionPhase {
    Idle,
    Loading,
    Result,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum State {
    Idle,
    Loading,
    Result(SharePayload),
    Error(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    files: Vec<SelectedFile>,
    state: State,
    link_host: String,
}

impl Session {
    /// Creates an empty session whose share links point at `link_host`.
    pub fn new(link_host: impl Into<String>) -> Self {
        Self {
            files: Vec::new(),
            state: State::Idle,
            link_host: link_host.into(),
        }
    }

    pub fn phase(&self) -> SessionPhase {
        match self.state {
            State::Idle => SessionPhase::Idle,
            State::Loading => SessionPhase::Loading,
            State::Result(_) => SessionPhase::Result,
            State::Error(_) => SessionPhase::Error,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, State::Loading)
    }

    pub fn files(&self) -> &[SelectedFile] {
        &self.files
    }

    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    pub fn total_size(&self) -> u64 {
        self.files.iter().map(|f| f.byte_size).sum()
    }

    pub fn payload(&self) -> Option<&SharePayload> {
        match &self.state {
            State::Result(payload) => Some(payload),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.state {
            State::Error(message) => Some(message),
            _ => None,
        }
    }

    /// Appends a batch of files and clears any previous result or error.
    ///
    /// # Errors
    ///
    /// Returns a validation error while a generation is in flight; the list
    /// is left untouched.
    pub fn select_files<I>(&mut self, batch: I) -> Result<()>
    where
        I: IntoIterator<Item = SelectedFile>,
    {
        if self.is_loading() {
            return Err(AppError::validation("cannot add files while generating"));
        }

        let before = self.files.len();
        self.files.extend(batch);
        self.state = State::Idle;
        info!(added = self.files.len() - before, total = self.files.len(), "files selected");
        Ok(())
    }

    /// Removes the file at `index`. Out-of-range indices are a no-op.
    ///
    /// # Errors
    ///
    /// Returns a validation error while a generation is in flight.
    pub fn remove_file(&mut self, index: usize) -> Result<Option<SelectedFile>> {
        if self.is_loading() {
            return Err(AppError::validation("cannot remove files while generating"));
        }
        if index >= self.files.len() {
            return Ok(None);
        }
        Ok(Some(self.files.remove(index)))
    }

    /// Validates the file list and moves to `Loading`.
    ///
    /// Returns the file names to caption, in list order. With an empty list
    /// the session moves to `Error` with [`NO_FILES_MESSAGE`] instead, and no
    /// request should be made.
    pub fn begin_generate(&mut self) -> Result<Vec<String>> {
        if self.is_loading() {
            return Err(AppError::validation("a generation is already in progress"));
        }
        if self.files.is_empty() {
            self.state = State::Error(NO_FILES_MESSAGE.to_string());
            return Err(AppError::validation(NO_FILES_MESSAGE));
        }

        self.state = State::Loading;
        info!(files = self.files.len(), "generating share caption");
        Ok(self.files.iter().map(|f| f.name.clone()).collect())
    }

    /// Applies the outcome of a caption request started by [`begin_generate`].
    ///
    /// On success the payload gets a new link and the file list is cleared.
    /// On failure the cause is logged, the session shows
    /// [`GENERATION_FAILED_MESSAGE`], and the original error is handed back.
    ///
    /// [`begin_generate`]: Session::begin_generate
    pub fn finish_generate(&mut self, outcome: Result<String>) -> Result<SharePayload> {
        if !self.is_loading() {
            warn!(phase = ?self.phase(), "ignoring caption outcome outside of loading");
            return Err(AppError::validation("no generation in progress"));
        }

        match outcome {
            Ok(message) => {
                let payload = SharePayload::new(message, &self.link_host);
                self.files.clear();
                self.state = State::Result(payload.clone());
                info!(link = %payload.link, "share payload ready");
                Ok(payload)
            }
            Err(e) => {
                error!("caption generation failed: {}", e);
                self.state = State::Error(GENERATION_FAILED_MESSAGE.to_string());
                Err(e)
            }
        }
    }

    /// Runs a full generation against `service`.
    ///
    /// The service is not called when the file list is empty.
    pub async fn generate<S>(&mut self, service: &S) -> Result<SharePayload>
    where
        S: CaptionService + ?Sized,
    {
        let file_names = self.begin_generate()?;
        let outcome = service.generate_caption(&file_names).await;
        self.finish_generate(outcome)
    }

    /// Clears files, payload and error and returns to `Idle`.
    ///
    /// Returns false (and changes nothing) while a generation is in flight.
    pub fn reset(&mut self) -> bool {
        if self.is_loading() {
            return false;
        }
        self.files.clear();
        self.state = State::Idle;
        true
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_LINK_HOST)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(name: &str, size: u64) -> SelectedFile {
        SelectedFile::new(name, size, "application/octet-stream")
    }

    #[test]
    fn starts_idle_and_empty() {
        let session = Session::default();
        assert_eq!(session.phase(), SessionPhase::Idle);
        assert!(session.files().is_empty());
        assert!(session.payload().is_none());
        assert!(session.error_message().is_none());
    }

    #[test]
    fn totals_follow_the_list() {
        let mut session = Session::default();
        session
            .select_files(vec![file("a.jpg", 100), file("b.mov", 412)])
            .unwrap();
        assert_eq!(session.file_count(), 2);
        assert_eq!(session.total_size(), 512);
    }

    #[test]
    fn list_is_frozen_while_loading() {
        let mut session = Session::default();
        session.select_files(vec![file("a.jpg", 1)]).unwrap();
        session.begin_generate().unwrap();

        assert!(session.select_files(vec![file("b.jpg", 1)]).is_err());
        assert!(session.remove_file(0).is_err());
        assert!(!session.reset());
        assert!(session.begin_generate().is_err());
        assert_eq!(session.files(), &[file("a.jpg", 1)]);
        assert_eq!(session.phase(), SessionPhase::Loading);
    }

    #[test]
    fn remove_out_of_range_is_noop() {
        let mut session = Session::default();
        session.select_files(vec![file("a.jpg", 1)]).unwrap();
        assert_eq!(session.remove_file(3).unwrap(), None);
        assert_eq!(session.file_count(), 1);
    }

    #[test]
    fn remove_keeps_order_of_remaining() {
        let mut session = Session::default();
        session
            .select_files(vec![file("a", 1), file("b", 2), file("c", 3)])
            .unwrap();
        assert_eq!(session.remove_file(1).unwrap(), Some(file("b", 2)));
        let names: Vec<_> = session.files().iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["a", "c"]);
    }

    #[test]
    fn selecting_clears_previous_error() {
        let mut session = Session::default();
        assert!(session.begin_generate().is_err());
        assert_eq!(session.error_message(), Some(NO_FILES_MESSAGE));

        session.select_files(vec![file("a.jpg", 1)]).unwrap();
        assert_eq!(session.phase(), SessionPhase::Idle);
        assert!(session.error_message().is_none());
    }

    #[test]
    fn selecting_clears_previous_result() {
        let mut session = Session::default();
        session.select_files(vec![file("a.jpg", 1)]).unwrap();
        session.begin_generate().unwrap();
        session.finish_generate(Ok("hi".to_string())).unwrap();
        assert!(session.payload().is_some());

        session.select_files(vec![file("b.jpg", 1)]).unwrap();
        assert!(session.payload().is_none());
        assert_eq!(session.phase(), SessionPhase::Idle);
    }

    #[test]
    fn failure_passes_cause_back_and_keeps_files() {
        let mut session = Session::default();
        session.select_files(vec![file("a.jpg", 1)]).unwrap();
        session.begin_generate().unwrap();

        let err = session
            .finish_generate(Err(AppError::generation("boom")))
            .unwrap_err();
        assert!(err.is_generation());
        assert_eq!(session.error_message(), Some(GENERATION_FAILED_MESSAGE));
        assert_eq!(session.file_count(), 1);
    }

    #[test]
    fn stale_outcome_is_ignored() {
        let mut session = Session::default();
        assert!(session.finish_generate(Ok("late".to_string())).is_err());
        assert_eq!(session.phase(), SessionPhase::Idle);
        assert!(session.payload().is_none());
    }

    #[test]
    fn user_message_hides_failure_details() {
        let mut session = Session::default();
        let err = session.begin_generate().unwrap_err();
        assert_eq!(user_message(&err), NO_FILES_MESSAGE);

        let err = AppError::config("GEMINI_API_KEY must be set");
        assert_eq!(user_message(&err), GENERATION_FAILED_MESSAGE);
        assert_eq!(user_message(&AppError::EmptyResponse), GENERATION_FAILED_MESSAGE);
    }

    #[test]
    fn payload_link_uses_session_host() {
        let mut session = Session::new("share.example");
        session.select_files(vec![file("a.jpg", 1)]).unwrap();
        session.begin_generate().unwrap();
        let payload = session.finish_generate(Ok("hi".to_string())).unwrap();
        assert!(payload.link.starts_with("https://share.example/d/"));
    }
}
