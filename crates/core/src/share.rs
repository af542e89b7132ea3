//! Share payloads, cosmetic share links and the copy confirmation timer.

use rand::Rng;
use serde::Serialize;
use std::time::{Duration, Instant};

/// Length of the random token at the end of a share link.
pub const TOKEN_LENGTH: usize = 8;

/// How long the "Copied to clipboard!" banner stays up.
pub const COPY_CONFIRMATION_WINDOW: Duration = Duration::from_secs(3);

const TOKEN_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// The caption and link shown after a successful generation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SharePayload {
    pub message: String,
    pub link: String,
}

impl SharePayload {
    /// Creates a payload with a freshly synthesized link on `host`.
    pub fn new(message: impl Into<String>, host: &str) -> Self {
        Self {
            message: message.into(),
            link: synthesize_link(host),
        }
    }

    /// Text written to the clipboard: message, blank line, link.
    pub fn clipboard_text(&self) -> String {
        format!("{}\n\n{}", self.message, self.link)
    }
}

/// Builds `https://<host>/d/<token>`.
///
/// The token is random lowercase base36 with no uniqueness check; the link
/// does not point at anything.
pub fn synthesize_link(host: &str) -> String {
    let mut rng = rand::rng();
    let token: String = (0..TOKEN_LENGTH)
        .map(|_| TOKEN_ALPHABET[rng.random_range(0..TOKEN_ALPHABET.len())] as char)
        .collect();
    format!("https://{}/d/{}", host, token)
}

/// Transient copy confirmation. Triggering again restarts the window.
#[derive(Debug, Default, Clone, Copy)]
pub struct CopyConfirmation {
    shown_at: Option<Instant>,
}

impl CopyConfirmation {
    pub fn trigger(&mut self, now: Instant) {
        self.shown_at = Some(now);
    }

    pub fn is_visible(&self, now: Instant) -> bool {
        self.remaining(now).is_some()
    }

    /// Time left before the banner hides, or `None` once it has expired.
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        let shown_at = self.shown_at?;
        let elapsed = now.saturating_duration_since(shown_at);
        COPY_CONFIRMATION_WINDOW
            .checked_sub(elapsed)
            .filter(|left| !left.is_zero())
    }

    /// Drops an expired confirmation. Returns true if it was visible before.
    pub fn expire(&mut self, now: Instant) -> bool {
        if self.shown_at.is_some() && !self.is_visible(now) {
            self.shown_at = None;
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_link_shape(link: &str, host: &str) {
        let prefix = format!("https://{}/d/", host);
        let token = link.strip_prefix(&prefix).expect("link prefix");
        assert_eq!(token.len(), TOKEN_LENGTH);
        assert!(
            token
                .chars()
                .all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()),
            "unexpected token {token}"
        );
    }

    #[test]
    fn links_have_expected_shape() {
        for _ in 0..50 {
            assert_link_shape(&synthesize_link("qshare.ai"), "qshare.ai");
        }
        assert_link_shape(&synthesize_link("share.example"), "share.example");
    }

    #[test]
    fn clipboard_text_separates_with_blank_line() {
        let payload = SharePayload {
            message: "Sharing some memories!".to_string(),
            link: "https://qshare.ai/d/abc12345".to_string(),
        };
        assert_eq!(
            payload.clipboard_text(),
            "Sharing some memories!\n\nhttps://qshare.ai/d/abc12345"
        );
    }

    #[test]
    fn payload_serializes() {
        let payload = SharePayload {
            message: "hi".to_string(),
            link: "https://qshare.ai/d/00000000".to_string(),
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["message"], "hi");
        assert_eq!(json["link"], "https://qshare.ai/d/00000000");
    }

    #[test]
    fn confirmation_lasts_three_seconds() {
        let start = Instant::now();
        let mut confirmation = CopyConfirmation::default();
        assert!(!confirmation.is_visible(start));

        confirmation.trigger(start);
        assert!(confirmation.is_visible(start));
        assert!(confirmation.is_visible(start + Duration::from_millis(2999)));
        assert!(!confirmation.is_visible(start + COPY_CONFIRMATION_WINDOW));
    }

    #[test]
    fn retrigger_restarts_window() {
        let start = Instant::now();
        let mut confirmation = CopyConfirmation::default();
        confirmation.trigger(start);
        confirmation.trigger(start + Duration::from_secs(2));

        assert!(confirmation.is_visible(start + Duration::from_secs(4)));
        assert!(!confirmation.is_visible(start + Duration::from_secs(5)));
    }

    #[test]
    fn expire_clears_once() {
        let start = Instant::now();
        let mut confirmation = CopyConfirmation::default();
        confirmation.trigger(start);

        assert!(!confirmation.expire(start + Duration::from_secs(1)));
        assert!(confirmation.expire(start + Duration::from_secs(3)));
        assert!(!confirmation.expire(start + Duration::from_secs(4)));
    }
}
