//! Application state management.

use std::time::{Duration, Instant};

use crate::api::types::PairingStatus;
use crate::qr::{self, QrImage, QrOptions};

/// Which of the three mutually exclusive views is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// Initial state, before the first poll resolves.
    #[default]
    Loading,
    /// Pairing details and QR code.
    Pairing,
    /// Status service unreachable.
    Error,
}

/// Main application model, shared between the poller and the UI loop.
pub struct App {
    /// Active view. The renderer dispatches on this single value, so
    /// exactly one view section is ever visible.
    pub view: View,
    /// Latest status record; fully replaced on every successful poll.
    pub status: Option<PairingStatus>,
    /// QR image for the download link; regenerated with the record, so at
    /// most one image exists at a time.
    pub qr: Option<QrImage>,
    /// Endpoint being polled, for display.
    pub endpoint: String,
    /// Enter the error view on any failed poll, not only the first.
    pub error_on_poll_failure: bool,
    /// When the last successful poll was applied.
    pub last_refresh: Option<Instant>,
    /// Whether the app should quit.
    pub should_quit: bool,
    first_poll_done: bool,
    qr_options: QrOptions,
}

impl App {
    /// Create a new application instance.
    pub fn new(endpoint: impl Into<String>, error_on_poll_failure: bool) -> Self {
        Self {
            view: View::Loading,
            status: None,
            qr: None,
            endpoint: endpoint.into(),
            error_on_poll_failure,
            last_refresh: None,
            should_quit: false,
            first_poll_done: false,
            qr_options: QrOptions::default(),
        }
    }

    /// Apply the outcome of one poll.
    ///
    /// A successful poll always switches to the pairing view and replaces
    /// the displayed record and QR image in full. A failed poll enters the
    /// error view only if it is the very first poll (or the error-on-poll-
    /// failure knob is set); later failures leave the last rendered view
    /// untouched.
    pub fn apply_poll(&mut self, outcome: Option<PairingStatus>) {
        match outcome {
            Some(status) => {
                self.qr = None;
                match qr::encode(&status.app_download_url, self.qr_options) {
                    Ok(image) => self.qr = Some(image),
                    Err(e) => tracing::warn!("QR render failed: {}", e),
                }
                self.status = Some(status);
                self.view = View::Pairing;
                self.last_refresh = Some(Instant::now());
            }
            None => {
                if !self.first_poll_done || self.error_on_poll_failure {
                    self.view = View::Error;
                }
            }
        }
        self.first_poll_done = true;
    }

    /// Age of the last successful poll.
    pub fn refresh_age(&self) -> Option<Duration> {
        self.last_refresh.map(|t| t.elapsed())
    }
}
