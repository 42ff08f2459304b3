//! The link-shortening workflow: candidate input, a single-flight submission
//! and the resulting short link.
//!
//! All state lives in a `RefCell` owned by the form and is only touched from
//! the task that drives it. No borrow is held across an await point, so a
//! second `submit` issued while the first is in flight observes `Pending` and
//! is refused with [`SubmitError::Busy`].

mod notice;
mod state;

#[cfg(test)]
pub(crate) mod fakes;

use std::{cell::RefCell, time::Duration};

use chrono::Utc;
use tracing::{info, instrument, warn};
use url::Url;

pub use notice::{Level, Notice};
pub use state::{ShortLink, SubmissionState};

use crate::{
    client::ShortenService,
    clipboard::Clipboard,
    config::DEFAULT_REQUEST_TIMEOUT,
    error::{ClipboardError, SubmitError, TransportError},
    utils::{join_short_link, validate},
};

use state::FormState;

pub struct ShortenForm<S, C> {
    base_url: String,
    timeout: Duration,
    service: S,
    clipboard: C,
    state: RefCell<FormState>,
}

impl<S: ShortenService, C: Clipboard> ShortenForm<S, C> {
    pub fn new(base_url: impl Into<String>, service: S, clipboard: C) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout: DEFAULT_REQUEST_TIMEOUT,
            service,
            clipboard,
            state: RefCell::new(FormState::default()),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    pub fn clipboard(&self) -> &C {
        &self.clipboard
    }

    pub fn input(&self) -> String {
        self.state.borrow().input.clone()
    }

    pub fn set_input(&self, input: impl Into<String>) {
        self.state.borrow_mut().input = input.into();
    }

    pub fn state(&self) -> SubmissionState {
        self.state.borrow().status
    }

    pub fn short_link(&self) -> Option<ShortLink> {
        self.state.borrow().short_link.clone()
    }

    /// Whether the copy action should be offered at all.
    pub fn can_copy(&self) -> bool {
        self.state.borrow().short_link.is_some()
    }

    /// Submits the current candidate input.
    pub async fn submit_input(&self) -> Result<ShortLink, SubmitError> {
        let candidate = self.input();
        self.submit(&candidate).await
    }

    #[instrument(skip(self), fields(base_url = %self.base_url))]
    pub async fn submit(&self, candidate: &str) -> Result<ShortLink, SubmitError> {
        {
            let mut state = self.state.borrow_mut();
            if state.status == SubmissionState::Pending {
                warn!("Submission already in flight, refusing");
                return Err(SubmitError::Busy);
            }
            if let Err(reason) = validate(candidate) {
                warn!(%reason, "Rejected candidate");
                return Err(reason.into());
            }
            state.status = SubmissionState::Pending;
            state.short_link = None;
        }

        let pending = PendingGuard {
            state: &self.state,
            settled: false,
        };
        let original_url = candidate.trim();
        let outcome = match tokio::time::timeout(self.timeout, self.service.shorten(original_url))
            .await
        {
            Ok(reply) => reply.and_then(|returned| self.compose(original_url, &returned)),
            Err(_) => Err(TransportError::Timeout(self.timeout)),
        };
        pending.settle(outcome)
    }

    fn compose(&self, original_url: &str, returned: &str) -> Result<ShortLink, TransportError> {
        let returned = returned.trim();
        if returned.trim_matches('/').is_empty() {
            return Err(TransportError::MalformedResponse(
                "empty short code".to_string(),
            ));
        }

        if Url::parse(returned).is_ok_and(|link| link.has_host()) {
            return Err(TransportError::MalformedResponse(format!(
                "expected a short code, got {returned}"
            )));
        }
        let code = returned.trim_start_matches('/').to_string();

        Ok(ShortLink {
            url: join_short_link(&self.base_url, &code),
            code,
            original_url: original_url.to_string(),
            created_at: Utc::now(),
        })
    }

    /// Writes the current short link to the clipboard. `Ok(false)` when there
    /// is nothing to copy yet.
    pub fn copy_to_clipboard(&self) -> Result<bool, ClipboardError> {
        let Some(link) = self.short_link() else {
            return Ok(false);
        };
        self.clipboard.write_text(&link.url).map_err(|e| {
            warn!(error = %e, "Clipboard write failed");
            e
        })?;
        Ok(true)
    }
}

/// Settles the form as `Failed` if the submission future is dropped while
/// still pending.
struct PendingGuard<'a> {
    state: &'a RefCell<FormState>,
    settled: bool,
}

impl PendingGuard<'_> {
    fn settle(
        mut self,
        outcome: Result<ShortLink, TransportError>,
    ) -> Result<ShortLink, SubmitError> {
        self.settled = true;
        let mut state = self.state.borrow_mut();
        match outcome {
            Ok(link) => {
                info!(short_url = %link.url, original_url = %link.original_url, "Created short URL");
                state.status = SubmissionState::Succeeded;
                state.short_link = Some(link.clone());
                Ok(link)
            }
            Err(e) => {
                warn!(error = %e, "Shortening failed");
                state.status = SubmissionState::Failed;
                Err(SubmitError::Failed(e))
            }
        }
    }
}

impl Drop for PendingGuard<'_> {
    fn drop(&mut self) {
        if self.settled {
            return;
        }
        let mut state = self.state.borrow_mut();
        if state.status == SubmissionState::Pending {
            warn!("Submission dropped before settling");
            state.status = SubmissionState::Failed;
        }
    }
}
