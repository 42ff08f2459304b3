use std::{
    cell::{Cell, RefCell},
    collections::VecDeque,
    rc::Rc,
};

use reqwest::StatusCode;
use tokio::sync::Notify;

use crate::{
    client::ShortenService,
    clipboard::Clipboard,
    error::{ClipboardError, TransportError},
};

pub(crate) enum Reply {
    Code(&'static str),
    Status(StatusCode),
    Malformed,
    Hang,
}

/// Scripted service. Replies are consumed in order; when `gate` is set each
/// call waits for a `notify_one` before answering.
#[derive(Default)]
pub(crate) struct FakeService {
    replies: RefCell<VecDeque<Reply>>,
    calls: RefCell<Vec<String>>,
    gate: Option<Rc<Notify>>,
}

impl FakeService {
    pub fn replying(replies: impl IntoIterator<Item = Reply>) -> Self {
        Self {
            replies: RefCell::new(replies.into_iter().collect()),
            ..Self::default()
        }
    }

    pub fn gated(mut self, gate: Rc<Notify>) -> Self {
        self.gate = Some(gate);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

impl ShortenService for FakeService {
    async fn shorten(&self, original_url: &str) -> Result<String, TransportError> {
        self.calls.borrow_mut().push(original_url.to_string());
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        let reply = self.replies.borrow_mut().pop_front();
        match reply {
            Some(Reply::Code(code)) => Ok(code.to_string()),
            Some(Reply::Status(status)) => Err(TransportError::Status(status)),
            Some(Reply::Malformed) | None => Err(TransportError::MalformedResponse(
                "missing field `shortUrl`".to_string(),
            )),
            Some(Reply::Hang) => std::future::pending().await,
        }
    }
}

#[derive(Default)]
pub(crate) struct FakeClipboard {
    written: RefCell<Vec<String>>,
    broken: Cell<bool>,
}

impl FakeClipboard {
    pub fn broken() -> Self {
        let clipboard = Self::default();
        clipboard.broken.set(true);
        clipboard
    }

    pub fn written(&self) -> Vec<String> {
        self.written.borrow().clone()
    }
}

impl Clipboard for FakeClipboard {
    fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        if self.broken.get() {
            return Err(ClipboardError::Unavailable("no display".to_string()));
        }
        self.written.borrow_mut().push(text.to_string());
        Ok(())
    }
}
