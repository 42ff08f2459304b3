use std::{cell::RefCell, time::Duration};

use tracing::info;

use crate::error::ClipboardError;

pub trait Clipboard {
    fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}

/// The platform clipboard. The handle is opened on first use and kept for the
/// lifetime of the value, since on X11 the contents vanish with their owner.
#[derive(Default)]
pub struct SystemClipboard {
    handle: RefCell<Option<arboard::Clipboard>>,
    hold: Option<Duration>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// For processes that exit right after copying: on Linux each write
    /// blocks until another client takes the selection or `hold` elapses.
    pub fn holding_for(hold: Duration) -> Self {
        Self {
            hold: Some(hold),
            ..Self::default()
        }
    }

    pub fn hold(&self) -> Option<Duration> {
        self.hold
    }

    #[cfg(target_os = "linux")]
    fn set(&self, clipboard: &mut arboard::Clipboard, text: &str) -> Result<(), arboard::Error> {
        use arboard::SetExtLinux;

        match self.hold {
            Some(hold) => clipboard
                .set()
                .wait_until(std::time::Instant::now() + hold)
                .text(text),
            None => clipboard.set_text(text),
        }
    }

    #[cfg(not(target_os = "linux"))]
    fn set(&self, clipboard: &mut arboard::Clipboard, text: &str) -> Result<(), arboard::Error> {
        clipboard.set_text(text)
    }
}

impl Clipboard for SystemClipboard {
    fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        let mut handle = self.handle.borrow_mut();
        if handle.is_none() {
            let clipboard =
                arboard::Clipboard::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
            *handle = Some(clipboard);
        }
        if let Some(clipboard) = handle.as_mut() {
            self.set(clipboard, text)
                .map_err(|e| ClipboardError::Write(e.to_string()))?;
        }
        info!(text = %text, "Copied to clipboard");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_clipboard_does_not_block() {
        assert_eq!(SystemClipboard::new().hold(), None);
    }

    #[test]
    fn one_shot_clipboard_keeps_ownership_for_a_while() {
        let clipboard = SystemClipboard::holding_for(Duration::from_secs(30));
        assert_eq!(clipboard.hold(), Some(Duration::from_secs(30)));
    }
}
