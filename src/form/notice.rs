use std::fmt;

use crate::error::{ClipboardError, InvalidReason, SubmitError};

use super::ShortLink;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Success,
    Info,
    Error,
}

/// A transient user-facing message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: Level,
    pub message: &'static str,
}

impl Notice {
    const fn new(level: Level, message: &'static str) -> Self {
        Self { level, message }
    }

    pub fn for_submission(result: &Result<ShortLink, SubmitError>) -> Self {
        match result {
            Ok(_) => Self::new(Level::Success, "Short URL created successfully!"),
            Err(SubmitError::Invalid(InvalidReason::Empty)) => {
                Self::new(Level::Error, "Please enter a URL!")
            }
            Err(SubmitError::Invalid(InvalidReason::MalformedUrl)) => Self::new(
                Level::Error,
                "Please enter a valid URL (for example https://example.com)",
            ),
            Err(SubmitError::Busy) => {
                Self::new(Level::Info, "Already shortening a URL, please wait")
            }
            Err(SubmitError::Failed(_)) => Self::new(Level::Error, "Failed to shorten URL!"),
        }
    }

    pub fn for_copy(result: &Result<bool, ClipboardError>) -> Self {
        match result {
            Ok(true) => Self::new(Level::Info, "Short URL copied!"),
            Ok(false) => Self::new(Level::Info, "Nothing to copy yet"),
            Err(_) => Self::new(Level::Error, "Could not copy the short URL"),
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self.level {
            Level::Success => "ok",
            Level::Info => "info",
            Level::Error => "error",
        };
        write!(f, "[{}] {}", tag, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TransportError;

    #[test]
    fn failures_share_one_generic_message() {
        let timeout = Err(SubmitError::Failed(TransportError::Timeout(
            std::time::Duration::from_secs(1),
        )));
        let malformed = Err(SubmitError::Failed(TransportError::MalformedResponse(
            "missing field `shortUrl`".into(),
        )));
        assert_eq!(Notice::for_submission(&timeout), Notice::for_submission(&malformed));
        assert_eq!(
            Notice::for_submission(&timeout).to_string(),
            "[error] Failed to shorten URL!"
        );
    }

    #[test]
    fn empty_input_asks_for_a_url() {
        let notice = Notice::for_submission(&Err(InvalidReason::Empty.into()));
        assert_eq!(notice.level, Level::Error);
        assert_eq!(notice.message, "Please enter a URL!");
    }

    #[test]
    fn copy_outcomes() {
        assert_eq!(Notice::for_copy(&Ok(true)).to_string(), "[info] Short URL copied!");
        assert_eq!(Notice::for_copy(&Ok(false)).message, "Nothing to copy yet");
        let failed = Notice::for_copy(&Err(ClipboardError::Unavailable("no display".into())));
        assert_eq!(failed.level, Level::Error);
    }
}
