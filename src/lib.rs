pub mod api;
pub mod client;
pub mod clipboard;
pub mod config;
pub mod error;
pub mod form;
pub mod logging;
pub mod session;
pub mod state;
pub mod types;
pub mod utils;

pub use client::{HttpShortener, ShortenService};
pub use clipboard::{Clipboard, SystemClipboard};
pub use error::{ClipboardError, InvalidReason, SubmitError, TransportError};
pub use form::{Notice, ShortLink, ShortenForm, SubmissionState};
pub use utils::validate;
