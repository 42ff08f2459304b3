use std::fmt;

use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Pending,
    Succeeded,
    Failed,
}

/// The result of the most recent successful submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortLink {
    pub url: String,
    pub code: String,
    pub original_url: String,
    pub created_at: DateTime<Utc>,
}

impl fmt::Display for ShortLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}

#[derive(Debug, Default)]
pub(crate) struct FormState {
    pub input: String,
    pub status: SubmissionState,
    pub short_link: Option<ShortLink>,
}
