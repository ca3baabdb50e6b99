//! Error kinds surfaced to the hosting runtime.

use thiserror::Error;

/// Failures produced by the feed operations.
///
/// Every variant propagates to the immediate caller; nothing is retried or
/// swallowed internally. Malformed upstream records are not errors at all:
/// they are defaulted field by field in [`crate::parser`] so one bad record
/// cannot abort a batch.
#[derive(Debug, Error)]
pub enum FeedError {
    /// Required process configuration is absent or unusable. Raised before
    /// any network activity.
    #[error("configuration error: {0}")]
    Config(String),

    /// Input failed the operation's declared contract.
    #[error("validation error: {0}")]
    Validation(String),

    /// The upstream feed could not be reached, timed out, or answered with a
    /// non-success status. Not retried here; the caller decides.
    #[error("upstream error: {0}")]
    Upstream(#[from] reqwest::Error),

    /// Dispatch was asked for a name that is not in the tool table.
    #[error("unknown tool: {0}")]
    UnknownTool(String),
}
