//! Unified error type definition

use thiserror::Error;

/// Core layer error type
///
/// The preferences core is a pure in-memory state machine, so this taxonomy
/// is deliberately small: invalid address input is a presentational signal
/// rather than an error, and stale row addresses resolve to `None` on the
/// query surface. Only index-taking mutations can fail.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PrefsError {
    /// Entry index past the end of the custom DNS list
    #[error("DNS entry index out of range: {index} (len: {len})")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Core layer Result type alias
pub type PrefsResult<T> = std::result::Result<T, PrefsError>;
