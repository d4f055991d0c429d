use thiserror::Error;

/// Validation failures surfaced to the user via the notification center.
///
/// Not-found conditions are deliberately absent: mutations against an id
/// that is no longer present are silent no-ops, since stale references are
/// expected in a single-writer UI.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("{0} must not be empty")]
    EmptyContent(&'static str),
}
