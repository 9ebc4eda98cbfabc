use thiserror::Error;

/// Failures acquiring a browser signal source. None of these are fatal:
/// callers log them and fall back to a safe default.
#[derive(Debug, Error)]
pub enum TrackError {
    #[error("no window available")]
    NoWindow,

    #[error("no document available")]
    NoDocument,

    #[error("section element is not mounted")]
    NotMounted,

    #[error("intersection observer unavailable: {0}")]
    Observer(String),

    #[error("failed to attach {event} listener: {reason}")]
    Listener { event: &'static str, reason: String },
}
