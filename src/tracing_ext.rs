//! Tracing integration for error-or.
//!
//! Emits structured `tracing` events for the errors an [`ErrorOr`] carries
//! and captures the active span as error metadata.
//!
//! # Feature Flag
//!
//! Requires the `tracing` feature:
//!
//! ```toml
//! [dependencies]
//! error-or = { version = "0.1", features = ["tracing"] }
//! ```

use tracing::{Level, Span};

use crate::error_or::ErrorOr;
use crate::types::{Error, ErrorKind, Metadata};

/// Level at which an error of `kind` is reported.
///
/// Faults on our side are errors, rejected requests are warnings, and
/// ordinary input problems stay at debug.
pub fn level_for(kind: ErrorKind) -> Level {
    match kind.normalized() {
        ErrorKind::Failure | ErrorKind::Unexpected => Level::ERROR,
        ErrorKind::Conflict | ErrorKind::Unauthorized | ErrorKind::Forbidden => Level::WARN,
        ErrorKind::Validation | ErrorKind::NotFound => Level::DEBUG,
        ErrorKind::Custom(_) => Level::INFO,
    }
}

/// Emits one event for `error` at the level chosen by [`level_for`].
pub fn trace_error(error: &Error) {
    let kind = error.kind();
    let code = error.code();
    let description = error.description();
    let has_metadata = error.metadata().is_some();

    let level = level_for(kind);
    if level == Level::ERROR {
        tracing::error!(%kind, code, description, has_metadata, "operation failed");
    } else if level == Level::WARN {
        tracing::warn!(%kind, code, description, has_metadata, "operation failed");
    } else if level == Level::INFO {
        tracing::info!(%kind, code, description, has_metadata, "operation failed");
    } else {
        tracing::debug!(%kind, code, description, has_metadata, "operation failed");
    }
}

/// Extension trait that connects [`ErrorOr`] to `tracing`.
///
/// # Example
///
/// ```rust
/// use error_or::tracing_ext::ErrorOrTraceExt;
/// use error_or::{Error, ErrorOr};
///
/// let result = ErrorOr::<u32>::from_error(Error::unexpected("Db.Down", "database unavailable"))
///     .trace_errors()
///     .with_span_metadata();
///
/// assert!(result.first_error().metadata().is_some());
/// ```
pub trait ErrorOrTraceExt: Sized {
    /// Emits one event per error and returns `self` unchanged.
    fn trace_errors(self) -> Self;

    /// Overwrites the metadata of every propagated error with the current
    /// span's name under the `span` key.
    fn with_span_metadata(self) -> Self {
        self.with_span(&Span::current())
    }

    /// Like [`ErrorOrTraceExt::with_span_metadata`] for a specific span.
    fn with_span(self, span: &Span) -> Self;
}

impl<T> ErrorOrTraceExt for ErrorOr<T> {
    fn trace_errors(self) -> Self {
        for error in self.errors_or_empty() {
            trace_error(error);
        }
        self
    }

    fn with_span(self, span: &Span) -> Self {
        if self.is_value() {
            return self;
        }
        self.with_error_metadata(span_metadata(span))
    }
}

/// Converts a tracing span into metadata.
///
/// A span without metadata, such as [`Span::none`], reports its name as
/// `unknown`. Spans created by the span macros keep their name even when no
/// subscriber is installed.
fn span_metadata(span: &Span) -> Metadata {
    let name = span.metadata().map(|m| m.name()).unwrap_or("unknown");
    Metadata::new().with("span", name)
}
