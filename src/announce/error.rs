//! Announcer errors

use std::io;
use thiserror::Error;

/// Errors from announcer operations
#[derive(Debug, Error)]
pub enum AnnounceError {
    /// The notification service is not running (connection refused, binary missing).
    /// Callers are expected to ignore or log this one.
    #[error("{detail}")]
    Unavailable {
        service: &'static str,
        detail: String,
        #[source]
        source: io::Error,
    },

    /// A configured host name could not be resolved.
    ///
    /// Kept apart from `Transport` so a misspelled `snarl_host` is reported as
    /// such. The default loopback target is a literal address and never
    /// resolves, so it cannot produce this error.
    #[error("could not resolve host '{host}'")]
    HostResolution {
        host: String,
        #[source]
        source: io::Error,
    },

    /// Any other I/O failure while connecting, writing or closing.
    ///
    /// When the write fails and closing the connection fails as well, the close
    /// error is reported and the write error is kept in `suppressed`.
    #[error("transport failure: {source}")]
    Transport {
        #[source]
        source: io::Error,
        suppressed: Option<io::Error>,
    },

    /// A command-line notifier ran but exited unsuccessfully
    #[error("{command} exited with {status}: {stderr}")]
    CommandFailed {
        command: String,
        status: String,
        stderr: String,
    },

    /// Announcer type string did not name a known announcer
    #[error("unknown announcer type '{0}'")]
    UnknownType(String),
}

impl AnnounceError {
    pub fn transport(source: io::Error) -> Self {
        Self::Transport { source, suppressed: None }
    }

    /// Whether this is the expected "service not running" failure
    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::Unavailable { .. })
    }

    /// Earlier error masked by a failure during cleanup, if any
    pub fn suppressed(&self) -> Option<&io::Error> {
        match self {
            Self::Transport { suppressed, .. } => suppressed.as_ref(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unavailable_message() {
        let err = AnnounceError::Unavailable {
            service: "Snarl",
            detail: "Snarl is not running on host 127.0.0.1.".to_string(),
            source: io::Error::from(io::ErrorKind::ConnectionRefused),
        };
        assert_eq!(err.to_string(), "Snarl is not running on host 127.0.0.1.");
        assert!(err.is_unavailable());
    }

    #[test]
    fn test_transport_keeps_suppressed_error() {
        let err = AnnounceError::Transport {
            source: io::Error::new(io::ErrorKind::Other, "close failed"),
            suppressed: Some(io::Error::new(io::ErrorKind::BrokenPipe, "write failed")),
        };
        assert!(!err.is_unavailable());
        assert_eq!(err.suppressed().map(|e| e.kind()), Some(io::ErrorKind::BrokenPipe));
        assert_eq!(err.to_string(), "transport failure: close failed");
    }

    #[test]
    fn test_plain_transport_has_no_suppressed() {
        let err = AnnounceError::transport(io::Error::from(io::ErrorKind::TimedOut));
        assert!(err.suppressed().is_none());
    }
}
