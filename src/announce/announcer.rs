//! Announcer trait and the wrappers every created announcer goes through

use super::error::AnnounceError;
use serde::Serialize;
use tracing::{debug, warn};

/// Outcome of one announcement on one announcer
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", content = "reason", rename_all = "snake_case")]
pub enum SendResult {
    /// Delivered (fire-and-forget, no acknowledgment)
    Sent,
    /// Not attempted
    Skipped(String),
    /// Attempted and failed
    Failed(String),
}

/// A notification delivery strategy
pub trait Announcer: Send + Sync {
    /// Announcer name (logs, CLI output)
    fn name(&self) -> &str;

    /// Deliver a notification synchronously
    fn send(&self, title: &str, message: &str) -> Result<(), AnnounceError>;
}

impl<A: Announcer + ?Sized> Announcer for Box<A> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn send(&self, title: &str, message: &str) -> Result<(), AnnounceError> {
        (**self).send(title, message)
    }
}

/// Swallows `AnnounceError::Unavailable` from the wrapped announcer.
///
/// A daemon that isn't running shouldn't fail the build; everything else still propagates.
pub struct IgnoreUnavailable<A> {
    inner: A,
}

impl<A: Announcer> IgnoreUnavailable<A> {
    pub fn new(inner: A) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &A {
        &self.inner
    }
}

impl<A: Announcer> Announcer for IgnoreUnavailable<A> {
    fn name(&self) -> &str {
        self.inner.name()
    }

    fn send(&self, title: &str, message: &str) -> Result<(), AnnounceError> {
        match self.inner.send(title, message) {
            Err(e) if e.is_unavailable() => {
                warn!(announcer = self.inner.name(), error = %e, "Announcer unavailable, skipping");
                Ok(())
            }
            other => other,
        }
    }
}

/// Fallback for announcer types nobody recognizes. Sends nothing.
pub struct UnknownAnnouncer {
    requested: String,
}

impl UnknownAnnouncer {
    pub fn new(requested: impl Into<String>) -> Self {
        Self { requested: requested.into() }
    }

    pub fn requested(&self) -> &str {
        &self.requested
    }
}

impl Announcer for UnknownAnnouncer {
    fn name(&self) -> &str {
        "unknown"
    }

    fn send(&self, title: &str, _message: &str) -> Result<(), AnnounceError> {
        warn!(requested = %self.requested, "Unknown announcer type, notification dropped");
        debug!(title, "Dropped notification");
        Ok(())
    }
}
