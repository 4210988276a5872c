//! Announce dispatcher - sends one announcement through several announcers

use super::announcer::{Announcer, SendResult};
use std::sync::Arc;
use tracing::{info, warn};

/// Sends each announcement to every registered announcer, in registration order
pub struct AnnounceDispatcher {
    announcers: Vec<Arc<dyn Announcer>>,
    dry_run: bool,
}

impl AnnounceDispatcher {
    pub fn new() -> Self {
        Self {
            announcers: Vec::new(),
            dry_run: false,
        }
    }

    /// In dry-run mode nothing is sent; every announcer reports `Skipped`
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn register(&mut self, announcer: Arc<dyn Announcer>) {
        info!(announcer = announcer.name(), "Registering announcer");
        self.announcers.push(announcer);
    }

    /// Send to all announcers. One announcer failing doesn't stop the others.
    pub fn send(&self, title: &str, message: &str) -> Vec<(String, SendResult)> {
        let mut results = Vec::with_capacity(self.announcers.len());

        for announcer in &self.announcers {
            let name = announcer.name().to_string();

            if self.dry_run {
                info!(announcer = %name, title, "[DRY-RUN] Would announce");
                results.push((name, SendResult::Skipped("dry-run".to_string())));
                continue;
            }

            let result = match announcer.send(title, message) {
                Ok(()) => SendResult::Sent,
                Err(e) => {
                    warn!(announcer = %name, error = %e, "Announcement failed");
                    SendResult::Failed(e.to_string())
                }
            };
            results.push((name, result));
        }

        results
    }

    pub fn announcer_count(&self) -> usize {
        self.announcers.len()
    }

    pub fn announcer_names(&self) -> Vec<&str> {
        self.announcers.iter().map(|a| a.name()).collect()
    }
}

impl Default for AnnounceDispatcher {
    fn default() -> Self {
        Self::new()
    }
}
