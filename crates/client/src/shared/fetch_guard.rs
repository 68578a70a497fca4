//! Drops stale list responses. Each fetch takes a ticket before dispatch,
//! and only the newest ticket may apply its response to screen state.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Shared fetch epoch of one screen. Clones hand the same epoch to
/// spawned tasks; `Default` starts a fresh one.
#[derive(Debug, Clone, Default)]
pub struct FetchGuard {
    epoch: Arc<AtomicU64>,
}

impl FetchGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new in-flight request, invalidating every earlier
    /// ticket.
    pub fn issue(&self) -> FetchTicket {
        let issued = self.epoch.fetch_add(1, Ordering::SeqCst) + 1;
        FetchTicket {
            epoch: Arc::clone(&self.epoch),
            issued,
        }
    }

    /// Invalidates every outstanding ticket without issuing a new one.
    /// Called on screen teardown so late responses never touch state.
    pub fn retire(&self) {
        self.epoch.fetch_add(1, Ordering::SeqCst);
    }
}

/// Proof of being the newest request at issue time. Check
/// [`FetchTicket::is_current`] before applying a response; a stale ticket
/// means the response is silently discarded, not an error.
#[derive(Debug, Clone)]
pub struct FetchTicket {
    epoch: Arc<AtomicU64>,
    issued: u64,
}

impl FetchTicket {
    pub fn is_current(&self) -> bool {
        self.epoch.load(Ordering::SeqCst) == self.issued
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_newest_ticket_wins() {
        let guard = FetchGuard::new();
        let first = guard.issue();
        assert!(first.is_current());

        let second = guard.issue();
        assert!(!first.is_current());
        assert!(second.is_current());
    }

    #[test]
    fn test_retire_invalidates_everything() {
        let guard = FetchGuard::new();
        let ticket = guard.issue();
        guard.retire();
        assert!(!ticket.is_current());
    }

    #[test]
    fn test_cloned_guard_shares_the_epoch() {
        let guard = FetchGuard::new();
        let ticket = guard.issue();
        guard.clone().issue();
        assert!(!ticket.is_current());
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_slow_response_loses_the_race() {
        use std::sync::Mutex;
        use tokio::time::{sleep, Duration};

        let guard = FetchGuard::new();
        let applied: Arc<Mutex<Vec<&str>>> = Arc::new(Mutex::new(Vec::new()));

        // The second request supersedes the first while it is in flight.
        let slow_ticket = guard.issue();
        let fast_ticket = guard.issue();

        let slow = {
            let applied = Arc::clone(&applied);
            tokio::spawn(async move {
                sleep(Duration::from_millis(40)).await;
                if slow_ticket.is_current() {
                    applied.lock().unwrap().push("slow");
                }
            })
        };
        let fast = {
            let applied = Arc::clone(&applied);
            tokio::spawn(async move {
                sleep(Duration::from_millis(5)).await;
                if fast_ticket.is_current() {
                    applied.lock().unwrap().push("fast");
                }
            })
        };

        slow.await.unwrap();
        fast.await.unwrap();
        assert_eq!(*applied.lock().unwrap(), vec!["fast"]);
    }
}
