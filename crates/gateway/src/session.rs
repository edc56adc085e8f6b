//! Believed session validity.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// The client's belief about the ambient cookie session.
///
/// There is no session object on the client; validity is inferred only
/// from response codes. The handle starts optimistic, is falsified by an
/// observed 401/403, and is confirmed again by a successful probe.
/// Clones share the same belief.
#[derive(Debug, Clone)]
pub struct SessionHandle {
    valid: Arc<AtomicBool>,
}

impl SessionHandle {
    pub fn new() -> Self {
        Self {
            valid: Arc::new(AtomicBool::new(true)),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.valid.load(Ordering::SeqCst)
    }

    pub fn invalidate(&self) {
        self.valid.store(false, Ordering::SeqCst);
    }

    pub fn confirm(&self) {
        self.valid.store(true, Ordering::SeqCst);
    }
}

impl Default for SessionHandle {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn belief_transitions() {
        let session = SessionHandle::new();
        assert!(session.is_valid());

        session.invalidate();
        assert!(!session.is_valid());

        session.confirm();
        assert!(session.is_valid());
    }

    #[test]
    fn clones_share_the_belief() {
        let session = SessionHandle::new();
        let clone = session.clone();

        session.invalidate();
        assert!(!clone.is_valid());
    }
}
