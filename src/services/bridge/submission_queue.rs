//! Serializes submissions that sign with the same key.
//!
//! Two transactions from one account racing each other end up with the
//! same nonce or with an out-of-order approve/send pair. Holding a lane for
//! the whole operation keeps them strictly one after another, while
//! operations on different keys still run in parallel.
use std::sync::Arc;

use dashmap::DashMap;
use sha2::{Digest, Sha256};
use tokio::sync::{Mutex, OwnedMutexGuard};

/// Lane used for every call signed by the Sui CLI's active identity.
pub const SUI_ACTIVE_IDENTITY_LANE: &str = "sui:active-identity";

#[derive(Debug, Default)]
pub struct SubmissionQueue {
    lanes: DashMap<String, Arc<Mutex<()>>>,
}

/// Held for the duration of an operation; dropping it opens the lane.
pub type LaneGuard = OwnedMutexGuard<()>;

impl SubmissionQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stable identifier of a key's lane. The key itself is never stored.
    pub fn lane_id(key: &str) -> String {
        let digest = Sha256::digest(key.trim().as_bytes());
        hex::encode(&digest[..8])
    }

    /// Waits until no other operation holds the lane of `key`.
    pub async fn acquire(&self, key: &str) -> LaneGuard {
        let lane = self
            .lanes
            .entry(Self::lane_id(key))
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone();
        lane.lock_owned().await
    }

    pub fn lane_count(&self) -> usize {
        self.lanes.len()
    }
}
