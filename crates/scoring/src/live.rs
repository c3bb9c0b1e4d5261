use std::sync::Arc;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::models::Snapshot;
use crate::services::{Standings, compute_leaderboard};

/// Standings together with the snapshot version they were computed from.
#[derive(Debug, Clone, PartialEq)]
pub struct ComputedStandings {
    pub version: u64,
    pub standings: Standings,
}

impl ComputedStandings {
    pub fn from_snapshot(snapshot: &Snapshot) -> Self {
        Self {
            version: snapshot.version,
            standings: compute_leaderboard(&snapshot.teams, &snapshot.results),
        }
    }
}

/// Keeps standings current by recomputing them on every snapshot update.
///
/// Snapshots published while a recompute runs are coalesced: only the
/// latest one is ranked next.
pub struct LiveStandings {
    standings: watch::Receiver<Arc<ComputedStandings>>,
    task: JoinHandle<()>,
}

impl LiveStandings {
    /// Must be called from within a tokio runtime.
    pub fn spawn(mut updates: watch::Receiver<Arc<Snapshot>>) -> Self {
        let initial = ComputedStandings::from_snapshot(&updates.borrow_and_update());
        let (sender, standings) = watch::channel(Arc::new(initial));

        let task = tokio::spawn(async move {
            while updates.changed().await.is_ok() {
                let snapshot = updates.borrow_and_update().clone();
                let computed = ComputedStandings::from_snapshot(&snapshot);
                debug!(version = computed.version, "standings recomputed");

                if sender.send(Arc::new(computed)).is_err() {
                    break;
                }
            }
            info!("standings updates closed");
        });

        Self { standings, task }
    }

    pub fn current(&self) -> Arc<ComputedStandings> {
        self.standings.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<Arc<ComputedStandings>> {
        self.standings.clone()
    }

    /// Waits until standings for at least `version` are available.
    pub async fn wait_for_version(&self, version: u64) -> Option<Arc<ComputedStandings>> {
        let mut receiver = self.subscribe();
        receiver
            .wait_for(|computed| computed.version >= version)
            .await
            .ok()
            .map(|computed| computed.clone())
    }
}

impl Drop for LiveStandings {
    fn drop(&mut self) {
        self.task.abort();
    }
}
