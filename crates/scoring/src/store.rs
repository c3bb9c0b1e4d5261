use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{RwLock, watch};
use tracing::info;
use uuid::Uuid;

use crate::dto::result::{PartialResultRequest, ResultPayload};
use crate::dto::team::{TeamPayload, UpdateTeamRequest};
use crate::error::{Result, ScoringError};
use crate::models::{Snapshot, Team, TeamResult};

#[derive(Default)]
struct Collections {
    teams: HashMap<String, Team>,
    results: HashMap<String, TeamResult>,
    version: u64,
}

impl Collections {
    /// Teams ordered by first athlete, results by team id.
    fn snapshot(&self) -> Snapshot {
        let mut teams: Vec<Team> = self.teams.values().cloned().collect();
        teams.sort_by(|a, b| a.athlete1.cmp(&b.athlete1).then_with(|| a.id.cmp(&b.id)));

        let mut results: Vec<TeamResult> = self.results.values().cloned().collect();
        results.sort_by(|a, b| a.team_id.cmp(&b.team_id));

        Snapshot {
            version: self.version,
            teams,
            results,
        }
    }
}

/// In-memory team and result collections.
///
/// Every mutation bumps the version and publishes the full snapshot to
/// subscribers. Results are keyed by team id, so a team has at most one.
pub struct CompetitionStore {
    collections: RwLock<Collections>,
    updates: watch::Sender<Arc<Snapshot>>,
}

impl CompetitionStore {
    pub fn new() -> Self {
        Self::with_snapshot(Snapshot::default())
    }

    /// Seeds the store. Later duplicates of a team id or result team id
    /// replace earlier ones.
    pub fn with_snapshot(seed: Snapshot) -> Self {
        let mut collections = Collections::default();
        for team in seed.teams {
            collections.teams.insert(team.id.clone(), team);
        }
        for result in seed.results {
            collections.results.insert(result.team_id.clone(), result);
        }

        let (updates, _) = watch::channel(Arc::new(collections.snapshot()));

        Self {
            collections: RwLock::new(collections),
            updates,
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<Arc<Snapshot>> {
        self.updates.subscribe()
    }

    pub fn current(&self) -> Arc<Snapshot> {
        self.updates.borrow().clone()
    }

    pub async fn list_teams(&self) -> Vec<Team> {
        self.collections.read().await.snapshot().teams
    }

    pub async fn get_team(&self, id: &str) -> Result<Team> {
        self.collections
            .read()
            .await
            .teams
            .get(id)
            .cloned()
            .ok_or(ScoringError::NotFound)
    }

    pub async fn create_team(&self, payload: TeamPayload) -> Result<Team> {
        let team = payload.into_team(Uuid::new_v4().to_string());
        let mut collections = self.collections.write().await;
        collections.teams.insert(team.id.clone(), team.clone());
        self.publish(&mut collections);

        info!(team_id = %team.id, "team created");
        Ok(team)
    }

    pub async fn update_team(&self, id: &str, request: UpdateTeamRequest) -> Result<Team> {
        let mut collections = self.collections.write().await;
        let team = collections.teams.get_mut(id).ok_or(ScoringError::NotFound)?;
        request.apply_to(team);
        let updated = team.clone();
        self.publish(&mut collections);

        info!(team_id = %id, "team updated");
        Ok(updated)
    }

    pub async fn replace_team(&self, id: &str, payload: TeamPayload) -> Result<Team> {
        let mut collections = self.collections.write().await;
        if !collections.teams.contains_key(id) {
            return Err(ScoringError::NotFound);
        }
        let team = payload.into_team(id);
        collections.teams.insert(id.to_string(), team.clone());
        self.publish(&mut collections);

        info!(team_id = %id, "team replaced");
        Ok(team)
    }

    /// Removes the team only. Its result document stays and is ignored when ranking.
    pub async fn delete_team(&self, id: &str) -> Result<()> {
        let mut collections = self.collections.write().await;
        collections.teams.remove(id).ok_or(ScoringError::NotFound)?;
        self.publish(&mut collections);

        info!(team_id = %id, "team deleted");
        Ok(())
    }

    pub async fn list_results(&self) -> Vec<TeamResult> {
        self.collections.read().await.snapshot().results
    }

    pub async fn get_result(&self, team_id: &str) -> Result<TeamResult> {
        self.collections
            .read()
            .await
            .results
            .get(team_id)
            .cloned()
            .ok_or(ScoringError::NotFound)
    }

    /// Writes the full result of a team, replacing any previous one.
    pub async fn save_result(&self, team_id: &str, payload: ResultPayload) -> Result<TeamResult> {
        let mut result = payload.into_result(team_id);
        let mut collections = self.collections.write().await;
        if let Some(previous) = collections.results.get(team_id) {
            result.total_points = previous.total_points;
        }
        collections.results.insert(team_id.to_string(), result.clone());
        self.publish(&mut collections);

        info!(%team_id, "result saved");
        Ok(result)
    }

    /// Merges the given fields into a team's result, creating it when absent.
    pub async fn save_partial_result(
        &self,
        team_id: &str,
        request: PartialResultRequest,
    ) -> Result<TeamResult> {
        let mut collections = self.collections.write().await;
        let result = collections
            .results
            .entry(team_id.to_string())
            .or_insert_with(|| TeamResult::empty(team_id));
        request.merge_into(result);
        let merged = result.clone();
        self.publish(&mut collections);

        info!(%team_id, "result merged");
        Ok(merged)
    }

    fn publish(&self, collections: &mut Collections) {
        collections.version += 1;
        self.updates.send_replace(Arc::new(collections.snapshot()));
    }
}

impl Default for CompetitionStore {
    fn default() -> Self {
        Self::new()
    }
}
