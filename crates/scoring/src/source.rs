use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::Result;
use crate::models::Snapshot;
use crate::store::CompetitionStore;

/// Anything that can hand over the current team and result collections.
#[async_trait::async_trait]
pub trait SnapshotSource: Send + Sync {
    async fn snapshot(&self) -> Result<Snapshot>;

    fn name(&self) -> &'static str;
}

#[async_trait::async_trait]
impl SnapshotSource for CompetitionStore {
    async fn snapshot(&self) -> Result<Snapshot> {
        Ok(self.current().as_ref().clone())
    }

    fn name(&self) -> &'static str {
        "store"
    }
}

/// Reads `{"teams": [...], "results": [...]}` from a JSON file.
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait::async_trait]
impl SnapshotSource for JsonFileSource {
    async fn snapshot(&self) -> Result<Snapshot> {
        let content = tokio::fs::read_to_string(&self.path).await?;
        let snapshot: Snapshot = serde_json::from_str(&content)?;

        debug!(
            path = %self.path.display(),
            teams = snapshot.teams.len(),
            results = snapshot.results.len(),
            "snapshot loaded"
        );
        Ok(snapshot)
    }

    fn name(&self) -> &'static str {
        "json-file"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ScoringError;

    fn temp_file(name: &str, content: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("{}-{}.json", name, std::process::id()));
        std::fs::write(&path, content).unwrap();
        path
    }

    #[tokio::test]
    async fn test_json_file_source() {
        let path = temp_file(
            "snapshot-ok",
            r#"{"teams": [{"id": "a", "category": "men", "athlete1": "A", "athlete2": "B"}]}"#,
        );

        let source = JsonFileSource::new(&path);
        let snapshot = source.snapshot().await.unwrap();

        assert_eq!(snapshot.teams.len(), 1);
        assert!(snapshot.results.is_empty());
        std::fs::remove_file(path).ok();
    }

    #[tokio::test]
    async fn test_json_file_source_errors() {
        let missing = JsonFileSource::new("/definitely/not/here.json");
        assert!(matches!(missing.snapshot().await, Err(ScoringError::Io(_))));

        let path = temp_file("snapshot-bad", "{ not json");
        let broken = JsonFileSource::new(&path);
        assert!(matches!(broken.snapshot().await, Err(ScoringError::Snapshot(_))));
        std::fs::remove_file(path).ok();
    }

    #[tokio::test]
    async fn test_store_source() {
        let store = CompetitionStore::new();
        let source: &dyn SnapshotSource = &store;

        assert_eq!(source.name(), "store");
        assert_eq!(source.snapshot().await.unwrap(), Snapshot::default());
    }
}
