use std::collections::{HashMap, HashSet};

use scoring::duration::parse_duration;
use scoring::models::Snapshot;
use tracing::warn;

/// Reports data-entry problems in a snapshot.
///
/// Ranking accepts every snapshot as-is, so almost everything here is a
/// warning. Only a roster that cannot be joined (empty or repeated team ids)
/// counts as an error.
pub struct SnapshotValidator;

impl SnapshotValidator {
    pub fn inspect(snapshot: &Snapshot) -> ValidationReport {
        let mut report = ValidationReport::default();

        let mut team_ids = HashSet::new();
        for (idx, team) in snapshot.teams.iter().enumerate() {
            let team_label = format!("{}. {} & {}", idx + 1, team.athlete1, team.athlete2);

            if team.id.trim().is_empty() {
                report
                    .errors
                    .push(format!("Team '{}' has an empty id", team_label));
            } else if !team_ids.insert(team.id.as_str()) {
                report
                    .errors
                    .push(format!("Duplicate team id: '{}'", team.id));
            }

            if team.category.is_none() {
                report.warnings.push(format!(
                    "Team '{}' has no known category and will not be ranked",
                    team_label
                ));
            }
            if team.athlete1.trim().is_empty() || team.athlete2.trim().is_empty() {
                report
                    .warnings
                    .push(format!("Team '{}' is missing an athlete name", team.id));
            }
        }

        let mut results_per_team: HashMap<&str, usize> = HashMap::new();
        for result in &snapshot.results {
            *results_per_team.entry(result.team_id.as_str()).or_default() += 1;

            if !team_ids.contains(result.team_id.as_str()) {
                report.warnings.push(format!(
                    "Result for unknown team '{}' will be ignored",
                    result.team_id
                ));
            }

            let lifts = [
                ("snatchAthlete1", result.snatch_athlete1),
                ("snatchAthlete2", result.snatch_athlete2),
                ("cleanAthlete1", result.clean_athlete1),
                ("cleanAthlete2", result.clean_athlete2),
            ];
            for (field, value) in lifts {
                if value.is_sign_negative() && !value.is_zero() {
                    report.warnings.push(format!(
                        "Team '{}': negative {} ({})",
                        result.team_id, field, value
                    ));
                }
            }

            if !result.wod_time.trim().is_empty()
                && parse_duration(Some(result.wod_time.as_str())).is_none()
            {
                report.warnings.push(format!(
                    "Team '{}': WOD time '{}' is unreadable and counts as not recorded",
                    result.team_id, result.wod_time
                ));
            }
        }

        let mut duplicated: Vec<(&str, usize)> = results_per_team
            .into_iter()
            .filter(|(_, count)| *count > 1)
            .collect();
        duplicated.sort();
        for (team_id, count) in duplicated {
            report.warnings.push(format!(
                "Team '{}' has {} results, only the first is used",
                team_id, count
            ));
        }

        report
    }

    pub fn validate(snapshot: &Snapshot) -> Result<ValidationReport, String> {
        let report = Self::inspect(snapshot);

        if !report.errors.is_empty() {
            Err(format!(
                "Validation failed with {} error(s): {}",
                report.errors.len(),
                report.errors.join("; ")
            ))
        } else {
            Ok(report)
        }
    }
}

#[derive(Debug, Default)]
pub struct ValidationReport {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn log_warnings(&self) {
        for warning in &self.warnings {
            warn!("{}", warning);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(json: &str) -> Snapshot {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_clean_snapshot_has_no_findings() {
        let report = SnapshotValidator::validate(&snapshot(
            r#"{
                "teams": [{"id": "a", "category": "men", "athlete1": "A", "athlete2": "B"}],
                "results": [{"teamId": "a", "snatchAthlete1": 80, "wodTime": "5:00"}]
            }"#,
        ))
        .unwrap();

        assert!(report.errors.is_empty());
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn test_data_quality_warnings() {
        let report = SnapshotValidator::validate(&snapshot(
            r#"{
                "teams": [
                    {"id": "a", "category": "mixed", "athlete1": "A", "athlete2": ""},
                    {"id": "b", "category": "women", "athlete1": "C", "athlete2": "D"}
                ],
                "results": [
                    {"teamId": "b", "cleanAthlete1": -5, "wodTime": "DNF"},
                    {"teamId": "b"},
                    {"teamId": "ghost"}
                ]
            }"#,
        ))
        .unwrap();

        assert_eq!(report.warnings.len(), 6);
        assert!(report.warnings.iter().any(|w| w.contains("no known category")));
        assert!(report.warnings.iter().any(|w| w.contains("missing an athlete name")));
        assert!(report.warnings.iter().any(|w| w.contains("negative cleanAthlete1")));
        assert!(report.warnings.iter().any(|w| w.contains("'DNF' is unreadable")));
        assert!(report.warnings.iter().any(|w| w.contains("unknown team 'ghost'")));
        assert!(report.warnings.iter().any(|w| w.contains("has 2 results")));
    }

    #[test]
    fn test_duplicate_team_ids_fail_validation() {
        let duplicated = snapshot(
            r#"{
                "teams": [
                    {"id": "a", "category": "men", "athlete1": "A", "athlete2": "B"},
                    {"id": "a", "category": "men", "athlete1": "C", "athlete2": "D"},
                    {"id": " ", "category": "men", "athlete1": "E", "athlete2": "F"}
                ]
            }"#,
        );

        assert_eq!(SnapshotValidator::inspect(&duplicated).errors.len(), 2);
        let error = SnapshotValidator::validate(&duplicated).unwrap_err();
        assert!(error.contains("Duplicate team id: 'a'"));
    }
}
