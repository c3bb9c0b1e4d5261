use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};

use rust_decimal::Decimal;
use tracing::{debug, trace};

use crate::duration::parse_duration;
use crate::models::{Category, LeaderboardEntry, Team, TeamResult};

/// Ranked entries for every known category. Categories without teams map to
/// an empty list.
pub type Standings = BTreeMap<Category, Vec<LeaderboardEntry>>;

/// The scored events, in the order their placement points are awarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Snatch,
    Clean,
    Wod,
}

impl Event {
    pub const ORDER: [Event; 3] = [Self::Snatch, Self::Clean, Self::Wod];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Snatch => "snatch",
            Self::Clean => "clean",
            Self::Wod => "wod",
        }
    }

    /// Best performance first: heavier totals for the lifts, shorter times
    /// for the WOD.
    fn compare(&self, a: &LeaderboardEntry, b: &LeaderboardEntry) -> Ordering {
        match self {
            Self::Snatch => b.snatch_total.cmp(&a.snatch_total),
            Self::Clean => b.clean_total.cmp(&a.clean_total),
            Self::Wod => compare_wod(a.wod_seconds, b.wod_seconds),
        }
    }
}

/// Builds per-category standings from the roster and the recorded results.
///
/// Every team with a known category gets an entry, scored with zeroes when
/// it has no result. Within each category the three events award placement
/// points (1 for first, 2 for second, ...); the lowest total wins. Equal
/// performances still receive distinct sequential placements, ordered by
/// team id.
///
/// Final order: points ascending, then snatch total descending, clean total
/// descending, WOD time ascending (no time sorts last) and team id. Ranks are
/// positional and never shared.
pub fn compute_leaderboard(teams: &[Team], results: &[TeamResult]) -> Standings {
    let mut results_by_team: HashMap<&str, &TeamResult> = HashMap::with_capacity(results.len());
    for result in results {
        results_by_team
            .entry(result.team_id.as_str())
            .or_insert(result);
    }

    let mut standings: Standings = Category::ALL
        .iter()
        .map(|category| (*category, Vec::new()))
        .collect();

    for team in teams {
        let Some(category) = team.category else {
            debug!(team_id = %team.id, "team has no known category, leaving it unranked");
            continue;
        };

        let entry = seed_entry(team, category, results_by_team.get(team.id.as_str()).copied());
        standings.entry(category).or_default().push(entry);
    }

    for (category, entries) in standings.iter_mut() {
        if entries.is_empty() {
            continue;
        }

        debug!(%category, teams = entries.len(), "ranking category");

        for event in Event::ORDER {
            award_placement_points(entries, event);
        }

        entries.sort_by(compare_final);

        for (index, entry) in entries.iter_mut().enumerate() {
            entry.rank = index as u32 + 1;
        }
    }

    standings
}

fn seed_entry(team: &Team, category: Category, result: Option<&TeamResult>) -> LeaderboardEntry {
    let lift = |value: fn(&TeamResult) -> Decimal| result.map(value).unwrap_or(Decimal::ZERO);

    let snatch_athlete1 = lift(|r| r.snatch_athlete1);
    let snatch_athlete2 = lift(|r| r.snatch_athlete2);
    let clean_athlete1 = lift(|r| r.clean_athlete1);
    let clean_athlete2 = lift(|r| r.clean_athlete2);

    LeaderboardEntry {
        rank: 0,
        team_id: team.id.clone(),
        team_name: team.display_name(),
        category,
        category_label: category.label().to_string(),
        athletes: team.athletes(),
        snatch_total: snatch_athlete1.saturating_add(snatch_athlete2),
        snatch_athlete1,
        snatch_athlete2,
        clean_total: clean_athlete1.saturating_add(clean_athlete2),
        clean_athlete1,
        clean_athlete2,
        wod_seconds: parse_duration(result.map(|r| r.wod_time.as_str())),
        total_points: 0,
    }
}

fn award_placement_points(entries: &mut [LeaderboardEntry], event: Event) {
    let mut order: Vec<usize> = (0..entries.len()).collect();
    order.sort_by(|&a, &b| {
        event
            .compare(&entries[a], &entries[b])
            .then_with(|| entries[a].team_id.cmp(&entries[b].team_id))
    });

    for (position, index) in order.into_iter().enumerate() {
        let placement = position as u32 + 1;
        trace!(event = event.as_str(), team_id = %entries[index].team_id, placement);
        entries[index].total_points += placement;
    }
}

fn compare_final(a: &LeaderboardEntry, b: &LeaderboardEntry) -> Ordering {
    a.total_points
        .cmp(&b.total_points)
        .then_with(|| b.snatch_total.cmp(&a.snatch_total))
        .then_with(|| b.clean_total.cmp(&a.clean_total))
        .then_with(|| compare_wod(a.wod_seconds, b.wod_seconds))
        .then_with(|| a.team_id.cmp(&b.team_id))
}

/// Shorter times first. A missing time is slower than any recorded one.
fn compare_wod(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.total_cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
