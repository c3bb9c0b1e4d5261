use std::fmt::Write;

use rust_decimal::Decimal;
use scoring::Standings;
use scoring::duration::format_duration;
use scoring::models::{Category, LeaderboardEntry};

const NAME_WIDTH: usize = 32;

/// Renders standings as a plain-text table, one block per category.
///
/// With `only` set, other categories are skipped. Empty categories are
/// printed with a placeholder line so a missing roster is visible.
pub fn render_standings(standings: &Standings, only: Option<Category>) -> String {
    let mut out = String::new();

    for (category, entries) in standings {
        if only.is_some_and(|wanted| wanted != *category) {
            continue;
        }

        if !out.is_empty() {
            out.push('\n');
        }
        let _ = writeln!(out, "{}", category.label());
        let _ = writeln!(
            out,
            "{:>4}  {:<width$}  {:>8}  {:>8}  {:>7}  {:>6}",
            "#",
            "Team",
            "Snatch",
            "Clean",
            "WOD",
            "Points",
            width = NAME_WIDTH
        );

        if entries.is_empty() {
            let _ = writeln!(out, "{:>4}  (no teams)", "-");
            continue;
        }

        for entry in entries {
            let _ = writeln!(out, "{}", render_row(entry));
        }
    }

    out
}

fn render_row(entry: &LeaderboardEntry) -> String {
    format!(
        "{:>4}  {:<width$}  {:>8}  {:>8}  {:>7}  {:>6}",
        entry.rank,
        truncate(&entry.team_name, NAME_WIDTH),
        weight(entry.snatch_total),
        weight(entry.clean_total),
        format_duration(entry.wod_seconds).unwrap_or_else(|| "-".to_string()),
        entry.total_points,
        width = NAME_WIDTH
    )
}

fn weight(value: Decimal) -> String {
    value.normalize().to_string()
}

fn truncate(name: &str, width: usize) -> String {
    if name.chars().count() <= width {
        name.to_string()
    } else {
        let mut short: String = name.chars().take(width - 1).collect();
        short.push('…');
        short
    }
}
