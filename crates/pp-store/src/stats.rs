//! Pure aggregate statistics over a profile snapshot.

use std::collections::{HashMap, HashSet};

use chrono::{DateTime, Datelike, Utc};
use pp_core::Profile;
use serde::Serialize;

/// Skill occurrence count across a snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillCount {
    pub skill: String,
    pub count: usize,
}

pub fn total_count(records: &[Profile]) -> usize {
    records.len()
}

/// Records created in the same calendar month and year as `now`.
///
/// `now` is injected so callers and tests control the evaluation time.
pub fn count_in_month(records: &[Profile], now: DateTime<Utc>) -> usize {
    records
        .iter()
        .filter(|p| p.created_at.month() == now.month() && p.created_at.year() == now.year())
        .count()
}

/// Number of distinct skills across all records.
pub fn unique_skill_count(records: &[Profile]) -> usize {
    records
        .iter()
        .flat_map(|p| p.skills.iter())
        .collect::<HashSet<_>>()
        .len()
}

/// Skill frequency histogram, most common first, truncated to `n`.
///
/// Equal counts rank the skill first seen earlier in the input first:
/// the histogram is built in first-seen order and the stable sort keeps
/// that order within equal counts.
pub fn top_skills(records: &[Profile], n: usize) -> Vec<SkillCount> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut order: Vec<&str> = Vec::new();

    for profile in records {
        for skill in profile.skills.iter() {
            let count = counts.entry(skill).or_insert(0);
            if *count == 0 {
                order.push(skill);
            }
            *count += 1;
        }
    }

    let mut histogram: Vec<SkillCount> = order
        .into_iter()
        .map(|skill| SkillCount {
            skill: skill.to_string(),
            count: counts[skill],
        })
        .collect();

    histogram.sort_by(|a, b| b.count.cmp(&a.count));
    histogram.truncate(n);
    histogram
}

/// The `n` newest records by creation time. Equal timestamps keep input
/// order (stable sort).
pub fn recent<'a>(records: &'a [Profile], n: usize) -> Vec<&'a Profile> {
    let mut sorted: Vec<&Profile> = records.iter().collect();
    sorted.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    sorted.truncate(n);
    sorted
}
