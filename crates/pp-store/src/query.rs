//! Pure filtering over a profile snapshot.

use std::collections::HashSet;

use pp_core::Profile;

/// Case-insensitive substring match over the searchable text fields,
/// OR-combined. Absent optional fields never match.
fn matches_search(profile: &Profile, needle: &str) -> bool {
    let hit = |field: &str| field.to_lowercase().contains(needle);

    hit(&profile.first_name)
        || hit(&profile.last_name)
        || hit(&profile.email)
        || profile.job_title.as_deref().is_some_and(hit)
        || profile.company.as_deref().is_some_and(hit)
}

/// Filter a snapshot by search term and skill.
///
/// An empty search term applies no text filtering and an empty skill
/// filter applies no skill filtering. The skill filter is an exact,
/// case-sensitive match against the record's skills, not a substring.
/// Both conditions must hold for a record to pass.
pub fn filter<'a>(
    records: &'a [Profile],
    search_term: &str,
    skill_filter: &str,
) -> Vec<&'a Profile> {
    let needle = search_term.to_lowercase();

    records
        .iter()
        .filter(|profile| needle.is_empty() || matches_search(profile, &needle))
        .filter(|profile| skill_filter.is_empty() || profile.skills.contains(skill_filter))
        .collect()
}

/// Distinct skills across all records, in first-seen order.
///
/// The order is stable for a given snapshot so filter controls render
/// deterministically.
pub fn available_skills(records: &[Profile]) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut skills = Vec::new();

    for profile in records {
        for skill in profile.skills.iter() {
            if seen.insert(skill) {
                skills.push(skill.to_string());
            }
        }
    }

    skills
}
