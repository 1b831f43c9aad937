mod store;

use chrono::{DateTime, Utc};
use pp_core::{Profile, SkillSet};
use uuid::Uuid;

/// Build a profile record the way the service would return it.
pub(crate) fn profile(
    first_name: &str,
    last_name: &str,
    email: &str,
    skills: &[&str],
    created_at: &str,
) -> Profile {
    let created = created_at
        .parse::<DateTime<Utc>>()
        .expect("valid RFC 3339 timestamp");

    Profile {
        id: Uuid::new_v4(),
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        email: email.to_string(),
        phone: None,
        bio: None,
        job_title: None,
        company: None,
        industry: None,
        years_of_experience: None,
        skills: skills.iter().copied().collect::<SkillSet>(),
        linkedin_url: None,
        twitter_url: None,
        github_url: None,
        website_url: None,
        profile_image: None,
        created_at: created,
        updated_at: created,
    }
}
