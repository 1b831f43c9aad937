//! Profile entity - a professional profile record.

use crate::SkillSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A profile is owned by the remote profile service; clients hold cached
/// copies. The service assigns `id` and both timestamps on creation and
/// refreshes `updated_at` on every edit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub id: Uuid,

    // Basic information
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub bio: Option<String>,

    // Professional information
    pub job_title: Option<String>,
    pub company: Option<String>,
    pub industry: Option<String>,
    /// None means unspecified, distinct from zero
    pub years_of_experience: Option<u32>,
    #[serde(default)]
    pub skills: SkillSet,

    // Social links
    pub linkedin_url: Option<String>,
    pub twitter_url: Option<String>,
    pub github_url: Option<String>,
    pub website_url: Option<String>,

    /// Inline image as a data URI
    pub profile_image: Option<String>,

    // Audit
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Profile {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
