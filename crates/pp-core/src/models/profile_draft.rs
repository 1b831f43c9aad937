use crate::{CoreError, Result, SkillSet};

use serde::{Deserialize, Serialize};

/// Payload for creating a profile. The service fills in `id` and both
/// timestamps.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub bio: Option<String>,
    pub job_title: Option<String>,
    pub company: Option<String>,
    pub industry: Option<String>,
    pub years_of_experience: Option<u32>,
    #[serde(default)]
    pub skills: SkillSet,
    pub linkedin_url: Option<String>,
    pub twitter_url: Option<String>,
    pub github_url: Option<String>,
    pub website_url: Option<String>,
    pub profile_image: Option<String>,
}

impl ProfileDraft {
    /// Check that the required fields are non-blank.
    ///
    /// Email format is not checked beyond non-emptiness; the service owns
    /// payload validation and its rejections are surfaced to the caller.
    pub fn validate(&self) -> Result<()> {
        let mut missing = Vec::new();
        if self.first_name.trim().is_empty() {
            missing.push("first_name");
        }
        if self.last_name.trim().is_empty() {
            missing.push("last_name");
        }
        if self.email.trim().is_empty() {
            missing.push("email");
        }

        if missing.is_empty() {
            Ok(())
        } else {
            Err(CoreError::validation(format!(
                "missing required fields: {}",
                missing.join(", ")
            )))
        }
    }
}
