//! Multi-section form state for authoring and editing a profile.

use crate::{FormError, FormResult, image};

use std::path::Path;

use log::debug;
use pp_core::{Profile, ProfileDraft, SkillSet};
use pp_store::ProfileStore;
use uuid::Uuid;

/// Scalar fields of the profile form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    FirstName,
    LastName,
    Email,
    Phone,
    Bio,
    JobTitle,
    Company,
    Industry,
    YearsOfExperience,
    LinkedinUrl,
    TwitterUrl,
    GithubUrl,
    WebsiteUrl,
}

/// Submission lifecycle. `Succeeded` keeps the created id as the
/// redirect target; `Failed` keeps the rejection message for display.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Succeeded(Uuid),
    Failed(String),
}

/// Draft of one profile during creation or editing.
///
/// Scalar fields hold the edited string representation; normalization
/// into a service payload happens in [`ProfileForm::build_submission`].
#[derive(Debug, Clone, Default)]
pub struct ProfileForm {
    first_name: String,
    last_name: String,
    email: String,
    phone: String,
    bio: String,
    job_title: String,
    company: String,
    industry: String,
    years_of_experience: String,
    linkedin_url: String,
    twitter_url: String,
    github_url: String,
    website_url: String,
    skills: SkillSet,
    profile_image: Option<String>,
    submission: SubmissionState,
}

impl ProfileForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Populate a form from an existing record for editing.
    pub fn load(profile: &Profile) -> Self {
        Self {
            first_name: profile.first_name.clone(),
            last_name: profile.last_name.clone(),
            email: profile.email.clone(),
            phone: profile.phone.clone().unwrap_or_default(),
            bio: profile.bio.clone().unwrap_or_default(),
            job_title: profile.job_title.clone().unwrap_or_default(),
            company: profile.company.clone().unwrap_or_default(),
            industry: profile.industry.clone().unwrap_or_default(),
            years_of_experience: profile
                .years_of_experience
                .map(|years| years.to_string())
                .unwrap_or_default(),
            linkedin_url: profile.linkedin_url.clone().unwrap_or_default(),
            twitter_url: profile.twitter_url.clone().unwrap_or_default(),
            github_url: profile.github_url.clone().unwrap_or_default(),
            website_url: profile.website_url.clone().unwrap_or_default(),
            skills: profile.skills.clone(),
            profile_image: profile.profile_image.clone(),
            submission: SubmissionState::Idle,
        }
    }

    /// Assign a scalar field. No cross-field validation happens here.
    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        self.reset_outcome();
        let value = value.into();
        match field {
            FormField::FirstName => self.first_name = value,
            FormField::LastName => self.last_name = value,
            FormField::Email => self.email = value,
            FormField::Phone => self.phone = value,
            FormField::Bio => self.bio = value,
            FormField::JobTitle => self.job_title = value,
            FormField::Company => self.company = value,
            FormField::Industry => self.industry = value,
            FormField::YearsOfExperience => self.years_of_experience = value,
            FormField::LinkedinUrl => self.linkedin_url = value,
            FormField::TwitterUrl => self.twitter_url = value,
            FormField::GithubUrl => self.github_url = value,
            FormField::WebsiteUrl => self.website_url = value,
        }
    }

    pub fn field(&self, field: FormField) -> &str {
        match field {
            FormField::FirstName => &self.first_name,
            FormField::LastName => &self.last_name,
            FormField::Email => &self.email,
            FormField::Phone => &self.phone,
            FormField::Bio => &self.bio,
            FormField::JobTitle => &self.job_title,
            FormField::Company => &self.company,
            FormField::Industry => &self.industry,
            FormField::YearsOfExperience => &self.years_of_experience,
            FormField::LinkedinUrl => &self.linkedin_url,
            FormField::TwitterUrl => &self.twitter_url,
            FormField::GithubUrl => &self.github_url,
            FormField::WebsiteUrl => &self.website_url,
        }
    }

    /// Append a skill. Whitespace-only values and exact duplicates are
    /// silently ignored.
    pub fn add_skill(&mut self, raw: &str) -> bool {
        self.reset_outcome();
        self.skills.insert(raw)
    }

    /// Remove the exact match; no-op if absent.
    pub fn remove_skill(&mut self, value: &str) -> bool {
        self.reset_outcome();
        self.skills.remove(value)
    }

    pub fn skills(&self) -> &SkillSet {
        &self.skills
    }

    /// Attach an image, replacing any prior one.
    ///
    /// An oversized source file is rejected and the prior image is left
    /// untouched.
    pub async fn set_image(&mut self, path: &Path) -> FormResult<()> {
        let encoded = image::encode_data_uri(path).await?;
        self.reset_outcome();
        self.profile_image = Some(encoded);
        Ok(())
    }

    pub fn clear_image(&mut self) {
        self.reset_outcome();
        self.profile_image = None;
    }

    pub fn image(&self) -> Option<&str> {
        self.profile_image.as_deref()
    }

    pub fn submission(&self) -> &SubmissionState {
        &self.submission
    }

    /// Produce the normalized creation payload.
    ///
    /// Blank optional fields become `None`. The experience string parses
    /// to an integer; blank or unparseable input normalizes to `None`,
    /// since absent means unspecified. Required fields pass through
    /// as-is: presence is enforced by the surrounding surface through
    /// [`ProfileDraft::validate`], nothing is silently dropped here.
    pub fn build_submission(&self) -> ProfileDraft {
        ProfileDraft {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
            phone: optional(&self.phone),
            bio: optional(&self.bio),
            job_title: optional(&self.job_title),
            company: optional(&self.company),
            industry: optional(&self.industry),
            years_of_experience: self.years_of_experience.trim().parse().ok(),
            skills: self.skills.clone(),
            linkedin_url: optional(&self.linkedin_url),
            twitter_url: optional(&self.twitter_url),
            github_url: optional(&self.github_url),
            website_url: optional(&self.website_url),
            profile_image: self.profile_image.clone(),
        }
    }

    /// Submit the draft to the store.
    ///
    /// Re-submission while one is in flight is rejected, not queued. On
    /// success the created id is recorded as the redirect target; on
    /// failure the service's message is recorded verbatim.
    pub async fn submit(&mut self, store: &ProfileStore) -> FormResult<Uuid> {
        let draft = self.begin_submission()?;
        let result = store.create(&draft).await;
        self.finish_submission(result)
    }

    pub(crate) fn begin_submission(&mut self) -> FormResult<ProfileDraft> {
        if self.submission == SubmissionState::Submitting {
            return Err(FormError::concurrent_submission());
        }
        self.submission = SubmissionState::Submitting;
        Ok(self.build_submission())
    }

    pub(crate) fn finish_submission(
        &mut self,
        result: pp_client::ClientResult<Uuid>,
    ) -> FormResult<Uuid> {
        match result {
            Ok(id) => {
                debug!("submission succeeded, redirect target {}", id);
                self.submission = SubmissionState::Succeeded(id);
                Ok(id)
            }
            Err(err) => {
                let detail = match err.detail() {
                    Some(detail) => detail.to_string(),
                    None => err.to_string(),
                };
                self.submission = SubmissionState::Failed(detail);
                Err(FormError::submission(err))
            }
        }
    }

    /// A new edit clears the previous submission outcome.
    fn reset_outcome(&mut self) {
        if matches!(
            self.submission,
            SubmissionState::Succeeded(_) | SubmissionState::Failed(_)
        ) {
            self.submission = SubmissionState::Idle;
        }
    }
}

fn optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
