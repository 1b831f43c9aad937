//! Derived views composed for presentation.

use crate::{Snapshot, query, stats};

use chrono::{DateTime, Utc};
use pp_core::Profile;
use serde::Serialize;
use tokio::sync::watch;
use uuid::Uuid;

const TOP_SKILL_LIMIT: usize = 5;
const RECENT_LIMIT: usize = 3;

/// Aggregated statistics for the dashboard
#[derive(Debug, Clone, Serialize)]
pub struct DashboardView {
    pub total_profiles: usize,
    pub created_this_month: usize,
    pub unique_skills: usize,
    pub top_skills: Vec<stats::SkillCount>,
    pub recent: Vec<ProfileSummary>,
}

/// Compact entry for the dashboard recency list
#[derive(Debug, Clone, Serialize)]
pub struct ProfileSummary {
    pub id: Uuid,
    pub name: String,
    pub job_title: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<&Profile> for ProfileSummary {
    fn from(profile: &Profile) -> Self {
        Self {
            id: profile.id,
            name: profile.full_name(),
            job_title: profile.job_title.clone(),
            created_at: profile.created_at,
        }
    }
}

/// Browsing view: the matching records plus the data the filter controls
/// need to render
#[derive(Debug, Clone, Serialize)]
pub struct ProfileListView {
    pub profiles: Vec<Profile>,
    pub matched: usize,
    pub total: usize,
    pub available_skills: Vec<String>,
}

/// Composes query and statistics output over the store's snapshot.
///
/// Holds a subscription to the store; each view is computed from the
/// snapshot as of the call. Dropping a coordinator mid-reload simply
/// detaches it, a later publication is never applied to a consumer that
/// no longer exists.
pub struct ViewCoordinator {
    snapshot_rx: watch::Receiver<Snapshot>,
}

impl ViewCoordinator {
    pub fn new(snapshot_rx: watch::Receiver<Snapshot>) -> Self {
        Self { snapshot_rx }
    }

    fn snapshot(&self) -> Snapshot {
        self.snapshot_rx.borrow().clone()
    }

    /// Dashboard statistics evaluated at `now`.
    pub fn dashboard(&self, now: DateTime<Utc>) -> DashboardView {
        let snapshot = self.snapshot();
        let records = snapshot.as_slice();

        DashboardView {
            total_profiles: stats::total_count(records),
            created_this_month: stats::count_in_month(records, now),
            unique_skills: stats::unique_skill_count(records),
            top_skills: stats::top_skills(records, TOP_SKILL_LIMIT),
            recent: stats::recent(records, RECENT_LIMIT)
                .into_iter()
                .map(ProfileSummary::from)
                .collect(),
        }
    }

    /// Records matching the search term and skill filter.
    pub fn profile_list(&self, search_term: &str, skill_filter: &str) -> ProfileListView {
        let snapshot = self.snapshot();
        let records = snapshot.as_slice();

        let profiles: Vec<Profile> = query::filter(records, search_term, skill_filter)
            .into_iter()
            .cloned()
            .collect();

        ProfileListView {
            matched: profiles.len(),
            total: records.len(),
            available_skills: query::available_skills(records),
            profiles,
        }
    }
}
