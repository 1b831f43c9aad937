pub mod error;
pub mod models;

pub use error::{CoreError, Result};
pub use models::profile::Profile;
pub use models::profile_draft::ProfileDraft;
pub use models::profile_update::ProfileUpdate;
pub use models::skill_set::SkillSet;

#[cfg(test)]
mod tests;
