mod profile;
mod profile_draft;
mod skill_set;
