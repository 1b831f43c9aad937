use crate::Profile;

use serde_json::json;

fn sample_json() -> serde_json::Value {
    json!({
        "id": "00000000-0000-0000-0000-000000000001",
        "first_name": "Ada",
        "last_name": "Lovelace",
        "email": "ada@x.com",
        "skills": ["Mathematics", "Programming"],
        "created_at": "2024-01-01T00:00:00Z",
        "updated_at": "2024-01-02T00:00:00Z"
    })
}

#[test]
fn test_deserialize_with_missing_optionals() {
    let profile: Profile = serde_json::from_value(sample_json()).unwrap();

    assert_eq!(profile.full_name(), "Ada Lovelace");
    assert_eq!(profile.email, "ada@x.com");
    assert!(profile.phone.is_none());
    assert!(profile.years_of_experience.is_none());
    assert_eq!(profile.skills.len(), 2);
    assert!(profile.created_at <= profile.updated_at);
}

#[test]
fn test_deserialize_dedups_skills() {
    let mut value = sample_json();
    value["skills"] = json!(["Go", "Go", "Rust"]);

    let profile: Profile = serde_json::from_value(value).unwrap();
    assert_eq!(profile.skills.as_slice(), ["Go", "Rust"]);
}

#[test]
fn test_serialize_round_trip() {
    let profile: Profile = serde_json::from_value(sample_json()).unwrap();

    let json = serde_json::to_value(&profile).unwrap();
    let back: Profile = serde_json::from_value(json).unwrap();

    assert_eq!(back, profile);
}
