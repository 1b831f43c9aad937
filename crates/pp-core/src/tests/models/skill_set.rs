use crate::SkillSet;

#[test]
fn test_insert_keeps_order() {
    let mut skills = SkillSet::new();
    assert!(skills.insert("Rust"));
    assert!(skills.insert("Go"));
    assert!(skills.insert("Python"));

    let entries: Vec<&str> = skills.iter().collect();
    assert_eq!(entries, vec!["Rust", "Go", "Python"]);
}

#[test]
fn test_insert_duplicate_rejected() {
    let mut skills = SkillSet::new();
    assert!(skills.insert("Go"));
    assert!(!skills.insert("Go"));

    assert_eq!(skills.as_slice(), ["Go"]);
}

#[test]
fn test_insert_trims_whitespace() {
    let mut skills = SkillSet::new();
    assert!(skills.insert("  Rust  "));

    assert!(skills.contains("Rust"));
    assert!(!skills.insert("Rust"));
}

#[test]
fn test_insert_whitespace_only_rejected() {
    let mut skills = SkillSet::new();
    assert!(!skills.insert("  "));

    assert!(skills.is_empty());
}

#[test]
fn test_duplicate_check_is_case_sensitive() {
    let mut skills = SkillSet::new();
    assert!(skills.insert("React"));
    assert!(skills.insert("react"));

    assert_eq!(skills.len(), 2);
}

#[test]
fn test_remove_exact_match() {
    let mut skills = SkillSet::new();
    skills.insert("Rust");
    skills.insert("Go");

    assert!(skills.remove("Rust"));
    assert!(!skills.remove("Rust"));
    assert_eq!(skills.as_slice(), ["Go"]);
}

#[test]
fn test_from_vec_dedups_first_seen() {
    let skills = SkillSet::from(vec![
        "Rust".to_string(),
        "Go".to_string(),
        "Rust".to_string(),
    ]);

    assert_eq!(skills.as_slice(), ["Rust", "Go"]);
}

#[test]
fn test_serde_as_plain_array() {
    let skills: SkillSet = ["Rust", "Go"].into_iter().collect();

    let json = serde_json::to_string(&skills).unwrap();
    assert_eq!(json, r#"["Rust","Go"]"#);

    let back: SkillSet = serde_json::from_str(&json).unwrap();
    assert_eq!(back, skills);
}
