use crate::{CoreError, ProfileDraft};

#[test]
fn test_validate_all_required_present() {
    let draft = ProfileDraft {
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
        email: "ada@x.com".to_string(),
        ..Default::default()
    };

    assert!(draft.validate().is_ok());
}

#[test]
fn test_validate_reports_missing_fields() {
    let draft = ProfileDraft {
        first_name: "Ada".to_string(),
        last_name: "  ".to_string(),
        ..Default::default()
    };

    let err = draft.validate().unwrap_err();
    match err {
        CoreError::Validation { message, .. } => {
            assert!(message.contains("last_name"));
            assert!(message.contains("email"));
            assert!(!message.contains("first_name"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_email_format_not_validated() {
    let draft = ProfileDraft {
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
        email: "not-an-email".to_string(),
        ..Default::default()
    };

    assert!(draft.validate().is_ok());
}
