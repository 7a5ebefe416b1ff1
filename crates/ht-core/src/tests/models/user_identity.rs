use crate::UserIdentity;

#[test]
fn test_email_key_lowercases() {
    let user = UserIdentity::new("rec001".into(), "Anna.Rossi@Example.COM".into(), "Anna".into());

    assert_eq!(user.email_key(), "anna.rossi@example.com");
}

#[test]
fn test_matches_email_is_case_insensitive() {
    let user = UserIdentity::new("rec001".into(), "A@x.com".into(), String::new());

    assert!(user.matches_email("a@X.com"));
    assert!(user.matches_email("A@x.com"));
    assert!(!user.matches_email("b@x.com"));
}
